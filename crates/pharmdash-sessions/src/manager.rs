//! Session lifecycle management
//!
//! One session per process. The manager owns the in-memory state, the
//! durable blob in the session namespace, and the hydration flag the route
//! guard waits on. It is constructed with its collaborators and passed by
//! reference; nothing here is process-global.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use pharmdash_permissions::PermissionView;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::directory::CredentialDirectory;
use crate::error::{SessionError, SessionResult};
use crate::models::{AuthSnapshot, AuthState, PersistedSession, UserIdentity};
use crate::store::SessionStore;

/// Manages the process's single authenticated session
#[derive(Clone)]
pub struct SessionManager {
    state: Arc<Mutex<AuthState>>,
    /// True once durable-storage restoration has completed; never persisted
    hydrated: Arc<AtomicBool>,
    store: SessionStore,
    directory: Arc<dyn CredentialDirectory>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("state", &self.state.lock())
            .field("hydrated", &self.hydrated.load(Ordering::SeqCst))
            .finish()
    }
}

impl SessionManager {
    /// Create a manager over a store and a credential directory
    pub fn new(store: SessionStore, directory: Arc<dyn CredentialDirectory>) -> Self {
        Self {
            state: Arc::new(Mutex::new(AuthState::default())),
            hydrated: Arc::new(AtomicBool::new(false)),
            store,
            directory,
        }
    }

    /// Sign in with an identifier + secret pair.
    ///
    /// While the lookup is pending the session reports `loading = true` and
    /// a second call is rejected with [`SessionError::LoginInFlight`]. On
    /// success a fresh opaque token is minted, the session becomes
    /// authenticated, and the durable blob is written. On rejection the
    /// prior session state is left untouched apart from clearing `loading`.
    pub async fn authenticate(
        &self,
        identifier: &str,
        secret: &str,
    ) -> SessionResult<UserIdentity> {
        {
            let mut state = self.state.lock();
            if state.loading {
                return Err(SessionError::LoginInFlight);
            }
            state.loading = true;
        }

        let looked_up = self.directory.lookup(identifier, secret).await;

        match looked_up {
            Ok(identity) => {
                let token = Self::mint_token();
                {
                    let mut state = self.state.lock();
                    state.identity = Some(identity.clone());
                    state.token = Some(token.clone());
                    state.authenticated = true;
                    state.loading = false;
                }
                info!(email = %identity.email, role = %identity.role, "session established");

                let blob = PersistedSession::new(identity.clone(), token, true);
                if let Err(e) = self.store.save(&blob).await {
                    // The live session stands; persistence catches up on the
                    // next successful write.
                    warn!(error = %e, "failed to persist session");
                }
                Ok(identity)
            }
            Err(e) => {
                self.state.lock().loading = false;
                debug!(identifier, "authentication rejected");
                Err(e)
            }
        }
    }

    /// Sign out. Clears identity, token, and the authenticated flag, and
    /// removes the durable blob. Idempotent.
    pub async fn end_session(&self) -> SessionResult<()> {
        let was_signed_in = {
            let mut state = self.state.lock();
            let was_signed_in = state.identity.is_some() || state.authenticated;
            state.identity = None;
            state.token = None;
            state.authenticated = false;
            was_signed_in
        };

        self.store.clear().await?;
        if was_signed_in {
            info!("session ended");
        }
        Ok(())
    }

    /// Install an identity directly, bypassing credential lookup (token
    /// refresh path). Keeps the existing token when present, otherwise
    /// mints one, and persists the result.
    pub async fn set_identity(&self, identity: UserIdentity) -> SessionResult<()> {
        let token = {
            let mut state = self.state.lock();
            let token = state.token.clone().unwrap_or_else(Self::mint_token);
            state.identity = Some(identity.clone());
            state.token = Some(token.clone());
            state.authenticated = true;
            token
        };
        debug!(email = %identity.email, "identity installed");

        let blob = PersistedSession::new(identity, token, true);
        if let Err(e) = self.store.save(&blob).await {
            warn!(error = %e, "failed to persist session");
        }
        Ok(())
    }

    /// Derived permission flags for the current identity, or `None` when
    /// signed out. Recomputed on every call; never cached or persisted.
    pub fn permission_view(&self) -> Option<PermissionView> {
        self.state
            .lock()
            .identity
            .as_ref()
            .map(|identity| PermissionView::for_role(identity.role))
    }

    /// Explicitly set the hydration flag
    pub fn mark_hydrated(&self, flag: bool) {
        self.hydrated.store(flag, Ordering::SeqCst);
        debug!(hydrated = flag, "hydration flag set");
    }

    /// Whether durable-storage restoration has completed
    pub fn is_hydrated(&self) -> bool {
        self.hydrated.load(Ordering::SeqCst)
    }

    /// Restore the persisted session, bounded by `timeout`.
    ///
    /// Exactly one restore path: the load is awaited with a deterministic
    /// timeout, and the hydration flag is set true on every exit — restored
    /// session, no stored session, unreadable blob, or timeout — so the
    /// route guard can never block indefinitely on a silent storage
    /// backend. Returns whether a session was restored.
    pub async fn hydrate(&self, timeout: Duration) -> bool {
        self.hydrate_from(self.store.load(), timeout).await
    }

    /// Restore from an arbitrary load future (the seam tests use to model
    /// a storage backend that never answers)
    pub async fn hydrate_from<F>(&self, load: F, timeout: Duration) -> bool
    where
        F: std::future::Future<Output = SessionResult<Option<PersistedSession>>>,
    {
        let restored = match tokio::time::timeout(timeout, load).await {
            Ok(Ok(Some(blob))) => {
                {
                    let mut state = self.state.lock();
                    state.identity = Some(blob.identity.clone());
                    state.token = Some(blob.token.clone());
                    state.authenticated = blob.authenticated;
                    // Transient by contract: always false after restore.
                    state.loading = false;
                }
                info!(email = %blob.identity.email, "session restored");
                true
            }
            Ok(Ok(None)) => {
                debug!("no stored session");
                false
            }
            Ok(Err(e)) => {
                warn!(error = %e, "session restore failed, continuing signed out");
                false
            }
            Err(_) => {
                warn!(timeout_ms = timeout.as_millis() as u64, "session restore timed out");
                false
            }
        };

        self.mark_hydrated(true);
        restored
    }

    /// Snapshot for the route guard
    pub fn snapshot(&self) -> AuthSnapshot {
        let state = self.state.lock();
        AuthSnapshot {
            hydrated: self.is_hydrated(),
            loading: state.loading,
            authenticated: state.authenticated,
            has_identity: state.identity.is_some(),
            role: state.identity.as_ref().map(|i| i.role),
        }
    }

    /// Clone of the full in-memory state
    pub fn state(&self) -> AuthState {
        self.state.lock().clone()
    }

    fn mint_token() -> String {
        Uuid::new_v4().simple().to_string()
    }
}
