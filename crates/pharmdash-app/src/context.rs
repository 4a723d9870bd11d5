//! The application context
//!
//! One context per process (or per test), constructed by
//! [`AppContext::initialize`] and injected at the UI tree root. The startup
//! sequence guarantees ordering: preferences are restored (and their
//! presentation effects applied) and the session store is hydrated — both
//! bounded — before the context is handed out, so a route guard evaluated
//! against this context never observes an unhydrated session.
//!
//! Preference restoration and session restoration are independent; the
//! sequence below runs them in either order without cross-namespace
//! coordination.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use pharmdash_preferences::{
    AppliedPresentation, PreferencesManager, PreferencesStore, PresentationSink,
};
use pharmdash_sessions::{
    CredentialDirectory, GuardOutcome, InMemoryDirectory, RouteGuard, SessionManager,
    SessionStore,
};
use pharmdash_storage::{BlobStore, PathResolver};

use crate::config::AppConfig;
use crate::error::AppResult;

/// The injected application context
#[derive(Clone)]
pub struct AppContext {
    sessions: SessionManager,
    preferences: PreferencesManager,
    presentation: Arc<AppliedPresentation>,
    config: AppConfig,
}

impl AppContext {
    /// Run the startup sequence with the bundled credential directory
    pub async fn initialize(config: AppConfig) -> AppResult<Self> {
        let directory = Arc::new(InMemoryDirectory::new(Duration::from_millis(
            config.login_latency_ms,
        )));
        Self::initialize_with_directory(config, directory).await
    }

    /// Run the startup sequence with an explicit credential directory
    pub async fn initialize_with_directory(
        config: AppConfig,
        directory: Arc<dyn CredentialDirectory>,
    ) -> AppResult<Self> {
        config.validate()?;

        // First caller wins; later contexts (tests) reuse the pipeline.
        let _ = pharmdash_common::logging::try_init(pharmdash_common::LogOptions {
            filter: config.log_filter.clone(),
            plain: false,
        });

        let base_path = match &config.base_dir {
            Some(dir) => dir.clone(),
            None => PathResolver::resolve_base_path()?,
        };
        let blobs = BlobStore::new(base_path);
        blobs.initialize()?;
        let base = blobs.base_path().clone();

        // Preferences first so the stored theme is applied before anything
        // renders; session hydration is independent of it.
        let presentation = Arc::new(AppliedPresentation::new());
        let preferences = PreferencesManager::new(
            PreferencesStore::new(blobs.clone()),
            presentation.clone() as Arc<dyn PresentationSink>,
        );
        preferences.restore()?;

        let sessions = SessionManager::new(SessionStore::new(blobs), directory);
        sessions
            .hydrate(Duration::from_millis(config.hydration_timeout_ms))
            .await;

        info!(base = %base.display(), "application context ready");

        Ok(Self {
            sessions,
            preferences,
            presentation,
            config,
        })
    }

    /// Session manager
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Preferences manager
    pub fn preferences(&self) -> &PreferencesManager {
        &self.preferences
    }

    /// Currently applied presentation state (what pages read)
    pub fn presentation(&self) -> &AppliedPresentation {
        &self.presentation
    }

    /// The configuration the context was built from
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Mount a fresh route guard and resolve it against the current
    /// session — the per-navigation decision pages make
    pub fn evaluate_route(&self) -> GuardOutcome {
        let mut guard = RouteGuard::new();
        guard.mount();
        guard.resolve(&self.sessions.snapshot());
        guard.outcome()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .finish()
    }
}
