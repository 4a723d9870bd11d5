//! Core data models for identities and session state

use chrono::{DateTime, Utc};
use pharmdash_permissions::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated user identity
///
/// Immutable once installed in a session; the role never changes for the
/// lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Unique identifier for the user
    pub id: Uuid,
    /// Login email address
    pub email: String,
    /// Human-readable name
    pub display_name: String,
    /// Organizational role
    pub role: Role,
    /// Tenant the user belongs to
    pub tenant_id: Uuid,
    /// Human-readable tenant name
    pub tenant_name: String,
}

impl UserIdentity {
    /// Create a new identity with a fresh id
    pub fn new(
        email: impl Into<String>,
        display_name: impl Into<String>,
        role: Role,
        tenant_id: Uuid,
        tenant_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            display_name: display_name.into(),
            role,
            tenant_id,
            tenant_name: tenant_name.into(),
        }
    }
}

/// The subset of session state that survives a restart
///
/// Everything else — the loading flag, the hydration flag — is transient
/// by contract and must never appear in this blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    /// Identity of the signed-in user
    pub identity: UserIdentity,
    /// Opaque access token
    pub token: String,
    /// Whether the session was authenticated when saved
    pub authenticated: bool,
    /// When the blob was written
    pub saved_at: DateTime<Utc>,
}

impl PersistedSession {
    /// Build the durable blob from live session fields
    pub fn new(identity: UserIdentity, token: String, authenticated: bool) -> Self {
        Self {
            identity,
            token,
            authenticated,
            saved_at: Utc::now(),
        }
    }
}

/// In-memory session state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    /// Current identity, if any
    pub identity: Option<UserIdentity>,
    /// Opaque access token for the current identity
    pub token: Option<String>,
    /// Whether the session is authenticated
    pub authenticated: bool,
    /// Whether a credential lookup is pending
    pub loading: bool,
}

/// Read-only snapshot the route guard evaluates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthSnapshot {
    /// Whether durable-storage restoration has completed
    pub hydrated: bool,
    /// Whether a credential lookup is pending
    pub loading: bool,
    /// Whether the session is authenticated
    pub authenticated: bool,
    /// Whether an identity is present
    pub has_identity: bool,
    /// Role of the current identity, if any
    pub role: Option<Role>,
}
