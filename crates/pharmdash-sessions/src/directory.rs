//! Credential lookup collaborator
//!
//! The session manager treats authentication as a black box: give it an
//! identifier and a secret, get back an identity or an invalid-credentials
//! rejection. In production this seam fronts the authentication service;
//! the bundled [`InMemoryDirectory`] backs it with a fixed account table
//! and a simulated lookup latency so the loading window is observable.

use std::time::Duration;

use async_trait::async_trait;
use pharmdash_permissions::Role;
use tracing::debug;
use uuid::Uuid;

use crate::error::{SessionError, SessionResult};
use crate::models::UserIdentity;

/// Credential lookup interface
#[async_trait]
pub trait CredentialDirectory: Send + Sync {
    /// Resolve an identifier + secret pair to an identity.
    ///
    /// Returns [`SessionError::InvalidCredentials`] for an unknown
    /// identifier or a wrong secret; callers cannot distinguish the two.
    async fn lookup(&self, identifier: &str, secret: &str) -> SessionResult<UserIdentity>;
}

/// A single seeded account
#[derive(Debug, Clone)]
struct DirectoryAccount {
    identifier: String,
    secret: String,
    identity: UserIdentity,
}

/// Fixed in-memory account table with simulated lookup latency
pub struct InMemoryDirectory {
    accounts: Vec<DirectoryAccount>,
    latency: Duration,
}

impl InMemoryDirectory {
    /// Demo tenant name used by the seeded accounts
    pub const DEMO_TENANT: &'static str = "Nordmed Pharma";

    /// Create a directory with the demo account table
    pub fn new(latency: Duration) -> Self {
        let tenant_id = Uuid::new_v4();
        let accounts = [
            ("admin@nordmed.test", "admin-demo", "Alex Admin", Role::Administrator),
            ("qa.manager@nordmed.test", "qa-mgr-demo", "Marta Qvist", Role::QaManager),
            ("qa.analyst@nordmed.test", "qa-demo", "Noor Amin", Role::QaAnalyst),
            (
                "wh.manager@nordmed.test",
                "wh-mgr-demo",
                "Jonas Weber",
                Role::WarehouseManager,
            ),
            ("warehouse@nordmed.test", "wh-demo", "Sam Holt", Role::WarehouseUser),
            ("procurement@nordmed.test", "proc-demo", "Ida Strand", Role::Procurement),
            ("sales@nordmed.test", "sales-demo", "Leo Berg", Role::Sales),
            ("auditor@nordmed.test", "audit-demo", "Rita Falk", Role::Auditor),
        ]
        .into_iter()
        .map(|(identifier, secret, name, role)| DirectoryAccount {
            identifier: identifier.to_string(),
            secret: secret.to_string(),
            identity: UserIdentity::new(identifier, name, role, tenant_id, Self::DEMO_TENANT),
        })
        .collect();

        Self { accounts, latency }
    }

    /// Create a directory with explicit accounts (tests)
    pub fn with_accounts(
        accounts: impl IntoIterator<Item = (String, String, UserIdentity)>,
        latency: Duration,
    ) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|(identifier, secret, identity)| DirectoryAccount {
                    identifier,
                    secret,
                    identity,
                })
                .collect(),
            latency,
        }
    }

    /// Number of seeded accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

#[async_trait]
impl CredentialDirectory for InMemoryDirectory {
    async fn lookup(&self, identifier: &str, secret: &str) -> SessionResult<UserIdentity> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let account = self
            .accounts
            .iter()
            .find(|a| a.identifier == identifier)
            .ok_or(SessionError::InvalidCredentials)?;

        if account.secret != secret {
            debug!(identifier, "credential lookup rejected");
            return Err(SessionError::InvalidCredentials);
        }

        debug!(identifier, role = %account.identity.role, "credential lookup resolved");
        Ok(account.identity.clone())
    }
}
