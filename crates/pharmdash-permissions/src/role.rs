//! Organizational roles
//!
//! A role is a job-function tag assigned to a user identity, immutable for
//! the lifetime of a session. Persisted blobs carry the snake_case wire
//! name; anything unrecognized deserializes to [`Role::Unknown`], which the
//! matrix maps to zero capabilities.

use serde::{Deserialize, Serialize};

/// Organizational role of a dashboard user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// System administrator: user, role, and workflow management
    Administrator,
    /// Quality assurance manager: approves QC results, releases batches
    QaManager,
    /// Quality assurance analyst: records QC results
    QaAnalyst,
    /// Warehouse manager: approves movements, adjusts stock
    WarehouseManager,
    /// Warehouse operator: records movements
    WarehouseUser,
    /// Procurement officer: registers incoming batches
    Procurement,
    /// Sales user: read-only stock visibility
    Sales,
    /// Auditor: read-only access including the audit trail
    Auditor,
    /// Unrecognized role value from persisted or external data
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Every assignable role (excludes [`Role::Unknown`])
    pub const ALL: &'static [Role] = &[
        Role::Administrator,
        Role::QaManager,
        Role::QaAnalyst,
        Role::WarehouseManager,
        Role::WarehouseUser,
        Role::Procurement,
        Role::Sales,
        Role::Auditor,
    ];

    /// Stable wire name (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::QaManager => "qa_manager",
            Role::QaAnalyst => "qa_analyst",
            Role::WarehouseManager => "warehouse_manager",
            Role::WarehouseUser => "warehouse_user",
            Role::Procurement => "procurement",
            Role::Sales => "sales",
            Role::Auditor => "auditor",
            Role::Unknown => "unknown",
        }
    }

    /// Human-readable label for UI surfaces
    pub fn label(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::QaManager => "QA Manager",
            Role::QaAnalyst => "QA Analyst",
            Role::WarehouseManager => "Warehouse Manager",
            Role::WarehouseUser => "Warehouse User",
            Role::Procurement => "Procurement",
            Role::Sales => "Sales",
            Role::Auditor => "Auditor",
            Role::Unknown => "Unknown",
        }
    }

    /// Parse a wire name into a known role
    pub fn parse(name: &str) -> Option<Role> {
        Role::ALL.iter().copied().find(|r| r.as_str() == name)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
