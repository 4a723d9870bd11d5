//! Capabilities
//!
//! A capability names a single permitted operation. Capabilities are flat,
//! independent tags — no hierarchy, no implication between them — grouped
//! into resource families only for display and review purposes.

use serde::{Deserialize, Serialize};

/// Resource family a capability belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceFamily {
    Inventory,
    Batch,
    Quality,
    Audit,
    Administration,
}

impl std::fmt::Display for ResourceFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceFamily::Inventory => "inventory",
            ResourceFamily::Batch => "batch",
            ResourceFamily::Quality => "quality",
            ResourceFamily::Audit => "audit",
            ResourceFamily::Administration => "administration",
        };
        write!(f, "{}", name)
    }
}

/// A single permitted operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    // Inventory
    /// View stock levels and inventory listings
    InventoryView,
    /// Record an inventory movement (receipt, transfer, issue)
    InventoryMovementCreate,
    /// Approve a recorded inventory movement
    InventoryMovementApprove,
    /// Post a stock adjustment
    InventoryAdjust,
    /// Export inventory listings
    InventoryExport,

    // Batch
    /// View batch records
    BatchView,
    /// Register a new batch
    BatchCreate,
    /// Release a batch for distribution
    BatchRelease,
    /// Place a batch in quarantine
    BatchQuarantine,
    /// Initiate a batch recall
    BatchRecall,

    // Quality
    /// Record a QC test result
    QcResultRecord,
    /// Approve a recorded QC test result
    QcResultApprove,
    /// Manage QC specifications
    QcSpecManage,
    /// Manage deviation records
    DeviationManage,

    // Audit
    /// View the audit trail
    AuditLogView,
    /// Export the audit trail
    AuditLogExport,

    // Administration
    /// Manage user accounts
    UserManage,
    /// Assign roles to users
    RoleAssign,
    /// Configure approval workflows
    WorkflowConfigure,
    /// Configure tenant settings
    TenantConfigure,
}

impl Capability {
    /// Every capability, grouped by family in declaration order
    pub const ALL: &'static [Capability] = &[
        Capability::InventoryView,
        Capability::InventoryMovementCreate,
        Capability::InventoryMovementApprove,
        Capability::InventoryAdjust,
        Capability::InventoryExport,
        Capability::BatchView,
        Capability::BatchCreate,
        Capability::BatchRelease,
        Capability::BatchQuarantine,
        Capability::BatchRecall,
        Capability::QcResultRecord,
        Capability::QcResultApprove,
        Capability::QcSpecManage,
        Capability::DeviationManage,
        Capability::AuditLogView,
        Capability::AuditLogExport,
        Capability::UserManage,
        Capability::RoleAssign,
        Capability::WorkflowConfigure,
        Capability::TenantConfigure,
    ];

    /// Resource family this capability belongs to
    pub fn family(&self) -> ResourceFamily {
        match self {
            Capability::InventoryView
            | Capability::InventoryMovementCreate
            | Capability::InventoryMovementApprove
            | Capability::InventoryAdjust
            | Capability::InventoryExport => ResourceFamily::Inventory,

            Capability::BatchView
            | Capability::BatchCreate
            | Capability::BatchRelease
            | Capability::BatchQuarantine
            | Capability::BatchRecall => ResourceFamily::Batch,

            Capability::QcResultRecord
            | Capability::QcResultApprove
            | Capability::QcSpecManage
            | Capability::DeviationManage => ResourceFamily::Quality,

            Capability::AuditLogView | Capability::AuditLogExport => ResourceFamily::Audit,

            Capability::UserManage
            | Capability::RoleAssign
            | Capability::WorkflowConfigure
            | Capability::TenantConfigure => ResourceFamily::Administration,
        }
    }

    /// Stable wire name (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::InventoryView => "inventory_view",
            Capability::InventoryMovementCreate => "inventory_movement_create",
            Capability::InventoryMovementApprove => "inventory_movement_approve",
            Capability::InventoryAdjust => "inventory_adjust",
            Capability::InventoryExport => "inventory_export",
            Capability::BatchView => "batch_view",
            Capability::BatchCreate => "batch_create",
            Capability::BatchRelease => "batch_release",
            Capability::BatchQuarantine => "batch_quarantine",
            Capability::BatchRecall => "batch_recall",
            Capability::QcResultRecord => "qc_result_record",
            Capability::QcResultApprove => "qc_result_approve",
            Capability::QcSpecManage => "qc_spec_manage",
            Capability::DeviationManage => "deviation_manage",
            Capability::AuditLogView => "audit_log_view",
            Capability::AuditLogExport => "audit_log_export",
            Capability::UserManage => "user_manage",
            Capability::RoleAssign => "role_assign",
            Capability::WorkflowConfigure => "workflow_configure",
            Capability::TenantConfigure => "tenant_configure",
        }
    }

    /// Parse a wire name
    pub fn parse(name: &str) -> Option<Capability> {
        Capability::ALL.iter().copied().find(|c| c.as_str() == name)
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
