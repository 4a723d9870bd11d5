//! The role-to-capability matrix
//!
//! Capabilities are enumerated per role explicitly rather than computed from
//! a smaller rule set: segregation-of-duties requirements are audited as a
//! reviewable table, and this module is that table — the single canonical
//! definition consumed by every access check in the process.
//!
//! Invariants:
//! - total: every role, including `Unknown`, resolves to a (possibly empty)
//!   slice; lookups never fail
//! - constant: the tables are `'static` and never mutated at runtime
//! - segregation of duties: the role that records a QC result must not also
//!   approve one; `QaAnalyst` holds `QcResultRecord`, `QaManager` holds
//!   `QcResultApprove`, and no role holds both

use crate::capability::Capability;
use crate::role::Role;

const ADMINISTRATOR: &[Capability] = &[
    Capability::InventoryView,
    Capability::BatchView,
    Capability::AuditLogView,
    Capability::AuditLogExport,
    Capability::UserManage,
    Capability::RoleAssign,
    Capability::WorkflowConfigure,
    Capability::TenantConfigure,
];

const QA_MANAGER: &[Capability] = &[
    Capability::InventoryView,
    Capability::BatchView,
    Capability::BatchRelease,
    Capability::BatchQuarantine,
    Capability::BatchRecall,
    Capability::QcResultApprove,
    Capability::QcSpecManage,
    Capability::DeviationManage,
    Capability::AuditLogView,
];

const QA_ANALYST: &[Capability] = &[
    Capability::InventoryView,
    Capability::BatchView,
    Capability::QcResultRecord,
    Capability::DeviationManage,
];

const WAREHOUSE_MANAGER: &[Capability] = &[
    Capability::InventoryView,
    Capability::InventoryMovementCreate,
    Capability::InventoryMovementApprove,
    Capability::InventoryAdjust,
    Capability::InventoryExport,
    Capability::BatchView,
    Capability::BatchQuarantine,
];

const WAREHOUSE_USER: &[Capability] = &[
    Capability::InventoryView,
    Capability::InventoryMovementCreate,
    Capability::BatchView,
];

const PROCUREMENT: &[Capability] = &[
    Capability::InventoryView,
    Capability::InventoryExport,
    Capability::BatchView,
    Capability::BatchCreate,
];

const SALES: &[Capability] = &[Capability::InventoryView, Capability::BatchView];

const AUDITOR: &[Capability] = &[
    Capability::InventoryView,
    Capability::BatchView,
    Capability::AuditLogView,
    Capability::AuditLogExport,
];

/// Full capability set for a role.
///
/// O(1), total, and constant for the process lifetime. `Unknown` resolves
/// to the empty set.
pub fn capabilities_for(role: Role) -> &'static [Capability] {
    match role {
        Role::Administrator => ADMINISTRATOR,
        Role::QaManager => QA_MANAGER,
        Role::QaAnalyst => QA_ANALYST,
        Role::WarehouseManager => WAREHOUSE_MANAGER,
        Role::WarehouseUser => WAREHOUSE_USER,
        Role::Procurement => PROCUREMENT,
        Role::Sales => SALES,
        Role::Auditor => AUDITOR,
        Role::Unknown => &[],
    }
}

/// Whether a role is granted a capability
pub fn is_granted(role: Role, capability: Capability) -> bool {
    capabilities_for(role).contains(&capability)
}
