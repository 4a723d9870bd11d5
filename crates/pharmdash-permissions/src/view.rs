//! Derived permission flags
//!
//! The only query interface pages use. A [`PermissionView`] is computed from
//! a role at query time, never persisted, and recomputed whenever requested;
//! the named booleans and the generic predicate both read the matrix, so
//! there is exactly one definition of every access rule.

use crate::capability::{Capability, ResourceFamily};
use crate::matrix::{capabilities_for, is_granted};
use crate::role::Role;

/// Read-only capability flags derived from a role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionView {
    /// Role the view was derived from
    pub role: Role,

    // Inventory
    pub can_view_inventory: bool,
    pub can_create_movement: bool,
    pub can_approve_movement: bool,
    pub can_adjust_inventory: bool,
    pub can_export_inventory: bool,

    // Batch
    pub can_view_batches: bool,
    pub can_create_batch: bool,
    pub can_release_batch: bool,
    pub can_quarantine_batch: bool,
    pub can_recall_batch: bool,

    // Quality
    pub can_record_qc_result: bool,
    pub can_approve_qc_result: bool,
    pub can_manage_qc_specs: bool,
    pub can_manage_deviations: bool,

    // Audit
    pub can_view_audit_log: bool,
    pub can_export_audit_log: bool,

    // Administration
    pub can_manage_users: bool,
    pub can_assign_roles: bool,
    pub can_configure_workflows: bool,
    pub can_configure_tenant: bool,
}

impl PermissionView {
    /// Derive the flag view for a role
    pub fn for_role(role: Role) -> Self {
        PermissionView {
            role,
            can_view_inventory: is_granted(role, Capability::InventoryView),
            can_create_movement: is_granted(role, Capability::InventoryMovementCreate),
            can_approve_movement: is_granted(role, Capability::InventoryMovementApprove),
            can_adjust_inventory: is_granted(role, Capability::InventoryAdjust),
            can_export_inventory: is_granted(role, Capability::InventoryExport),
            can_view_batches: is_granted(role, Capability::BatchView),
            can_create_batch: is_granted(role, Capability::BatchCreate),
            can_release_batch: is_granted(role, Capability::BatchRelease),
            can_quarantine_batch: is_granted(role, Capability::BatchQuarantine),
            can_recall_batch: is_granted(role, Capability::BatchRecall),
            can_record_qc_result: is_granted(role, Capability::QcResultRecord),
            can_approve_qc_result: is_granted(role, Capability::QcResultApprove),
            can_manage_qc_specs: is_granted(role, Capability::QcSpecManage),
            can_manage_deviations: is_granted(role, Capability::DeviationManage),
            can_view_audit_log: is_granted(role, Capability::AuditLogView),
            can_export_audit_log: is_granted(role, Capability::AuditLogExport),
            can_manage_users: is_granted(role, Capability::UserManage),
            can_assign_roles: is_granted(role, Capability::RoleAssign),
            can_configure_workflows: is_granted(role, Capability::WorkflowConfigure),
            can_configure_tenant: is_granted(role, Capability::TenantConfigure),
        }
    }

    /// Generic predicate over any capability
    pub fn allows(&self, capability: Capability) -> bool {
        is_granted(self.role, capability)
    }

    /// Whether any capability in a resource family is granted — drives
    /// section-level navigation visibility
    pub fn family_allows(&self, family: ResourceFamily) -> bool {
        capabilities_for(self.role)
            .iter()
            .any(|c| c.family() == family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_flags_agree_with_the_predicate() {
        for role in Role::ALL {
            let view = PermissionView::for_role(*role);
            assert_eq!(view.can_view_inventory, view.allows(Capability::InventoryView));
            assert_eq!(
                view.can_record_qc_result,
                view.allows(Capability::QcResultRecord)
            );
            assert_eq!(
                view.can_approve_qc_result,
                view.allows(Capability::QcResultApprove)
            );
            assert_eq!(view.can_manage_users, view.allows(Capability::UserManage));
        }
    }

    #[test]
    fn view_matches_matrix_for_every_role_and_capability() {
        for role in Role::ALL {
            let view = PermissionView::for_role(*role);
            for capability in Capability::ALL {
                assert_eq!(
                    view.allows(*capability),
                    is_granted(*role, *capability),
                    "view diverges from matrix for {} / {}",
                    role,
                    capability
                );
            }
        }
    }

    #[test]
    fn unknown_role_view_denies_everything() {
        let view = PermissionView::for_role(Role::Unknown);
        for capability in Capability::ALL {
            assert!(!view.allows(*capability));
        }
        assert!(!view.can_view_inventory);
        assert!(!view.can_configure_tenant);
    }

    #[test]
    fn family_allows_reflects_any_grant_in_family() {
        let analyst = PermissionView::for_role(Role::QaAnalyst);
        assert!(analyst.family_allows(ResourceFamily::Quality));
        assert!(!analyst.family_allows(ResourceFamily::Administration));

        let sales = PermissionView::for_role(Role::Sales);
        assert!(sales.family_allows(ResourceFamily::Inventory));
        assert!(!sales.family_allows(ResourceFamily::Audit));
    }
}
