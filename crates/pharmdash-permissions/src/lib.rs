//! Permissions System for PharmDash
//!
//! Role-based access control for the dashboard: a fixed role-to-capability
//! matrix and the derived flag view pages consume. The matrix is the single
//! canonical definition of who may do what; pages must read the
//! [`PermissionView`] (named flags or the generic predicate) and never infer
//! access from a role tag directly.
//!
//! There are no error conditions in this crate: an unrecognized role
//! degrades to the empty capability set rather than failing, so an
//! unexpected role value means "no access", never a crash.

pub mod capability;
pub mod matrix;
pub mod role;
pub mod view;

pub use capability::{Capability, ResourceFamily};
pub use matrix::{capabilities_for, is_granted};
pub use role::Role;
pub use view::PermissionView;
