//! Data models for the admin server's role APIs.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod admin_roles;
pub mod common;
pub mod control_roles;
pub mod role_kind;

pub use admin_roles::{AdminRole, AdminRoleType, AdminRoleUpdate, AdminRoles};
pub use common::{ApiOutcome, IdList, ListFilter, Page, SUCCESS_MARKER, wildcard_name};
pub use control_roles::{
    ControlRole, ControlRoleCreate, ControlRoleStatus, ControlRoleUpdate, ControlRoles, ProtoInfo,
};
pub use role_kind::{RoleKind, RoleRecord};
