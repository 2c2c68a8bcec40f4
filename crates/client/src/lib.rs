//! Admin server REST API client.
//!
//! This crate provides a type-safe client for the admin server's role
//! management API: admin roles (scope-based administrative permissions) and
//! control roles (feature-level permissions). Both collections share one
//! paginated lister and one name resolver through [`models::RoleKind`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::RolesClient;
pub use client::builder::RolesClientBuilder;
pub use error::{ClientError, NOTHING_TO_UPDATE, Result};
pub use models::{
    AdminRole, AdminRoleType, AdminRoleUpdate, AdminRoles, ApiOutcome, ControlRole,
    ControlRoleCreate, ControlRoleStatus, ControlRoleUpdate, ControlRoles, IdList, ListFilter,
    RoleKind, RoleRecord,
};
