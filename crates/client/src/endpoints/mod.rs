//! Admin server REST API endpoint implementations.
//!
//! Each function takes the HTTP client, the normalized base URL and the bearer
//! token explicitly so it can be driven directly in tests.

mod admin_roles;
mod control_roles;
pub mod request;
mod roles;
pub mod url_encoding;

pub use admin_roles::{add_admin_role_users, remove_admin_role_users, update_admin_role};
pub use control_roles::{
    assign_control_role_users, create_control_role, remove_control_role_users,
    set_control_roles_enabled, update_control_role,
};
pub use request::{check_response, send_request, validate_body};
pub use roles::{delete_roles, find_role_by_name, get_role, list_roles, resolve_guid};
pub use url_encoding::encode_path_segment;
