//! Shared shape of the two role collections.
//!
//! Admin roles and control roles differ only in their collection path, the
//! name of their type/status filter, and their record type. Listing,
//! resolving, fetching and deleting are written once against [`RoleKind`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A role record as returned by the server.
///
/// Records are kept as the raw JSON the server sent. Field accessors are
/// lenient: a missing, null or non-string field reads as `None`.
pub trait RoleRecord: DeserializeOwned + Serialize + Clone + Send + Sync {
    /// The record exactly as received.
    fn as_value(&self) -> &Value;

    fn guid(&self) -> Option<&str> {
        str_field(self.as_value(), "guid")
    }

    fn name(&self) -> Option<&str> {
        str_field(self.as_value(), "name")
    }

    fn note(&self) -> Option<&str> {
        str_field(self.as_value(), "note")
    }

    /// Short type or status label for tabular output.
    fn kind_detail(&self) -> Option<String>;
}

/// Read a string field, ignoring nulls and other JSON types.
pub(crate) fn str_field<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

/// A role collection on the admin server.
pub trait RoleKind {
    type Record: RoleRecord;

    /// Collection path, e.g. `/api/admin-roles`.
    const COLLECTION_PATH: &'static str;
    /// Query parameter used for the type/status filter.
    const FILTER_PARAM: &'static str;
    /// Human label used in messages, e.g. `Admin role`.
    const LABEL: &'static str;
}
