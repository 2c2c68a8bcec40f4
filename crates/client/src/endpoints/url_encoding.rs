//! URL encoding for role GUIDs placed in request paths.
//!
//! A GUID comes from the command line or from a list response, so it is
//! percent-encoded before being joined into `/api/<collection>/<guid>`. A
//! value containing `/`, `?` or `#` must not change which resource is hit.
//!
//! # Example
//!
//! ```
//! use roles_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("ab/cd"), "ab%2Fcd");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
