//! The serializer seam.
//!
//! A `HeaderValueSerializer` turns `PolicyOptions` into a header value. The
//! built-in Feature-Policy and Permissions-Policy renderers implement it, and
//! so does any `Fn(&PolicyOptions) -> PolicyResult<Option<String>>`, which is
//! how callers substitute their own renderer (for tests, or a house syntax).

use policyhdr_contracts::{PolicyOptions, PolicyResult};

/// Renders a directive mapping into a header value.
///
/// Implementations must be pure: the same options always produce the same
/// value, and the options are never modified.
pub trait HeaderValueSerializer: Send + Sync {
    /// Return `Ok(None)` when no header value should be emitted.
    fn serialize(&self, options: &PolicyOptions) -> PolicyResult<Option<String>>;
}

impl<F> HeaderValueSerializer for F
where
    F: Fn(&PolicyOptions) -> PolicyResult<Option<String>> + Send + Sync,
{
    fn serialize(&self, options: &PolicyOptions) -> PolicyResult<Option<String>> {
        self(options)
    }
}
