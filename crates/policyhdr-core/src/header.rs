//! Wraps a serializer's output into a named response header.

use tracing::debug;

use policyhdr_contracts::{PolicyOptions, PolicyResult, ResponseHeader};

use crate::traits::HeaderValueSerializer;

/// Render `options` with `serializer` and package the result as `name`.
///
/// Disabled options produce `Ok(None)` without invoking the serializer.
/// Otherwise the serializer is called exactly once and its value, even
/// `None`, is placed in the header record. Serializer errors propagate
/// unchanged.
pub fn create_header(
    name: &str,
    options: &PolicyOptions,
    serializer: &dyn HeaderValueSerializer,
) -> PolicyResult<Option<ResponseHeader>> {
    if options.is_disabled() {
        debug!(header = %name, "options disabled, no header emitted");
        return Ok(None);
    }

    let value = serializer.serialize(options)?;
    Ok(Some(ResponseHeader::new(name, value)))
}
