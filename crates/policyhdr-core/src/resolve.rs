//! Validation and priority resolution shared by every header syntax.
//!
//! `resolve_options` walks the entries in declaration order and, for each:
//!
//! 1. Looks the key up in the directive catalog; unknown keys fail with
//!    `InvalidDirectiveName`.
//! 2. Requires parameters to be present; missing parameters fail with
//!    `InvalidDirectiveParameters`.
//! 3. Collapses the parameters with `DirectiveParameters::resolve`; parameters
//!    that select nothing fail with `InvalidDirectiveParameters`.
//!
//! The first failure aborts the whole pass, so a serializer never renders a
//! partial header.

use tracing::{debug, warn};

use policyhdr_contracts::{
    DirectiveName, PolicyHeaderError, PolicyOptions, PolicyResult, ResolvedDirective,
};

/// Validate `options` for the header named `header` and resolve every entry.
///
/// Returns the resolved directives in declaration order. Disabled options
/// resolve to an empty list; callers that must distinguish "disabled" from
/// "empty mapping" check `PolicyOptions::is_disabled` first.
pub fn resolve_options<'a>(
    header: &str,
    options: &'a PolicyOptions,
) -> PolicyResult<Vec<(DirectiveName, ResolvedDirective<'a>)>> {
    let mut resolved = Vec::with_capacity(options.entries().len());

    for entry in options.entries() {
        let name: DirectiveName = entry.name.parse().map_err(|_| {
            warn!(header = %header, directive = %entry.name, "unsupported directive");
            PolicyHeaderError::InvalidDirectiveName {
                header: header.to_string(),
                name: entry.name.clone(),
            }
        })?;

        let directive = entry
            .parameters
            .as_ref()
            .and_then(|params| params.resolve())
            .ok_or_else(|| {
                warn!(header = %header, directive = %name, "directive parameters select nothing");
                PolicyHeaderError::InvalidDirectiveParameters {
                    header: header.to_string(),
                    name: entry.name.clone(),
                }
            })?;

        debug!(header = %header, directive = %name, resolved = ?directive, "directive resolved");
        resolved.push((name, directive));
    }

    Ok(resolved)
}
