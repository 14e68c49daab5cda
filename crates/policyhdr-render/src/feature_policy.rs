//! Legacy `Feature-Policy` serializer.
//!
//! Syntax: each directive is its name followed by space-separated allow-list
//! tokens and a `;`. Keywords are single-quoted, origins are not:
//!
//! ```text
//! camera 'none'; autoplay *; geolocation 'self' https://maps.example;
//! ```
//!
//! Every directive is terminated with `"; "` and the accumulated value is
//! whitespace-trimmed, so the value ends in a bare `;`. Consumers of the
//! shipped format depend on that, so it is kept.

use tracing::debug;

use policyhdr_contracts::{PolicyOptions, PolicyResult, ResolvedDirective, ResponseHeader};
use policyhdr_core::{create_header, resolve_options, traits::HeaderValueSerializer};

pub const FEATURE_POLICY_HEADER: &str = "Feature-Policy";

/// The built-in `Feature-Policy` renderer as a `HeaderValueSerializer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeaturePolicy;

impl HeaderValueSerializer for FeaturePolicy {
    fn serialize(&self, options: &PolicyOptions) -> PolicyResult<Option<String>> {
        create_feature_policy_header_value(options)
    }
}

/// Render `options` in `Feature-Policy` syntax.
///
/// Returns `Ok(None)` for disabled options. Fails with
/// `InvalidDirectiveName` or `InvalidDirectiveParameters` on the first bad
/// entry; nothing is rendered in that case.
pub fn create_feature_policy_header_value(options: &PolicyOptions) -> PolicyResult<Option<String>> {
    if options.is_disabled() {
        return Ok(None);
    }

    let directives = resolve_options(FEATURE_POLICY_HEADER, options)?;

    let mut value = String::new();
    for (name, directive) in &directives {
        value.push_str(name.as_str());
        match directive {
            ResolvedDirective::None => value.push_str(" 'none'"),
            ResolvedDirective::All => value.push_str(" *"),
            ResolvedDirective::SelfOrigins { include_self, origins } => {
                if *include_self {
                    value.push_str(" 'self'");
                }
                if !origins.is_empty() {
                    value.push(' ');
                    value.push_str(&origins.join(" "));
                }
            }
        }
        value.push_str("; ");
    }

    let value = value.trim().to_string();
    debug!(header = FEATURE_POLICY_HEADER, count = directives.len(), "rendered header value");
    Ok(Some(value))
}

/// Build the `Feature-Policy` header with the built-in renderer.
pub fn create_feature_policy_header(options: &PolicyOptions) -> PolicyResult<Option<ResponseHeader>> {
    create_feature_policy_header_with(options, &FeaturePolicy)
}

/// Build the `Feature-Policy` header with a caller-supplied renderer.
pub fn create_feature_policy_header_with(
    options: &PolicyOptions,
    serializer: &dyn HeaderValueSerializer,
) -> PolicyResult<Option<ResponseHeader>> {
    create_header(FEATURE_POLICY_HEADER, options, serializer)
}
