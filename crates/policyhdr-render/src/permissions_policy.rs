//! `Permissions-Policy` serializer.
//!
//! Syntax: a comma-separated list of `name=allowlist` members, where the
//! allow-list is `()` (nobody), `*` (everybody), or a parenthesised inner
//! list of `self` and double-quoted origins:
//!
//! ```text
//! camera=(), autoplay=*, geolocation=(self "https://maps.example")
//! ```

use tracing::debug;

use policyhdr_contracts::{PolicyOptions, PolicyResult, ResolvedDirective, ResponseHeader};
use policyhdr_core::{create_header, resolve_options, traits::HeaderValueSerializer};

pub const PERMISSIONS_POLICY_HEADER: &str = "Permissions-Policy";

/// The built-in `Permissions-Policy` renderer as a `HeaderValueSerializer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionsPolicy;

impl HeaderValueSerializer for PermissionsPolicy {
    fn serialize(&self, options: &PolicyOptions) -> PolicyResult<Option<String>> {
        create_permissions_policy_header_value(options)
    }
}

fn quote_origins(origins: &[String]) -> String {
    origins
        .iter()
        .map(|origin| format!("\"{}\"", origin))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render `options` in `Permissions-Policy` syntax.
///
/// Returns `Ok(None)` for disabled options. Validation matches the legacy
/// serializer: the first unsupported name or empty parameter set aborts
/// the render.
pub fn create_permissions_policy_header_value(
    options: &PolicyOptions,
) -> PolicyResult<Option<String>> {
    if options.is_disabled() {
        return Ok(None);
    }

    let directives = resolve_options(PERMISSIONS_POLICY_HEADER, options)?;

    let mut value = String::new();
    for (name, directive) in &directives {
        value.push_str(name.as_str());
        match directive {
            ResolvedDirective::None => value.push_str("=()"),
            ResolvedDirective::All => value.push_str("=*"),
            ResolvedDirective::SelfOrigins { include_self, origins } => {
                let mut inner = String::new();
                if *include_self {
                    inner.push_str("self");
                }
                if !origins.is_empty() {
                    if *include_self {
                        inner.push(' ');
                    }
                    inner.push_str(&quote_origins(origins));
                }
                value.push_str("=(");
                value.push_str(&inner);
                value.push(')');
            }
        }
        value.push_str(", ");
    }

    let trimmed = value.trim();
    let value = trimmed.strip_suffix(',').unwrap_or(trimmed).to_string();
    debug!(header = PERMISSIONS_POLICY_HEADER, count = directives.len(), "rendered header value");
    Ok(Some(value))
}

/// Build the `Permissions-Policy` header with the built-in renderer.
pub fn create_permissions_policy_header(
    options: &PolicyOptions,
) -> PolicyResult<Option<ResponseHeader>> {
    create_permissions_policy_header_with(options, &PermissionsPolicy)
}

/// Build the `Permissions-Policy` header with a caller-supplied renderer.
pub fn create_permissions_policy_header_with(
    options: &PolicyOptions,
    serializer: &dyn HeaderValueSerializer,
) -> PolicyResult<Option<ResponseHeader>> {
    create_header(PERMISSIONS_POLICY_HEADER, options, serializer)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use policyhdr_contracts::{DirectiveName, DirectiveParameters, PolicyHeaderError, PolicyOptions};

    use super::*;

    const ORIGINS: [&str; 3] = [
        "http://dummy-origin1.com",
        "http://dummy-origin2.com",
        "http://dummy-origin3.com",
    ];

    fn single(name: DirectiveName, params: DirectiveParameters) -> PolicyOptions {
        PolicyOptions::builder().directive(name, params).build()
    }

    fn render(options: &PolicyOptions) -> String {
        create_permissions_policy_header_value(options)
            .unwrap()
            .expect("enabled options must render a value")
    }

    // ── Disabled input ───────────────────────────────────────────────────────

    #[test]
    fn disabled_renders_nothing() {
        assert_eq!(
            create_permissions_policy_header_value(&PolicyOptions::disabled()).unwrap(),
            None
        );
        assert_eq!(create_permissions_policy_header(&PolicyOptions::disabled()).unwrap(), None);
    }

    // ── Single directives ────────────────────────────────────────────────────

    #[test]
    fn none_renders_empty_list() {
        let options = single(DirectiveName::ScreenWakeLock, DirectiveParameters::none());
        assert_eq!(render(&options), "screen-wake-lock=()");
    }

    #[test]
    fn all_renders_wildcard() {
        let options = single(DirectiveName::ScreenWakeLock, DirectiveParameters::all());
        assert_eq!(render(&options), "screen-wake-lock=*");
    }

    #[test]
    fn self_renders_bare_token() {
        let options = single(DirectiveName::ScreenWakeLock, DirectiveParameters::self_only());
        assert_eq!(render(&options), "screen-wake-lock=(self)");
    }

    #[test]
    fn single_origin_is_quoted() {
        let options = single(DirectiveName::ScreenWakeLock, DirectiveParameters::origins([ORIGINS[0]]));
        assert_eq!(render(&options), "screen-wake-lock=(\"http://dummy-origin1.com\")");
    }

    #[test]
    fn origin_list_is_space_separated() {
        let options = single(DirectiveName::ScreenWakeLock, DirectiveParameters::origins(ORIGINS));
        assert_eq!(
            render(&options),
            r#"screen-wake-lock=("http://dummy-origin1.com" "http://dummy-origin2.com" "http://dummy-origin3.com")"#
        );
    }

    #[test]
    fn self_precedes_origins() {
        let options = single(
            DirectiveName::ScreenWakeLock,
            DirectiveParameters::self_only().with_origins(["http://x.com", "http://y.com"]),
        );
        assert_eq!(render(&options), r#"screen-wake-lock=(self "http://x.com" "http://y.com")"#);
    }

    #[test]
    fn conflicting_parameters_use_highest_priority() {
        let options = single(DirectiveName::Vr, DirectiveParameters::none().with_origins(["http://x.com"]));
        assert_eq!(render(&options), "vr=()");

        let options = single(
            DirectiveName::Vr,
            DirectiveParameters::all().with_self().with_origins(["http://x.com"]),
        );
        assert_eq!(render(&options), "vr=*");
    }

    #[test]
    fn none_wins_over_all_self_and_origins() {
        let params = DirectiveParameters {
            none: true,
            all: true,
            include_self: true,
            origins: vec!["http://x.com".to_string(), "http://y.com".to_string()],
        };
        assert_eq!(render(&single(DirectiveName::Vr, params)), "vr=()");
    }

    // ── Multiple directives ──────────────────────────────────────────────────

    #[test]
    fn multiple_directives_are_comma_joined_in_order() {
        let options = PolicyOptions::builder()
            .directive(DirectiveName::Accelerometer, DirectiveParameters::none())
            .directive(DirectiveName::AmbientLightSensor, DirectiveParameters::all())
            .directive(DirectiveName::Autoplay, DirectiveParameters::self_only())
            .directive(DirectiveName::Battery, DirectiveParameters::origins(["http://dummy-origin.com"]))
            .directive(DirectiveName::LayoutAnimations, DirectiveParameters::origins(ORIGINS))
            .directive(
                DirectiveName::ScreenWakeLock,
                DirectiveParameters::self_only().with_origins(ORIGINS),
            )
            .directive(
                DirectiveName::Vr,
                DirectiveParameters::none().with_origins(["http://dummy-origin.com"]),
            )
            .build();

        assert_eq!(
            render(&options),
            concat!(
                r#"accelerometer=(), ambient-light-sensor=*, autoplay=(self), "#,
                r#"battery=("http://dummy-origin.com"), "#,
                r#"layout-animations=("http://dummy-origin1.com" "http://dummy-origin2.com" "http://dummy-origin3.com"), "#,
                r#"screen-wake-lock=(self "http://dummy-origin1.com" "http://dummy-origin2.com" "http://dummy-origin3.com"), "#,
                r#"vr=()"#
            )
        );
    }

    // ── Validation ───────────────────────────────────────────────────────────

    #[test]
    fn unknown_directive_fails() {
        let options = PolicyOptions::builder()
            .directive(DirectiveName::Autoplay, DirectiveParameters::none())
            .entry("wrongOption", Some(DirectiveParameters::none()))
            .build();

        match create_permissions_policy_header_value(&options) {
            Err(PolicyHeaderError::InvalidDirectiveName { header, name }) => {
                assert_eq!(header, "Permissions-Policy");
                assert_eq!(name, "wrongOption");
            }
            other => panic!("expected InvalidDirectiveName, got {:?}", other),
        }
    }

    #[test]
    fn undefined_parameters_fail() {
        let options = PolicyOptions::builder().entry("screen-wake-lock", None).build();
        assert!(matches!(
            create_permissions_policy_header_value(&options),
            Err(PolicyHeaderError::InvalidDirectiveParameters { .. })
        ));
    }

    #[test]
    fn empty_parameters_fail() {
        let options = single(DirectiveName::ScreenWakeLock, DirectiveParameters::default());
        assert!(matches!(
            create_permissions_policy_header_value(&options),
            Err(PolicyHeaderError::InvalidDirectiveParameters { .. })
        ));
    }

    // ── Header wrapping ──────────────────────────────────────────────────────

    #[test]
    fn header_uses_permissions_policy_name() {
        let options = single(DirectiveName::ScreenWakeLock, DirectiveParameters::none());
        let header = create_permissions_policy_header(&options).unwrap().unwrap();
        assert_eq!(header.name, "Permissions-Policy");
        assert_eq!(header.value.as_deref(), Some("screen-wake-lock=()"));
    }

    #[test]
    fn header_passes_options_to_injected_serializer() {
        let options = single(DirectiveName::ScreenWakeLock, DirectiveParameters::none());
        let seen: Mutex<Vec<PolicyOptions>> = Mutex::new(Vec::new());
        let mock = |received: &PolicyOptions| -> PolicyResult<Option<String>> {
            seen.lock().unwrap().push(received.clone());
            Ok(Some("dummy-value".to_string()))
        };

        let header = create_permissions_policy_header_with(&options, &mock).unwrap().unwrap();
        assert_eq!(header.value.as_deref(), Some("dummy-value"));
        assert_eq!(*seen.lock().unwrap(), vec![options.clone()]);
    }
}
