//! Policy document loading.
//!
//! A `PolicyConfig` is deserialized from TOML (or JSON) and holds the
//! ordered directive mapping plus two switches. Directives are rendered in
//! the order they appear in the document.
//!
//! Example:
//! ```toml
//! enabled = true
//! legacy = true
//!
//! [directives]
//! camera = { none = true }
//! autoplay = { self = true }
//! geolocation = { self = true, origins = ["https://maps.example"] }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use policyhdr_contracts::{PolicyHeaderError, PolicyOptions, PolicyResult, ResponseHeader};

use crate::feature_policy::create_feature_policy_header;
use crate::permissions_policy::create_permissions_policy_header;

static DISABLED: PolicyOptions = PolicyOptions::Disabled;

fn default_true() -> bool {
    true
}

/// The top-level structure of a policy document.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Master switch. When false no header is rendered, whatever
    /// `directives` contains.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Also render the legacy `Feature-Policy` header alongside
    /// `Permissions-Policy`.
    #[serde(default = "default_true")]
    pub legacy: bool,

    /// Ordered directive mapping. Missing or `false` disables rendering.
    #[serde(default)]
    pub directives: PolicyOptions,
}

impl PolicyConfig {
    /// Parse `s` as a TOML policy document.
    ///
    /// Returns `PolicyHeaderError::ConfigError` if the TOML is malformed or
    /// does not match the `PolicyConfig` schema. Directive names and
    /// parameters are not validated here; that happens at render time.
    pub fn from_toml_str(s: &str) -> PolicyResult<Self> {
        toml::from_str(s).map_err(|e| PolicyHeaderError::ConfigError {
            reason: format!("failed to parse policy TOML: {}", e),
        })
    }

    /// Parse `s` as a JSON policy document.
    pub fn from_json_str(s: &str) -> PolicyResult<Self> {
        serde_json::from_str(s).map_err(|e| PolicyHeaderError::ConfigError {
            reason: format!("failed to parse policy JSON: {}", e),
        })
    }

    /// Read the file at `path` and parse it. Files ending in `.json` are read
    /// as JSON, everything else as TOML.
    pub fn from_file(path: &Path) -> PolicyResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| PolicyHeaderError::ConfigError {
            reason: format!("failed to read policy file '{}': {}", path.display(), e),
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        debug!(path = %path.display(), json = is_json, "loading policy document");

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    /// The options to render, honouring the `enabled` switch.
    pub fn options(&self) -> &PolicyOptions {
        if self.enabled {
            &self.directives
        } else {
            &DISABLED
        }
    }

    /// Render every enabled header: `Permissions-Policy` first, then
    /// `Feature-Policy` when `legacy` is set.
    ///
    /// Returns an empty list when the document is disabled. Validation
    /// errors from either serializer abort the whole call.
    pub fn headers(&self) -> PolicyResult<Vec<ResponseHeader>> {
        let options = self.options();
        let mut headers = Vec::with_capacity(2);

        if let Some(header) = create_permissions_policy_header(options)? {
            headers.push(header);
        }
        if self.legacy {
            if let Some(header) = create_feature_policy_header(options)? {
                headers.push(header);
            }
        }

        info!(
            count = headers.len(),
            directives = options.entries().len(),
            "policy headers rendered"
        );
        Ok(headers)
    }
}
