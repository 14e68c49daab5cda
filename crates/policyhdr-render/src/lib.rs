//! # policyhdr-render
//!
//! Renders a declarative feature policy into `Permissions-Policy` and
//! legacy `Feature-Policy` header values.
//!
//! ## Overview
//!
//! Both serializers share the catalog check and priority resolution from
//! `policyhdr-core` and differ only in syntax:
//!
//! | Parameters           | Permissions-Policy       | Feature-Policy            |
//! |----------------------|--------------------------|---------------------------|
//! | `none`               | `camera=()`              | `camera 'none';`          |
//! | `all`                | `camera=*`               | `camera *;`               |
//! | `self` + origins     | `camera=(self "https://a")` | `camera 'self' https://a;` |
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use policyhdr_render::PolicyConfig;
//!
//! let config = PolicyConfig::from_file(Path::new("policy.toml"))?;
//! for header in config.headers()? {
//!     println!("{}: {}", header.name, header.value.unwrap_or_default());
//! }
//! ```

pub mod config;
pub mod feature_policy;
pub mod permissions_policy;

pub use config::PolicyConfig;
pub use feature_policy::{
    create_feature_policy_header, create_feature_policy_header_value,
    create_feature_policy_header_with, FeaturePolicy, FEATURE_POLICY_HEADER,
};
pub use permissions_policy::{
    create_permissions_policy_header, create_permissions_policy_header_value,
    create_permissions_policy_header_with, PermissionsPolicy, PERMISSIONS_POLICY_HEADER,
};

// ── Tests ─────────────────────────────────────────────────────────────────────
