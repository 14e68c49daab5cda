//! # policyhdr-contracts
//!
//! Shared types for rendering `Permissions-Policy` and `Feature-Policy`
//! header values.
//!
//! All crates in the workspace import from here. No rendering logic lives in
//! this crate, only the directive catalog, the option model, and error types.

pub mod directive;
pub mod error;
pub mod header;
pub mod options;

pub use directive::{is_supported_directive, DirectiveName, DirectiveParameters, ResolvedDirective};
pub use error::{PolicyHeaderError, PolicyResult};
pub use header::ResponseHeader;
pub use options::{DirectiveEntry, PolicyOptions, PolicyOptionsBuilder};
