//! # policyhdr-core
//!
//! The syntax-independent half of policy header rendering.
//!
//! This crate provides:
//! - The `HeaderValueSerializer` trait every renderer implements
//! - `resolve_options`, the catalog check and `none > all > self/origins`
//!   resolution pass both header syntaxes share
//! - `create_header`, which wraps a rendered value into a `ResponseHeader`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use policyhdr_core::{create_header, resolve_options, traits::HeaderValueSerializer};
//! ```

pub mod header;
pub mod resolve;
pub mod traits;

pub use header::create_header;
pub use resolve::resolve_options;
