//! Skip markers.
//!
//! A user opts out of a check by creating an empty file whose name encodes
//! the check's identity under `.medic/skipped`. This module derives that
//! name and tests for its presence; it never writes markers itself.
//!
//! # Example
//!
//! ```
//! use medic::check::Arguments;
//! use medic::skip::SkipResolver;
//! use std::path::PathBuf;
//!
//! let resolver = SkipResolver::new(".medic/skipped");
//! let path = resolver.resolve_skip_path("asdf", "plugin_installed", &Arguments::positional(["nodejs"]));
//! assert_eq!(path, PathBuf::from(".medic/skipped/asdf-plugin_installed-nodejs"));
//! ```

pub mod resolver;
pub mod sanitize;

pub use resolver::{SkipResolver, DEFAULT_SKIP_DIR};
pub use sanitize::sanitize;
