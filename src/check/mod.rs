//! The check contract.
//!
//! - [`CheckDescriptor`] - Which check to run, and with what arguments
//! - [`Arguments`] - Positional values or a bag of named [`Options`]
//! - [`normalize`] - Convert arguments into dispatch [`Param`]s
//! - [`CheckResult`] - The four possible outcomes of a check
//!
//! # Example
//!
//! ```
//! use medic::check::{normalize, CheckDescriptor, Options};
//!
//! let descriptor = CheckDescriptor::with_arguments(
//!     "postgres",
//!     "running",
//!     Options::new().with("port", "5432"),
//! );
//!
//! let params = normalize(descriptor.arguments());
//! assert_eq!(params.len(), 1);
//! assert_eq!(params[0].as_options().and_then(|o| o.get("port")), Some("5432"));
//! ```

pub mod arguments;
pub mod descriptor;
pub mod result;

pub use arguments::{normalize, values, Arguments, Options, Param};
pub use descriptor::CheckDescriptor;
pub use result::CheckResult;
