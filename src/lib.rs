//! Medic - Developer environment doctor.
//!
//! Medic runs a checklist of named checks against the local machine
//! (installed tools, configuration files, running services) and reports
//! each one as passed, skipped, warned or failed with a suggested remedy.
//! This crate is the check execution engine; concrete checks are
//! registered by the application built on top of it.
//!
//! # Modules
//!
//! - [`check`] - Descriptors, arguments and the check-result vocabulary
//! - [`config`] - Engine settings and environment overrides
//! - [`dispatcher`] - Runs one check: progress, skip markers, dispatch
//! - [`doctor`] - Runs a whole checklist in order
//! - [`error`] - Error types and result aliases
//! - [`logging`] - Tracing subscriber setup
//! - [`predicate`] - In-memory assertions producing check results
//! - [`registry`] - Maps `(category, operation)` to check functions
//! - [`report`] - Reporting sink trait and renderers
//! - [`shell`] - External command checks
//! - [`skip`] - Skip-marker resolution
//!
//! # Example
//!
//! ```
//! use medic::check::{values, Arguments, CheckDescriptor, CheckResult};
//! use medic::dispatcher::Dispatcher;
//! use medic::predicate::in_list;
//! use medic::registry::CheckRegistry;
//! use medic::report::MockReporter;
//! use medic::skip::SkipResolver;
//! use tempfile::TempDir;
//!
//! let mut registry = CheckRegistry::new();
//! registry.register("shell", "supported", |params| {
//!     let args = values("shell::supported", params)?;
//!     let shell = args.first().copied().unwrap_or_default();
//!     Ok(in_list(&shell, &["bash", "zsh"], "chsh -s /bin/zsh"))
//! });
//!
//! let temp = TempDir::new().unwrap();
//! let dispatcher = Dispatcher::new(registry, SkipResolver::new(temp.path()));
//! let descriptor =
//!     CheckDescriptor::with_arguments("shell", "supported", Arguments::positional(["fish"]));
//!
//! let result = dispatcher.run(&descriptor, &mut MockReporter::new()).unwrap();
//! assert_eq!(result.remedy(), Some("chsh -s /bin/zsh"));
//! ```

pub mod check;
pub mod config;
pub mod dispatcher;
pub mod doctor;
pub mod error;
pub mod logging;
pub mod predicate;
pub mod registry;
pub mod report;
pub mod shell;
pub mod skip;

pub use check::{Arguments, CheckDescriptor, CheckResult, Options, Param};
pub use dispatcher::Dispatcher;
pub use doctor::{Doctor, DoctorSummary};
pub use error::{MedicError, Result};
pub use registry::CheckRegistry;
