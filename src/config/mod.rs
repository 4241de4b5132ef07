//! Engine settings.
//!
//! - Schema definitions in [`schema`]
//! - File loading and environment overrides in [`loader`]
//!
//! # Example
//!
//! ```
//! use medic::config::{ErrorPolicy, MedicConfig};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".medic")).unwrap();
//! fs::write(temp.path().join(".medic/config.yml"), "on_error: continue").unwrap();
//!
//! let config = MedicConfig::load(&temp.path().join(".medic/config.yml")).unwrap();
//! assert_eq!(config.on_error, ErrorPolicy::Continue);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{config_path, parse_config, ON_ERROR_ENV, SKIP_DIR_ENV};
pub use schema::{ErrorPolicy, MedicConfig};
