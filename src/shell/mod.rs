//! External command execution for checks.

pub mod command;

pub use command::{capture, command_output_contains, command_succeeds, CommandOutput};
