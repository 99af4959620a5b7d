//! Runtime configuration read from the environment.

pub mod console;

pub use console::{ConfigError, ConsoleConfig};
