pub mod baseline;
pub mod checks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod scanner;

pub use baseline::remove_found_forms;
pub use checks::{CheckConfig, RequiredChecks};
pub use config::read_checks;
pub use error::{CheckError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECKS_MISSING: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
