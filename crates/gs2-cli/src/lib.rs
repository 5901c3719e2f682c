/*
[INPUT]:  Public API exports for gs2-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Command};
pub use commands::{build_client, execute};
pub use config::CliConfig;
