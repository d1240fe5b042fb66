mod app;
pub mod commands;
pub mod output;
pub mod table;

pub use app::{run_cli, CliError};
