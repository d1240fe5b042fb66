//! One-shot invocation handling for the CLI binary.

use thiserror::Error;

use crate::config::LedgerConfig;
use crate::ledger::Ledger;

use super::commands::{definitions, CommandError, CommandRegistry};
use super::{output, table};

/// Fatal invocation failures; the binary reports these and exits non-zero.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("usage: fund_ledger_cli <initial_amount> [command] [arguments]")]
    MissingInitialAmount,
    #[error("Invalid number format for initial amount or command arguments.")]
    InvalidInitialAmount,
}

/// Runs one invocation against a fresh ledger.
///
/// The first argument funds the pool; the rest select and feed a command.
/// Without a command the empty summary is shown. Ledger-level failures and
/// argument mistakes are reported on stdout and the run still succeeds; only
/// a missing or malformed initial amount is fatal.
pub fn run_cli(args: &[String]) -> Result<(), CliError> {
    let initial_raw = args.first().ok_or(CliError::MissingInitialAmount)?;
    let initial_funds = initial_raw
        .parse::<f64>()
        .map_err(|_| CliError::InvalidInitialAmount)?;

    let config = LedgerConfig::new(initial_funds);
    let mut ledger = Ledger::from_config(&config);
    let registry = CommandRegistry::new(definitions());

    match args.get(1) {
        Some(command) => {
            let rest: Vec<&str> = args[2..].iter().map(String::as_str).collect();
            dispatch(&registry, &mut ledger, command, &rest);
        }
        None => {
            output::success("New ledger created.");
            output::plain(table::render_summary(&ledger.summarize()));
        }
    }
    Ok(())
}

fn dispatch(registry: &CommandRegistry, ledger: &mut Ledger, command: &str, args: &[&str]) {
    let Some(entry) = registry.get(command) else {
        output::warning(format!(
            "Invalid command `{command}`. Available commands: {}.",
            registry.listing()
        ));
        if let Some(suggestion) = registry.suggest_for(command) {
            output::hint(format!("Did you mean `{suggestion}`?"));
        }
        return;
    };

    tracing::debug!(command, "dispatching command");
    if let Err(err) = (entry.handler)(ledger, args) {
        report_command_error(err);
    }
}

fn report_command_error(err: CommandError) {
    match err {
        // usage strings go out as-is, everything else gets the error label
        CommandError::InvalidArguments(message) => output::info(message),
        other => output::error(other),
    }
}
