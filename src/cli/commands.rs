//! Command definitions, registry, and handlers for the one-shot CLI.

use std::collections::HashMap;

use strsim::levenshtein;
use thiserror::Error;

use crate::errors::LedgerError;
use crate::ledger::Ledger;

use super::{output, table};

const USAGE_ADD: &str = "fund_ledger_cli <initial_amount> add <name> <amount>";
const USAGE_CHANGE: &str = "fund_ledger_cli <initial_amount> change <name> <new_amount>";
const USAGE_SPEND: &str = "fund_ledger_cli <initial_amount> spend <name> <amount>";
const USAGE_SUMMARY: &str = "fund_ledger_cli <initial_amount> summary";

const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Failures surfaced by command handling. All of them are recoverable: the
/// CLI reports them and still exits normally.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Invalid number format for initial amount or command arguments.")]
    InvalidNumber,
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Outcome of a command handler.
pub type CommandResult = Result<(), CommandError>;

pub type CommandHandler = fn(&mut Ledger, &[&str]) -> CommandResult;

/// Describes one CLI command.
#[derive(Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Registry of the available commands, preserving definition order.
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandDefinition>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        let mut commands = HashMap::new();
        let mut order = Vec::new();
        for definition in definitions {
            order.push(definition.name);
            commands.insert(definition.name, definition);
        }
        Self { commands, order }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// Comma-separated command list for the invalid-command message.
    pub fn listing(&self) -> String {
        self.order.join(", ")
    }

    /// Best fuzzy match for an unknown command, when close enough to offer.
    pub fn suggest_for(&self, input: &str) -> Option<&'static str> {
        self.names()
            .map(|name| (levenshtein(name, input), name))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .map(|(_, name)| name)
    }
}

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "add",
            "Create a budget and commit funds to it",
            USAGE_ADD,
            cmd_add,
        ),
        CommandDefinition::new(
            "change",
            "Replace a budget's committed amount",
            USAGE_CHANGE,
            cmd_change,
        ),
        CommandDefinition::new(
            "spend",
            "Record a spend against a budget",
            USAGE_SPEND,
            cmd_spend,
        ),
        CommandDefinition::new(
            "summary",
            "Print every budget with spent and remaining figures",
            USAGE_SUMMARY,
            cmd_summary,
        ),
    ]
}

fn cmd_add(ledger: &mut Ledger, args: &[&str]) -> CommandResult {
    let (name, amount) = two_args(args, USAGE_ADD)?;
    let amount = parse_amount(amount)?;
    let remaining = ledger.allocate(name, amount)?;
    output::success(format!(
        "Budget `{name}` added. Remaining funds: {remaining:.2}"
    ));
    Ok(())
}

fn cmd_change(ledger: &mut Ledger, args: &[&str]) -> CommandResult {
    let (name, new_amount) = two_args(args, USAGE_CHANGE)?;
    let new_amount = parse_amount(new_amount)?;
    let remaining = ledger.reallocate(name, new_amount)?;
    output::success(format!(
        "Budget `{name}` changed. Remaining funds: {remaining:.2}"
    ));
    Ok(())
}

fn cmd_spend(ledger: &mut Ledger, args: &[&str]) -> CommandResult {
    let (name, amount) = two_args(args, USAGE_SPEND)?;
    let amount = parse_amount(amount)?;
    let remaining = ledger.record_spend(name, amount)?;
    output::success(format!(
        "Spent {amount:.2} on `{name}`. Remaining budget: {remaining:.2}"
    ));
    Ok(())
}

fn cmd_summary(ledger: &mut Ledger, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::InvalidArguments(format!(
            "usage: {USAGE_SUMMARY}"
        )));
    }
    output::plain(table::render_summary(&ledger.summarize()));
    Ok(())
}

fn two_args<'a>(args: &[&'a str], usage: &str) -> Result<(&'a str, &'a str), CommandError> {
    match args {
        &[name, amount] => Ok((name, amount)),
        _ => Err(CommandError::InvalidArguments(format!("usage: {usage}"))),
    }
}

fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    raw.parse::<f64>().map_err(|_| CommandError::InvalidNumber)
}
