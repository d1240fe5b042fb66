//! Fixed-width rendering for summary reports.

use crate::ledger::SummaryReport;

const NAME_WIDTH: usize = 15;
const AMOUNT_WIDTH: usize = 10;
const TOTAL_LABEL: &str = "Total";

/// Renders the canonical summary table: header, separator, one row per
/// budget in creation order, separator, totals row.
///
/// Names longer than the name column push their row wider instead of being
/// truncated.
pub fn render_summary(report: &SummaryReport) -> String {
    let mut lines = Vec::with_capacity(report.lines.len() + 4);
    lines.push(header());
    lines.push(separator());
    for line in &report.lines {
        lines.push(row(
            &line.name,
            line.totals.allocated,
            line.totals.spent,
            line.totals.remaining,
        ));
    }
    lines.push(separator());
    lines.push(row(
        TOTAL_LABEL,
        report.totals.allocated,
        report.totals.spent,
        report.totals.remaining,
    ));
    lines.join("\n")
}

fn header() -> String {
    format!(
        "{:<name$} {:>amount$} {:>amount$} {:>amount$}",
        "Budget",
        "Budgeted",
        "Spent",
        "Remaining",
        name = NAME_WIDTH,
        amount = AMOUNT_WIDTH,
    )
}

fn separator() -> String {
    format!(
        "{:-<name$} {:-<amount$} {:-<amount$} {:-<amount$}",
        "",
        "",
        "",
        "",
        name = NAME_WIDTH,
        amount = AMOUNT_WIDTH,
    )
}

fn row(label: &str, allocated: f64, spent: f64, remaining: f64) -> String {
    format!(
        "{:<name$} {:>amount$.2} {:>amount$.2} {:>amount$.2}",
        label,
        allocated,
        spent,
        remaining,
        name = NAME_WIDTH,
        amount = AMOUNT_WIDTH,
    )
}
