use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ConcatHash, reconcile, trim_to_window};
use crate::errors::AppResult;
use crate::export;
use crate::loader::load_table;
use crate::models::table::TableRole;
use crate::ui::messages::{info, success};
use crate::ui::report::print_report;
use std::io::{self, Write};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reconcile {
        primary,
        secondary,
        primary_sheet,
        secondary_sheet,
        window_from,
        out,
        format,
        force,
    } = cmd
    {
        let primary_path = resolve_path(primary, "Enter path to THE BOOKING EXPORT: ")?;
        let secondary_path = resolve_path(secondary, "Enter path to THE SCHEDULE FILE: ")?;

        let primary_sheet = primary_sheet.as_deref().unwrap_or(&cfg.primary_sheet);
        let secondary_sheet = secondary_sheet.as_deref().unwrap_or(&cfg.secondary_sheet);

        let mut primary_table = load_table(
            Path::new(&primary_path),
            primary_sheet,
            TableRole::Primary,
        )?;
        let mut secondary_table = load_table(
            Path::new(&secondary_path),
            secondary_sheet,
            TableRole::Secondary,
        )?;

        // The window source (by convention the table covering the shorter
        // date range) defines the comparison window; the other table is
        // narrowed to it.
        let (window_table, trimmed_table) = match window_from {
            TableRole::Primary => (&primary_table, &mut secondary_table),
            TableRole::Secondary => (&secondary_table, &mut primary_table),
        };

        let (start, end) = window_table.date_window()?;
        let before = trimmed_table.len();
        trim_to_window(trimmed_table, start, end)?;

        info(format!(
            "Comparison window {} to {} (from the {} table)",
            start,
            end,
            window_from.label()
        ));
        info(format!(
            "{} table: {} events, {} inside the window; {} table: {} events",
            window_from.other().label(),
            before,
            trimmed_table.len(),
            window_from.label(),
            window_table.len()
        ));

        let outcome = reconcile(&ConcatHash, &primary_table, &secondary_table)?;

        info(format!("{} events matched in both tables", outcome.matched.len()));

        if outcome.report.is_empty() {
            success("No discrepancies found.");
        } else {
            println!();
            print_report(&outcome.report, &cfg.date_display);
            println!();
            info(format!(
                "{} discrepancies: {} missing from primary, {} missing from secondary",
                outcome.report.len(),
                outcome.report.missing_from_primary(),
                outcome.report.missing_from_secondary()
            ));
        }

        if let Some(out) = out {
            export::write_report(&outcome.report, format, Path::new(out), *force)?;
        }
    }
    Ok(())
}

/// Paths omitted on the command line are asked for interactively, so the
/// tool still works for drag-a-file-into-the-terminal users.
fn resolve_path(arg: &Option<String>, prompt: &str) -> AppResult<String> {
    if let Some(path) = arg {
        return Ok(path.clone());
    }

    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().trim_matches('"').to_string())
}
