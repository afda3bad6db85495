//! Console rendering of run reports

use std::path::Path;

use console::Style;
use invsumlib::{ReportStatus, RunReport};

/// Styles for console messages
struct Theme {
    heading: Style,
    path: Style,
    warning: Style,
    error: Style,
    success: Style,
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme {
        heading: Style::new().bold(),
        path: Style::new().cyan(),
        warning: Style::new().yellow(),
        error: Style::new().red(),
        success: Style::new().green().bold(),
    }
}

/// Notice printed when no input file was given
pub fn default_input_notice(default_input: &str) -> String {
    let theme = create_theme();
    format!(
        "{}\nUsage: invsum <input_csv_file> [output_directory]\n",
        theme.warning.apply_to(format!(
            "No input file specified. Using default: {default_input}"
        ))
    )
}

/// Line printed before the input is parsed
pub fn reading_line(input: &Path) -> String {
    let theme = create_theme();
    format!("Reading CSV file: {}\n", theme.path.apply_to(input.display()))
}

/// Render the per-report progress and the final summary for a finished run
pub fn render_report(report: &RunReport) -> String {
    let theme = create_theme();
    let mut output = String::new();

    if let Some(shortfall) = &report.shortfall {
        output.push_str(&format!(
            "{}\n",
            theme.warning.apply_to(format!(
                "Warning: CSV file has only {} columns. Expected at least {} columns.",
                shortfall.found, shortfall.expected
            ))
        ));
        output.push_str("Proceeding with available columns...\n");
    }

    for outcome in &report.reports {
        let name = outcome.kind.display_name();
        output.push_str(&format!(
            "Processing {} summary...\n",
            outcome.kind.title()
        ));
        match &outcome.status {
            ReportStatus::Written => {
                output.push_str(&format!(
                    "  - Saved {} summary to: {}\n",
                    name,
                    theme.path.apply_to(outcome.path.display())
                ));
                output.push_str(&format!(
                    "  - Found {} unique {}\n",
                    outcome.summary.unique_count(),
                    outcome.kind.plural_noun()
                ));
            }
            ReportStatus::Failed { error } => {
                output.push_str(&format!(
                    "  - {}\n",
                    theme
                        .error
                        .apply_to(format!("Error saving {} summary: {}", name, error))
                ));
            }
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "{}\n",
        theme.heading.apply_to("Summary Reports Generated Successfully!")
    ));
    for outcome in report.written() {
        output.push_str(&format!(
            "- {} Summary: {}\n",
            outcome.kind.display_name(),
            theme.path.apply_to(outcome.path.display())
        ));
    }

    let failed = report.failed().count();
    if failed > 0 {
        output.push_str(&format!(
            "{}\n",
            theme.warning.apply_to(format!(
                "Warning: {} of {} reports could not be written.",
                failed,
                report.reports.len()
            ))
        ));
    }

    output.push_str(&format!(
        "\n{}\n",
        theme.success.apply_to("\u{2705} invsum completed successfully!")
    ));
    output
}

/// Render a fatal error for stderr
pub fn render_error(err: &anyhow::Error) -> String {
    let theme = create_theme();
    theme.error.apply_to(format!("Error: {err}")).to_string()
}

/// Final line after a fatal error
pub fn failure_line() -> String {
    let theme = create_theme();
    format!(
        "\n{}",
        theme.error.apply_to("\u{274c} invsum failed to complete.")
    )
}
