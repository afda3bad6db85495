//! # invsum
//!
//! A CLI tool that summarizes server inventory CSV files into three count
//! reports: operating systems, hostnames and vulnerabilities.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize inventory.csv, writing reports next to it
//! invsum inventory.csv
//!
//! # Write reports into a separate directory
//! invsum inventory.csv reports/
//!
//! # Columns are positional (defaults: hostname 2, OS 4, vulnerability 7)
//! invsum export.csv --os-column 3 --vuln-column 9
//!
//! # Only the hostname and vulnerability reports
//! invsum inventory.csv --reports hostname,vuln
//!
//! # Machine-readable run report
//! invsum inventory.csv --output json
//! ```
//!
//! Set `RUST_LOG=invsumlib=debug` for diagnostic logging on stderr.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgMatches, Command};
use invsumlib::{run_with_stamp, ColumnMap, ReportKind, RunConfig, RunReport, RunStamp};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Input file used when none is given on the command line.
const DEFAULT_INPUT_FILE: &str = "input_data.csv";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("invsum")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Summarize server inventory CSV files into OS, hostname and vulnerability reports")
        .arg(
            Arg::new("input")
                .value_parser(value_parser!(PathBuf))
                .help(format!(
                    "Inventory CSV file (defaults to {DEFAULT_INPUT_FILE})"
                )),
        )
        .arg(
            Arg::new("output_dir")
                .value_parser(value_parser!(PathBuf))
                .help("Directory for reports (defaults to the input file's directory)"),
        )
        .arg(
            Arg::new("hostname-column")
                .long("hostname-column")
                .value_name("INDEX")
                .value_parser(value_parser!(usize))
                .help("Zero-based column holding hostnames [default: 2]"),
        )
        .arg(
            Arg::new("os-column")
                .long("os-column")
                .value_name("INDEX")
                .value_parser(value_parser!(usize))
                .help("Zero-based column holding operating systems [default: 4]"),
        )
        .arg(
            Arg::new("vuln-column")
                .long("vuln-column")
                .value_name("INDEX")
                .value_parser(value_parser!(usize))
                .help("Zero-based column holding vulnerabilities [default: 7]"),
        )
        .arg(
            Arg::new("reports")
                .short('r')
                .long("reports")
                .value_name("REPORTS")
                .value_delimiter(',')
                .value_parser(|s: &str| s.parse::<ReportKind>())
                .help("Reports to produce (comma-separated: os,hostname,vuln) [default: all]"),
        )
        .arg(
            Arg::new("timestamp")
                .long("timestamp")
                .value_name("YYYYMMDD_HHMMSS")
                .value_parser(|s: &str| s.parse::<RunStamp>())
                .help("Use this timestamp in report file names instead of the current time"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Console output format"),
        )
}

/// Build the column mapping, applying any overrides
fn extract_columns(matches: &ArgMatches) -> ColumnMap {
    let mut columns = ColumnMap::default();
    if let Some(&index) = matches.get_one::<usize>("hostname-column") {
        columns = columns.with_hostname(index);
    }
    if let Some(&index) = matches.get_one::<usize>("os-column") {
        columns = columns.with_operating_system(index);
    }
    if let Some(&index) = matches.get_one::<usize>("vuln-column") {
        columns = columns.with_vulnerability(index);
    }
    columns
}

/// Build run options from matches. The default input file is supplied here,
/// never by the library.
fn build_config(matches: &ArgMatches, default_input: &str) -> (RunConfig, bool) {
    let (input, defaulted) = match matches.get_one::<PathBuf>("input") {
        Some(path) => (path.clone(), false),
        None => (PathBuf::from(default_input), true),
    };

    let mut config = RunConfig::new(input).columns(extract_columns(matches));
    if let Some(dir) = matches.get_one::<PathBuf>("output_dir") {
        config = config.output_dir(dir);
    }
    if let Some(kinds) = matches.get_many::<ReportKind>("reports") {
        config = config.reports(kinds.copied());
    }
    (config, defaulted)
}

/// Run the summarization described by `matches`
fn summarize_handler(matches: &ArgMatches, config: &RunConfig) -> anyhow::Result<RunReport> {
    let stamp = matches
        .get_one::<RunStamp>("timestamp")
        .cloned()
        .unwrap_or_else(RunStamp::now);
    debug!(?config, %stamp, "starting run");

    Ok(run_with_stamp(config, stamp)?)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let matches = match build_command().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let json = matches
        .get_one::<String>("output")
        .is_some_and(|s| s == "json");
    let (config, defaulted) = build_config(&matches, DEFAULT_INPUT_FILE);

    if defaulted {
        let notice = render::default_input_notice(DEFAULT_INPUT_FILE);
        // Keep stdout parseable in JSON mode
        if json {
            eprint!("{notice}");
        } else {
            print!("{notice}");
        }
    }
    if !json && config.input.exists() {
        print!("{}", render::reading_line(&config.input));
    }

    match summarize_handler(&matches, &config) {
        Ok(report) => {
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(out) => println!("{out}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print!("{}", render::render_report(&report));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", render::render_error(&e));
            if !json {
                println!("{}", render::failure_line());
            }
            ExitCode::FAILURE
        }
    }
}
