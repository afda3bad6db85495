//! Run orchestration: load once, summarize and write each report.
//!
//! Failures before the first report (missing input, unreadable table,
//! uncreatable output directory) abort the run. A report that fails to write
//! is recorded in its [`ReportOutcome`] and the remaining reports still run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::data::{load_table, Table};
use crate::error::InvsumError;
use crate::options::{ReportKind, RunConfig};
use crate::output::{report_path, write_summary, RunStamp};
use crate::summary::{summarize_report, SummaryTable};
use crate::Result;

/// The input had fewer columns than the column mapping needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnShortfall {
    /// Columns present in the input
    pub found: usize,
    /// Columns needed for every tracked field
    pub expected: usize,
}

/// Whether a report reached disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportStatus {
    Written,
    Failed { error: String },
}

/// Result of producing one report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutcome {
    pub kind: ReportKind,
    /// Destination path (attempted, if the write failed)
    pub path: PathBuf,
    /// Zero-based input column the summary was built from
    pub column: usize,
    pub summary: SummaryTable,
    #[serde(flatten)]
    pub status: ReportStatus,
}

impl ReportOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self.status, ReportStatus::Written)
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub stamp: RunStamp,
    /// Columns in the input table
    pub column_count: usize,
    /// Data rows in the input table
    pub row_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortfall: Option<ColumnShortfall>,
    /// One outcome per selected report, in OS, Hostname, Vulnerability order
    pub reports: Vec<ReportOutcome>,
}

impl RunReport {
    /// Reports that were written.
    pub fn written(&self) -> impl Iterator<Item = &ReportOutcome> {
        self.reports.iter().filter(|r| r.is_written())
    }

    /// Reports that failed to write.
    pub fn failed(&self) -> impl Iterator<Item = &ReportOutcome> {
        self.reports.iter().filter(|r| !r.is_written())
    }

    /// Whether every report was written.
    pub fn is_complete(&self) -> bool {
        self.reports.iter().all(ReportOutcome::is_written)
    }

    pub fn outcome(&self, kind: ReportKind) -> Option<&ReportOutcome> {
        self.reports.iter().find(|r| r.kind == kind)
    }
}

/// Run with a stamp taken from the current local time.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    run_with_stamp(config, RunStamp::now())
}

/// Run using a caller-supplied stamp for the report file names.
pub fn run_with_stamp(config: &RunConfig, stamp: RunStamp) -> Result<RunReport> {
    if !config.input.exists() {
        return Err(InvsumError::InputNotFound(config.input.clone()));
    }

    let output_dir = config.resolved_output_dir();
    fs::create_dir_all(&output_dir).map_err(|source| InvsumError::OutputDir {
        path: output_dir.clone(),
        source,
    })?;

    let table = load_table(&config.input)?;
    let expected = config.columns.required_width_for(&config.reports);
    let shortfall = (table.width() < expected).then(|| {
        warn!(
            found = table.width(),
            expected, "input has fewer columns than expected; missing columns are empty"
        );
        ColumnShortfall {
            found: table.width(),
            expected,
        }
    });

    let reports = config
        .reports
        .iter()
        .map(|&kind| {
            produce_report(
                &table,
                kind,
                config.columns.index_for(kind),
                &output_dir,
                &stamp,
            )
        })
        .collect();

    Ok(RunReport {
        input: config.input.clone(),
        output_dir,
        stamp,
        column_count: table.width(),
        row_count: table.row_count(),
        shortfall,
        reports,
    })
}

/// Summarize one column and write it; write failures stay in the outcome.
fn produce_report(
    table: &Table,
    kind: ReportKind,
    column: usize,
    output_dir: &Path,
    stamp: &RunStamp,
) -> ReportOutcome {
    let summary = summarize_report(kind, table.column(column));
    debug!(
        report = %kind,
        column,
        unique = summary.unique_count(),
        nulls = summary.null_count,
        "summarized column"
    );

    let path = report_path(output_dir, kind, stamp);
    let status = match write_summary(&summary, &path) {
        Ok(()) => {
            info!(report = %kind, path = %path.display(), "saved summary");
            ReportStatus::Written
        }
        Err(e) => {
            warn!(report = %kind, error = %e, "failed to save summary");
            ReportStatus::Failed {
                error: e.to_string(),
            }
        }
    };

    ReportOutcome {
        kind,
        path,
        column,
        summary,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ColumnMap;
    use std::fs;
    use tempfile::tempdir;

    const INVENTORY: &str = "\
id,site,hostname,ip,os,owner,env,vulnerability
1,east,web01,10.0.0.1,Linux,ops,prod,CVE-2021-1
2,east,web01,10.0.0.2, linux ,ops,prod,CVE-2021-1
3,west,,10.0.0.3,,ops,dev,CVE-2020-9
4,west,  ,10.0.0.4,Windows,it,dev,
";

    fn stamp() -> RunStamp {
        "20250309_140507".parse().unwrap()
    }

    fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_full_run_writes_three_reports() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "inventory.csv", INVENTORY);

        let report = run_with_stamp(&RunConfig::new(&input), stamp()).unwrap();

        assert!(report.is_complete());
        assert!(report.shortfall.is_none());
        assert_eq!(report.row_count, 4);
        assert_eq!(report.output_dir, dir.path());

        let os = fs::read_to_string(dir.path().join("os_summary_20250309_140507.csv")).unwrap();
        assert_eq!(
            os,
            "Operating System,Count\nLinux,1\nUnknown,1\nWindows,1\nlinux,1\n"
        );

        let hosts =
            fs::read_to_string(dir.path().join("hostname_summary_20250309_140507.csv")).unwrap();
        assert_eq!(hosts, "Hostname,Count\nweb01,2\n");

        let vulns = fs::read_to_string(dir.path().join("vuln_20250309_140507.csv")).unwrap();
        assert_eq!(vulns, "Vulnerability,Count\nCVE-2020-9,1\nCVE-2021-1,2\n");
    }

    #[test]
    fn test_reports_share_one_stamp() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "inventory.csv", INVENTORY);

        let report = run(&RunConfig::new(&input)).unwrap();
        let suffix = format!("_{}.csv", report.stamp);
        for outcome in &report.reports {
            let name = outcome.path.file_name().unwrap().to_string_lossy();
            assert!(name.ends_with(&suffix), "{name} should end with {suffix}");
        }
    }

    #[test]
    fn test_narrow_table_warns_and_continues() {
        let dir = tempdir().unwrap();
        let input = write_input(
            dir.path(),
            "narrow.csv",
            "a,b,host,d,os\n1,2,web01,4,Linux\n1,2,web02,4,\n",
        );

        let report = run_with_stamp(&RunConfig::new(&input), stamp()).unwrap();

        assert_eq!(
            report.shortfall,
            Some(ColumnShortfall {
                found: 5,
                expected: 8
            })
        );
        assert!(report.is_complete());

        let vuln = report.outcome(ReportKind::Vulnerability).unwrap();
        assert!(vuln.summary.is_empty());
        assert_eq!(
            fs::read_to_string(&vuln.path).unwrap(),
            "Vulnerability,Count\n"
        );

        let os = report.outcome(ReportKind::OperatingSystem).unwrap();
        assert_eq!(os.summary.count_of("Linux"), Some(1));
        assert_eq!(os.summary.count_of("Unknown"), Some(1));
    }

    #[test]
    fn test_missing_input_creates_nothing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        let config = RunConfig::new(dir.path().join("missing.csv")).output_dir(&out);

        let err = run_with_stamp(&config, stamp()).unwrap_err();
        assert!(matches!(err, InvsumError::InputNotFound(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_load_error_is_fatal() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "bad.csv", "a,b\n1,2,3\n");

        let err = run_with_stamp(&RunConfig::new(&input), stamp()).unwrap_err();
        assert!(err.is_fatal());
        assert!(!dir.path().join("os_summary_20250309_140507.csv").exists());
    }

    #[test]
    fn test_write_failure_is_isolated_to_one_report() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "inventory.csv", INVENTORY);
        // Occupy the hostname report's path with a directory.
        fs::create_dir(dir.path().join("hostname_summary_20250309_140507.csv")).unwrap();

        let report = run_with_stamp(&RunConfig::new(&input), stamp()).unwrap();

        assert!(!report.is_complete());
        let failed: Vec<ReportKind> = report.failed().map(|r| r.kind).collect();
        assert_eq!(failed, vec![ReportKind::Hostname]);
        let written: Vec<ReportKind> = report.written().map(|r| r.kind).collect();
        assert_eq!(
            written,
            vec![ReportKind::OperatingSystem, ReportKind::Vulnerability]
        );
        assert!(dir.path().join("vuln_20250309_140507.csv").is_file());
    }

    #[test]
    fn test_explicit_output_dir_is_created() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "inventory.csv", INVENTORY);
        let out = dir.path().join("reports/2025");

        let report =
            run_with_stamp(&RunConfig::new(&input).output_dir(&out), stamp()).unwrap();

        assert_eq!(report.output_dir, out);
        assert!(out.join("vuln_20250309_140507.csv").is_file());
    }

    #[test]
    fn test_custom_column_map() {
        let dir = tempdir().unwrap();
        let input = write_input(
            dir.path(),
            "compact.csv",
            "os,host,vuln\nLinux,web01,CVE-1\n,web01,\n",
        );
        let columns = ColumnMap::new()
            .with_operating_system(0)
            .with_hostname(1)
            .with_vulnerability(2);

        let report =
            run_with_stamp(&RunConfig::new(&input).columns(columns), stamp()).unwrap();

        assert!(report.shortfall.is_none());
        let hosts = &report.outcome(ReportKind::Hostname).unwrap().summary;
        assert_eq!(hosts.count_of("web01"), Some(2));
        let vulns = &report.outcome(ReportKind::Vulnerability).unwrap().summary;
        assert_eq!(vulns.total_count(), 1);
    }

    #[test]
    fn test_selected_reports_only() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "narrow.csv", "a,b,host\n1,2,web01\n");
        let config = RunConfig::new(&input).reports([ReportKind::Hostname]);

        let report = run_with_stamp(&config, stamp()).unwrap();

        // Only the hostname column is needed, so three columns are enough.
        assert!(report.shortfall.is_none());
        assert_eq!(report.reports.len(), 1);
        assert_eq!(report.reports[0].kind, ReportKind::Hostname);
        assert!(dir.path().join("hostname_summary_20250309_140507.csv").is_file());
        assert!(!dir.path().join("os_summary_20250309_140507.csv").exists());
        assert!(!dir.path().join("vuln_20250309_140507.csv").exists());
    }

    #[test]
    fn test_report_serializes_status() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "inventory.csv", INVENTORY);
        let report = run_with_stamp(&RunConfig::new(&input), stamp()).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["stamp"], "20250309_140507");
        assert_eq!(json["reports"][0]["kind"], "OperatingSystem");
        assert_eq!(json["reports"][0]["status"], "written");
        assert!(json.get("shortfall").is_none());
    }
}
