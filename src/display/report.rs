//! Import outcome formatting

use crate::services::ImportReport;

/// Format an import report as an aligned count block
///
/// Skipped-row reasons follow the counts, one per line.
pub fn format_import_report(report: &ImportReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("  Imported:    {}\n", report.inserted));
    output.push_str(&format!("  Duplicates:  {}\n", report.duplicates));
    output.push_str(&format!("  Skipped:     {}\n", report.skipped));
    for message in &report.messages {
        output.push_str(&format!("    {}\n", message));
    }
    output
}
