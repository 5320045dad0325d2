/// Terminal rendering of an analysis report.
///
/// Pure string building — the caller decides where it goes. Layout is
/// deliberately plain: aligned columns, no colour, pipes cleanly.
use std::fmt::Write;
use stratus_core::model::size::{format_count, format_size, format_usd};
use stratus_core::report::AnalysisReport;

/// Render the full report as display text.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Storage health score: {}/100", report.health_score);
    let _ = writeln!(
        out,
        "{} files, {:.2} GB across {} providers, {}/month",
        format_count(report.total_files),
        report.total_size_gb,
        report.breakdown.len(),
        format_usd(report.current_monthly_cost),
    );
    if report.potential_savings_usd > 0.0 {
        let _ = writeln!(
            out,
            "Potential savings: {}/month",
            format_usd(report.potential_savings_usd)
        );
    }

    if !report.breakdown.is_empty() {
        let _ = writeln!(out, "\nPer-provider breakdown:");
        for entry in &report.breakdown {
            let _ = writeln!(
                out,
                "  {:<14} {:>8} files  {:>9.2} GB  {:>10}/month",
                entry.provider,
                format_count(entry.total_files),
                entry.total_size_gb,
                format_usd(entry.estimated_monthly_cost),
            );
        }
    }

    if !report.clusters.is_empty() {
        let _ = writeln!(out, "\nTop duplicate clusters:");
        for cluster in report.clusters.iter().take(5) {
            let _ = writeln!(
                out,
                "  {} copies of {} ({}) — {}/month redundant",
                cluster.files.len(),
                cluster.hash,
                format_size(cluster.total_size_bytes),
                format_usd(cluster.potential_savings_usd),
            );
        }
    }

    if report.actions.is_empty() {
        let _ = writeln!(out, "\nNo worthwhile optimisation actions found.");
    } else {
        let _ = writeln!(out, "\nRecommended actions:");
        for action in &report.actions {
            let _ = writeln!(
                out,
                "  [{}] {} — saves {}/month ({} friction)",
                action.kind.label(),
                action.title,
                format_usd(action.estimated_savings_usd),
                action.friction.label(),
            );
            let _ = writeln!(out, "        {}", action.description);
        }
    }

    out
}
