/// CSV report export — one file for the per-provider breakdown, one for
/// the ranked actions.
use anyhow::Context;
use std::path::Path;
use stratus_core::report::AnalysisReport;

/// Write `report.csv` and `actions.csv` into `dir`.
pub fn export_csv(report: &AnalysisReport, dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;

    let breakdown_path = dir.join("report.csv");
    let mut writer = csv::Writer::from_path(&breakdown_path)
        .with_context(|| format!("failed to open {}", breakdown_path.display()))?;
    write_breakdown(report, &mut writer)?;
    writer.flush()?;

    let actions_path = dir.join("actions.csv");
    let mut writer = csv::Writer::from_path(&actions_path)
        .with_context(|| format!("failed to open {}", actions_path.display()))?;
    write_actions(report, &mut writer)?;
    writer.flush()?;

    Ok(())
}

fn write_breakdown<W: std::io::Write>(
    report: &AnalysisReport,
    writer: &mut csv::Writer<W>,
) -> anyhow::Result<()> {
    writer.write_record(["provider", "files", "size_gb", "monthly_cost_usd"])?;
    for entry in &report.breakdown {
        writer.write_record([
            entry.provider.to_string(),
            entry.total_files.to_string(),
            format!("{:.4}", entry.total_size_gb),
            format!("{:.2}", entry.estimated_monthly_cost),
        ])?;
    }
    Ok(())
}

fn write_actions<W: std::io::Write>(
    report: &AnalysisReport,
    writer: &mut csv::Writer<W>,
) -> anyhow::Result<()> {
    writer.write_record([
        "id",
        "type",
        "title",
        "estimated_savings_usd",
        "friction",
        "affected_files",
    ])?;
    for action in &report.actions {
        writer.write_record([
            action.id.to_string(),
            action.kind.label().to_string(),
            action.title.clone(),
            format!("{:.2}", action.estimated_savings_usd),
            action.friction.label().to_string(),
            action.affected_files.len().to_string(),
        ])?;
    }
    Ok(())
}
