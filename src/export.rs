use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;

use crate::models::{AllocationRecord, AllocationStatus};

const COLUMNS: [&str; 5] = ["Class", "Subject", "Teacher", "Score", "Status"];

fn tier_file_name(status: AllocationStatus) -> &'static str {
    match status {
        AllocationStatus::BestPerformer => "best_performers.csv",
        AllocationStatus::NeedsImprovement => "needs_improvement.csv",
        AllocationStatus::NoMatch => "unassigned.csv",
    }
}

fn write_rows(path: &Path, records: &[AllocationRecord]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(COLUMNS)?;
    for record in records {
        let score = format!("{:.2}", record.current_score);
        writer.write_record([
            record.class_id.as_str(),
            record.subject.as_str(),
            record.teacher_name.as_str(),
            score.as_str(),
            record.status.label(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes one CSV per non-empty tier into `out_dir`, returning the file
/// names written.
pub fn write_tier_csvs(
    tiers: &BTreeMap<AllocationStatus, Vec<AllocationRecord>>,
    out_dir: &Path,
) -> anyhow::Result<Vec<String>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let mut written = Vec::new();
    for (status, records) in tiers {
        if records.is_empty() {
            continue;
        }
        let file_name = tier_file_name(*status);
        write_rows(&out_dir.join(file_name), records)?;
        written.push(file_name.to_string());
    }
    Ok(written)
}

/// Writes the full allocation table to a single CSV.
pub fn write_allocations_csv(records: &[AllocationRecord], path: &Path) -> anyhow::Result<()> {
    write_rows(path, records)
}
