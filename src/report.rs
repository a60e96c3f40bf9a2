use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::Utc;

use crate::models::{AllocationRecord, AllocationStatus, ClassRoster};

/// Groups allocation records by status tier, preserving order within each
/// group. An empty input yields an empty mapping.
pub fn partition(
    records: &[AllocationRecord],
) -> BTreeMap<AllocationStatus, Vec<AllocationRecord>> {
    let mut tiers: BTreeMap<AllocationStatus, Vec<AllocationRecord>> = BTreeMap::new();
    for record in records {
        tiers.entry(record.status).or_default().push(record.clone());
    }
    tiers
}

/// The allocations assigned to one teacher, for the per-teacher report.
pub fn allocations_for_teacher(
    records: &[AllocationRecord],
    teacher_name: &str,
) -> Vec<AllocationRecord> {
    let teacher_name = teacher_name.to_lowercase();
    records
        .iter()
        .filter(|record| record.teacher_name.to_lowercase() == teacher_name)
        .cloned()
        .collect()
}

pub fn build_report(
    school_name: &str,
    threshold: f64,
    roster: Option<&ClassRoster>,
    records: &[AllocationRecord],
) -> String {
    let tiers = partition(records);

    let mut output = String::new();
    let _ = writeln!(output, "# {school_name} — Performance Report");
    let _ = writeln!(
        output,
        "Generated {} (best-performer threshold {threshold})",
        Utc::now().date_naive()
    );

    if let Some(roster) = roster {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Configured Classes");
        if roster.is_empty() {
            let _ = writeln!(output, "No classes configured.");
        } else {
            for (class_key, subjects) in roster.iter() {
                let _ = writeln!(output, "- {}: {}", class_key, subjects.join(", "));
            }
        }
    }

    for status in [
        AllocationStatus::BestPerformer,
        AllocationStatus::NeedsImprovement,
        AllocationStatus::NoMatch,
    ] {
        let Some(group) = tiers.get(&status) else {
            continue;
        };

        let _ = writeln!(output);
        let _ = writeln!(output, "## {} ({})", status, group.len());
        for record in group {
            let _ = writeln!(
                output,
                "- {} / {}: {} (score {:.2})",
                record.class_id, record.subject, record.teacher_name, record.current_score
            );
        }
    }

    if records.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "No allocations computed for this dataset.");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocation(
        class_id: &str,
        subject: &str,
        teacher_name: &str,
        current_score: f64,
        status: AllocationStatus,
    ) -> AllocationRecord {
        AllocationRecord {
            class_id: class_id.to_string(),
            subject: subject.to_string(),
            teacher_name: teacher_name.to_string(),
            current_score,
            status,
        }
    }

    fn sample_records() -> Vec<AllocationRecord> {
        vec![
            allocation(
                "Grade 7-A",
                "Math",
                "Nadia Rahman",
                88.5,
                AllocationStatus::BestPerformer,
            ),
            allocation(
                "Grade 7-A",
                "Science",
                "Omar Sy",
                42.0,
                AllocationStatus::NeedsImprovement,
            ),
            allocation(
                "Grade 8-B",
                "Math",
                "Nadia Rahman",
                73.25,
                AllocationStatus::BestPerformer,
            ),
            allocation(
                "Grade 8-B",
                "History",
                "unassigned",
                55.0,
                AllocationStatus::NoMatch,
            ),
        ]
    }

    #[test]
    fn partition_of_empty_input_is_empty() {
        assert!(partition(&[]).is_empty());
    }

    #[test]
    fn partition_preserves_total_count_and_group_order() {
        let records = sample_records();
        let tiers = partition(&records);

        let total: usize = tiers.values().map(Vec::len).sum();
        assert_eq!(total, records.len());

        let best = &tiers[&AllocationStatus::BestPerformer];
        assert_eq!(best[0].class_id, "Grade 7-A");
        assert_eq!(best[1].class_id, "Grade 8-B");
    }

    #[test]
    fn teacher_filter_is_case_insensitive_and_ordered() {
        let records = sample_records();
        let assigned = allocations_for_teacher(&records, "nadia rahman");
        assert_eq!(assigned.len(), 2);
        assert_eq!(assigned[0].class_id, "Grade 7-A");
        assert_eq!(assigned[1].class_id, "Grade 8-B");
        assert!(allocations_for_teacher(&records, "Nobody").is_empty());
    }

    #[test]
    fn teacher_filter_folds_non_ascii_case() {
        let records = vec![allocation(
            "Grade 9-C",
            "Türkçe",
            "Deniz AKSOY",
            81.0,
            AllocationStatus::BestPerformer,
        )];
        let assigned = allocations_for_teacher(&records, "deniz aksoy");
        assert_eq!(assigned.len(), 1);
    }

    #[test]
    fn report_lists_every_present_tier_and_roster() {
        let mut roster = ClassRoster::new();
        roster.add(
            "Grade 7-A",
            vec!["Math".to_string(), "Science".to_string()],
        );
        let report = build_report("Global International Academy", 70.0, Some(&roster), &sample_records());

        assert!(report.contains("Global International Academy"));
        assert!(report.contains("## Configured Classes"));
        assert!(report.contains("Grade 7-A: Math, Science"));
        assert!(report.contains("## Best Performer (2)"));
        assert!(report.contains("## Needs Improvement (1)"));
        assert!(report.contains("## No Match (1)"));
    }

    #[test]
    fn report_for_empty_dataset_says_so() {
        let report = build_report("Academy", 70.0, None, &[]);
        assert!(report.contains("No allocations computed"));
    }
}
