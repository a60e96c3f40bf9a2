use crate::models::{AllocationRecord, AllocationStatus, PerformanceRecord, Teacher, UNASSIGNED};
use crate::teachers::TeacherIndex;

pub const DEFAULT_THRESHOLD: f64 = 70.0;

/// Tuning knobs for the allocation engine. The best-performer threshold
/// varies between schools, so it is configurable rather than fixed.
#[derive(Debug, Clone, Copy)]
pub struct AllocationConfig {
    pub threshold: f64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl AllocationConfig {
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }
}

/// Matches one performance record to the best-available teacher for its
/// subject and classifies the pairing.
///
/// On equal success rates the first-registered teacher wins; the strict
/// `>` comparison keeps the scan stable across runs.
pub fn allocate_one(
    record: &PerformanceRecord,
    teachers: &TeacherIndex,
    config: &AllocationConfig,
) -> AllocationRecord {
    let candidates = teachers.find_by_subject(&record.subject);

    let mut best: Option<&Teacher> = None;
    for candidate in candidates {
        match best {
            Some(current) if candidate.success_rate > current.success_rate => {
                best = Some(candidate);
            }
            None => best = Some(candidate),
            Some(_) => {}
        }
    }

    let Some(best) = best else {
        return AllocationRecord {
            class_id: record.class_id.clone(),
            subject: record.subject.clone(),
            teacher_name: UNASSIGNED.to_string(),
            current_score: record.predictive_score,
            status: AllocationStatus::NoMatch,
        };
    };

    let status = if record.predictive_score >= config.threshold {
        AllocationStatus::BestPerformer
    } else {
        AllocationStatus::NeedsImprovement
    };

    AllocationRecord {
        class_id: record.class_id.clone(),
        subject: record.subject.clone(),
        teacher_name: best.name.clone(),
        current_score: record.predictive_score,
        status,
    }
}

/// Allocates every record from scratch. Callers replace any previous
/// allocation list wholesale; results are never merged incrementally.
pub fn allocate_all(
    records: &[PerformanceRecord],
    teachers: &TeacherIndex,
    config: &AllocationConfig,
) -> Vec<AllocationRecord> {
    records
        .iter()
        .map(|record| allocate_one(record, teachers, config))
        .collect()
}
