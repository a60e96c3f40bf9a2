use serde::Serialize;

use crate::error::AllocatorError;
use crate::score;

pub const UNASSIGNED: &str = "unassigned";

/// Counts of students per grade tier for one class/subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeDistribution {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
}

impl GradeDistribution {
    pub fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }

    /// Validates raw counts as they arrive from data entry or import.
    pub fn from_counts(a: i64, b: i64, c: i64, d: i64) -> Result<Self, AllocatorError> {
        let validate = |label: &str, count: i64| {
            u32::try_from(count).map_err(|_| {
                AllocatorError::invalid_input(format!(
                    "grade count {label} must be within 0-{}, got {count}",
                    u32::MAX
                ))
            })
        };
        Ok(Self::new(
            validate("A", a)?,
            validate("B", b)?,
            validate("C", c)?,
            validate("D", d)?,
        ))
    }

    pub fn total(&self) -> u64 {
        u64::from(self.a) + u64::from(self.b) + u64::from(self.c) + u64::from(self.d)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceRecord {
    pub class_id: String,
    pub subject: String,
    pub distribution: GradeDistribution,
    pub predictive_score: f64,
}

impl PerformanceRecord {
    /// Scores the distribution at construction time; the record is
    /// immutable afterwards.
    pub fn new(
        class_id: impl Into<String>,
        subject: impl Into<String>,
        distribution: GradeDistribution,
    ) -> Self {
        let predictive_score = score::score_distribution(&distribution);
        Self {
            class_id: class_id.into(),
            subject: subject.into(),
            distribution,
            predictive_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Teacher {
    pub name: String,
    pub expertise: String,
    pub success_rate: f64,
}

impl Teacher {
    pub fn new(
        name: impl Into<String>,
        expertise: impl Into<String>,
        success_rate: f64,
    ) -> Result<Self, AllocatorError> {
        if !(0.0..=100.0).contains(&success_rate) {
            return Err(AllocatorError::invalid_input(format!(
                "success rate must be within 0-100, got {success_rate}"
            )));
        }
        Ok(Self {
            name: name.into(),
            expertise: expertise.into(),
            success_rate,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AllocationStatus {
    BestPerformer,
    NeedsImprovement,
    NoMatch,
}

impl AllocationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AllocationStatus::BestPerformer => "Best Performer",
            AllocationStatus::NeedsImprovement => "Needs Improvement",
            AllocationStatus::NoMatch => "No Match",
        }
    }
}

impl std::fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationRecord {
    pub class_id: String,
    pub subject: String,
    pub teacher_name: String,
    pub current_score: f64,
    pub status: AllocationStatus,
}

/// Configured classes and their subject lists, keyed "{grade}-{section}".
/// Insertion order is kept so reports list classes as they were entered.
#[derive(Debug, Clone, Default)]
pub struct ClassRoster {
    entries: Vec<(String, Vec<String>)>,
}

impl ClassRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, class_key: impl Into<String>, subjects: Vec<String>) {
        let class_key = class_key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == class_key) {
            entry.1 = subjects;
        } else {
            self.entries.push((class_key, subjects));
        }
    }

    pub fn subjects_for(&self, class_key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == class_key)
            .map(|(_, subjects)| subjects.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, subjects)| (key.as_str(), subjects.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
