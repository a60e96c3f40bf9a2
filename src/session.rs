use crate::allocate::{allocate_all, AllocationConfig};
use crate::error::AllocatorError;
use crate::models::{AllocationRecord, ClassRoster, PerformanceRecord, Teacher};
use crate::teachers::TeacherIndex;

pub const DEFAULT_SCHOOL_NAME: &str = "Global International Academy";

/// The operator's working dataset for one session. Allocations are always
/// rebuilt from scratch by `recompute_allocations`; they are never patched
/// in place, so removing a record and recomputing can leave no stale rows.
#[derive(Debug, Clone)]
pub struct SessionStore {
    pub school_name: String,
    pub roster: ClassRoster,
    pub performance: Vec<PerformanceRecord>,
    pub teachers: TeacherIndex,
    pub allocations: Vec<AllocationRecord>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            school_name: DEFAULT_SCHOOL_NAME.to_string(),
            roster: ClassRoster::new(),
            performance: Vec::new(),
            teachers: TeacherIndex::new(),
            allocations: Vec::new(),
        }
    }
}

impl SessionStore {
    pub fn new(school_name: impl Into<String>) -> Self {
        Self {
            school_name: school_name.into(),
            ..Self::default()
        }
    }

    pub fn add_performance(&mut self, record: PerformanceRecord) {
        self.performance.push(record);
    }

    pub fn remove_performance(&mut self, index: usize) -> Result<PerformanceRecord, AllocatorError> {
        if index >= self.performance.len() {
            return Err(AllocatorError::IndexOutOfRange {
                index,
                len: self.performance.len(),
            });
        }
        Ok(self.performance.remove(index))
    }

    pub fn add_teacher(&mut self, teacher: Teacher) {
        self.teachers.add(teacher);
    }

    pub fn remove_teacher(&mut self, index: usize) -> Result<Teacher, AllocatorError> {
        self.teachers.remove(index)
    }

    /// Clears the allocation list and recomputes it from the current
    /// performance records and teacher index.
    pub fn recompute_allocations(&mut self, config: &AllocationConfig) -> &[AllocationRecord] {
        self.allocations.clear();
        self.allocations
            .extend(allocate_all(&self.performance, &self.teachers, config));
        &self.allocations
    }
}
