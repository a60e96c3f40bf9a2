use crate::error::AllocatorError;
use crate::models::Teacher;

/// In-memory registry of teachers, queryable by subject expertise.
/// Duplicate names are permitted; removal is positional.
#[derive(Debug, Clone, Default)]
pub struct TeacherIndex {
    teachers: Vec<Teacher>,
}

impl TeacherIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, teacher: Teacher) {
        self.teachers.push(teacher);
    }

    pub fn remove(&mut self, index: usize) -> Result<Teacher, AllocatorError> {
        if index >= self.teachers.len() {
            return Err(AllocatorError::IndexOutOfRange {
                index,
                len: self.teachers.len(),
            });
        }
        Ok(self.teachers.remove(index))
    }

    /// All teachers whose expertise case-insensitively equals `subject`,
    /// in insertion order. Case folding is Unicode-aware so non-ASCII
    /// subject names still match.
    pub fn find_by_subject(&self, subject: &str) -> Vec<&Teacher> {
        let subject = subject.to_lowercase();
        self.teachers
            .iter()
            .filter(|teacher| teacher.expertise.to_lowercase() == subject)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Teacher> {
        self.teachers.iter()
    }

    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }
}

impl FromIterator<Teacher> for TeacherIndex {
    fn from_iter<I: IntoIterator<Item = Teacher>>(iter: I) -> Self {
        Self {
            teachers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(name: &str, expertise: &str, success_rate: f64) -> Teacher {
        Teacher::new(name, expertise, success_rate).unwrap()
    }

    #[test]
    fn find_by_subject_ignores_case_and_keeps_order() {
        let index: TeacherIndex = [
            teacher("Nadia Rahman", "Math", 82.0),
            teacher("Omar Sy", "Science", 74.0),
            teacher("Priya Nair", "math", 68.0),
        ]
        .into_iter()
        .collect();

        let matches = index.find_by_subject("MATH");
        let names: Vec<&str> = matches.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Nadia Rahman", "Priya Nair"]);
    }

    #[test]
    fn find_by_subject_folds_non_ascii_case() {
        let index: TeacherIndex = [teacher("Deniz Aksoy", "Türkçe", 77.0)].into_iter().collect();
        let matches = index.find_by_subject("TÜRKÇE");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Deniz Aksoy");
    }

    #[test]
    fn find_by_subject_returns_empty_for_unknown_subject() {
        let index: TeacherIndex = [teacher("Omar Sy", "Science", 74.0)].into_iter().collect();
        assert!(index.find_by_subject("History").is_empty());
    }

    #[test]
    fn duplicate_names_are_permitted() {
        let mut index = TeacherIndex::new();
        index.add(teacher("Omar Sy", "Science", 74.0));
        index.add(teacher("Omar Sy", "Science", 91.0));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn remove_is_positional() {
        let mut index: TeacherIndex = [
            teacher("Nadia Rahman", "Math", 82.0),
            teacher("Omar Sy", "Science", 74.0),
        ]
        .into_iter()
        .collect();

        let removed = index.remove(0).unwrap();
        assert_eq!(removed.name, "Nadia Rahman");
        assert_eq!(index.len(), 1);
        assert_eq!(index.iter().next().unwrap().name, "Omar Sy");
    }

    #[test]
    fn remove_out_of_range_fails_and_leaves_index_unchanged() {
        let mut index: TeacherIndex = [teacher("Omar Sy", "Science", 74.0)].into_iter().collect();
        let err = index.remove(3).unwrap_err();
        assert_eq!(err, AllocatorError::IndexOutOfRange { index: 3, len: 1 });
        assert_eq!(index.len(), 1);
    }
}
