use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::models::{ClassRoster, GradeDistribution, PerformanceRecord, Teacher};
use crate::teachers::TeacherIndex;

#[derive(Deserialize)]
struct PerformanceRow {
    #[serde(rename = "Class")]
    class: String,
    #[serde(rename = "Subject")]
    subject: String,
    #[serde(rename = "A")]
    a: i64,
    #[serde(rename = "B")]
    b: i64,
    #[serde(rename = "C")]
    c: i64,
    #[serde(rename = "D")]
    d: i64,
}

#[derive(Deserialize)]
struct TeacherRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Expertise")]
    expertise: String,
    #[serde(rename = "Success")]
    success: f64,
}

#[derive(Deserialize)]
struct ClassRow {
    #[serde(rename = "Grade")]
    grade: String,
    #[serde(rename = "Section")]
    section: String,
    #[serde(rename = "Subjects")]
    subjects: String,
}

/// Reads performance rows (`Class, Subject, A, B, C, D`); scores are
/// computed as records are built. A negative count fails the whole import.
pub fn read_performance_csv(path: &Path) -> anyhow::Result<Vec<PerformanceRecord>> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open performance CSV {}", path.display()))?;
    parse_performance(reader)
}

fn parse_performance<R: Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Vec<PerformanceRecord>> {
    let mut records = Vec::new();
    for (line, result) in reader.deserialize::<PerformanceRow>().enumerate() {
        let row = result.with_context(|| format!("malformed performance row {}", line + 1))?;
        let distribution = GradeDistribution::from_counts(row.a, row.b, row.c, row.d)
            .with_context(|| {
                format!("invalid grade counts for {} / {}", row.class, row.subject)
            })?;
        records.push(PerformanceRecord::new(row.class, row.subject, distribution));
    }
    Ok(records)
}

/// Reads teacher rows (`Name, Expertise, Success`).
pub fn read_teachers_csv(path: &Path) -> anyhow::Result<TeacherIndex> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open teachers CSV {}", path.display()))?;
    parse_teachers(reader)
}

fn parse_teachers<R: Read>(mut reader: csv::Reader<R>) -> anyhow::Result<TeacherIndex> {
    let mut index = TeacherIndex::new();
    for (line, result) in reader.deserialize::<TeacherRow>().enumerate() {
        let row = result.with_context(|| format!("malformed teacher row {}", line + 1))?;
        let teacher = Teacher::new(row.name.clone(), row.expertise, row.success)
            .with_context(|| format!("invalid teacher record for {}", row.name))?;
        index.add(teacher);
    }
    Ok(index)
}

/// Reads class configuration rows (`Grade, Section, Subjects`); the class
/// key is "{grade}-{section}" and subjects are comma-separated.
pub fn read_classes_csv(path: &Path) -> anyhow::Result<ClassRoster> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open classes CSV {}", path.display()))?;
    parse_classes(reader)
}

fn parse_classes<R: Read>(mut reader: csv::Reader<R>) -> anyhow::Result<ClassRoster> {
    let mut roster = ClassRoster::new();
    for (line, result) in reader.deserialize::<ClassRow>().enumerate() {
        let row = result.with_context(|| format!("malformed class row {}", line + 1))?;
        let class_key = format!("{}-{}", row.grade.trim(), row.section.trim());
        let subjects: Vec<String> = row
            .subjects
            .split(',')
            .map(str::trim)
            .filter(|subject| !subject.is_empty())
            .map(str::to_string)
            .collect();
        roster.add(class_key, subjects);
    }
    Ok(roster)
}
