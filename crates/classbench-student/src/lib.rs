//! A student's grade record with average and pass/fail helpers.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Minimum average a student needs to pass.
pub const PASSING_AVERAGE: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    /// Not checked for uniqueness.
    pub student_id: u32,
    pub grades: Vec<i32>,
}

impl Display for StudentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - Grades: {:?}",
            self.name, self.student_id, self.grades
        )
    }
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, student_id: u32, grades: Vec<i32>) -> Self {
        Self {
            name: name.into(),
            student_id,
            grades,
        }
    }

    /// Arithmetic mean of the grades, `0.0` when there are none.
    pub fn calculate_average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let sum = self.grades.iter().copied().map(i64::from).sum::<i64>();
        sum as f64 / self.grades.len() as f64
    }

    pub fn is_passing(&self) -> bool {
        self.calculate_average() >= PASSING_AVERAGE
    }

    /// Same text as the `Display` impl, e.g. `John (1) - Grades: [80, 90, 70]`.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// One-line report used by the `student` binary.
    pub fn summary(&self) -> String {
        let avg = self.calculate_average();
        let pass = self.is_passing();
        format!("Student: {}, Avg: {avg:.2}, Pass: {pass}", self.name)
    }
}
