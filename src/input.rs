//! Reads students from whitespace separated `gpa credits` lines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::InputError;
use crate::student::Student;

pub fn read_students(path: impl AsRef<Path>) -> Result<Vec<Student>, InputError> {
    let file = File::open(path)?;
    parse_students(BufReader::new(file))
}

/// Blank lines are skipped and anything after the credits column is ignored. At least one
/// student is required.
pub fn parse_students(reader: impl BufRead) -> Result<Vec<Student>, InputError> {
    let mut students = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_nr = idx + 1;

        let mut tokens = line.split_whitespace();
        let Some(gpa_token) = tokens.next() else {
            continue;
        };

        let gpa = gpa_token
            .parse::<f64>()
            .map_err(|_| InputError::InvalidGpa {
                line: line_nr,
                token: gpa_token.to_string(),
            })?;

        let credits_token = tokens.next().unwrap_or_default();
        let credits = credits_token
            .parse::<i64>()
            .map_err(|_| InputError::InvalidCredits {
                line: line_nr,
                token: credits_token.to_string(),
            })?;

        let student = Student::new(gpa, credits).map_err(|source| InputError::Student {
            line: line_nr,
            source,
        })?;
        students.push(student);
    }

    if students.is_empty() {
        return Err(InputError::NoStudents);
    }

    Ok(students)
}
