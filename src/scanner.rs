use std::fmt;
use std::time::Duration;

use log::{debug, info};

use crate::algorithm::Algorithm;
use crate::error::Error;
use crate::measure::{self, measure_duration};
use crate::order::SortOrder;
use crate::sorter::Sorter;
use crate::student::Student;

/// Runs one algorithm through both orders and composes the median student: GPA sampled after
/// sorting by GPA, credits sampled after re-sorting the same buffer by credits.
#[derive(Clone, Debug)]
pub struct StudentScanner {
    students: Vec<Student>,
    algorithm: Algorithm,
    scan_time: Duration,
    median_student: Option<Student>,
}

impl StudentScanner {
    pub fn new(students: &[Student], algorithm: Algorithm) -> Result<Self, Error> {
        if students.is_empty() {
            return Err(Error::EmptyInput);
        }

        Ok(Self {
            students: students.to_vec(),
            algorithm,
            scan_time: Duration::ZERO,
            median_student: None,
        })
    }

    pub fn scan(&mut self) -> Result<(), Error> {
        let mut sorter = Sorter::new(&self.students, self.algorithm);

        sorter.set_order(SortOrder::Gpa);
        let (sorted, gpa_pass) = measure_duration(|| sorter.sort());
        sorted?;
        let median_gpa = sorter.median().map_or(0.0, Student::gpa);
        debug!(
            "{}: {} pass median gpa {median_gpa:.2}",
            self.algorithm,
            SortOrder::Gpa
        );

        // The second pass starts from the GPA-sorted buffer, not from the original input.
        let (sorted, credits_pass) = measure_duration(|| {
            sorter.set_order(SortOrder::Credits);
            sorter.sort()
        });
        sorted?;
        let median_credits = sorter.median().map_or(0, Student::credits_taken);
        debug!(
            "{}: {} pass median credits {median_credits}",
            self.algorithm,
            SortOrder::Credits
        );

        self.median_student = Some(Student::new(median_gpa, i64::from(median_credits))?);
        self.scan_time = gpa_pass + credits_pass;

        info!(
            "{}: scanned {} students in {} ns",
            self.algorithm,
            self.students.len(),
            measure::as_nanos_u64(self.scan_time)
        );

        Ok(())
    }

    /// `"<algorithm> <size> <time ns>"` with fixed width left aligned columns.
    pub fn stats(&self) -> String {
        format!(
            "{:<15} {:<5} {:<10}",
            self.algorithm,
            self.students.len(),
            self.scan_time_ns()
        )
    }

    pub fn median_student(&self) -> Option<&Student> {
        self.median_student.as_ref()
    }

    pub fn scan_time(&self) -> Duration {
        self.scan_time
    }

    pub fn scan_time_ns(&self) -> u64 {
        measure::as_nanos_u64(self.scan_time)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl fmt::Display for StudentScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.median_student {
            Some(student) => write!(f, "Median Student: {student}"),
            None => f.write_str("Median Student: <not computed>"),
        }
    }
}
