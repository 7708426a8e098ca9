use log::trace;

use crate::algorithm::Algorithm;
use crate::error::Error;
use crate::order::SortOrder;
use crate::student::Student;

/// Owns a private working copy of the students and sorts it in place with the selected
/// strategy, under whatever order is currently installed.
#[derive(Clone, Debug)]
pub struct Sorter {
    students: Vec<Student>,
    order: Option<SortOrder>,
    algorithm: Algorithm,
}

impl Sorter {
    /// The caller's slice is copied, never aliased. An empty slice is fine.
    pub fn new(students: &[Student], algorithm: Algorithm) -> Self {
        Self {
            students: students.to_vec(),
            order: None,
            algorithm,
        }
    }

    pub fn set_order(&mut self, order: SortOrder) {
        trace!("{}: installing order {order}", self.algorithm);
        self.order = Some(order);
    }

    /// Installs order `0` or `1`.
    pub fn set_order_index(&mut self, order: i64) -> Result<(), Error> {
        self.set_order(SortOrder::from_index(order)?);
        Ok(())
    }

    pub fn sort(&mut self) -> Result<(), Error> {
        let order = self.order.ok_or(Error::OrderNotSet)?;
        self.algorithm
            .sort_by(&mut self.students, order.comparator());

        Ok(())
    }

    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.students.swap(i, j);
    }

    /// Element at index `len / 2`, the upper median for even lengths. Whether the sequence is
    /// actually sorted is up to the caller.
    pub fn median(&self) -> Option<&Student> {
        self.students.get(self.students.len() / 2)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn order(&self) -> Option<SortOrder> {
        self.order
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
