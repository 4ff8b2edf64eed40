use crate::{CaError, Result, Row, Transition};

/// Every generation from the initial row up to the last step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trajectory {
    rows: Vec<Row>,
}

impl Trajectory {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Row at step `t`.
    pub fn get(&self, t: usize) -> Option<&Row> {
        self.rows.get(t)
    }

    pub fn first(&self) -> &Row {
        &self.rows[0]
    }

    pub fn last(&self) -> &Row {
        &self.rows[self.rows.len() - 1]
    }

    /// Number of rows, i.e. `steps + 1`.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn steps(&self) -> usize {
        self.rows.len() - 1
    }

    /// Width of the rows.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }
}

impl IntoIterator for Trajectory {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Applies a transition step by step.
///
/// Cheaper than a [`crate::LiftingTable`] when the whole history is needed or the
/// step count is small, and has no limit on the row size.
#[derive(Clone, Copy, Debug)]
pub struct Simulator {
    transition: Transition,
    size: usize,
}

impl Simulator {
    /// Fails with [`CaError::EmptyRow`] if `size` is 0.
    pub fn new(transition: Transition, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(CaError::EmptyRow);
        }
        Ok(Self { transition, size })
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Records `steps + 1` rows starting with `initial`.
    pub fn run(&self, initial: &Row, steps: usize) -> Result<Trajectory> {
        initial.expect_size(self.size)?;
        let mut rows = Vec::with_capacity(steps + 1);
        rows.push(initial.clone());
        for t in 0..steps {
            let next = self.transition.evolve(&rows[t]);
            rows.push(next);
        }
        Ok(Trajectory { rows })
    }

    /// Row after `steps` transitions, without keeping the history.
    pub fn advance(&self, initial: &Row, steps: u64) -> Result<Row> {
        initial.expect_size(self.size)?;
        let mut row = initial.clone();
        for _ in 0..steps {
            row = self.transition.evolve(&row);
        }
        Ok(row)
    }
}
