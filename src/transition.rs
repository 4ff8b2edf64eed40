use crate::{Result, Row, Rule};

/// Whole-row transition function.
///
/// `Composed(first, second)` applies `first` to the whole row, then `second`
/// to the resulting row. Neighbors of the second stage are read from the
/// intermediate row, so this is not the same as composing the two rules per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    Single(Rule),
    Composed(Rule, Rule),
}

impl Transition {
    pub fn new(rule: Rule, rule2: Option<Rule>) -> Self {
        match rule2 {
            Some(rule2) => Self::Composed(rule, rule2),
            None => Self::Single(rule),
        }
    }

    /// Validates rule indices and builds the transition.
    pub fn from_indices(rule: u32, rule2: Option<u32>) -> Result<Self> {
        let rule2 = rule2.map(Rule::new).transpose()?;
        Ok(Self::new(Rule::new(rule)?, rule2))
    }

    /// The rule applied first, and the second one if any.
    pub fn rules(&self) -> (Rule, Option<Rule>) {
        match *self {
            Self::Single(rule) => (rule, None),
            Self::Composed(rule, rule2) => (rule, Some(rule2)),
        }
    }

    /// Computes the next generation.
    pub fn evolve(&self, row: &Row) -> Row {
        match self {
            Self::Single(rule) => step_row(rule, row),
            Self::Composed(first, second) => step_row(second, &step_row(first, row)),
        }
    }

    /// Same as [`Transition::evolve`] on a row packed into an integer
    /// (cell `i` is bit `i`).
    ///
    /// `1 <= size <= 64`
    #[inline]
    pub fn evolve_packed(&self, state: u64, size: usize) -> u64 {
        match self {
            Self::Single(rule) => step_packed(rule, state, size),
            Self::Composed(first, second) => {
                step_packed(second, step_packed(first, state, size), size)
            }
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(rule) => write!(f, "{}", rule),
            Self::Composed(rule, rule2) => write!(f, "{} + {}", rule, rule2),
        }
    }
}

/// Next generation of `row` under `rule`, followed by `rule2` when present.
pub fn evolve(row: &Row, rule: Rule, rule2: Option<Rule>) -> Row {
    Transition::new(rule, rule2).evolve(row)
}

#[inline]
fn step_packed(rule: &Rule, state: u64, size: usize) -> u64 {
    debug_assert!((1..=Row::CELLS_IN_WORD).contains(&size));
    let top = size - 1;
    let left = state << 1 | state >> top & 1;
    let right = state >> 1 | (state & 1) << top;
    rule.apply_words(left, state, right) & Row::tail_mask(size)
}

fn step_row(rule: &Rule, row: &Row) -> Row {
    let size = row.len();
    if size == 0 {
        return row.clone();
    }
    let src = row.words();
    let shift = Row::CELLS_IN_WORD;
    let mut dst = Vec::with_capacity(src.len());
    for (k, &center) in src.iter().enumerate() {
        let first = k * shift;
        let len = (size - first).min(shift);
        let prev = row.get(first + size - 1) as u64;
        let next = row.get(first + len) as u64;
        let left = center << 1 | prev;
        let right = center >> 1 | next << (len - 1);
        dst.push(rule.apply_words(left, center, right));
    }
    Row::from_words(dst, size)
}
