use crate::{CaError, Result};

/// Number of elementary rules.
pub const RULE_COUNT: usize = 256;

/// Neighborhoods in canonical order: position `i` is `(i >> 2 & 1, i >> 1 & 1, i & 1)`,
/// i.e. `(0,0,0), (0,0,1), (0,1,0), ..., (1,1,1)`.
pub const NEIGHBORHOODS: [(bool, bool, bool); 8] = [
    (false, false, false),
    (false, false, true),
    (false, true, false),
    (false, true, true),
    (true, false, false),
    (true, false, true),
    (true, true, false),
    (true, true, true),
];

/// Wolfram elementary rule: a lookup table from `(left, center, right)` to the next state.
///
/// Neighborhood `i` of [`NEIGHBORHOODS`] takes the character `7 - i` of the index
/// written as eight binary digits (most significant first), which is bit `i`
/// of the index. For rule 110 = `01101110`:
///
/// ```text
/// 111 110 101 100 011 010 001 000
///  0   1   1   0   1   1   1   0
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    index: u8,
    table: [bool; 8],
}

impl Rule {
    /// Builds the rule with the given Wolfram index.
    pub fn new(index: u32) -> Result<Self> {
        let index = u8::try_from(index).map_err(|_| CaError::InvalidRuleIndex { index })?;
        Self::from_index(index)
    }

    /// Iterates over all 256 rules in index order.
    pub fn all() -> impl Iterator<Item = Rule> {
        (0..=u8::MAX).filter_map(|index| Self::from_index(index).ok())
    }

    /// Every neighborhood `(l, c, r)` takes bit `i` of the index, where `i` is
    /// its position in [`NEIGHBORHOODS`].
    fn from_index(index: u8) -> Result<Self> {
        let mut slots = [None; 8];
        for (i, &(l, c, r)) in NEIGHBORHOODS.iter().enumerate() {
            slots[Self::position(l, c, r)] = Some(index >> i & 1 != 0);
        }

        let mut table = [false; 8];
        for (neighborhood, slot) in slots.into_iter().enumerate() {
            table[neighborhood] = slot.ok_or(CaError::IncompleteRuleTable {
                rule: index,
                neighborhood: neighborhood as u8,
            })?;
        }
        Ok(Self { index, table })
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    /// Output of the rule for every neighborhood, in canonical order.
    pub fn table(&self) -> &[bool; 8] {
        &self.table
    }

    #[inline]
    fn position(left: bool, center: bool, right: bool) -> usize {
        (left as usize) << 2 | (center as usize) << 1 | right as usize
    }

    /// Next state of a cell given its neighborhood.
    #[inline]
    pub fn apply(&self, left: bool, center: bool, right: bool) -> bool {
        self.table[Self::position(left, center, right)]
    }

    /// Applies the rule to 64 cells at once: bit `k` of the result is
    /// `apply(left[k], center[k], right[k])`.
    #[inline]
    pub fn apply_words(&self, left: u64, center: u64, right: u64) -> u64 {
        let pick = |word: u64, set: bool| if set { word } else { !word };
        let mut dst = 0;
        for (i, &(l, c, r)) in NEIGHBORHOODS.iter().enumerate() {
            if self.table[i] {
                dst |= pick(left, l) & pick(center, c) & pick(right, r);
            }
        }
        dst
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rule {}", self.index)
    }
}

impl TryFrom<u32> for Rule {
    type Error = CaError;

    fn try_from(index: u32) -> Result<Self> {
        Self::new(index)
    }
}
