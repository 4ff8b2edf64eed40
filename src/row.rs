use crate::{CaError, Result};

/// One generation of a circular automaton.
///
/// Cells are packed 64 per word: cell `i` is bit `i % 64` of word `i / 64`.
/// Bits past `size` in the last word are always zero.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Row {
    words: Vec<u64>,
    size: usize,
}

impl Row {
    pub(crate) const CELLS_IN_WORD: usize = u64::BITS as usize;

    /// Row of `size` dead cells.
    pub fn blank(size: usize) -> Self {
        Self {
            words: vec![0; size.div_ceil(Self::CELLS_IN_WORD)],
            size,
        }
    }

    /// Row with a single alive cell at `size / 2`.
    pub fn centered(size: usize) -> Self {
        let mut row = Self::blank(size);
        if size != 0 {
            row.set(size / 2, true);
        }
        row
    }

    /// Row with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(size: usize, seed: Option<u64>) -> Self {
        use rand::{Rng, SeedableRng};
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let words = (0..size.div_ceil(Self::CELLS_IN_WORD))
            .map(|_| rng.gen::<u64>())
            .collect();
        Self::from_words(words, size)
    }

    pub fn from_bits(bits: &[bool]) -> Self {
        let mut row = Self::blank(bits.len());
        for (i, &bit) in bits.iter().enumerate() {
            row.set(i, bit);
        }
        row
    }

    /// Unpacks the low `size` bits of `index`; bit `i` becomes cell `i`.
    ///
    /// `size <= 64`
    pub fn from_index(index: u64, size: usize) -> Self {
        debug_assert!(size <= Self::CELLS_IN_WORD);
        Self::from_words(vec![index], size)
    }

    /// Builds a row from packed words, clearing bits past `size`.
    pub(crate) fn from_words(mut words: Vec<u64>, size: usize) -> Self {
        words.resize(size.div_ceil(Self::CELLS_IN_WORD), 0);
        if let Some(last) = words.last_mut() {
            *last &= Self::tail_mask(size);
        }
        Self { words, size }
    }

    /// Mask of the valid bits in the last word of a row of `size` cells.
    #[inline]
    pub(crate) fn tail_mask(size: usize) -> u64 {
        match size % Self::CELLS_IN_WORD {
            0 => u64::MAX,
            rem => (1 << rem) - 1,
        }
    }

    /// Packs the row into an integer, cell `i` into bit `i`.
    ///
    /// Returns `None` for rows wider than 64 cells.
    pub fn to_index(&self) -> Option<u64> {
        match self.words.as_slice() {
            [] => Some(0),
            [word] => Some(*word),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub(crate) fn words(&self) -> &[u64] {
        &self.words
    }

    /// Cell state at `i`, with `i` taken modulo the row size.
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        let i = i % self.size;
        self.words[i / Self::CELLS_IN_WORD] >> (i % Self::CELLS_IN_WORD) & 1 != 0
    }

    pub fn set(&mut self, i: usize, state: bool) {
        assert!(i < self.size, "cell {} is outside a row of {}", i, self.size);
        let (pos, mask) = (i / Self::CELLS_IN_WORD, 1 << (i % Self::CELLS_IN_WORD));
        if state {
            self.words[pos] |= mask;
        } else {
            self.words[pos] &= !mask;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.size).map(|i| self.get(i))
    }

    pub fn to_bits(&self) -> Vec<bool> {
        self.iter().collect()
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `SizeMismatch` unless the row has exactly `expected` cells.
    pub fn expect_size(&self, expected: usize) -> Result<()> {
        if self.size != expected {
            return Err(CaError::SizeMismatch {
                expected,
                actual: self.size,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for state in self.iter() {
            f.write_str(if state { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Row {
    type Err = CaError;

    /// Parses a row written as `0`/`1` characters, cell 0 first.
    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .trim()
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                c => Err(CaError::InvalidRow(format!(
                    "unexpected character {:?} in {:?}",
                    c, s
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_bits(&bits))
    }
}
