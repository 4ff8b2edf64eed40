use super::{level_count, MAX_LIFTING_SIZE};
use crate::{config::get_config, CaError, NiceInt, Result, Row, Transition};
use log::{debug, info};

/// Binary lifting over the whole state space of a row.
///
/// Level `p` maps every row of `size` cells (packed as in [`Row::to_index`])
/// to the row reached after `2^p` transitions:
///
/// `level[0][r] = evolve(r)`, `level[p][r] = level[p-1][level[p-1][r]]`.
///
/// A query for `n` steps applies the levels of the set bits of `n`, so it costs
/// `O(log n)` lookups. The table is immutable after construction and can be shared
/// between threads.
///
/// # Limitations
///
/// Memory is `4 * 2^size * levels` bytes, so `size` is limited by [`MAX_LIFTING_SIZE`].
#[derive(PartialEq)]
pub struct LiftingTable {
    transition: Transition,
    size: usize,
    max_steps: u128,
    levels: Vec<Box<[u32]>>,
}

impl LiftingTable {
    /// Builds the table answering every step count below `max_steps`.
    pub fn build(transition: Transition, size: usize, max_steps: u128) -> Result<Self> {
        if size == 0 || size > MAX_LIFTING_SIZE {
            return Err(CaError::UnsupportedSize {
                size,
                max: MAX_LIFTING_SIZE,
            });
        }

        let states = 1usize << size;
        let levels_cnt = level_count(max_steps);
        info!(
            "Building lifting table: {}, {} cells, {} states, {} levels",
            transition,
            size,
            NiceInt::from(states),
            levels_cnt
        );
        let timer = std::time::Instant::now();

        let mut levels = Vec::with_capacity(levels_cnt);
        let mut first = vec![0u32; states];
        fill_level(&mut first, |r| transition.evolve_packed(r as u64, size) as u32);
        levels.push(first.into_boxed_slice());

        for p in 1..levels_cnt {
            let next = {
                let prev = &levels[p - 1];
                let mut next = vec![0u32; states];
                fill_level(&mut next, |r| prev[prev[r] as usize]);
                next
            };
            levels.push(next.into_boxed_slice());
            debug!("Level {} of {} ready after {:?}", p, levels_cnt - 1, timer.elapsed());
        }

        info!("Lifting table built in {:?}", timer.elapsed());
        Ok(Self {
            transition,
            size,
            max_steps,
            levels,
        })
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Queries must ask for fewer steps than this.
    pub fn max_steps(&self) -> u128 {
        self.max_steps
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Images of every state after `2^p` transitions.
    pub fn level(&self, p: usize) -> Option<&[u32]> {
        self.levels.get(p).map(|level| &level[..])
    }

    /// Row reached from `initial` after `steps` transitions.
    pub fn query(&self, initial: &Row, steps: u64) -> Result<Row> {
        initial.expect_size(self.size)?;
        let state = initial.words()[0] as u32;
        let state = self.query_state(state, steps)?;
        Ok(Row::from_index(state as u64, self.size))
    }

    /// Same as [`LiftingTable::query`] on a packed row.
    pub fn query_state(&self, state: u32, steps: u64) -> Result<u32> {
        if steps as u128 >= self.max_steps {
            return Err(CaError::StepOutOfRange {
                steps,
                max_steps: self.max_steps,
            });
        }
        if state as usize >= 1 << self.size {
            return Err(CaError::InvalidRow(format!(
                "state {:#x} has cells past {}",
                state, self.size
            )));
        }

        let (mut state, mut remaining) = (state, steps);
        for (p, level) in self.levels.iter().enumerate().rev() {
            if remaining == 0 {
                break;
            }
            if p < u64::BITS as usize && 1 << p <= remaining {
                state = level[state as usize];
                remaining -= 1 << p;
            }
        }
        debug_assert_eq!(remaining, 0);
        Ok(state)
    }

    /// Heap memory used by the levels.
    pub fn bytes_total(&self) -> usize {
        self.levels
            .iter()
            .map(|level| level.len() * std::mem::size_of::<u32>())
            .sum()
    }

    /// Returns multiline string reporting table stats.
    pub fn statistics(&self) -> String {
        let mut s = "Engine: binary lifting\n".to_string();
        s += &format!("Transition: {}\n", self.transition);
        s += &format!("Row size: {}\n", self.size);
        s += &format!("States: {}\n", NiceInt::from(1usize << self.size));
        s += &format!("Levels: {}\n", self.levels.len());
        s += &format!("Max steps: {}\n", NiceInt::from(self.max_steps));
        s += &format!("Memory: {} bytes\n", NiceInt::from(self.bytes_total()));
        s
    }
}

impl std::fmt::Debug for LiftingTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiftingTable")
            .field("transition", &self.transition)
            .field("size", &self.size)
            .field("max_steps", &self.max_steps)
            .field("levels", &self.levels.len())
            .finish()
    }
}

/// Fills `dst[r] = f(r)`, splitting large levels between threads.
///
/// Entries of one level are independent, so no synchronization is needed
/// until the whole level is written.
fn fill_level<F>(dst: &mut [u32], f: F)
where
    F: Fn(usize) -> u32 + Sync,
{
    let config = get_config();
    let min_chunk = 1usize << config.build_chunk_log2;
    if config.build_threads <= 1 || dst.len() <= min_chunk {
        for (r, x) in dst.iter_mut().enumerate() {
            *x = f(r);
        }
        return;
    }

    let chunk = dst.len().div_ceil(config.build_threads).max(min_chunk);
    std::thread::scope(|s| {
        for (i, part) in dst.chunks_mut(chunk).enumerate() {
            let f = &f;
            s.spawn(move || {
                let offset = i * chunk;
                for (r, x) in part.iter_mut().enumerate() {
                    *x = f(offset + r);
                }
            });
        }
    });
}
