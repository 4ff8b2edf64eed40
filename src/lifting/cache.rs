use super::LiftingTable;
use crate::{Result, Transition};
use ahash::AHashMap as HashMap;
use log::debug;
use std::sync::Arc;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Key {
    transition: Transition,
    size: usize,
    max_steps: u128,
}

/// Builds each lifting table once and hands out shared references to it.
#[derive(Default)]
pub struct TableCache {
    tables: HashMap<Key, Arc<LiftingTable>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(
        &mut self,
        transition: Transition,
        size: usize,
        max_steps: u128,
    ) -> Result<Arc<LiftingTable>> {
        let key = Key {
            transition,
            size,
            max_steps,
        };
        if let Some(table) = self.tables.get(&key) {
            debug!("Reusing lifting table for {} ({} cells)", transition, size);
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(LiftingTable::build(transition, size, max_steps)?);
        self.tables.insert(key, Arc::clone(&table));
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn bytes_total(&self) -> usize {
        self.tables.values().map(|t| t.bytes_total()).sum()
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }
}
