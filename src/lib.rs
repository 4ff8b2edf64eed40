#![warn(clippy::all, clippy::cargo)]

pub mod config;
mod class;
mod error;
pub mod label;
mod lifting;
pub mod render;
mod row;
mod rule;
mod simulator;
mod transition;
mod utils;

pub use class::WolframClass;
pub use error::{CaError, Result};
pub use lifting::{level_count, LiftingTable, TableCache, DEFAULT_MAX_STEPS, MAX_LIFTING_SIZE};
pub use row::Row;
pub use rule::{Rule, NEIGHBORHOODS, RULE_COUNT};
pub use simulator::{Simulator, Trajectory};
pub use transition::{evolve, Transition};
pub use utils::{NiceInt, Seed};
