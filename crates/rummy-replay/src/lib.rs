//! Script-driven replay harness for meld slots.
//!
//! A YAML configuration lists slots and the operations to apply to each;
//! the runner replays them in order and writes one JSON line per step.

pub mod config;
pub mod logging;
pub mod runner;
pub mod script;
