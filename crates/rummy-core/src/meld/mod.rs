//! Rules for arranging, validating and scoring melds.
//!
//! - `classify`: whether a sequence currently forms a valid run or set.
//! - `joker`: effective ranks and joker rank inference.
//! - `ordering`: where a card joins a run.
//! - `fit`: whether a card may join a slot, possibly displacing a joker.
//! - `value`: what a slot's contents are worth.

pub mod classify;
pub mod fit;
pub mod joker;
pub mod ordering;
pub mod run;
pub mod set;
pub mod value;

use serde::{Deserialize, Serialize};

pub use classify::{is_valid_run, is_valid_set};
pub use fit::{FitOutcome, can_fit};
pub use joker::{UNRESOLVED_RANK, effective_rank, resolve_joker_rank};
pub use ordering::insertion_index;
pub use run::Run;
pub use set::Set;
pub use value::{LOOSE_JOKER_VALUE, slot_value};

/// Meld a slot is declared to hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    #[default]
    None,
    Run,
    Set,
}

impl SlotKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            SlotKind::None => "none",
            SlotKind::Run => "run",
            SlotKind::Set => "set",
        }
    }
}

impl core::fmt::Display for SlotKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
