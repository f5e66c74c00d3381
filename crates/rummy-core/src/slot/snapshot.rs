use super::{MeldSlot, SlotLayout};
use crate::diagnostics::{MeldLog, TracingLog};
use crate::meld::SlotKind;
use crate::model::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotSnapshot {
    pub name: String,
    pub kind: SlotKind,
    pub cards: Vec<Card>,
    pub value: u32,
    pub revision: u64,
    #[serde(default)]
    pub layout: SlotLayout,
}

impl SlotSnapshot {
    pub fn capture<L: MeldLog>(slot: &MeldSlot<L>) -> Self {
        SlotSnapshot {
            name: slot.name().to_string(),
            kind: slot.kind(),
            cards: slot.cards().to_vec(),
            value: slot.value(),
            revision: slot.revision(),
            layout: slot.layout(),
        }
    }

    /// Rebuilds the slot exactly as captured; card order is taken verbatim.
    pub fn restore(self) -> MeldSlot<TracingLog> {
        self.restore_with_log(TracingLog)
    }

    pub fn restore_with_log<L: MeldLog>(self, log: L) -> MeldSlot<L> {
        let mut slot = MeldSlot::with_log(self.name, log);
        slot.kind = self.kind;
        slot.cards = self.cards;
        slot.layout = self.layout;
        slot.revision = self.revision;
        slot
    }

    pub fn to_json<L: MeldLog>(slot: &MeldSlot<L>) -> serde_json::Result<String> {
        let snapshot = Self::capture(slot);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
