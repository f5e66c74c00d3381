use std::collections::HashMap;

use rummy_core::meld::SlotKind;
use rummy_core::model::{Card, CardId, Face, FaceParseError};
use serde::Deserialize;

/// One operation replayed against a slot.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Declare { kind: SlotKind },
    Add { card: String },
    Remove { card: String },
    CanFit { card: String },
    Value,
    Reset,
}

impl Step {
    pub fn op(&self) -> &'static str {
        match self {
            Step::Declare { .. } => "declare",
            Step::Add { .. } => "add",
            Step::Remove { .. } => "remove",
            Step::CanFit { .. } => "can_fit",
            Step::Value => "value",
            Step::Reset => "reset",
        }
    }

    pub fn card(&self) -> Option<&str> {
        match self {
            Step::Add { card } | Step::Remove { card } | Step::CanFit { card } => Some(card.as_str()),
            Step::Declare { .. } | Step::Value | Step::Reset => None,
        }
    }
}

/// A card as written in a script: face notation, optionally `#tag` to tell
/// apart two physical cards with the same face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLabel {
    pub text: String,
    pub face: Face,
}

impl CardLabel {
    pub fn parse(text: &str) -> Result<Self, FaceParseError> {
        let text = text.trim();
        let face_text = text.split_once('#').map_or(text, |(face, _)| face);
        Ok(Self {
            text: text.to_string(),
            face: face_text.parse()?,
        })
    }
}

/// Mints one card per distinct label so repeated labels refer to the same
/// physical card.
#[derive(Debug, Default)]
pub struct CardBook {
    by_label: HashMap<String, Card>,
    labels: HashMap<CardId, String>,
    next_id: u32,
}

impl CardBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card(&mut self, label: &str) -> Result<Card, FaceParseError> {
        let parsed = CardLabel::parse(label)?;
        if let Some(card) = self.by_label.get(&parsed.text) {
            return Ok(*card);
        }

        self.next_id += 1;
        let card = Card::new(CardId(self.next_id), parsed.face);
        self.labels.insert(card.id, parsed.text.clone());
        self.by_label.insert(parsed.text, card);
        Ok(card)
    }

    pub fn label(&self, card: Card) -> String {
        self.labels
            .get(&card.id)
            .cloned()
            .unwrap_or_else(|| card.face.to_string())
    }

    pub fn labels(&self, cards: &[Card]) -> Vec<String> {
        cards.iter().map(|card| self.label(*card)).collect()
    }
}
