pub mod layout;
pub mod snapshot;

use crate::diagnostics::{MeldLog, Reporter, TracingLog};
use crate::error::MeldError;
use crate::meld::{FitOutcome, Run, Set, SlotKind, can_fit, insertion_index, slot_value};
use crate::model::Card;

pub use layout::{Placement, SlotLayout};
pub use snapshot::SlotSnapshot;

/// One meld area on the table: the cards, the declared meld type and the
/// parameters a renderer needs to lay them out.
///
/// All mutation goes through `&mut self`; readers see a complete sequence
/// between calls. `revision` increases on every change so a renderer can
/// tell when to re-read `cards`.
#[derive(Debug)]
pub struct MeldSlot<L: MeldLog = TracingLog> {
    name: String,
    kind: SlotKind,
    cards: Vec<Card>,
    layout: SlotLayout,
    revision: u64,
    log: L,
}

impl MeldSlot<TracingLog> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_log(name, TracingLog)
    }
}

impl<L: MeldLog> MeldSlot<L> {
    pub fn with_log(name: impl Into<String>, log: L) -> Self {
        Self {
            name: name.into(),
            kind: SlotKind::None,
            cards: Vec::new(),
            layout: SlotLayout::default(),
            revision: 0,
            log,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    /// Declares which meld the slot is about to hold.
    pub fn declare(&mut self, kind: SlotKind) {
        if self.kind != kind {
            self.kind = kind;
            self.bump();
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.iter().any(|c| c.same_card(card))
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn layout(&self) -> SlotLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: SlotLayout) {
        self.layout = layout;
    }

    /// Where each card sits relative to the slot pivot, in `cards` order.
    pub fn placements(&self) -> Vec<Placement> {
        self.layout.placements(self.cards.len())
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Adds `card` without checking [`can_fit`](Self::can_fit) first.
    ///
    /// Runs keep their rank order. Other slots append; a card that is already
    /// present is reported and appended again.
    pub fn add_card(&mut self, card: Card) {
        let index = match self.kind {
            SlotKind::Run => insertion_index(&self.cards, card, self.reporter()),
            SlotKind::Set | SlotKind::None => {
                if self.contains(card) {
                    self.reporter().warn(MeldError::DuplicateCard { card });
                }
                self.cards.len()
            }
        };
        self.cards.insert(index, card);
        self.bump();
    }

    /// Removes the first card with the same identity. Returns whether one was found.
    pub fn remove_card(&mut self, card: Card) -> bool {
        let Some(index) = self.cards.iter().position(|c| c.same_card(card)) else {
            return false;
        };
        self.cards.remove(index);
        self.bump();
        true
    }

    pub fn can_fit(&self, card: Card) -> FitOutcome {
        can_fit(self.kind, &self.cards, card, self.reporter())
    }

    pub fn value(&self) -> u32 {
        slot_value(self.kind, &self.cards)
    }

    pub fn run(&self) -> Run {
        Run::new(&self.cards)
    }

    pub fn set(&self) -> Set {
        Set::new(&self.cards)
    }

    /// Empties the slot and forgets its meld type. The removed cards are
    /// handed back so their display resources can be released.
    pub fn reset(&mut self) -> Vec<Card> {
        let released = std::mem::take(&mut self.cards);
        self.kind = SlotKind::None;
        self.bump();
        released
    }

    fn reporter(&self) -> Reporter<'_> {
        Reporter::new(&self.name, &self.log)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
