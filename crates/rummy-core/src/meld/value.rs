use crate::meld::SlotKind;
use crate::meld::classify::{is_valid_run, is_valid_set};
use crate::meld::run::Run;
use crate::meld::set::Set;
use crate::model::Card;

/// What a loose joker is worth when the slot holds no declared meld.
pub const LOOSE_JOKER_VALUE: u32 = 20;

/// Value of a slot's current contents.
///
/// Runs and sets only score once the classifier accepts them; an unfinished
/// or mid-swap meld is worth 0. Untyped slots add up face values.
pub fn slot_value(kind: SlotKind, cards: &[Card]) -> u32 {
    match kind {
        SlotKind::Run if is_valid_run(cards) => Run::new(cards).value(),
        SlotKind::Set if is_valid_set(cards) => Set::new(cards).value(),
        SlotKind::Run | SlotKind::Set => 0,
        SlotKind::None => cards
            .iter()
            .map(|card| {
                if card.is_joker() {
                    LOOSE_JOKER_VALUE
                } else {
                    card.value()
                }
            })
            .sum(),
    }
}
