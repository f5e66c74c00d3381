use crate::diagnostics::Reporter;
use crate::meld::joker::{represented_rank, stands_for};
use crate::meld::run::Run;
use crate::meld::set::Set;
use crate::meld::SlotKind;
use crate::model::{Card, Color, Rank};
use serde::Serialize;

/// Answer to "may this card join the slot?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FitOutcome {
    Rejected,
    /// Accepted; when `replaces` is set the new card takes that joker's place.
    Accepted { replaces: Option<Card> },
}

impl FitOutcome {
    const fn accept() -> Self {
        FitOutcome::Accepted { replaces: None }
    }

    const fn accept_if(fits: bool) -> Self {
        if fits {
            FitOutcome::accept()
        } else {
            FitOutcome::Rejected
        }
    }

    pub const fn fits(self) -> bool {
        matches!(self, FitOutcome::Accepted { .. })
    }

    pub const fn replaced_joker(self) -> Option<Card> {
        match self {
            FitOutcome::Accepted { replaces } => replaces,
            FitOutcome::Rejected => None,
        }
    }
}

/// Decides whether `card` may be added to a slot of `kind` holding `cards`.
/// Never mutates; unresolvable jokers are reported and treated as no match.
pub fn can_fit(kind: SlotKind, cards: &[Card], card: Card, reporter: Reporter<'_>) -> FitOutcome {
    match kind {
        SlotKind::None => FitOutcome::Rejected,
        SlotKind::Set => fit_set(cards, card),
        SlotKind::Run => fit_run(cards, card, reporter),
    }
}

fn fit_set(cards: &[Card], card: Card) -> FitOutcome {
    let set = Set::new(cards);

    let Some(rank) = card.rank() else {
        if set.joker().is_some() || set.has_two_of(card.color()) {
            return FitOutcome::Rejected;
        }
        return FitOutcome::accept();
    };

    if set.rank() != Some(rank) {
        return FitOutcome::Rejected;
    }

    let Some(joker) = set.joker() else {
        return FitOutcome::accept_if(cards.iter().all(|c| c.suit() != card.suit()));
    };

    // The joker already fills one slot of its color.
    if set.has_two_black_cards() && joker.is_red() && card.is_black() {
        return FitOutcome::Rejected;
    }
    if set.has_two_red_cards() && joker.is_black() && card.is_red() {
        return FitOutcome::Rejected;
    }

    let suit_free = cards
        .iter()
        .filter(|c| !c.is_joker())
        .all(|c| c.suit() != card.suit());
    if !suit_free {
        return FitOutcome::Rejected;
    }

    let replaces = (joker.color() == card.color()).then_some(joker);
    FitOutcome::Accepted { replaces }
}

fn fit_run(cards: &[Card], card: Card, reporter: Reporter<'_>) -> FitOutcome {
    let run = Run::new(cards);

    let Some(rank) = card.rank() else {
        return fit_run_joker(&run, card.color());
    };

    if card.suit() != run.suit() {
        return FitOutcome::Rejected;
    }

    for (index, joker) in cards.iter().enumerate().filter(|(_, c)| c.is_joker()) {
        match represented_rank(cards, index) {
            Ok(represented) if stands_for(represented, rank) => {
                return FitOutcome::Accepted {
                    replaces: Some(*joker),
                };
            }
            Ok(_) => {}
            Err(err) => reporter.error(err),
        }
    }

    let (Some(highest), Some(lowest)) = (run.highest(), run.lowest()) else {
        return FitOutcome::Rejected;
    };
    let ace_high = Rank::Ace.effective();
    let value = rank.effective();

    let above = value == highest + 1 && highest != ace_high;
    let below = value == lowest - 1 && lowest != ace_high;
    let ace_low = rank == Rank::Ace && lowest == Rank::Two.effective();
    FitOutcome::accept_if(above || below || ace_low)
}

fn fit_run_joker(run: &Run, color: Color) -> FitOutcome {
    FitOutcome::accept_if(run.color() == Some(color) && !run.is_ace_bounded())
}

#[cfg(test)]
mod tests {
    use super::{FitOutcome, can_fit};
    use crate::diagnostics::{CapturedLog, Reporter};
    use crate::meld::SlotKind;
    use crate::model::{Card, CardId, Color, Rank, Suit};

    fn card(id: u32, rank: Rank, suit: Suit) -> Card {
        Card::standard(CardId(id), rank, suit)
    }

    fn joker(id: u32, color: Color) -> Card {
        Card::joker(CardId(id), color)
    }

    fn fit(kind: SlotKind, cards: &[Card], new_card: Card) -> FitOutcome {
        let log = CapturedLog::new();
        can_fit(kind, cards, new_card, Reporter::new("test", &log))
    }

    #[test]
    fn untyped_slot_accepts_nothing() {
        let outcome = fit(SlotKind::None, &[], card(1, Rank::Two, Suit::Clubs));
        assert_eq!(outcome, FitOutcome::Rejected);
    }

    #[test]
    fn set_rejects_repeated_suit_and_other_ranks() {
        let cards = [card(1, Rank::Five, Suit::Clubs), card(2, Rank::Five, Suit::Diamonds)];
        assert!(!fit(SlotKind::Set, &cards, card(3, Rank::Five, Suit::Clubs)).fits());
        assert!(!fit(SlotKind::Set, &cards, card(4, Rank::Six, Suit::Clubs)).fits());
        assert_eq!(
            fit(SlotKind::Set, &cards, card(5, Rank::Five, Suit::Spades)),
            FitOutcome::Accepted { replaces: None }
        );
    }

    #[test]
    fn set_card_matching_joker_color_displaces_it() {
        let black = joker(2, Color::Black);
        let cards = [card(1, Rank::Five, Suit::Clubs), black, card(3, Rank::Five, Suit::Hearts)];
        assert_eq!(
            fit(SlotKind::Set, &cards, card(4, Rank::Five, Suit::Spades)),
            FitOutcome::Accepted {
                replaces: Some(black)
            }
        );
        assert_eq!(
            fit(SlotKind::Set, &cards, card(5, Rank::Five, Suit::Diamonds)),
            FitOutcome::Accepted { replaces: None }
        );
    }

    #[test]
    fn set_rejects_third_card_of_a_color_beside_an_opposite_joker() {
        let cards = [
            card(1, Rank::Five, Suit::Hearts),
            card(2, Rank::Five, Suit::Diamonds),
            joker(3, Color::Black),
        ];
        let outcome = fit(SlotKind::Set, &cards, card(4, Rank::Five, Suit::Hearts));
        assert_eq!(outcome, FitOutcome::Rejected);
    }

    #[test]
    fn set_joker_needs_an_open_color_and_no_other_joker() {
        let two_black = [card(1, Rank::Nine, Suit::Clubs), card(2, Rank::Nine, Suit::Spades)];
        assert!(!fit(SlotKind::Set, &two_black, joker(3, Color::Black)).fits());
        assert!(fit(SlotKind::Set, &two_black, joker(4, Color::Red)).fits());

        let with_joker = [card(1, Rank::Nine, Suit::Clubs), joker(2, Color::Red)];
        assert!(!fit(SlotKind::Set, &with_joker, joker(3, Color::Black)).fits());
    }

    #[test]
    fn run_card_taking_a_joker_slot_displaces_it() {
        let filler = joker(2, Color::Red);
        let cards = [card(1, Rank::Five, Suit::Hearts), filler, card(3, Rank::Seven, Suit::Hearts)];
        assert_eq!(
            fit(SlotKind::Run, &cards, card(4, Rank::Six, Suit::Hearts)),
            FitOutcome::Accepted {
                replaces: Some(filler)
            }
        );
    }

    #[test]
    fn run_extends_at_either_end_in_suit() {
        let cards = [
            card(1, Rank::Five, Suit::Hearts),
            card(2, Rank::Six, Suit::Hearts),
            card(3, Rank::Seven, Suit::Hearts),
        ];
        assert!(fit(SlotKind::Run, &cards, card(4, Rank::Eight, Suit::Hearts)).fits());
        assert!(fit(SlotKind::Run, &cards, card(5, Rank::Four, Suit::Hearts)).fits());
        assert!(!fit(SlotKind::Run, &cards, card(6, Rank::Nine, Suit::Hearts)).fits());
        assert!(!fit(SlotKind::Run, &cards, card(7, Rank::Eight, Suit::Spades)).fits());
    }

    #[test]
    fn ace_extends_a_run_low_or_high() {
        let low = [
            card(1, Rank::Two, Suit::Clubs),
            card(2, Rank::Three, Suit::Clubs),
            card(3, Rank::Four, Suit::Clubs),
        ];
        assert!(fit(SlotKind::Run, &low, card(4, Rank::Ace, Suit::Clubs)).fits());

        let high = [
            card(1, Rank::Jack, Suit::Clubs),
            card(2, Rank::Queen, Suit::Clubs),
            card(3, Rank::King, Suit::Clubs),
        ];
        assert!(fit(SlotKind::Run, &high, card(4, Rank::Ace, Suit::Clubs)).fits());

        let topped = [
            card(1, Rank::Queen, Suit::Clubs),
            card(2, Rank::King, Suit::Clubs),
            card(3, Rank::Ace, Suit::Clubs),
        ];
        assert!(!fit(SlotKind::Run, &topped, card(4, Rank::Two, Suit::Clubs)).fits());
    }

    #[test]
    fn card_can_take_an_ace_low_joker_slot() {
        let filler = joker(1, Color::Black);
        let cards = [filler, card(2, Rank::Two, Suit::Spades), card(3, Rank::Three, Suit::Spades)];
        assert_eq!(
            fit(SlotKind::Run, &cards, card(4, Rank::Ace, Suit::Spades)),
            FitOutcome::Accepted {
                replaces: Some(filler)
            }
        );
    }

    #[test]
    fn run_joker_needs_matching_color_and_room() {
        let cards = [
            card(1, Rank::Five, Suit::Diamonds),
            card(2, Rank::Six, Suit::Diamonds),
            card(3, Rank::Seven, Suit::Diamonds),
        ];
        assert!(fit(SlotKind::Run, &cards, joker(4, Color::Red)).fits());
        assert!(!fit(SlotKind::Run, &cards, joker(5, Color::Black)).fits());

        let mut full = vec![card(0, Rank::Ace, Suit::Diamonds)];
        for (offset, rank) in Rank::ORDERED.iter().enumerate() {
            full.push(card(offset as u32 + 1, *rank, Suit::Diamonds));
        }
        assert!(!fit(SlotKind::Run, &full, joker(99, Color::Red)).fits());
    }

    #[test]
    fn joker_only_run_has_no_suit_to_extend() {
        let log = CapturedLog::new();
        let cards = [joker(1, Color::Red), joker(2, Color::Red)];
        let outcome = can_fit(
            SlotKind::Run,
            &cards,
            card(3, Rank::Five, Suit::Hearts),
            Reporter::new("jokers", &log),
        );
        assert_eq!(outcome, FitOutcome::Rejected);
        assert!(log.is_empty());
        assert!(fit(SlotKind::Run, &cards, joker(4, Color::Red)).fits());
    }

    #[test]
    fn accessors_expose_outcome() {
        let j = joker(1, Color::Red);
        let outcome = FitOutcome::Accepted { replaces: Some(j) };
        assert!(outcome.fits());
        assert_eq!(outcome.replaced_joker(), Some(j));
        assert_eq!(FitOutcome::Rejected.replaced_joker(), None);
    }
}
