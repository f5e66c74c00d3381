use crate::meld::joker::effective_rank;
use crate::model::{ACE_LOW, Card, Rank, Suit};

pub const MIN_MELD_LEN: usize = 3;
pub const MAX_SET_LEN: usize = 4;

/// A run holds at least three cards of one suit whose effective ranks climb
/// by one from left to right, between a low ace (1) and a high ace (14).
/// Jokers must share the color of the suit and at least one real card must
/// anchor the sequence.
pub fn is_valid_run(cards: &[Card]) -> bool {
    if cards.len() < MIN_MELD_LEN {
        return false;
    }

    let Some(suit) = cards.iter().find_map(|card| card.suit()) else {
        return false;
    };
    let color = suit.color();
    let uniform = cards.iter().all(|card| match card.suit() {
        Some(other) => other == suit,
        None => card.color() == color,
    });
    if !uniform {
        return false;
    }

    let mut previous: Option<i32> = None;
    for index in 0..cards.len() {
        let Ok(rank) = effective_rank(cards, index) else {
            return false;
        };
        if !(ACE_LOW..=Rank::Ace.effective()).contains(&rank) {
            return false;
        }
        if let Some(previous) = previous {
            if rank != previous + 1 {
                return false;
            }
        }
        previous = Some(rank);
    }
    true
}

/// A set holds three or four cards of one rank in distinct suits, with at
/// most one joker and no more than two cards of either color.
pub fn is_valid_set(cards: &[Card]) -> bool {
    if !(MIN_MELD_LEN..=MAX_SET_LEN).contains(&cards.len()) {
        return false;
    }

    if cards.iter().filter(|card| card.is_joker()).count() > 1 {
        return false;
    }

    let Some(rank) = cards.iter().find_map(|card| card.rank()) else {
        return false;
    };

    let mut seen: Vec<Suit> = Vec::with_capacity(cards.len());
    for card in cards {
        let (Some(card_rank), Some(suit)) = (card.rank(), card.suit()) else {
            continue;
        };
        if card_rank != rank || seen.contains(&suit) {
            return false;
        }
        seen.push(suit);
    }

    let black = cards.iter().filter(|card| card.is_black()).count();
    black <= 2 && cards.len() - black <= 2
}

#[cfg(test)]
mod tests {
    use super::{is_valid_run, is_valid_set};
    use crate::model::{Card, CardId, Color, Rank, Suit};

    fn card(id: u32, rank: Rank, suit: Suit) -> Card {
        Card::standard(CardId(id), rank, suit)
    }

    fn joker(id: u32, color: Color) -> Card {
        Card::joker(CardId(id), color)
    }

    #[test]
    fn consecutive_same_suit_is_a_run() {
        let cards = [
            card(1, Rank::Four, Suit::Clubs),
            card(2, Rank::Five, Suit::Clubs),
            card(3, Rank::Six, Suit::Clubs),
        ];
        assert!(is_valid_run(&cards));
    }

    #[test]
    fn two_cards_are_never_a_run() {
        let cards = [
            card(1, Rank::Four, Suit::Clubs),
            card(2, Rank::Five, Suit::Clubs),
        ];
        assert!(!is_valid_run(&cards));
    }

    #[test]
    fn gaps_and_mixed_suits_break_a_run() {
        let gap = [
            card(1, Rank::Four, Suit::Clubs),
            card(2, Rank::Six, Suit::Clubs),
            card(3, Rank::Seven, Suit::Clubs),
        ];
        assert!(!is_valid_run(&gap));

        let mixed = [
            card(1, Rank::Four, Suit::Clubs),
            card(2, Rank::Five, Suit::Spades),
            card(3, Rank::Six, Suit::Clubs),
        ];
        assert!(!is_valid_run(&mixed));
    }

    #[test]
    fn joker_fills_a_gap_only_in_the_suit_color() {
        let black = [
            card(1, Rank::Four, Suit::Clubs),
            joker(2, Color::Black),
            card(3, Rank::Six, Suit::Clubs),
        ];
        assert!(is_valid_run(&black));

        let red = [
            card(1, Rank::Four, Suit::Clubs),
            joker(2, Color::Red),
            card(3, Rank::Six, Suit::Clubs),
        ];
        assert!(!is_valid_run(&red));
    }

    #[test]
    fn ace_can_open_or_close_but_not_wrap() {
        let low = [
            card(1, Rank::Ace, Suit::Hearts),
            card(2, Rank::Two, Suit::Hearts),
            card(3, Rank::Three, Suit::Hearts),
        ];
        assert!(is_valid_run(&low));

        let high = [
            card(1, Rank::Queen, Suit::Hearts),
            card(2, Rank::King, Suit::Hearts),
            card(3, Rank::Ace, Suit::Hearts),
        ];
        assert!(is_valid_run(&high));

        let wrap = [
            card(1, Rank::King, Suit::Hearts),
            card(2, Rank::Ace, Suit::Hearts),
            card(3, Rank::Two, Suit::Hearts),
        ];
        assert!(!is_valid_run(&wrap));
    }

    #[test]
    fn joker_past_high_ace_is_rejected() {
        let cards = [
            card(1, Rank::King, Suit::Hearts),
            card(2, Rank::Ace, Suit::Hearts),
            joker(3, Color::Red),
        ];
        assert!(!is_valid_run(&cards));
    }

    #[test]
    fn three_or_four_distinct_suits_form_a_set() {
        let three = [
            card(1, Rank::Nine, Suit::Clubs),
            card(2, Rank::Nine, Suit::Hearts),
            card(3, Rank::Nine, Suit::Spades),
        ];
        assert!(is_valid_set(&three));

        let four = [
            card(1, Rank::Nine, Suit::Clubs),
            card(2, Rank::Nine, Suit::Hearts),
            card(3, Rank::Nine, Suit::Spades),
            card(4, Rank::Nine, Suit::Diamonds),
        ];
        assert!(is_valid_set(&four));
    }

    #[test]
    fn repeated_suits_or_ranks_break_a_set() {
        let repeated = [
            card(1, Rank::Nine, Suit::Clubs),
            card(2, Rank::Nine, Suit::Clubs),
            card(3, Rank::Nine, Suit::Spades),
        ];
        assert!(!is_valid_set(&repeated));

        let mixed = [
            card(1, Rank::Nine, Suit::Clubs),
            card(2, Rank::Ten, Suit::Hearts),
            card(3, Rank::Nine, Suit::Spades),
        ];
        assert!(!is_valid_set(&mixed));
    }

    #[test]
    fn set_joker_must_take_an_open_color() {
        let open = [
            card(1, Rank::Nine, Suit::Clubs),
            card(2, Rank::Nine, Suit::Hearts),
            joker(3, Color::Black),
        ];
        assert!(is_valid_set(&open));

        let crowded = [
            card(1, Rank::Nine, Suit::Clubs),
            card(2, Rank::Nine, Suit::Spades),
            joker(3, Color::Black),
        ];
        assert!(!is_valid_set(&crowded));

        let two_jokers = [
            card(1, Rank::Nine, Suit::Clubs),
            joker(2, Color::Red),
            joker(3, Color::Red),
        ];
        assert!(!is_valid_set(&two_jokers));
    }
}
