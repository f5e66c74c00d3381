use crate::model::color::Color;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity of one physical card. Two cards with the same face are still
/// different cards when their ids differ (double decks, spare jokers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What is printed on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Standard { rank: Rank, suit: Suit },
    Joker(Color),
}

impl Face {
    pub const fn color(self) -> Color {
        match self {
            Face::Standard { suit, .. } => suit.color(),
            Face::Joker(color) => color,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Standard { rank, suit } => write!(f, "{rank}{suit}"),
            Face::Joker(color) => write!(f, "JK{}", color.symbol()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FaceParseError {
    #[error("card notation is empty")]
    Empty,
    #[error("unknown rank '{0}'")]
    Rank(String),
    #[error("unknown suit '{0}'")]
    Suit(String),
    #[error("unknown joker color in '{0}'")]
    JokerColor(String),
}

impl FromStr for Face {
    type Err = FaceParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let text = value.trim();
        if text.is_empty() {
            return Err(FaceParseError::Empty);
        }

        let upper = text.to_ascii_uppercase();
        if let Some(color) = upper.strip_prefix("JK") {
            let mut chars = color.chars();
            return match (chars.next().and_then(Color::from_symbol), chars.next()) {
                (Some(color), None) => Ok(Face::Joker(color)),
                _ => Err(FaceParseError::JokerColor(text.to_string())),
            };
        }

        let Some(suit_char) = upper.chars().last() else {
            return Err(FaceParseError::Empty);
        };
        let rank_text = &upper[..upper.len() - suit_char.len_utf8()];
        let suit =
            Suit::from_symbol(suit_char).ok_or_else(|| FaceParseError::Suit(suit_char.to_string()))?;
        let rank =
            Rank::from_symbol(rank_text).ok_or_else(|| FaceParseError::Rank(rank_text.to_string()))?;
        Ok(Face::Standard { rank, suit })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub face: Face,
}

impl Card {
    pub const fn new(id: CardId, face: Face) -> Self {
        Self { id, face }
    }

    pub const fn standard(id: CardId, rank: Rank, suit: Suit) -> Self {
        Self::new(id, Face::Standard { rank, suit })
    }

    pub const fn joker(id: CardId, color: Color) -> Self {
        Self::new(id, Face::Joker(color))
    }

    pub const fn is_joker(self) -> bool {
        matches!(self.face, Face::Joker(_))
    }

    pub const fn rank(self) -> Option<Rank> {
        match self.face {
            Face::Standard { rank, .. } => Some(rank),
            Face::Joker(_) => None,
        }
    }

    pub const fn suit(self) -> Option<Suit> {
        match self.face {
            Face::Standard { suit, .. } => Some(suit),
            Face::Joker(_) => None,
        }
    }

    pub const fn color(self) -> Color {
        self.face.color()
    }

    pub const fn is_black(self) -> bool {
        matches!(self.color(), Color::Black)
    }

    pub const fn is_red(self) -> bool {
        matches!(self.color(), Color::Red)
    }

    pub const fn is_ace(self) -> bool {
        matches!(self.rank(), Some(Rank::Ace))
    }

    /// Face value outside of a meld. Jokers carry no face value of their own.
    pub const fn value(self) -> u32 {
        match self.face {
            Face::Standard { rank, .. } => rank.points(),
            Face::Joker(_) => 0,
        }
    }

    /// Identity comparison; faces are irrelevant.
    pub fn same_card(self, other: Card) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.id)
    }
}
