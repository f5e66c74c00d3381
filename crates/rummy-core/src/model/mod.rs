pub mod card;
pub mod color;
pub mod rank;
pub mod suit;

pub use card::{Card, CardId, Face, FaceParseError};
pub use color::Color;
pub use rank::{ACE_LOW, Rank};
pub use suit::Suit;
