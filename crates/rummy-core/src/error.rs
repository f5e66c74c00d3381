use crate::model::Card;
use thiserror::Error;

/// Recoverable conditions raised while arranging or validating a meld.
///
/// None of these abort an operation; they are reported through a
/// [`MeldLog`](crate::diagnostics::MeldLog) and the caller carries on with the
/// documented fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeldError {
    #[error("slot already contains {card}")]
    DuplicateCard { card: Card },
    #[error("rank of joker at position {index} of {len} could not be resolved: no non-joker anchor")]
    UnresolvedJokerRank { index: usize, len: usize },
}
