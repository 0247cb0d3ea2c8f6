//! Error types for deck and session operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left.
    #[error("no cards left in the deck")]
    Exhausted,
}

/// Errors that can occur during a player or dealer action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not legal in the current round state.
    #[error("action is not legal in the current round state")]
    InvalidState,
    /// The bankroll cannot cover the required stake.
    #[error("insufficient bankroll for this action")]
    InsufficientBankroll,
    /// The deck ran out mid-round.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Exhausted => Self::DeckExhausted,
        }
    }
}
