//! Read-only table snapshot handed to the renderer each frame.

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::RoundResult;
use crate::session::{Action, Message, RoundState};

/// A card as the player is allowed to see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardView {
    /// Face-up card.
    Face(Card),
    /// Face-down card.
    Hidden,
}

impl CardView {
    /// Returns the card if it is face up.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Self::Face(card) => Some(*card),
            Self::Hidden => None,
        }
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Face(card) => fmt::Display::fmt(card, f),
            Self::Hidden => f.write_str("??"),
        }
    }
}

/// Snapshot of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Current round state.
    pub state: RoundState,
    /// Current bankroll.
    pub bankroll: usize,
    /// Current bet.
    pub bet: usize,
    /// Player cards.
    pub player: Vec<Card>,
    /// Player score.
    pub player_score: u8,
    /// Dealer cards, with the hole card masked during the player's turn.
    pub dealer: Vec<CardView>,
    /// Score of the dealer's face-up cards.
    pub dealer_score: u8,
    /// Status message.
    pub message: Option<Message>,
    /// Result of the round once resolved.
    pub result: Option<RoundResult>,
    /// Cards left in the deck.
    pub cards_remaining: usize,
    /// Actions the renderer should offer.
    pub legal_actions: Vec<Action>,
}
