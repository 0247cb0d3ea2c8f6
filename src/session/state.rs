//! Round state, input actions, and status messages.

use core::fmt;

use crate::result::Outcome;

/// Round state. Decides which actions are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    /// Waiting for the player to deal.
    #[default]
    Betting,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand. No input is accepted.
    DealerTurn,
    /// Round has been resolved and paid out.
    Result,
}

/// An action requested by the input side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place the bet and deal two cards each.
    Deal,
    /// Draw one card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet, draw exactly one card, then stand.
    DoubleDown,
    /// Give up the round for half the stake.
    Surrender,
    /// Clear the table for the next round.
    NewRound,
}

impl Action {
    /// Every action, in button order.
    pub const ALL: [Self; 6] = [
        Self::Deal,
        Self::Hit,
        Self::Stand,
        Self::DoubleDown,
        Self::Surrender,
        Self::NewRound,
    ];

    /// The state in which this action is legal.
    #[must_use]
    pub const fn legal_in(self) -> RoundState {
        match self {
            Self::Deal => RoundState::Betting,
            Self::Hit | Self::Stand | Self::DoubleDown | Self::Surrender => {
                RoundState::PlayerTurn
            }
            Self::NewRound => RoundState::Result,
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Deal => "Deal",
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::DoubleDown => "Double Down",
            Self::Surrender => "Surrender",
            Self::NewRound => "New Round",
        }
    }
}

/// Status line shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Cards are out and the player acts.
    YourTurn,
    /// The bankroll cannot cover the bet at deal time.
    InsufficientForBet,
    /// The bankroll cannot cover a double down.
    InsufficientForDouble,
    /// The round has been resolved.
    Resolved {
        /// How the round ended.
        outcome: Outcome,
        /// Whether the player doubled down.
        doubled: bool,
    },
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YourTurn => f.write_str("Your turn!"),
            Self::InsufficientForBet => f.write_str("Not enough bankroll to place the bet."),
            Self::InsufficientForDouble => f.write_str("Not enough bankroll to double down."),
            Self::Resolved {
                outcome: Outcome::PlayerBust,
                doubled: true,
            } => f.write_str("Bust after double down!"),
            Self::Resolved { outcome, .. } => fmt::Display::fmt(outcome, f),
        }
    }
}
