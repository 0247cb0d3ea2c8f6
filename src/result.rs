//! Round result types.

use core::fmt;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player surrendered and gets half the stake back.
    Surrendered,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player has the higher score.
    Win,
    /// Dealer has the higher score.
    Lose,
    /// Scores are equal; the stake is returned.
    Push,
    /// The deck ran out mid-round; the stake is returned.
    Aborted,
}

impl Outcome {
    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::Win)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Surrendered => "Surrendered: You lose half your bet.",
            Self::PlayerBust => "Bust! You lose.",
            Self::DealerBust => "Dealer busts! You win.",
            Self::Win => "You win!",
            Self::Lose => "You lose!",
            Self::Push => "Push! Bet returned.",
            Self::Aborted => "Round aborted: the deck ran out.",
        })
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The final bet (already doubled if the player doubled down).
    pub bet: usize,
    /// Amount credited back to the bankroll on resolution.
    pub payout: usize,
    /// Whether the player doubled down.
    pub doubled: bool,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
}
