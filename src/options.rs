//! Session configuration options.

/// Rounding mode for the half-stake surrender refund when the bet is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    #[default]
    Down,
    /// Round to nearest, halves away from zero.
    Nearest,
}

impl RoundingMode {
    /// Returns half of `amount`, rounded according to this mode.
    ///
    /// ```
    /// use blackjack_table::RoundingMode;
    ///
    /// assert_eq!(RoundingMode::Down.halve(25), 12);
    /// assert_eq!(RoundingMode::Up.halve(25), 13);
    /// assert_eq!(RoundingMode::Nearest.halve(100), 50);
    /// ```
    #[must_use]
    pub const fn halve(self, amount: usize) -> usize {
        match self {
            Self::Down => amount / 2,
            // Halves only ever have a remainder of exactly one half.
            Self::Up | Self::Nearest => amount.div_ceil(2),
        }
    }
}

/// Configuration options for a blackjack session.
///
/// The dealer always stands on any 17; that rule is not configurable.
/// Bankroll and bet arithmetic saturates at `usize::MAX` instead of
/// wrapping.
///
/// ```
/// use blackjack_table::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_starting_bankroll(500)
///     .with_base_bet(25)
///     .with_reshuffle_threshold(20);
/// assert_eq!(options.base_bet, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Bankroll at the start of the session.
    pub starting_bankroll: usize,
    /// Bet placed at every deal; restored at each new round.
    pub base_bet: usize,
    /// The deck is replenished at deal time when fewer cards than this remain.
    pub reshuffle_threshold: usize,
    /// Rounding mode for surrender refunds.
    pub surrender_rounding: RoundingMode,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: 1000,
            base_bet: 100,
            reshuffle_threshold: 15,
            surrender_rounding: RoundingMode::Down,
        }
    }
}

impl SessionOptions {
    /// Sets the starting bankroll.
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the base bet.
    ///
    /// A zero bet is raised to 1 so every round carries a stake.
    #[must_use]
    pub const fn with_base_bet(mut self, bet: usize) -> Self {
        self.base_bet = if bet == 0 { 1 } else { bet };
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_reshuffle_threshold(0);
    /// assert_eq!(options.reshuffle_threshold, 0);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the rounding mode for surrender refunds.
    #[must_use]
    pub const fn with_surrender_rounding(mut self, mode: RoundingMode) -> Self {
        self.surrender_rounding = mode;
        self
    }
}
