//! Round state machine and session state.

use alloc::vec::Vec;

use log::{debug, error};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::options::SessionOptions;
use crate::result::{Outcome, RoundResult};
use crate::view::{CardView, TableView};

mod actions;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::{Action, Message, RoundState};

/// A single-player blackjack session against a fixed-strategy dealer.
///
/// The session owns the deck, both hands, and the bankroll. The bankroll
/// persists across rounds; hands, flags, and the bet are reset by
/// [`Session::new_round`].
///
/// Stakes are taken from the bankroll when they are placed: the bet at deal
/// time and the extra stake on a double down. Resolution credits
/// `2 × bet` on a win, `bet` on a push, and half the bet on surrender.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session options.
    options: SessionOptions,
    /// Cards left to draw.
    deck: Deck,
    player: Hand,
    dealer: Hand,
    bankroll: usize,
    bet: usize,
    doubled: bool,
    surrendered: bool,
    state: RoundState,
    /// Status line for the renderer.
    message: Option<Message>,
    /// Result of the round, once resolved.
    last_result: Option<RoundResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{RoundState, Session, SessionOptions};
    ///
    /// let session = Session::new(SessionOptions::default(), 42);
    /// assert_eq!(session.state(), RoundState::Betting);
    /// assert_eq!(session.bankroll(), 1000);
    /// assert_eq!(session.bet(), 100);
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new_shuffled(&mut rng);

        Self {
            bankroll: options.starting_bankroll,
            bet: options.base_bet.max(1),
            options,
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            doubled: false,
            surrendered: false,
            state: RoundState::Betting,
            message: None,
            last_result: None,
            rng,
        }
    }

    /// Returns the session options.
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the current bankroll.
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the current bet.
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's full hand, including the hole card.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns whether the player doubled down this round.
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether the player surrendered this round.
    pub const fn is_surrendered(&self) -> bool {
        self.surrendered
    }

    /// Returns the current status message.
    pub const fn message(&self) -> Option<Message> {
        self.message
    }

    /// Returns the result of the round once it has been resolved.
    pub const fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Swaps in an arranged deck, e.g. to replay a recorded round.
    pub fn replace_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Returns the actions that are currently legal.
    ///
    /// Deal and double down are only listed when the bankroll can cover the
    /// stake.
    pub fn legal_actions(&self) -> Vec<Action> {
        let covered = self.bankroll >= self.bet;
        Action::ALL
            .into_iter()
            .filter(|action| action.legal_in() == self.state)
            .filter(|action| covered || !matches!(action, Action::Deal | Action::DoubleDown))
            .collect()
    }

    /// Returns a read-only snapshot for the renderer.
    ///
    /// The dealer's second card is masked while the player is acting.
    pub fn view(&self) -> TableView {
        let hide_hole = self.state == RoundState::PlayerTurn;
        let dealer = self
            .dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(i, &card)| {
                if hide_hole && i == 1 {
                    CardView::Hidden
                } else {
                    CardView::Face(card)
                }
            })
            .collect::<Vec<_>>();
        let face_up: Vec<Card> = dealer.iter().filter_map(CardView::card).collect();

        TableView {
            state: self.state,
            bankroll: self.bankroll,
            bet: self.bet,
            player: self.player.cards().to_vec(),
            player_score: self.player.score(),
            dealer_score: crate::hand::score(&face_up),
            dealer,
            message: self.message,
            result: self.last_result,
            cards_remaining: self.deck.len(),
            legal_actions: self.legal_actions(),
        }
    }

    /// Input boundary: applies `action` and swallows every error.
    ///
    /// Actions that are not legal in the current state are ignored. A
    /// bankroll shortfall only sets the status message. A deck exhaustion
    /// aborts the round.
    ///
    /// Returns `true` if the round state changed.
    pub fn handle(&mut self, action: Action) -> bool {
        let before = self.state;
        let outcome = match action {
            Action::Deal => self.deal(),
            Action::Hit => self.hit().map(|_| ()),
            Action::Stand => self.stand(),
            Action::DoubleDown => self.double_down().map(|_| ()),
            Action::Surrender => self.surrender().map(|_| ()),
            Action::NewRound => self.new_round(),
        };

        match outcome {
            Ok(()) => {}
            Err(ActionError::InvalidState) => {
                log::trace!("ignoring {action:?} in {before:?}");
            }
            Err(ActionError::InsufficientBankroll | ActionError::DeckExhausted) => {}
        }

        self.state != before
    }

    /// Runs automatic play. Call once per tick after input has been handled.
    ///
    /// While the dealer is up, plays the dealer hand to completion and
    /// returns the cards drawn, in order, for the renderer to animate. If
    /// the deck runs out mid-play the round is aborted and the cards drawn
    /// before that are still returned. Otherwise returns an empty list.
    pub fn advance(&mut self) -> Vec<Card> {
        if self.state != RoundState::DealerTurn {
            return Vec::new();
        }

        let dealt = self.dealer.len();
        match self.dealer_play() {
            Ok(drawn) => drawn,
            Err(_) => self.dealer.cards()[dealt..].to_vec(),
        }
    }

    fn set_state(&mut self, next: RoundState) {
        debug!("round state {:?} -> {next:?}", self.state);
        self.state = next;
    }

    /// Draws a card, aborting the round if the deck is empty.
    fn draw_or_abort(&mut self) -> Result<Card, ActionError> {
        match self.deck.draw() {
            Ok(card) => Ok(card),
            Err(err) => {
                error!(
                    "deck exhausted in {:?} with {} player and {} dealer cards; aborting round",
                    self.state,
                    self.player.len(),
                    self.dealer.len()
                );
                self.finish(Outcome::Aborted);
                Err(err.into())
            }
        }
    }
}
