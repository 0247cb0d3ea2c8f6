use log::{debug, warn};

use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundResult;

use super::{Message, RoundState, Session};

impl Session {
    pub(super) fn ensure_state(&self, expected: RoundState) -> Result<(), ActionError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Places the bet and deals two cards each, alternating player and
    /// dealer with the player first.
    ///
    /// The deck is replenished first if it holds fewer cards than the
    /// reshuffle threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting state, the
    /// bankroll cannot cover the bet, or the deck runs out (which aborts the
    /// round).
    pub fn deal(&mut self) -> Result<(), ActionError> {
        self.ensure_state(RoundState::Betting)?;

        if self.bankroll < self.bet {
            warn!(
                "bankroll {} cannot cover a bet of {}",
                self.bankroll, self.bet
            );
            self.message = Some(Message::InsufficientForBet);
            return Err(ActionError::InsufficientBankroll);
        }

        if self
            .deck
            .ensure_capacity(self.options.reshuffle_threshold, &mut self.rng)
        {
            debug!("deck replenished with {} cards", self.deck.len());
        }

        self.bankroll -= self.bet;
        self.player.clear();
        self.dealer.clear();

        for _ in 0..2 {
            let card = self.draw_or_abort()?;
            self.player.add_card(card);
            let card = self.draw_or_abort()?;
            self.dealer.add_card(card);
        }

        self.message = Some(Message::YourTurn);
        self.set_state(RoundState::PlayerTurn);
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust resolves the round immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck runs out.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_state(RoundState::PlayerTurn)?;

        let card = self.draw_or_abort()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.settle();
        }

        Ok(card)
    }

    /// Player action: Stand. Hands the round to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_state(RoundState::PlayerTurn)?;
        self.set_state(RoundState::DealerTurn);
        Ok(())
    }

    /// Player action: Double down (double the bet, receive one card, then
    /// stand).
    ///
    /// When the bankroll cannot cover a second stake the status message is
    /// set and nothing else changes.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the bankroll is
    /// short, or the deck runs out.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_state(RoundState::PlayerTurn)?;

        if self.bankroll < self.bet {
            warn!(
                "bankroll {} cannot cover a double down on {}",
                self.bankroll, self.bet
            );
            self.message = Some(Message::InsufficientForDouble);
            return Err(ActionError::InsufficientBankroll);
        }

        self.bankroll -= self.bet;
        self.bet = self.bet.saturating_mul(2);
        self.doubled = true;

        let card = self.draw_or_abort()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.settle();
        } else {
            self.set_state(RoundState::DealerTurn);
        }

        Ok(card)
    }

    /// Player action: Surrender (forfeit half the bet). Resolves the round
    /// without dealer play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn surrender(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_state(RoundState::PlayerTurn)?;
        self.surrendered = true;
        Ok(self.settle())
    }

    /// Clears hands, flags, and the status message and restores the base
    /// bet. The bankroll carries over.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been resolved yet.
    pub fn new_round(&mut self) -> Result<(), ActionError> {
        self.ensure_state(RoundState::Result)?;

        self.player.clear();
        self.dealer.clear();
        self.doubled = false;
        self.surrendered = false;
        self.bet = self.options.base_bet.max(1);
        self.message = None;
        self.last_result = None;
        self.set_state(RoundState::Betting);
        Ok(())
    }
}
