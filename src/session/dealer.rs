use core::cmp::Ordering;

use alloc::vec::Vec;

use log::info;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Outcome, RoundResult};

use super::{Message, RoundState, Session};

/// The dealer stands on any total at or above this, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

impl Session {
    /// Dealer plays their hand: draws while the score is below 17, then the
    /// round is resolved.
    ///
    /// The whole sequence runs in one call. Returns the cards drawn, in
    /// order, so a renderer can pace them.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs out
    /// (which aborts the round).
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        self.ensure_state(RoundState::DealerTurn)?;

        let mut drawn_cards = Vec::new();
        while self.dealer.score() < DEALER_STANDS_ON {
            let card = self.draw_or_abort()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        self.settle();
        Ok(drawn_cards)
    }

    /// Compares the hands and pays out.
    pub(super) fn settle(&mut self) -> RoundResult {
        let player_score = self.player.score();
        let dealer_score = self.dealer.score();

        let outcome = if self.surrendered {
            Outcome::Surrendered
        } else if self.player.is_bust() {
            Outcome::PlayerBust
        } else if self.dealer.is_bust() {
            Outcome::DealerBust
        } else {
            match player_score.cmp(&dealer_score) {
                Ordering::Greater => Outcome::Win,
                Ordering::Less => Outcome::Lose,
                Ordering::Equal => Outcome::Push,
            }
        };

        self.finish(outcome)
    }

    /// Credits the payout for `outcome` and moves to the result state.
    pub(super) fn finish(&mut self, outcome: Outcome) -> RoundResult {
        let bet = self.bet;
        let payout = match outcome {
            Outcome::Win | Outcome::DealerBust => bet.saturating_mul(2),
            Outcome::Push | Outcome::Aborted => bet,
            Outcome::Surrendered => self.options.surrender_rounding.halve(bet),
            Outcome::PlayerBust | Outcome::Lose => 0,
        };
        self.bankroll = self.bankroll.saturating_add(payout);

        let net = isize::try_from(payout)
            .unwrap_or(isize::MAX)
            .saturating_sub(isize::try_from(bet).unwrap_or(isize::MAX));

        let result = RoundResult {
            outcome,
            bet,
            payout,
            doubled: self.doubled,
            player_score: self.player.score(),
            dealer_score: self.dealer.score(),
            net,
        };
        info!(
            "round resolved: {outcome:?} player {} dealer {} bet {bet} payout {payout} bankroll {}",
            result.player_score, result.dealer_score, self.bankroll
        );

        self.last_result = Some(result);
        self.message = Some(Message::Resolved {
            outcome,
            doubled: self.doubled,
        });
        self.set_state(RoundState::Result);
        result
    }
}
