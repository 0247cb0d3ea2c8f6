//! A single 52-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards. Cards are drawn from the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds all 52 rank and suit combinations in a fixed order.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Builds a full deck and applies a uniform random permutation to it.
    pub fn new_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.shuffle(rng);
        deck
    }

    /// Builds an arranged deck. `draws[0]` is the first card drawn.
    ///
    /// ```
    /// use blackjack_table::{Card, Deck, Rank, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Spades);
    /// let king = Card::new(Rank::King, Suit::Hearts);
    /// let mut deck = Deck::from_draws(&[ace, king]);
    /// assert_eq!(deck.draw(), Ok(ace));
    /// assert_eq!(deck.draw(), Ok(king));
    /// ```
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the remaining cards in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    /// Replaces the deck with a freshly shuffled full deck when fewer than
    /// `min_cards` remain.
    ///
    /// Returns `true` if the deck was replenished.
    pub fn ensure_capacity<R: Rng + ?Sized>(&mut self, min_cards: usize, rng: &mut R) -> bool {
        if self.cards.len() >= min_cards {
            return false;
        }

        *self = Self::new_shuffled(rng);
        true
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn ordered_deck_has_52_distinct_cards() {
        let deck = Deck::ordered();
        assert_eq!(deck.len(), DECK_SIZE);
        for (i, card) in deck.cards().iter().enumerate() {
            assert!(!deck.cards()[i + 1..].contains(card));
        }
    }

    #[test]
    fn seeded_shuffle_is_reproducible_and_a_permutation() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);
        let d1 = Deck::new_shuffled(&mut rng1);
        let d2 = Deck::new_shuffled(&mut rng2);
        assert_eq!(d1, d2);
        assert_ne!(d1, Deck::ordered());

        let ordered = Deck::ordered();
        for card in ordered.cards() {
            assert!(d1.cards().contains(card));
        }
    }

    #[test]
    fn draw_takes_from_top_until_exhausted() {
        let two = Card::new(Rank::Two, Suit::Clubs);
        let three = Card::new(Rank::Three, Suit::Clubs);
        let mut deck = Deck::from_draws(&[two, three]);

        assert_eq!(deck.draw(), Ok(two));
        assert_eq!(deck.draw(), Ok(three));
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(DeckError::Exhausted));
    }

    #[test]
    fn ensure_capacity_replenishes_only_below_threshold() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut deck = Deck::new_shuffled(&mut rng);
        for _ in 0..37 {
            deck.draw().unwrap();
        }
        assert_eq!(deck.len(), 15);

        let before = deck.clone();
        assert!(!deck.ensure_capacity(15, &mut rng));
        assert_eq!(deck, before);

        deck.draw().unwrap();
        assert!(deck.ensure_capacity(15, &mut rng));
        assert_eq!(deck.len(), DECK_SIZE);
    }
}
