//! Hand evaluation and the hand container shared by player and dealer.

use alloc::vec::Vec;

use crate::card::Card;

/// Highest non-bust total.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: usize = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += usize::from(card.rank.base_value());
    }

    let limit = usize::from(BLACKJACK);
    while value > limit && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= limit;
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// Returns the best blackjack score for `cards`.
///
/// Aces count as 11 and are demoted to 1, one at a time, while the total
/// exceeds 21. The result is the largest total not above 21 when one exists,
/// otherwise the smallest possible total. Totals above 255, which no
/// single-deck round can reach, are reported as 255.
///
/// ```
/// use blackjack_table::{Card, Rank, Suit, hand::score};
///
/// let aces = [Card::new(Rank::Ace, Suit::Hearts), Card::new(Rank::Ace, Suit::Spades)];
/// assert_eq!(score(&aces), 12);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the score counts at least one ace as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether `cards` is a two-card 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == BLACKJACK
}

/// Returns whether the score exceeds 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > BLACKJACK
}

/// An ordered sequence of cards owned by one side of the table.
///
/// The score is never stored; every query re-evaluates the cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is a natural 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Discards all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r, Suit::Clubs)).collect()
    }

    #[test]
    fn face_cards_and_aces() {
        assert_eq!(score(&cards(&[Rank::King, Rank::Queen])), 20);
        assert_eq!(score(&cards(&[Rank::Ace, Rank::King])), 21);
        assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace])), 12);
        assert_eq!(score(&cards(&[Rank::Ace; 4])), 14);
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn aces_demote_only_as_needed() {
        let soft = cards(&[Rank::Ace, Rank::Six]);
        assert_eq!(score(&soft), 17);
        assert!(is_soft(&soft));

        let hard = cards(&[Rank::Ace, Rank::Six, Rank::Ten]);
        assert_eq!(score(&hard), 17);
        assert!(!is_soft(&hard));
    }

    #[test]
    fn bust_and_blackjack_predicates() {
        let bust = cards(&[Rank::Ten, Rank::Ten, Rank::Five]);
        assert_eq!(score(&bust), 25);
        assert!(is_bust(&bust));

        assert!(is_blackjack(&cards(&[Rank::Ace, Rank::Jack])));
        let three_sevens = cards(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        assert!(!is_blackjack(&three_sevens));
    }

    #[test]
    fn large_hands_demote_aces_before_clamping() {
        let mut ranks = alloc::vec![Rank::King; 22];
        ranks.extend([Rank::Ace; 4]);
        assert_eq!(score(&cards(&ranks)), 224);
        assert!(is_bust(&cards(&ranks)));

        let full_deck = crate::deck::Deck::ordered();
        assert_eq!(score(full_deck.cards()), u8::MAX);
    }

    #[test]
    fn hand_clears() {
        let mut hand = Hand::from(cards(&[Rank::Nine, Rank::Two]).as_slice());
        assert_eq!(hand.score(), 11);
        hand.add_card(Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(hand.score(), 12);
        hand.clear();
        assert!(hand.is_empty());
    }
}
