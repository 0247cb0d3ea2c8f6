use blackjack_table::hand::{is_bust, is_soft, score};
use blackjack_table::{
    Action, Card, DEALER_STANDS_ON, Rank, RoundState, Session, SessionOptions, Suit,
};
use proptest::prelude::*;

fn any_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s))
}

fn any_hand() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(any_card(), 0..=11)
}

/// Totals with every ace counted as 1.
fn hard_total(cards: &[Card]) -> u32 {
    cards
        .iter()
        .map(|c| {
            if c.is_ace() {
                1
            } else {
                u32::from(c.rank.base_value())
            }
        })
        .sum()
}

#[test]
fn known_scores() {
    let c = |r| Card::new(r, Suit::Hearts);
    assert_eq!(score(&[c(Rank::Ace), c(Rank::Ace)]), 12);
    assert_eq!(score(&[c(Rank::King), c(Rank::Queen)]), 20);
    assert_eq!(score(&[c(Rank::Ace), c(Rank::King)]), 21);
}

proptest! {
    #[test]
    fn score_ignores_card_order(
        (hand, shuffled) in any_hand().prop_flat_map(|h| (Just(h.clone()), Just(h).prop_shuffle()))
    ) {
        prop_assert_eq!(score(&hand), score(&shuffled));
        prop_assert_eq!(is_soft(&hand), is_soft(&shuffled));
    }

    #[test]
    fn score_is_best_total_not_above_21(hand in any_hand()) {
        let hard = hard_total(&hand);
        let aces = hand.iter().filter(|c| c.is_ace()).count() as u32;
        let best = (0..=aces)
            .map(|promoted| hard + 10 * promoted)
            .filter(|&total| total <= 21)
            .max();

        match best {
            Some(total) => {
                prop_assert_eq!(u32::from(score(&hand)), total);
                prop_assert!(!is_bust(&hand));
            }
            None => {
                prop_assert_eq!(u32::from(score(&hand)), hard);
                prop_assert!(is_bust(&hand));
            }
        }
    }

    #[test]
    fn soft_hands_count_an_ace_as_eleven(hand in any_hand()) {
        if is_soft(&hand) {
            prop_assert_eq!(u32::from(score(&hand)), hard_total(&hand) + 10);
        } else {
            prop_assert_eq!(u32::from(score(&hand)), hard_total(&hand));
        }
    }

    #[test]
    fn dealer_finishes_at_17_or_more(seed in any::<u64>()) {
        let mut session = Session::new(SessionOptions::default(), seed);
        session.handle(Action::Deal);
        let initial = session.dealer_hand().score();
        session.handle(Action::Stand);
        let drawn = session.advance();

        prop_assert_eq!(session.state(), RoundState::Result);
        prop_assert!(session.dealer_hand().score() >= DEALER_STANDS_ON);
        if initial >= DEALER_STANDS_ON {
            prop_assert!(drawn.is_empty());
        } else {
            prop_assert!(!drawn.is_empty());
            let before_last = &session.dealer_hand().cards()[..session.dealer_hand().len() - 1];
            prop_assert!(score(before_last) < DEALER_STANDS_ON);
        }
    }
}
