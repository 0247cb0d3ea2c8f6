//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Session`] type that runs the round state machine:
//! dealing, player actions, dealer auto-play, and payout resolution. Drawing
//! and input polling are left to the caller, which feeds [`Action`]s in and
//! reads a [`TableView`] back out each frame.
//!
//! # Example
//!
//! ```
//! use blackjack_table::{Action, RoundState, Session, SessionOptions};
//!
//! let mut session = Session::new(SessionOptions::default(), 42);
//! session.handle(Action::Deal);
//! assert_eq!(session.state(), RoundState::PlayerTurn);
//!
//! session.handle(Action::Stand);
//! let _dealer_draws = session.advance();
//! assert_eq!(session.state(), RoundState::Result);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DeckError};
pub use hand::Hand;
pub use options::{RoundingMode, SessionOptions};
pub use result::{Outcome, RoundResult};
pub use session::{Action, DEALER_STANDS_ON, Message, RoundState, Session};
pub use view::{CardView, TableView};
