use thiserror::Error;

use super::Card;

/// This is the core error type for the library.
/// It uses `thiserror` to provide readable error messages.
///
/// Every variant is produced while building a hand from
/// user input. Classifying and comparing hands that were
/// built successfully never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerHandError {
    #[error("Invalid card format: {0:?}. Each card must be 2 characters long.")]
    InvalidCardToken(String),
    #[error("Invalid card rank: {0:?}")]
    InvalidRank(char),
    #[error("Invalid card suit: {0:?}")]
    InvalidSuit(char),
    #[error("Poker hand must contain exactly 5 cards, found {0}")]
    InvalidHandSize(usize),
    #[error("Card already added to hand {0}")]
    DuplicateCardInHand(Card),
    #[error("Can't compare against a missing hand")]
    InvalidArgument,
}
