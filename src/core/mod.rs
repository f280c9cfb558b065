//! This is the core module. It holds the card types, the hand
//! classifier and the comparator.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// The one error type used for every rejected input.
mod error;
pub use self::error::PokerHandError;

/// The ten hand categories.
mod category;
pub use self::category::Category;

/// 5 Card hand classification code.
mod rank;
/// Export the trait, the classifier and the results.
pub use self::rank::{ClassifiedHand, Rankable, classify, effective_weight};

/// Ordering hands by strength.
mod compare;
pub use self::compare::{compare, sort_strongest_first, try_compare};

/// Validated five card hands.
mod hand;
pub use self::hand::{HAND_SIZE, Hand};
