//! Five card poker hand ranking.
//!
//! A [`Hand`](core::Hand) is built from five distinct cards and is
//! classified once, into one of the ten standard categories from
//! High Card up to Royal Flush. Classified hands can then be ordered
//! by strength, with the ace playing low in a wheel straight.
//!
//! ```
//! use poker_hand_rank::core::{Category, Hand, sort_strongest_first};
//!
//! let mut hands: Vec<Hand> = ["KS 2H 5C JD TD", "2C 3C AC 4C 5C", "TC KC QC JC AC"]
//!     .iter()
//!     .map(|h| h.parse().unwrap())
//!     .collect();
//! sort_strongest_first(&mut hands);
//!
//! assert_eq!(Category::RoyalFlush, hands[0].category());
//! assert_eq!(Category::StraightFlush, hands[1].category());
//! assert_eq!(Category::HighCard, hands[2].category());
//! ```

/// Allow all the core poker functionality to be used
/// externally.
pub mod core;
