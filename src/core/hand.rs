use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use tracing::{Level, event};

use super::{Card, Category, ClassifiedHand, PokerHandError, Rankable, classify, compare};

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// A validated five card poker hand.
///
/// The hand is classified once, when it is built, and the result is
/// kept alongside the cards. Two hands are equal when they hold the
/// same cards in any order. That is not the same as being equally
/// strong, use [`Hand::cmp_strength`] for that.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    classified: ClassifiedHand,
}

impl Hand {
    /// Build a hand from five distinct cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand_rank::core::{Card, Category, Hand, PokerHandError, Suit, Value};
    ///
    /// let hand = Hand::new([
    ///     Card::new(Value::Seven, Suit::Spade),
    ///     Card::new(Value::Seven, Suit::Heart),
    ///     Card::new(Value::Seven, Suit::Club),
    ///     Card::new(Value::Seven, Suit::Diamond),
    ///     Card::new(Value::Two, Suit::Heart),
    /// ])
    /// .unwrap();
    /// assert_eq!(Category::FourOfAKind, hand.category());
    ///
    /// let ace = Card::new(Value::Ace, Suit::Spade);
    /// let king = Card::new(Value::King, Suit::Spade);
    /// assert_eq!(
    ///     Err(PokerHandError::DuplicateCardInHand(ace)),
    ///     Hand::new([ace, king, ace, king, king]).map(|_| ())
    /// );
    /// ```
    pub fn new(cards: [Card; HAND_SIZE]) -> Result<Self, PokerHandError> {
        for (i, c) in cards.iter().enumerate() {
            if cards[..i].contains(c) {
                return Err(PokerHandError::DuplicateCardInHand(*c));
            }
        }
        let classified = classify(cards);
        Ok(Self { cards, classified })
    }

    /// Parse a hand from five whitespace separated card tokens like
    /// `"KS 2H 5C JD TD"`.
    ///
    /// The token count is checked first, then every token in order,
    /// then duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand_rank::core::{Category, Hand, PokerHandError};
    ///
    /// let hand = Hand::new_from_str("TC KC QC JC AC").unwrap();
    /// assert_eq!(Category::RoyalFlush, hand.category());
    ///
    /// assert_eq!(
    ///     Err(PokerHandError::InvalidHandSize(4)),
    ///     Hand::new_from_str("TC KC QC JC").map(|_| ())
    /// );
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, PokerHandError> {
        let tokens: Vec<&str> = hand_string.split_whitespace().collect();
        if tokens.len() != HAND_SIZE {
            event!(
                Level::DEBUG,
                found = tokens.len(),
                "Rejecting hand with wrong number of cards"
            );
            return Err(PokerHandError::InvalidHandSize(tokens.len()));
        }
        let cards: Vec<Card> = tokens
            .into_iter()
            .map(Card::from_str)
            .collect::<Result<_, _>>()
            .inspect_err(|e| event!(Level::DEBUG, error = %e, "Rejecting malformed card"))?;
        Self::try_from(cards.as_slice())
    }

    /// The cards in the order they were given.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn classified(&self) -> &ClassifiedHand {
        &self.classified
    }

    pub fn category(&self) -> Category {
        self.classified.category()
    }

    /// Compare two hands by strength. `Greater` means `self` wins.
    pub fn cmp_strength(&self, other: &Hand) -> Ordering {
        compare(&self.classified, &other.classified)
    }

    /// Cards in a canonical order, used for equality and hashing.
    fn sorted_cards(&self) -> [Card; HAND_SIZE] {
        let mut sorted = self.cards;
        sorted.sort_unstable();
        sorted
    }
}

impl Rankable for Hand {
    fn classify(&self) -> ClassifiedHand {
        self.classified.clone()
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = PokerHandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| PokerHandError::InvalidHandSize(cards.len()))?;
        Self::new(cards)
    }
}

impl FromStr for Hand {
    type Err = PokerHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_cards() == other.sorted_cards()
    }
}

impl Eq for Hand {}

impl Hash for Hand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_cards().hash(state);
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_parse() {
        let hand = Hand::new_from_str("KS 2H 5C JD TD").unwrap();
        assert_eq!(Card::new(Value::King, Suit::Spade), hand.cards()[0]);
        assert_eq!(Card::new(Value::Ten, Suit::Diamond), hand.cards()[4]);
        assert_eq!(Category::HighCard, hand.category());
    }

    #[test]
    fn test_parse_extra_whitespace() {
        let hand: Hand = "  AS\tKS  QS\nJS TS ".parse().unwrap();
        assert_eq!(Category::RoyalFlush, hand.category());
    }

    #[test_log::test]
    fn test_wrong_number_of_cards() {
        assert_eq!(
            Err(PokerHandError::InvalidHandSize(0)),
            Hand::new_from_str("").map(|_| ())
        );
        assert_eq!(
            Err(PokerHandError::InvalidHandSize(0)),
            Hand::new_from_str("   ").map(|_| ())
        );
        assert_eq!(
            Err(PokerHandError::InvalidHandSize(6)),
            Hand::new_from_str("AS KS QS JS TS 9S").map(|_| ())
        );
    }

    #[test]
    fn test_count_checked_before_tokens() {
        assert_eq!(
            Err(PokerHandError::InvalidHandSize(3)),
            Hand::new_from_str("XX YY ZZ").map(|_| ())
        );
    }

    #[test_log::test]
    fn test_bad_tokens() {
        assert_eq!(
            Err(PokerHandError::InvalidCardToken("10S".to_string())),
            Hand::new_from_str("10S KS QS JS 9S").map(|_| ())
        );
        assert_eq!(
            Err(PokerHandError::InvalidRank('1')),
            Hand::new_from_str("1S KS QS JS 9S").map(|_| ())
        );
        assert_eq!(
            Err(PokerHandError::InvalidSuit('s')),
            Hand::new_from_str("As KS QS JS 9S").map(|_| ())
        );
    }

    #[test]
    fn test_first_bad_token_is_reported() {
        assert_eq!(
            Err(PokerHandError::InvalidSuit('X')),
            Hand::new_from_str("AX 1S QS JS 9S").map(|_| ())
        );
    }

    #[test]
    fn test_duplicate_card() {
        assert_eq!(
            Err(PokerHandError::DuplicateCardInHand(Card::new(
                Value::Queen,
                Suit::Spade
            ))),
            Hand::new_from_str("AS QS KS QS 9S").map(|_| ())
        );
    }

    #[test]
    fn test_try_from_slice() {
        let cards = [
            Card::new(Value::Ace, Suit::Spade),
            Card::new(Value::King, Suit::Spade),
        ];
        assert_eq!(
            Err(PokerHandError::InvalidHandSize(2)),
            Hand::try_from(&cards[..]).map(|_| ())
        );
    }

    #[test]
    fn test_same_cards_same_order() {
        let hand1 = Hand::new_from_str("AS KS QS JS TS").unwrap();
        let hand2 = Hand::new_from_str("AS KS QS JS TS").unwrap();
        assert_eq!(hand1, hand2);
    }

    #[test]
    fn test_same_cards_different_order() {
        let hand1 = Hand::new_from_str("9D KC 6H 8S 5C").unwrap();
        let hand2 = Hand::new_from_str("KC 9D 8S 6H 5C").unwrap();
        assert_eq!(hand1, hand2);

        let mut set = HashSet::new();
        set.insert(hand1);
        assert!(set.contains(&hand2));
    }

    #[test]
    fn test_different_cards() {
        let hand1 = Hand::new_from_str("9D KC 6H 3S 5C").unwrap();
        let hand2 = Hand::new_from_str("KC TS 8S 6H 5C").unwrap();
        assert_ne!(hand1, hand2);
    }

    #[test]
    fn test_equal_strength_is_not_equality() {
        let hand1 = Hand::new_from_str("AS KS QS JS TS").unwrap();
        let hand2 = Hand::new_from_str("AH KH QH JH TH").unwrap();
        assert_ne!(hand1, hand2);
        assert_eq!(Ordering::Equal, hand1.cmp_strength(&hand2));
    }

    #[test]
    fn test_kicker_decides() {
        let hand1 = Hand::new_from_str("KH KD KC KS JC").unwrap();
        let hand2 = Hand::new_from_str("KH KD KC KS 3C").unwrap();
        assert_eq!(Ordering::Greater, hand1.cmp_strength(&hand2));
        assert_eq!(Ordering::Less, hand2.cmp_strength(&hand1));
    }

    #[test]
    fn test_rankable_returns_stored_classification() {
        let hand = Hand::new_from_str("3S 3H 3C 5D 5H").unwrap();
        assert_eq!(hand.classified(), &hand.classify());
    }

    #[test]
    fn test_display_keeps_input_order() {
        let hand = Hand::new_from_str("2C 3C AC 4C 5C").unwrap();
        assert_eq!("2C 3C AC 4C 5C", hand.to_string());
        assert_eq!(hand, hand.to_string().parse::<Hand>().unwrap());
    }
}
