use std::fmt;
use std::str::FromStr;

use super::PokerHandError;

/// Card rank or value.
/// This is basically the face value - 2
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// Strength of the value, 2 for a deuce up to 14 for an ace.
    ///
    /// ```
    /// use poker_hand_rank::core::Value;
    ///
    /// assert_eq!(2, Value::Two.weight());
    /// assert_eq!(10, Value::Ten.weight());
    /// assert_eq!(14, Value::Ace.weight());
    /// ```
    pub const fn weight(self) -> u8 {
        self as u8 + 2
    }

    /// Look up a value by its letter. Only upper case face letters are
    /// accepted.
    ///
    /// ```
    /// use poker_hand_rank::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(None, Value::from_char('t'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// The letter used for this value in card notation.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

impl TryFrom<char> for Value {
    type Error = PokerHandError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Value::from_char(c).ok_or(PokerHandError::InvalidRank(c))
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Hearts
    Heart = 1,
    /// Diamonds
    Diamond = 2,
    /// Clubs
    Club = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Look up a suit by its upper case letter.
    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'S' => Some(Suit::Spade),
            'H' => Some(Suit::Heart),
            'D' => Some(Suit::Diamond),
            'C' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = PokerHandError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Suit::from_char(c).ok_or(PokerHandError::InvalidSuit(c))
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

/// Parse a two character card token such as `"AS"` or `"TD"`.
///
/// ```
/// use poker_hand_rank::core::{Card, PokerHandError, Suit, Value};
///
/// let card: Card = "QH".parse().unwrap();
/// assert_eq!(Card::new(Value::Queen, Suit::Heart), card);
///
/// assert_eq!(
///     Err(PokerHandError::InvalidCardToken("10H".to_string())),
///     "10H".parse::<Card>()
/// );
/// ```
impl FromStr for Card {
    type Err = PokerHandError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(v), Some(s), None) => Ok(Card {
                value: Value::try_from(v)?,
                suit: Suit::try_from(s)?,
            }),
            _ => Err(PokerHandError::InvalidCardToken(token.to_string())),
        }
    }
}

impl TryFrom<&str> for Card {
    type Error = PokerHandError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        token.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card {
            value: Value::Three,
            suit: Suit::Spade,
        };
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
        assert_eq!(c, Card::new(Value::Three, Suit::Spade));
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Value::Three, Suit::Spade);
        let c2 = Card::new(Value::Four, Suit::Spade);
        let c3 = Card::new(Value::Four, Suit::Club);

        // Make sure that equals works
        assert!(c1 == c1);
        // Make sure that the values are ordered
        assert!(c1 < c2);
        assert!(c2 > c1);
        // Suits only break ties between equal values.
        assert!(c3 > c2);
        assert_ne!(c2, c3);
    }

    #[test]
    fn test_value_cmp() {
        assert!(Value::Two < Value::Ace);
        assert!(Value::King < Value::Ace);
        assert_eq!(Value::Two, Value::Two);
    }

    #[test]
    fn test_weights() {
        let weights: Vec<u8> = Value::values().iter().map(|v| v.weight()).collect();
        assert_eq!((2..=14).collect::<Vec<u8>>(), weights);
    }

    #[test]
    fn test_char_round_trip() {
        for v in Value::values() {
            assert_eq!(Some(v), Value::from_char(v.to_char()));
        }
        for s in Suit::suits() {
            assert_eq!(Some(s), Suit::from_char(s.to_char()));
        }
    }

    #[test]
    fn test_lower_case_is_rejected() {
        assert_eq!(Err(PokerHandError::InvalidRank('k')), Value::try_from('k'));
        assert_eq!(Err(PokerHandError::InvalidSuit('s')), Suit::try_from('s'));
    }

    #[test]
    fn test_parse_card() {
        assert_eq!(
            Ok(Card::new(Value::Ace, Suit::Spade)),
            "AS".parse::<Card>()
        );
        assert_eq!(
            Ok(Card::new(Value::Ten, Suit::Diamond)),
            Card::try_from("TD")
        );
        assert_eq!(
            Err(PokerHandError::InvalidRank('X')),
            "XS".parse::<Card>()
        );
        assert_eq!(
            Err(PokerHandError::InvalidSuit('X')),
            "AX".parse::<Card>()
        );
        assert_eq!(
            Err(PokerHandError::InvalidCardToken("A".to_string())),
            "A".parse::<Card>()
        );
        assert_eq!(
            Err(PokerHandError::InvalidCardToken(String::new())),
            "".parse::<Card>()
        );
    }

    #[test]
    fn test_rank_checked_before_suit() {
        assert_eq!(
            Err(PokerHandError::InvalidRank('1')),
            "1x".parse::<Card>()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!("7C", Card::new(Value::Seven, Suit::Club).to_string());
        assert_eq!("TH", Card::new(Value::Ten, Suit::Heart).to_string());
    }

    #[test]
    fn test_size() {
        // Card should be really small. Hopefully just two u8's
        assert!(mem::size_of::<Card>() <= 4);
    }
}
