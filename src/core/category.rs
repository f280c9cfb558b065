use std::fmt;

/// All the different possible hand categories, weakest first.
///
/// The derived ordering agrees with `Category::strength`, so
/// categories can be compared directly.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Category {
    /// The lowest category.
    /// No matches
    HighCard,
    /// One Card matches another.
    OnePair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value. Also called a set.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ten to Ace all of the same suit.
    RoyalFlush,
}

/// Every category, weakest first.
const CATEGORIES: [Category; 10] = [
    Category::HighCard,
    Category::OnePair,
    Category::TwoPair,
    Category::ThreeOfAKind,
    Category::Straight,
    Category::Flush,
    Category::FullHouse,
    Category::FourOfAKind,
    Category::StraightFlush,
    Category::RoyalFlush,
];

impl Category {
    /// Get all of the categories, weakest first.
    pub fn categories() -> [Category; 10] {
        CATEGORIES
    }

    /// Numeric strength used as the primary sort key between hands.
    ///
    /// ```
    /// use poker_hand_rank::core::Category;
    ///
    /// assert_eq!(0, Category::HighCard.strength());
    /// assert_eq!(900, Category::RoyalFlush.strength());
    /// assert!(Category::FullHouse.strength() > Category::Flush.strength());
    /// ```
    pub const fn strength(self) -> u32 {
        match self {
            Category::HighCard => 0,
            Category::OnePair => 100,
            Category::TwoPair => 200,
            Category::ThreeOfAKind => 300,
            Category::Straight => 400,
            Category::Flush => 500,
            Category::FullHouse => 600,
            Category::FourOfAKind => 700,
            Category::StraightFlush => 800,
            Category::RoyalFlush => 900,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
