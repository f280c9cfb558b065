use std::cmp::{Ordering, Reverse};
use std::fmt;

use tracing::{Level, event};

use super::{Card, Category, Value, compare};

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u16 = 0b1_0000_0000_1111;
/// Bit mask for ten through ace.
const BROADWAY: u16 = 0b1_1111_0000_0000;
/// Five values in a row starting at the lowest bit.
const FIVE_IN_A_ROW: u16 = 0b1_1111;

/// The weight a card carries while ordering a classified hand.
///
/// This is the value's normal weight except for an ace playing low
/// in a wheel straight, where it counts as 1. The card itself is
/// never changed.
///
/// ```
/// use poker_hand_rank::core::{Card, Suit, Value, effective_weight};
///
/// let ace = Card::new(Value::Ace, Suit::Spade);
/// assert_eq!(14, effective_weight(ace, false));
/// assert_eq!(1, effective_weight(ace, true));
///
/// let five = Card::new(Value::Five, Suit::Spade);
/// assert_eq!(5, effective_weight(five, true));
/// ```
pub fn effective_weight(card: Card, ace_low: bool) -> u8 {
    if ace_low && card.value == Value::Ace {
        1
    } else {
        card.value.weight()
    }
}

/// The kind of straight found in a set of values.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Straight {
    /// Five consecutive values.
    Regular,
    /// Ace, two, three, four, five.
    Wheel,
}

/// Value and suit frequency tables for one five card hand.
#[derive(Debug)]
struct Frequencies {
    value_counts: [u8; 13],
    suit_counts: [u8; 4],
    // One bit per distinct value present.
    value_set: u16,
}

impl Frequencies {
    fn new(cards: &[Card; 5]) -> Self {
        let mut value_counts = [0; 13];
        let mut suit_counts = [0; 4];
        let mut value_set: u16 = 0;
        for c in cards {
            value_counts[c.value as usize] += 1;
            suit_counts[c.suit as usize] += 1;
            value_set |= 1u16 << (c.value as u16);
        }
        Self {
            value_counts,
            suit_counts,
            value_set,
        }
    }

    fn is_flush(&self) -> bool {
        self.suit_counts.contains(&5)
    }

    fn straight(&self) -> Option<Straight> {
        if self.value_set == WHEEL {
            Some(Straight::Wheel)
        } else if self.value_set.count_ones() == 5
            && self.value_set >> self.value_set.trailing_zeros() == FIVE_IN_A_ROW
        {
            Some(Straight::Regular)
        } else {
            None
        }
    }

    fn count(&self, card: &Card) -> u8 {
        self.value_counts[card.value as usize]
    }

    /// Counts of every value present, largest first.
    ///
    /// A full house is `[3, 2]`, two pair is `[2, 2, 1]`.
    fn shape(&self) -> Vec<u8> {
        let mut shape: Vec<u8> = self
            .value_counts
            .iter()
            .copied()
            .filter(|&n| n > 0)
            .collect();
        shape.sort_unstable_by(|a, b| b.cmp(a));
        shape
    }
}

/// The outcome of classifying five cards: the category, the
/// cards that make up the named pattern, and the kickers.
///
/// Both card lists are sorted by descending effective weight, with
/// suits breaking ties so that every ordering of the same five
/// cards produces identical lists.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassifiedHand {
    category: Category,
    combination: Vec<Card>,
    kickers: Vec<Card>,
    ace_low: bool,
}

impl ClassifiedHand {
    pub fn category(&self) -> Category {
        self.category
    }

    /// The cards forming the named pattern, strongest first.
    pub fn combination(&self) -> &[Card] {
        &self.combination
    }

    /// The cards outside the pattern, strongest first.
    pub fn kickers(&self) -> &[Card] {
        &self.kickers
    }

    /// Is this a wheel straight or straight flush, with the ace
    /// playing low?
    pub fn is_ace_low(&self) -> bool {
        self.ace_low
    }

    /// The card that leads the ordering of this hand. For a wheel
    /// this is the five.
    pub fn high_card(&self) -> Option<Card> {
        self.combination
            .first()
            .or_else(|| self.kickers.first())
            .copied()
    }

    pub fn combination_weights(&self) -> impl Iterator<Item = u8> + '_ {
        self.combination
            .iter()
            .map(move |c| effective_weight(*c, self.ace_low))
    }

    pub fn kicker_weights(&self) -> impl Iterator<Item = u8> + '_ {
        self.kickers
            .iter()
            .map(move |c| effective_weight(*c, self.ace_low))
    }

    /// Every card of the hand, combination first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.combination.iter().chain(self.kickers.iter())
    }

    /// Compare by hand strength. See [`compare`](super::compare).
    pub fn cmp_strength(&self, other: &ClassifiedHand) -> Ordering {
        compare(self, other)
    }
}

impl fmt::Display for ClassifiedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        if !self.combination.is_empty() {
            f.write_str(" [")?;
            write_cards(f, &self.combination)?;
            f.write_str("]")?;
        }
        if !self.kickers.is_empty() {
            f.write_str(" kickers [")?;
            write_cards(f, &self.kickers)?;
            f.write_str("]")?;
        }
        Ok(())
    }
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (i, c) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", c)?;
    }
    Ok(())
}

/// Anything that can be classified as a five card poker hand.
pub trait Rankable {
    /// Determine the category of this hand and split its cards
    /// into combination and kickers.
    fn classify(&self) -> ClassifiedHand;
}

impl Rankable for [Card; 5] {
    fn classify(&self) -> ClassifiedHand {
        classify(*self)
    }
}

/// Classify five cards.
///
/// This never fails. Validating card count and duplicates is the
/// job of [`Hand`](super::Hand); given the same card twice this still
/// returns a classification that partitions the input.
///
/// ```
/// use poker_hand_rank::core::{Card, Category, classify};
///
/// let cards: Vec<Card> = ["AS", "2S", "3S", "4S", "5S"]
///     .iter()
///     .map(|t| t.parse().unwrap())
///     .collect();
/// let classified = classify(cards.try_into().unwrap());
///
/// assert_eq!(Category::StraightFlush, classified.category());
/// assert_eq!("5S", classified.high_card().unwrap().to_string());
/// assert!(classified.kickers().is_empty());
/// ```
pub fn classify(cards: [Card; 5]) -> ClassifiedHand {
    let freq = Frequencies::new(&cards);
    let flush = freq.is_flush();
    let straight = freq.straight();
    let shape = freq.shape();

    let category = match (straight, flush, shape.as_slice()) {
        (Some(_), true, _) if freq.value_set == BROADWAY => Category::RoyalFlush,
        (Some(_), true, _) => Category::StraightFlush,
        // Five of one value can only happen with a repeated card.
        (_, _, [4..=5, ..]) => Category::FourOfAKind,
        (_, _, [3, 2]) => Category::FullHouse,
        (_, true, _) => Category::Flush,
        (Some(_), false, _) => Category::Straight,
        (_, _, [3, ..]) => Category::ThreeOfAKind,
        (_, _, [2, 2, ..]) => Category::TwoPair,
        (_, _, [2, ..]) => Category::OnePair,
        _ => Category::HighCard,
    };
    let ace_low = straight == Some(Straight::Wheel)
        && matches!(category, Category::StraightFlush | Category::Straight);

    let (mut combination, mut kickers): (Vec<Card>, Vec<Card>) = match category {
        Category::RoyalFlush
        | Category::StraightFlush
        | Category::Flush
        | Category::Straight => (cards.to_vec(), Vec::new()),
        Category::FourOfAKind => cards.iter().partition(|c| freq.count(c) >= 4),
        Category::FullHouse | Category::ThreeOfAKind => {
            cards.iter().partition(|c| freq.count(c) == 3)
        }
        Category::TwoPair | Category::OnePair => cards.iter().partition(|c| freq.count(c) == 2),
        Category::HighCard => (Vec::new(), cards.to_vec()),
    };
    sort_descending(&mut combination, ace_low);
    sort_descending(&mut kickers, ace_low);

    event!(Level::TRACE, %category, ace_low, "Classified hand");

    ClassifiedHand {
        category,
        combination,
        kickers,
        ace_low,
    }
}

fn sort_descending(cards: &mut [Card], ace_low: bool) {
    cards.sort_unstable_by_key(|c| (Reverse(effective_weight(*c, ace_low)), c.suit));
}
