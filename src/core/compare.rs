use std::cmp::Ordering;

use super::{ClassifiedHand, Hand, PokerHandError};

/// Compare two classified hands by strength.
///
/// `Greater` means `a` is the stronger hand. Categories are compared
/// first by their strength constant. Hands of the same category are
/// then compared card by card on the combination, and if that is a
/// tie, card by card on the kickers. Suits never matter, so two
/// different hands can compare `Equal`.
///
/// ```
/// use std::cmp::Ordering;
/// use poker_hand_rank::core::{Hand, compare};
///
/// let wheel = Hand::new_from_str("AS 2S 3S 4S 5S").unwrap();
/// let six_high = Hand::new_from_str("6S 7S 8S 9S TS").unwrap();
///
/// assert_eq!(
///     Ordering::Less,
///     compare(wheel.classified(), six_high.classified())
/// );
/// ```
pub fn compare(a: &ClassifiedHand, b: &ClassifiedHand) -> Ordering {
    a.category()
        .strength()
        .cmp(&b.category().strength())
        .then_with(|| compare_weights(a.combination_weights(), b.combination_weights()))
        .then_with(|| compare_weights(a.kicker_weights(), b.kicker_weights()))
}

/// Same as [`compare`] for callers that may not have both hands.
///
/// Comparing against a missing hand is an error rather than an
/// ordering.
pub fn try_compare(
    a: Option<&ClassifiedHand>,
    b: Option<&ClassifiedHand>,
) -> Result<Ordering, PokerHandError> {
    match (a, b) {
        (Some(a), Some(b)) => Ok(compare(a, b)),
        _ => Err(PokerHandError::InvalidArgument),
    }
}

/// Sort hands so that the strongest comes first.
///
/// The sort is stable, hands of equal strength keep their input
/// order.
pub fn sort_strongest_first(hands: &mut [Hand]) {
    hands.sort_by(|a, b| b.cmp_strength(a));
}

/// Walk both weight lists in step, the first difference decides.
fn compare_weights(a: impl Iterator<Item = u8>, b: impl Iterator<Item = u8>) -> Ordering {
    a.zip(b)
        .map(|(x, y)| x.cmp(&y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}
