#![no_main]
use std::cmp::Ordering;

use libfuzzer_sys::fuzz_target;
use poker_hand_rank::core::{Card, Hand, classify, compare};

fuzz_target!(|input: ([Card; 5], [Card; 5])| {
    let (cards, other) = input;
    let classified = classify(cards);

    // Combination and kickers are exactly the input cards.
    let mut got: Vec<Card> = classified.cards().copied().collect();
    let mut want = cards.to_vec();
    got.sort();
    want.sort();
    assert_eq!(want, got);

    assert_eq!(Ordering::Equal, compare(&classified, &classified));

    // Input order never changes the outcome.
    let mut reversed = cards;
    reversed.reverse();
    assert_eq!(classified, classify(reversed));

    let other_classified = classify(other);
    assert_eq!(
        compare(&classified, &other_classified),
        compare(&other_classified, &classified).reverse()
    );

    if let Ok(hand) = Hand::new(cards) {
        assert_eq!(&classified, hand.classified());
    }
});
