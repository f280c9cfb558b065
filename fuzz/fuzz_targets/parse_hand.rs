#![no_main]
use std::str;

use libfuzzer_sys::fuzz_target;
use poker_hand_rank::core::Hand;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = Hand::new_from_str(s) {
            let again = Hand::new_from_str(&h.to_string()).unwrap();
            assert_eq!(h, again);
            assert_eq!(h.classified(), again.classified());
        }
    }
});
