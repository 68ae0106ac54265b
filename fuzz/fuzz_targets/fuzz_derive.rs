#![no_main]
use core::cmp::Ordering;

use libfuzzer_sys::fuzz_target;
use strand::Handle;

fuzz_target!(|pair: (&[u8], &[u8])| {
    let (a, b) = pair;
    let ha = Handle::from_literal(a);
    let hb = Handle::from_literal(b);

    assert!(ha.reverse().reverse().identical(&ha));
    assert!(ha.duplicate().identical(&ha));

    let joined = ha.concat(&hb);
    assert_eq!(joined.as_strand().map(strand::Strand::len), Some(a.len() + b.len()));

    match ha.compare(&hb) {
        Some(Ordering::Equal) => assert!(ha.identical(&hb)),
        Some(order) => {
            assert!(!ha.identical(&hb));
            assert_eq!(hb.compare(&ha), Some(order.reverse()));
        }
        None => unreachable!("both operands are live"),
    }
});
