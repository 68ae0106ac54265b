#![no_main]
use libfuzzer_sys::fuzz_target;
use strand::Handle;

fuzz_target!(|data: &[u8]| {
    let h = Handle::from_literal(data);

    // Classifiers and conversions are total over arbitrary bytes.
    let int_shape = h.is_int();
    let _ = h.is_float();
    let _ = h.is_single_byte();
    let _ = h.to_float();
    let value = h.to_int();

    // A shape-accepted integer short enough to dodge saturation must agree
    // with the standard parser.
    if int_shape && data.len() <= 18 {
        let text = core::str::from_utf8(data).expect("integer shapes are ASCII");
        assert_eq!(value, text.parse::<i64>().expect("accepted shape parses"));
    }

    // byte_at never reaches the terminator.
    assert_eq!(h.byte_at(data.len()), None);
    if let Some(&first) = data.first() {
        assert_eq!(h.byte_at(0), Some(first));
    }
});
