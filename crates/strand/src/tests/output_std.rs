use alloc::vec::Vec;

use crate::{Handle, strand};

fn written(h: &Handle) -> Vec<u8> {
    let mut out = Vec::new();
    h.write_to(&mut out).unwrap();
    out
}

#[test]
fn write_emits_the_raw_bytes() {
    assert_eq!(written(&strand!("hello")), b"hello");
    assert_eq!(written(&Handle::from_literal(b"a\0b")), b"a\0b");
}

#[test]
fn sentinel_and_empty_both_write_nothing() {
    assert!(written(&Handle::new()).is_empty());
    assert!(written(&Handle::empty()).is_empty());
}

#[test]
fn write_line_appends_a_single_line_feed() {
    let mut out = Vec::new();
    strand!("hi").write_line_to(&mut out).unwrap();
    assert_eq!(out, b"hi\n");

    let mut out = Vec::new();
    Handle::new().write_line_to(&mut out).unwrap();
    assert_eq!(out, b"\n");
}
