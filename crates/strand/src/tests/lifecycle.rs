use crate::{Handle, sentinel_array, strand};

#[test]
fn new_handle_is_the_sentinel() {
    let h = Handle::new();
    assert!(h.is_nas());
    assert!(!h.is_empty());
    assert!(h.as_strand().is_none());
}

#[test]
fn empty_strand_is_live_and_distinct_from_sentinel() {
    let empty = Handle::empty();
    assert!(!empty.is_nas());
    assert!(empty.is_empty());
    assert!(!empty.identical(&Handle::new()));
    // The allocation still carries the terminator.
    assert_eq!(empty.as_strand().unwrap().as_bytes_with_nul(), b"\0");
}

#[test]
fn release_frees_and_is_idempotent() {
    let mut h = strand!("abc");
    assert!(!h.is_nas());
    h.release();
    assert!(h.is_nas());
    h.release();
    assert!(h.is_nas());
}

#[test]
fn take_transfers_ownership_and_leaves_the_sentinel() {
    let mut original = strand!("payload");
    let moved = original.take();
    assert!(original.is_nas());
    assert_eq!(moved.as_strand().unwrap().as_bytes(), b"payload");
    // A second take hands back the sentinel.
    assert!(original.take().is_nas());
}

#[test]
fn from_literal_empty_source_yields_live_empty() {
    let h = Handle::from_literal("");
    assert!(!h.is_nas());
    assert!(h.is_empty());
}

#[test]
fn terminator_is_out_of_band() {
    let h = strand!("ab");
    let s = h.as_strand().unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s.as_bytes(), b"ab");
    assert_eq!(s.as_bytes_with_nul(), b"ab\0");
    assert_eq!(s.as_bytes_with_nul().len(), s.len() + 1);
}

#[test]
fn interior_nul_bytes_are_payload() {
    let h = Handle::from_literal(b"a\0b");
    let s = h.as_strand().unwrap();
    assert_eq!(s.len(), 3);
    assert_eq!(s.as_bytes(), b"a\0b");
}

#[test]
fn sentinel_array_is_all_sentinels() {
    let handles = sentinel_array(4);
    assert_eq!(handles.len(), 4);
    assert!(handles.iter().all(Handle::is_nas));
    assert!(sentinel_array(0).is_empty());
}

#[test]
fn handle_adopts_a_built_strand() {
    let mut builder = crate::StrandBuilder::new().unwrap();
    builder.extend_from_slice(b"built").unwrap();
    let h = Handle::from(builder.finish().unwrap());
    assert_eq!(h.as_strand().unwrap().as_bytes(), b"built");
}

#[test]
fn identical_policy_over_sentinels() {
    assert!(Handle::new().identical(&Handle::new()));
    assert!(!Handle::new().identical(&Handle::empty()));
    assert!(!Handle::empty().identical(&Handle::new()));
    assert!(Handle::empty().identical(&Handle::empty()));
}
