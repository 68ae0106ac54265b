//! Lenient numeric accessors and bounds-checked byte access.
//!
//! Conversion follows the C library's prefix discipline: skip leading ASCII
//! whitespace, then take the longest prefix that denotes a value and ignore
//! the rest. Conversion is deliberately more lenient than classification;
//! `"12a"` converts to 12 even though `is_int` rejects it.

use crate::{
    classify::{ByteClass, FloatState, IntState},
    handle::Handle,
};

impl Handle {
    /// Integer value of the longest `[whitespace] [sign] digits` prefix.
    ///
    /// Saturates at the `i64` limits instead of wrapping. The sentinel and
    /// inputs with no digit prefix yield 0.
    #[must_use]
    pub fn to_int(&self) -> i64 {
        self.as_strand()
            .map_or(0, |s| parse_int_prefix(s.as_bytes()))
    }

    /// Float value of the longest numeric prefix.
    ///
    /// The prefix is the longest run the float machine has taken through a
    /// value-bearing state, so `"1.5e"` converts as `1.5` and `"1."` as
    /// `1.0`. The sentinel and inputs with no such prefix yield 0.0.
    #[must_use]
    pub fn to_float(&self) -> f64 {
        self.as_strand()
            .map_or(0.0, |s| parse_float_prefix(s.as_bytes()))
    }

    /// The byte at `index`, or `None` when the handle is the sentinel or
    /// the index is out of range. The terminator is never reachable.
    #[must_use]
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.as_strand()
            .and_then(|s| s.as_bytes().get(index).copied())
    }
}

fn skip_ascii_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    &bytes[start..]
}

fn parse_int_prefix(bytes: &[u8]) -> i64 {
    let bytes = skip_ascii_whitespace(bytes);
    let mut state = IntState::Start;
    let mut value: i64 = 0;
    let mut negative = false;
    for &byte in bytes {
        state = state.step(ByteClass::of(byte));
        match state {
            IntState::SignSeen => negative = byte == b'-',
            IntState::DigitsSeen => {
                let digit = i64::from(byte - b'0');
                value = if negative {
                    value.saturating_mul(10).saturating_sub(digit)
                } else {
                    value.saturating_mul(10).saturating_add(digit)
                };
            }
            IntState::Start | IntState::Reject => break,
        }
    }
    value
}

fn parse_float_prefix(bytes: &[u8]) -> f64 {
    let bytes = skip_ascii_whitespace(bytes);
    let mut state = FloatState::Start;
    let mut value_end = 0;
    for (idx, &byte) in bytes.iter().enumerate() {
        state = state.step(ByteClass::of(byte));
        if state == FloatState::Reject {
            break;
        }
        if state.yields_value() {
            value_end = idx + 1;
        }
    }
    if value_end == 0 {
        return 0.0;
    }
    // The accepted prefix is sign/digit/point/exponent bytes, all ASCII.
    core::str::from_utf8(&bytes[..value_end])
        .ok()
        .and_then(|text| text.parse::<f64>().ok())
        .unwrap_or(0.0)
}
