//! Finite-state classifiers for integer and float literal shapes.
//!
//! Both machines are a tagged state enum plus a pure
//! `step(state, class) -> state` transition function, so every
//! (state, input-class) pair is directly unit-testable. They validate
//! lexical shape only; value range is out of scope.

use crate::handle::Handle;

/// Character class driving both classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteClass {
    /// `+` or `-`.
    Sign,
    /// `0` through `9`.
    Digit,
    /// `.`
    Point,
    /// `e` or `E`.
    ExponentMarker,
    /// Anything else.
    Other,
}

impl ByteClass {
    #[must_use]
    pub fn of(byte: u8) -> Self {
        match byte {
            b'+' | b'-' => Self::Sign,
            b'0'..=b'9' => Self::Digit,
            b'.' => Self::Point,
            b'e' | b'E' => Self::ExponentMarker,
            _ => Self::Other,
        }
    }
}

/// States of the integer-literal machine: `[sign] digits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntState {
    Start,
    SignSeen,
    DigitsSeen,
    /// Absorbing.
    Reject,
}

impl IntState {
    #[must_use]
    pub fn step(self, class: ByteClass) -> Self {
        use ByteClass::{Digit, Sign};
        match (self, class) {
            (Self::Start, Sign) => Self::SignSeen,
            (Self::Start | Self::SignSeen | Self::DigitsSeen, Digit) => Self::DigitsSeen,
            _ => Self::Reject,
        }
    }

    #[must_use]
    pub fn is_accepting(self) -> bool {
        self == Self::DigitsSeen
    }
}

/// States of the float-literal machine:
/// `[sign] (digits [. digits] | . digits) [(e|E) [sign] digits]`.
///
/// A trailing or bare decimal point (`"1."`, `"."`) parks the machine in
/// [`Point`](Self::Point), which is not accepting: a fraction needs at least
/// one digit after the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatState {
    Start,
    Sign,
    IntDigits,
    Point,
    FracDigits,
    Exp,
    ExpSign,
    ExpDigits,
    /// Absorbing.
    Reject,
}

impl FloatState {
    #[must_use]
    pub fn step(self, class: ByteClass) -> Self {
        use ByteClass::{Digit, ExponentMarker, Point, Sign};
        match (self, class) {
            (Self::Start, Sign) => Self::Sign,
            (Self::Start | Self::Sign, Digit) => Self::IntDigits,
            (Self::Start | Self::Sign | Self::IntDigits, Point) => Self::Point,
            (Self::IntDigits, Digit) => Self::IntDigits,
            (Self::IntDigits | Self::FracDigits, ExponentMarker) => Self::Exp,
            (Self::Point | Self::FracDigits, Digit) => Self::FracDigits,
            (Self::Exp, Sign) => Self::ExpSign,
            (Self::Exp | Self::ExpSign | Self::ExpDigits, Digit) => Self::ExpDigits,
            _ => Self::Reject,
        }
    }

    #[must_use]
    pub fn is_accepting(self) -> bool {
        matches!(self, Self::FracDigits | Self::ExpDigits)
    }

    /// States whose input prefix already denotes a numeric value. Broader
    /// than [`is_accepting`](Self::is_accepting): lenient conversion takes
    /// `"1."` as `1.0` even though the classifier rejects it.
    pub(crate) fn yields_value(self) -> bool {
        matches!(self, Self::IntDigits | Self::FracDigits | Self::ExpDigits)
    }
}

pub(crate) fn run_int(bytes: &[u8]) -> IntState {
    bytes
        .iter()
        .fold(IntState::Start, |state, &b| state.step(ByteClass::of(b)))
}

pub(crate) fn run_float(bytes: &[u8]) -> FloatState {
    bytes
        .iter()
        .fold(FloatState::Start, |state, &b| state.step(ByteClass::of(b)))
}

impl Handle {
    /// True iff the strand matches `[sign] digits`. The sentinel and the
    /// empty strand are rejected; no input reaches an accepting state.
    #[must_use]
    pub fn is_int(&self) -> bool {
        self.as_strand()
            .is_some_and(|s| run_int(s.as_bytes()).is_accepting())
    }

    /// True iff the strand matches
    /// `[sign] (digits . digits | . digits) [(e|E) [sign] digits]` or the
    /// same with an exponent directly after the integer part. The sentinel
    /// and the empty strand are rejected.
    #[must_use]
    pub fn is_float(&self) -> bool {
        self.as_strand()
            .is_some_and(|s| run_float(s.as_bytes()).is_accepting())
    }

    /// True iff the strand holds at most one byte. The sentinel is absent,
    /// not short, and reports false.
    #[must_use]
    pub fn is_single_byte(&self) -> bool {
        self.as_strand().is_some_and(|s| s.len() <= 1)
    }
}
