use rstest::rstest;

use crate::{Handle, strand};

#[rstest]
#[case("42", true)]
#[case("-7", true)]
#[case("+0", true)]
#[case("007", true)]
#[case("", false)]
#[case("+", false)]
#[case("-", false)]
#[case("4.2", false)]
#[case("--1", false)]
#[case("+-1", false)]
#[case("12a", false)]
#[case("a12", false)]
#[case("1 2", false)]
fn integer_shapes(#[case] input: &str, #[case] accepted: bool) {
    assert_eq!(strand!(input).is_int(), accepted, "input {input:?}");
}

#[rstest]
#[case("3.14", true)]
#[case("-0.5e10", true)]
#[case(".5", true)]
#[case("+.5", true)]
#[case("2E-3", true)]
#[case("1e5", true)]
#[case("0.0", true)]
#[case("-12.5E+3", true)]
#[case("", false)]
#[case(".", false)]
#[case("1.", false)]
#[case("42", false)]
#[case("-7", false)]
#[case("e5", false)]
#[case(".e5", false)]
#[case("1.2.3", false)]
#[case("1.5e", false)]
#[case("1.5e+", false)]
#[case("--1.0", false)]
#[case("1.5f", false)]
fn float_shapes(#[case] input: &str, #[case] accepted: bool) {
    assert_eq!(strand!(input).is_float(), accepted, "input {input:?}");
}

#[test]
fn sentinel_is_rejected_by_both_machines() {
    let nas = Handle::new();
    assert!(!nas.is_int());
    assert!(!nas.is_float());
}

#[rstest]
#[case("", true)]
#[case("a", true)]
#[case("ab", false)]
fn single_byte_reporter(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(strand!(input).is_single_byte(), expected);
}

#[test]
fn single_byte_reporter_rejects_the_sentinel() {
    assert!(!Handle::new().is_single_byte());
}
