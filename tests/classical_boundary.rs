//! The classical stubs unwind with the designated boundary error and
//! nothing else.
//!
//! Built only with the `classical` feature.

use std::rc::Rc;

use curry_howard::deduction::classical::{
    de_morgan4, double_negation_elim, excluded_middle, peirce_law,
};
use curry_howard::deduction::{Bottom, Either, Imp, Not, double_negation_intro};
use curry_howard::{ClassicalLaw, ProofError};
use rstest::rstest;
use test_helpers::caught_payload;

fn boundary(law: ClassicalLaw) -> Option<ProofError> {
    Some(ProofError::ClassicalBoundary { law })
}

#[test]
fn excluded_middle_signals_the_boundary() {
    let caught = caught_payload::<ProofError, _>(excluded_middle::<i32>);
    assert_eq!(caught, boundary(ClassicalLaw::ExcludedMiddle));
}

#[test]
fn double_negation_elim_signals_the_boundary_even_for_a_proved_double_negation() {
    let caught = caught_payload::<ProofError, _>(|| double_negation_elim(double_negation_intro(1)));
    assert_eq!(caught, boundary(ClassicalLaw::DoubleNegationElimination));
}

#[test]
fn de_morgan4_signals_the_boundary() {
    let not_pair: Not<(Bottom, i32)> = Not::new(|(bottom, _): (Bottom, i32)| bottom);
    let caught = caught_payload::<ProofError, Either<Not<Bottom>, Not<i32>>>(|| de_morgan4(not_pair));
    assert_eq!(caught, boundary(ClassicalLaw::DeMorganConjunction));
}

#[test]
fn peirce_law_signals_the_boundary() {
    let premise: Imp<Imp<i32, String>, i32> = Rc::new(|_ab: Imp<i32, String>| 1);
    let caught = caught_payload::<ProofError, i32>(|| peirce_law(premise));
    assert_eq!(caught, boundary(ClassicalLaw::PeirceLaw));
}

#[rstest]
#[case::excluded_middle(ClassicalLaw::ExcludedMiddle, "classical.excluded_middle")]
#[case::peirce(ClassicalLaw::PeirceLaw, "classical.peirce_law")]
fn boundary_error_renders_its_stable_code(#[case] law: ClassicalLaw, #[case] code: &str) {
    let message = ProofError::ClassicalBoundary { law }.to_string();
    assert!(
        message.starts_with(code),
        "error for {law:?} should start with '{code}', got: {message}"
    );
}
