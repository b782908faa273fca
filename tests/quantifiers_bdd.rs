//! Behaviour-driven tests for quantifier duality and the combinator page.

use std::any::Any;
use std::rc::Rc;

use curry_howard::combinators::{i, k, s};
use curry_howard::deduction::Imp;
use curry_howard::quantifiers::{
    AnyP, ForAll, ForAllP, Observed, P, XToBool, any_to_bool, exists_p_to_forall,
    exists_to_forall, forall_p_to_exists, forall_to_exists, forall_x_protocol_to_bool,
    forall_x_to_bool, protocol_to_bool, some_protocol_to_bool,
};
use rstest::rstest;

/// A capability witness with a type of its own.
#[derive(Debug, Clone)]
struct Label {
    text: String,
}

impl P for Label {
    fn value(&self) -> String {
        self.text.clone()
    }
}

/// A second, unrelated witness type.
struct Counter(u32);

impl P for Counter {
    fn value(&self) -> String {
        "#".repeat(usize::try_from(self.0).unwrap_or_default())
    }
}

// ── Given the unbounded quantifier, both sides agree ────────────────

#[test]
fn given_a_generic_proof_when_moved_to_the_existential_then_it_agrees() {
    let exists = forall_to_exists(XToBool);
    assert_eq!(exists(Box::new(5_i32)), forall_x_to_bool(5_i32));
    assert_eq!(exists(Box::new("s")), forall_x_to_bool("s"));
}

#[test]
fn given_an_existential_proof_when_moved_to_the_generic_then_it_agrees() {
    let is_integer = |any: Box<dyn Any>| any.is::<i32>();
    let forall = exists_to_forall(is_integer);
    assert!(forall.call(3_i32));
    assert!(!forall.call("three"));
    assert_eq!(exists_to_forall(any_to_bool).call(()), any_to_bool(Box::new(())));
}

// ── Given the bounded quantifier, entry points agree ────────────────

#[rstest]
#[case::empty("")]
#[case::word("witness")]
fn given_a_bounded_witness_when_dispatched_statically_or_dynamically_then_results_agree(
    #[case] text: &str,
) {
    let label = Label {
        text: text.to_owned(),
    };
    let expected = forall_x_protocol_to_bool(&label);
    assert_eq!(expected, !text.is_empty());
    assert_eq!(protocol_to_bool(&label), expected);
    assert_eq!(some_protocol_to_bool(&label), expected);
    assert_eq!(forall_p_to_exists(Observed)(AnyP::erase(&label)), expected);
}

#[test]
fn given_mixed_witnesses_behind_trait_objects_then_erasure_keeps_their_projection() {
    let witnesses: Vec<Box<dyn P>> = vec![
        Box::new(Label {
            text: String::from("x"),
        }),
        Box::new(Counter(0)),
        Box::new(Counter(3)),
    ];
    let projected: Vec<String> = witnesses
        .iter()
        .map(|p| AnyP::erase(p.as_ref()).value)
        .collect();
    assert_eq!(projected, vec!["x", "", "###"]);
    let observed: Vec<bool> = witnesses.iter().map(|p| protocol_to_bool(p.as_ref())).collect();
    assert_eq!(observed, vec![true, false, true]);
}

#[test]
fn given_an_existential_bounded_proof_when_generalised_then_each_type_is_erased_first() {
    let length = exists_p_to_forall(|p: AnyP| p.value.len());
    assert_eq!(length.call(&Counter(4)), 4);
    assert_eq!(
        length.call(&Label {
            text: String::from("ab")
        }),
        2
    );
}

// ── Given S and K, S K K is the identity ────────────────────────────

#[rstest]
#[case::greeting("hello")]
#[case::empty("")]
fn given_a_string_when_passed_through_skk_then_it_is_unchanged(#[case] text: &str) {
    assert_eq!(i(text.to_owned()), text);
}

#[rstest]
#[case::positive(123)]
#[case::negative(-8)]
fn given_an_integer_when_passed_through_skk_then_it_is_unchanged(#[case] n: i64) {
    assert_eq!(i(n), n);
}

#[test]
fn given_k_twice_when_combined_by_s_then_the_first_argument_survives() {
    let first: Imp<char, Imp<Imp<char, char>, char>> = Rc::new(k::<char, Imp<char, char>>);
    let second: Imp<char, Imp<char, char>> = Rc::new(k::<char, char>);
    assert_eq!(s(first)(second)('z'), 'z');
}
