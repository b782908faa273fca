//! Behaviour-driven tests for continuations, `call/cc`, and the CPS
//! transform.

use std::cell::RefCell;
use std::rc::Rc;

use curry_howard::deduction::{
    Bottom, Cont, Imp, Not, call_cc, contraposition, cps_transform, double_negation_elim_call_cc,
    from_cps, from_cps_erased, to_cps, to_cps_at,
};
use rstest::rstest;
use test_helpers::{caught_refutation, refute};

/// A consumer that records every value delivered to it.
fn recording_consumer<A: Clone + 'static>() -> (Rc<RefCell<Vec<A>>>, impl Fn(A) -> A + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |a: A| {
        sink.borrow_mut().push(a.clone());
        a
    })
}

// ── Given an early exit, call/cc delivers the exit value only ───────

#[rstest]
#[case::small(1, 2)]
#[case::negative(-5, 5)]
#[case::equal_magnitude(100, -100)]
fn given_an_exit_partway_when_run_then_only_the_exit_value_is_delivered(
    #[case] v: i32,
    #[case] w: i32,
) {
    let computation: Cont<i32, i32> = call_cc(move |exit: Imp<i32, Cont<i32, String>>| {
        exit(v).flat_map(move |_unreachable: String| Cont::pure(w))
    });
    let (seen, consumer) = recording_consumer::<i32>();
    assert_eq!(computation.run(consumer), v);
    assert_eq!(*seen.borrow(), vec![v]);
}

#[test]
fn given_an_exit_after_work_when_run_then_the_rest_of_the_builder_is_skipped() {
    let skipped = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&skipped);
    let computation: Cont<i32, &'static str> =
        call_cc(move |exit: Imp<&'static str, Cont<i32, ()>>| {
            let later = Rc::clone(&flag);
            Cont::pure(10)
                .flat_map(move |_: i32| exit("exit"))
                .flat_map(move |(): ()| {
                    *later.borrow_mut() = true;
                    Cont::pure("continued")
                })
        });
    let (seen, consumer) = recording_consumer::<&'static str>();
    computation.run(move |s| {
        consumer(s);
        0
    });
    assert_eq!(*seen.borrow(), vec!["exit"]);
    assert!(!*skipped.borrow());
}

#[test]
fn given_no_exit_when_run_then_the_builder_result_is_delivered_once() {
    let computation: Cont<i32, i32> =
        call_cc(|_exit: Imp<i32, Cont<i32, i32>>| Cont::pure(3).flat_map(|n| Cont::pure(n + 1)));
    let (seen, consumer) = recording_consumer::<i32>();
    assert_eq!(computation.run(consumer), 4);
    assert_eq!(*seen.borrow(), vec![4]);
}

// ── Given a double negation in CPS, call/cc eliminates it ───────────

#[rstest]
#[case::zero(0)]
#[case::answer(42)]
fn given_a_refuting_double_negation_when_eliminated_then_the_witness_escapes(#[case] n: i64) {
    let recovered: Cont<String, i64> =
        double_negation_elim_call_cc(move |neg: Imp<i64, Cont<String, Bottom>>| neg(n));
    assert_eq!(recovered.run(|m| m.to_string()), n.to_string());
}

// ── Given a value, the CPS transform round-trips ────────────────────

#[rstest]
#[case::integer(7)]
#[case::negative(-1)]
fn given_an_integer_when_suspended_then_resumed_it_is_unchanged(#[case] n: i32) {
    assert_eq!(from_cps(to_cps(n)), n);
}

#[test]
fn given_a_string_when_suspended_then_resumed_it_is_unchanged() {
    assert_eq!(from_cps(to_cps(String::from("cps"))), "cps");
}

#[test]
fn given_a_fixed_answer_type_when_erased_then_the_value_is_recovered() {
    let cps = to_cps_at::<String, Box<dyn std::any::Any>>(String::from("erased"));
    assert_eq!(from_cps_erased(move |k| cps(k)).as_deref(), Ok("erased"));
}

// ── Given an implication, its CPS transform and contrapositive ──────

#[test]
fn given_an_implication_when_transformed_then_the_continuation_runs_after_it() {
    let transformed = cps_transform(|n: i32| n * 3);
    let to_text: Imp<i32, String> = Rc::new(|n: i32| n.to_string());
    assert_eq!(transformed(to_text)(4), "12");
}

#[test]
fn given_a_refuted_conclusion_when_contraposed_then_the_premise_is_refuted() {
    let not_length = Not::new(|len: usize| -> Bottom { refute(len) });
    let not_text = contraposition(|s: &'static str| s.len())(not_length);
    assert_eq!(caught_refutation::<usize, _>(|| not_text.refute("four")), Some(4));
}
