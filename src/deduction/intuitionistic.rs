//! Minimal logic plus ex falso: the intuitionistic fragment.

use super::types::{Bottom, Either, Not, Prop};

/// `⊥ ===> A` (ex falso quodlibet)
///
/// The empty match states that no case exists; no value is ever produced.
pub const fn absurd<A>(bottom: Bottom) -> A {
    match bottom {}
}

/// `A ===> ¬¬A`
#[must_use]
pub fn double_negation_intro<A: Prop>(a: A) -> Not<Not<A>> {
    Not::new(move |not_a: Not<A>| not_a.refute(a.clone()))
}

// ── ¬¬¬A ≅ ¬A ──────────────────────────────────────────────────────

/// `¬¬¬A ===> ¬A`
#[must_use]
pub fn triple_negation_to_single<A: Prop>(not_not_not_a: Not<Not<Not<A>>>) -> Not<A> {
    Not::new(move |a: A| not_not_not_a.refute(double_negation_intro(a)))
}

/// `¬A ===> ¬¬¬A`
#[must_use]
pub fn single_negation_to_triple<A: 'static>(not_a: Not<A>) -> Not<Not<Not<A>>> {
    Not::new(move |not_not_a: Not<Not<A>>| not_not_a.refute(not_a.clone()))
}

// ── De Morgan (all but ¬(A ∧ B) ===> ¬A ∨ ¬B) ───────────────────────

/// `¬(A ∨ B) ===> ¬A ∧ ¬B`
#[must_use]
pub fn de_morgan<A: 'static, B: 'static>(not_either: Not<Either<A, B>>) -> (Not<A>, Not<B>) {
    let refute_left = not_either.clone();
    (
        Not::new(move |a: A| refute_left.refute(Either::Left(a))),
        Not::new(move |b: B| not_either.refute(Either::Right(b))),
    )
}

/// `¬A ∧ ¬B ===> ¬(A ∨ B)`
#[must_use]
pub fn de_morgan2<A: 'static, B: 'static>(not_a_and_not_b: (Not<A>, Not<B>)) -> Not<Either<A, B>> {
    let (not_a, not_b) = not_a_and_not_b;
    Not::new(move |either: Either<A, B>| match either {
        Either::Left(a) => not_a.refute(a),
        Either::Right(b) => not_b.refute(b),
    })
}

/// `¬A ∨ ¬B ===> ¬(A ∧ B)`
#[must_use]
pub fn de_morgan3<A: 'static, B: 'static>(either: Either<Not<A>, Not<B>>) -> Not<(A, B)> {
    Not::new(move |(a, b): (A, B)| match &either {
        Either::Left(not_a) => not_a.refute(a),
        Either::Right(not_b) => not_b.refute(b),
    })
}
