//! Introduction and elimination rules of minimal logic.
//!
//! Every rule is a total generic function: its signature is the rule and
//! its body is the derivation. None of them eliminates `⊥`; that is the
//! step [`super::intuitionistic::absurd`] adds.

use super::types::{Bottom, Either, Not, Prop};

// ── → (implication) ─────────────────────────────────────────────────

/// `B ===> A → B`
///
/// The deduction theorem in its weakest form: a witness of `B` proves `B`
/// under any extra hypothesis `A`.
#[must_use]
pub fn imply_intro<A, B: Prop>(b: B) -> impl Fn(A) -> B {
    move |_: A| b.clone()
}

/// `A, A → B ===> B` (modus ponens)
pub fn imply_elim<A, B>(a: A, f: impl FnOnce(A) -> B) -> B {
    f(a)
}

// ── ∧ (conjunction) ─────────────────────────────────────────────────

/// `A, B ===> A ∧ B`
#[must_use]
pub const fn and_intro<A, B>(a: A, b: B) -> (A, B) {
    (a, b)
}

/// `A ∧ B ===> A`
#[must_use]
pub fn and_elim1<A, B>(ab: (A, B)) -> A {
    ab.0
}

/// `A ∧ B ===> B`
#[must_use]
pub fn and_elim2<A, B>(ab: (A, B)) -> B {
    ab.1
}

// ── ∨ (disjunction) ─────────────────────────────────────────────────

/// `A ===> A ∨ B`
#[must_use]
pub const fn or_intro1<A, B>(a: A) -> Either<A, B> {
    Either::Left(a)
}

/// `B ===> A ∨ B`
#[must_use]
pub const fn or_intro2<A, B>(b: B) -> Either<A, B> {
    Either::Right(b)
}

/// `A ∨ B, A → C, B → C ===> C` (proof by cases)
pub fn or_elim<A, B, C>(e: Either<A, B>, ac: impl FnOnce(A) -> C, bc: impl FnOnce(B) -> C) -> C {
    match e {
        Either::Left(a) => ac(a),
        Either::Right(b) => bc(b),
    }
}

// ── ¬ (negation) ────────────────────────────────────────────────────

/// `A ⊢ ⊥ ===> ⊢ ¬A`
///
/// A witness of `⊥` refutes anything. The resulting negation is well typed
/// but can only be built where `⊥` is already in hand, so outside a
/// contradictory context this rule is never applied.
#[must_use]
pub fn not_intro<A>(bottom: Bottom) -> Not<A> {
    Not::new(move |_: A| bottom)
}

/// `A, ¬A ===> ⊥`
pub fn not_elim<A>(a: A, not_a: Not<A>) -> Bottom {
    not_a.refute(a)
}
