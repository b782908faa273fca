//! Classical laws for decided propositions.
//!
//! Excluded middle is not a theorem, but a particular instance `A ∨ ¬A` may
//! well be in hand, for example when `A` is an equation between integers.
//! Given such a decision as a premise, each classical law holds for that
//! `A` by an ordinary case split, with no axiom involved.

use std::rc::Rc;

use super::types::{Either, Imp, Not, Prop};

/// `A ∨ ¬A ⊢ ¬¬A → A`
pub fn double_negation_elim_decided<A>(decision: Either<A, Not<A>>, not_not_a: &Not<Not<A>>) -> A {
    match decision {
        Either::Left(a) => a,
        Either::Right(not_a) => match not_not_a.refute(not_a) {},
    }
}

/// `A ∨ ¬A ⊢ ¬(A ∧ B) → ¬A ∨ ¬B`
#[must_use]
pub fn de_morgan4_decided<A: Prop, B: 'static>(
    decision: Either<A, Not<A>>,
    not_ab: Not<(A, B)>,
) -> Either<Not<A>, Not<B>> {
    match decision {
        Either::Left(a) => Either::Right(Not::new(move |b: B| not_ab.refute((a.clone(), b)))),
        Either::Right(not_a) => Either::Left(not_a),
    }
}

/// `A ∨ ¬A ⊢ ((A → B) → A) → A`
pub fn peirce_law_decided<A: 'static, B: 'static>(
    decision: Either<A, Not<A>>,
    aba: &Imp<Imp<A, B>, A>,
) -> A {
    match decision {
        Either::Left(a) => a,
        Either::Right(not_a) => {
            let ab: Imp<A, B> = Rc::new(move |a: A| -> B { match not_a.refute(a) {} });
            aba(ab)
        }
    }
}
