//! Double-negation translation of classical theorems.
//!
//! By Glivenko's theorem every classical propositional theorem `X` has an
//! intuitionistic proof of `¬¬X`. Each function here proves such a
//! translation; none of them concludes a classical `X` directly, and none
//! of them uses an axiom beyond the intuitionistic rules.

use std::rc::Rc;

use super::minimal::not_elim;
use super::types::{Either, Imp, Not, Prop};

/// `¬¬(A ∨ ¬A)` (excluded middle, translated)
///
/// Given a refutation of `A ∨ ¬A`, refuting `left(a)` for any `a` yields
/// `¬A`, and then refuting `right(¬A)` yields `⊥`.
#[must_use]
pub fn excluded_middle_il<A: 'static>() -> Not<Not<Either<A, Not<A>>>> {
    Not::new(|not_either: Not<Either<A, Not<A>>>| {
        let refute_left = not_either.clone();
        let not_a = Not::new(move |a: A| refute_left.refute(Either::Left(a)));
        not_either.refute(Either::Right(not_a))
    })
}

/// `¬¬¬¬A ===> ¬¬A` (double-negation elimination, translated)
#[must_use]
pub fn double_negation_elim_il<A: 'static>(
    not_not_not_not_a: Not<Not<Not<Not<A>>>>,
) -> Not<Not<A>> {
    Not::new(move |not_a: Not<A>| {
        not_not_not_not_a.refute(Not::new(move |not_not_a: Not<Not<A>>| {
            not_not_a.refute(not_a.clone())
        }))
    })
}

/// `¬¬¬(A ∧ B) ===> ¬¬(¬A ∨ ¬B)` (the fourth De Morgan law, translated)
///
/// Three nested refutations: assume `¬(¬A ∨ ¬B)`; to use the premise,
/// prove `¬¬(A ∧ B)` by assuming `¬(A ∧ B)`; then `¬B` follows because a
/// `b` would make `¬A` derivable, contradicting the first assumption.
#[must_use]
pub fn de_morgan4_il<A: 'static, B: Prop>(
    not_not_not_ab: Not<Not<Not<(A, B)>>>,
) -> Not<Not<Either<Not<A>, Not<B>>>> {
    Not::new(move |not_either: Not<Either<Not<A>, Not<B>>>| {
        let not_not_ab = Not::new(move |not_ab: Not<(A, B)>| {
            let refute_left = not_either.clone();
            let not_b = Not::new(move |b: B| {
                let refute_pair = not_ab.clone();
                let not_a = Not::new(move |a: A| refute_pair.refute((a, b.clone())));
                refute_left.refute(Either::Left(not_a))
            });
            not_either.refute(Either::Right(not_b))
        });
        not_not_not_ab.refute(not_not_ab)
    })
}

/// `¬¬((A → B) → A) ===> ¬¬A` (Peirce's law, translated)
///
/// Under `¬A`, every `A` is absurd, which supplies the `A → B` the premise
/// needs; the resulting `A` then meets `¬A`.
#[must_use]
pub fn peirce_law_il<A: 'static, B: 'static>(
    not_not_peirce: Not<Not<Imp<Imp<A, B>, A>>>,
) -> Not<Not<A>> {
    Not::new(move |not_a: Not<A>| {
        let not_peirce = Not::new(move |aba: Imp<Imp<A, B>, A>| {
            let refute_a = not_a.clone();
            let ab: Imp<A, B> =
                Rc::new(move |a: A| -> B { match not_elim(a, refute_a.clone()) {} });
            not_a.refute(aba(ab))
        });
        not_not_peirce.refute(not_peirce)
    })
}

#[cfg(test)]
#[path = "glivenko_tests.rs"]
mod tests;
