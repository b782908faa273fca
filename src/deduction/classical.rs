//! The classical side of the boundary.
//!
//! These four laws are classically valid and intuitionistically
//! unprovable. Each signature type-checks, which shows the statement is
//! expressible, but no body can produce its conclusion from the rules of
//! the intuitionistic fragment. Every function here therefore unwinds with
//! [`ProofError::ClassicalBoundary`] naming its law. Nothing else in this
//! crate calls them.
//!
//! The module only exists with the `classical` feature; without it the
//! crate has no way to state these laws as proofs at all.
//!
//! Each law does follow from excluded middle. The derivations, with the
//! excluded-middle instance taken as a premise instead of an axiom, are in
//! [`super::decidable`].

use std::panic;

use super::types::{Either, Imp, Not};
use crate::error::{ClassicalLaw, ProofError};

fn no_intuitionistic_proof(law: ClassicalLaw) -> ! {
    tracing::error!(law = %law, formula = law.formula(), "classical boundary reached");
    panic::panic_any(ProofError::ClassicalBoundary { law })
}

/// `A ∨ ¬A` (excluded middle)
///
/// # Panics
///
/// Always, with a [`ProofError::ClassicalBoundary`] payload.
#[must_use]
pub fn excluded_middle<A>() -> Either<A, Not<A>> {
    no_intuitionistic_proof(ClassicalLaw::ExcludedMiddle)
}

/// `¬¬A ===> A` (double-negation elimination, reductio ad absurdum)
///
/// # Panics
///
/// Always, with a [`ProofError::ClassicalBoundary`] payload.
pub fn double_negation_elim<A>(_not_not_a: Not<Not<A>>) -> A {
    no_intuitionistic_proof(ClassicalLaw::DoubleNegationElimination)
}

/// `¬(A ∧ B) ===> ¬A ∨ ¬B`
///
/// # Panics
///
/// Always, with a [`ProofError::ClassicalBoundary`] payload.
#[must_use]
pub fn de_morgan4<A, B>(_not_ab: Not<(A, B)>) -> Either<Not<A>, Not<B>> {
    no_intuitionistic_proof(ClassicalLaw::DeMorganConjunction)
}

/// `((A → B) → A) → A` (Peirce's law)
///
/// # Panics
///
/// Always, with a [`ProofError::ClassicalBoundary`] payload.
pub fn peirce_law<A, B>(_aba: Imp<Imp<A, B>, A>) -> A {
    no_intuitionistic_proof(ClassicalLaw::PeirceLaw)
}
