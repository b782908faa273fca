//! Propositions as types: falsity, negation, disjunction, and implication.
//!
//! Conjunction needs no type of its own; the pair `(A, B)` is its witness.

use std::fmt;
use std::rc::Rc;

/// A proposition whose witnesses can be reused inside proof terms.
///
/// Proof terms hand the same witness to several branches, and closures that
/// outlive the call that built them own what they capture, so every
/// proposition a proof term captures must be `Clone + 'static`. Any such
/// type is a proposition.
pub trait Prop: Clone + 'static {}

impl<T: Clone + 'static> Prop for T {}

/// Falsity, `⊥`.
///
/// `Bottom` has no variants, so no value of it can be constructed. A
/// function returning `Bottom` either never returns or is never called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bottom {}

/// Implication, `A → B`, as a shareable function.
///
/// Plain `impl Fn` parameters cover most rules; this alias is used where an
/// implication is itself a premise or conclusion of another implication.
pub type Imp<A, B> = Rc<dyn Fn(A) -> B>;

/// Disjunction, `A ∨ B`: exactly one of the two witnesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<A, B> {
    /// A witness of the left disjunct.
    Left(A),
    /// A witness of the right disjunct.
    Right(B),
}

/// Negation, `¬A ≡ A → ⊥`.
///
/// Holds exactly one refuting function. Building a `Not<A>` for an
/// inhabited `A` is only possible inside a context that is itself
/// contradictory, which is what the proofs in this crate exploit.
pub struct Not<A>(Rc<dyn Fn(A) -> Bottom>);

impl<A> Not<A> {
    /// Wraps a refutation of `A`.
    pub fn new(refutation: impl Fn(A) -> Bottom + 'static) -> Self {
        Self(Rc::new(refutation))
    }

    /// Applies the refutation to a witness of `A`.
    pub fn refute(&self, witness: A) -> Bottom {
        (self.0)(witness)
    }
}

impl<A> Clone for Not<A> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A> fmt::Debug for Not<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Not<{}>", std::any::type_name::<A>())
    }
}
