//! Continuation-passing style.
//!
//! `A → ((A → B) → B)` is the CPS transform of a value; with `B = ⊥` it is
//! `A → ¬¬A`, so a classically provable `A` has an intuitionistic CPS form
//! `¬¬A`. Going back, `((A → B) → B) → A`, needs the continuation to be
//! polymorphic in `B`. Rust expresses that rank-2 requirement as a trait
//! with a generic method, [`Continuation`]; [`from_cps_erased`] is the
//! type-erased fallback for a continuation fixed at one answer type.

use std::any::{self, Any};
use std::rc::Rc;

use super::types::{Imp, Not, Prop};
use crate::error::ProofError;

/// A value in CPS form for every answer type at once, `∀B.((A → B) → B)`.
pub trait Continuation<A> {
    /// Hands the suspended value to `k` and returns its answer.
    fn resume<B>(self, k: impl FnOnce(A) -> B) -> B;
}

/// A value waiting for its continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suspended<A>(A);

impl<A> Continuation<A> for Suspended<A> {
    fn resume<B>(self, k: impl FnOnce(A) -> B) -> B {
        k(self.0)
    }
}

impl<A: Prop> Suspended<A> {
    /// Fixes the answer type, giving the monomorphic `(A → B) → B`.
    #[must_use]
    pub fn at<B: 'static>(self) -> Imp<Imp<A, B>, B> {
        to_cps_at(self.0)
    }
}

/// `A ===> ∀B.((A → B) → B)`
#[must_use]
pub const fn to_cps<A>(a: A) -> Suspended<A> {
    Suspended(a)
}

/// `A ===> (A → B) → B` for one answer type `B`.
#[must_use]
pub fn to_cps_at<A: Prop, B: 'static>(a: A) -> Imp<Imp<A, B>, B> {
    Rc::new(move |k: Imp<A, B>| k(a.clone()))
}

/// `∀B.((A → B) → B) ===> A`
///
/// Instantiates the answer type at `A` itself and resumes with the
/// identity.
///
///     use curry_howard::deduction::{from_cps, to_cps};
///
///     assert_eq!(from_cps(to_cps("hello")), "hello");
pub fn from_cps<A>(cps: impl Continuation<A>) -> A {
    cps.resume(|a| a)
}

/// `((A → Any) → Any) ===> A`, checked at run time.
///
/// A continuation fixed at the erased answer type `Box<dyn Any>` cannot be
/// trusted to answer with the `A` it was given, so the answer is
/// downcast.
///
/// # Errors
///
/// Returns [`ProofError::ErasedAnswer`] when the continuation answers with
/// anything other than an `A`.
pub fn from_cps_erased<A: Any>(
    cps: impl FnOnce(Imp<A, Box<dyn Any>>) -> Box<dyn Any>,
) -> Result<A, ProofError> {
    let erase: Imp<A, Box<dyn Any>> = Rc::new(|a: A| -> Box<dyn Any> { Box::new(a) });
    cps(erase)
        .downcast::<A>()
        .map(|a| *a)
        .map_err(|_| ProofError::ErasedAnswer {
            expected: any::type_name::<A>(),
        })
}

/// `(X → A) ===> ∀B.((A → B) → (X → B))`
#[must_use]
pub fn cps_transform<X: 'static, A: 'static, B: 'static>(
    f: impl Fn(X) -> A + 'static,
) -> impl Fn(Imp<A, B>) -> Imp<X, B> {
    let map = Rc::new(f);
    move |g: Imp<A, B>| {
        let inner = Rc::clone(&map);
        let composed: Imp<X, B> = Rc::new(move |x: X| g(inner(x)));
        composed
    }
}

/// `(X → A) ===> ¬A → ¬X` (contraposition)
///
/// [`cps_transform`] with the answer type fixed at `⊥`.
#[must_use]
pub fn contraposition<X: 'static, A: 'static>(
    f: impl Fn(X) -> A + 'static,
) -> impl Fn(Not<A>) -> Not<X> {
    let map = Rc::new(f);
    move |not_a: Not<A>| {
        let inner = Rc::clone(&map);
        Not::new(move |x: X| not_a.refute(inner(x)))
    }
}
