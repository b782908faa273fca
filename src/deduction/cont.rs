//! Continuations and `call/cc`.
//!
//! A [`Cont<R, A>`] delivers an `A` to whatever consumer is waiting for it
//! and answers with that consumer's `R`. With `R` as the answer type, the
//! control operator [`call_cc`] gives Peirce's law computational content:
//!
//! - Peirce (classical): `((A → B) → A) → A`
//! - `call/cc`: `((A → M<B>) → M<A>) → M<A>` where `M<X> = Cont<R, X>`

use std::fmt;
use std::rc::Rc;

use super::intuitionistic::absurd;
use super::types::{Bottom, Imp, Prop};

/// A computation that passes an `A` to its continuation, `(A → R) → R`.
pub struct Cont<R, A>(Rc<dyn Fn(Imp<A, R>) -> R>);

impl<R, A> Clone for Cont<R, A> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<R, A> fmt::Debug for Cont<R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cont<{}, {}>",
            std::any::type_name::<R>(),
            std::any::type_name::<A>()
        )
    }
}

impl<R: 'static, A: 'static> Cont<R, A> {
    /// Wraps a function that receives the continuation.
    pub fn new(step: impl Fn(Imp<A, R>) -> R + 'static) -> Self {
        Self(Rc::new(step))
    }

    /// Delivers `a` to the continuation unchanged.
    #[must_use]
    pub fn pure(a: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |k: Imp<A, R>| k(a.clone()))
    }

    /// Runs the computation with `k` as the final consumer.
    pub fn run(&self, k: impl Fn(A) -> R + 'static) -> R {
        self.run_with(Rc::new(k))
    }

    /// Runs the computation with an already shared consumer.
    pub fn run_with(&self, k: Imp<A, R>) -> R {
        (self.0)(k)
    }

    /// Sequences `self` and then `f`.
    ///
    /// The final consumer is invoked exactly as often, and in the same
    /// order, as the continuation built by `f` invokes it; this step adds no
    /// call of its own.
    #[must_use]
    pub fn flat_map<B: 'static>(self, f: impl Fn(A) -> Cont<R, B> + 'static) -> Cont<R, B> {
        let step = Rc::new(f);
        Cont::new(move |k: Imp<B, R>| {
            let next = Rc::clone(&step);
            self.run_with(Rc::new(move |a: A| next(a).run_with(Rc::clone(&k))))
        })
    }
}

/// Call with current continuation.
///
/// `builder` receives an `exit` continuation. Calling `exit(a)` produces a
/// computation that ignores whatever was meant to follow it and delivers
/// `a` straight to the consumer of the whole `call_cc`. If `builder` never
/// calls `exit`, its own computation runs to the consumer instead. Either
/// way the consumer is reached along exactly one path.
///
/// Like `return`, `break`, or `throw`, this is a non-local exit.
///
///     use curry_howard::deduction::{Cont, Imp, call_cc};
///
///     let early: Cont<i32, i32> = call_cc(|exit: Imp<i32, Cont<i32, ()>>| {
///         exit(1).flat_map(|(): ()| Cont::pure(2))
///     });
///     assert_eq!(early.run(|n| n), 1);
#[must_use]
pub fn call_cc<R: 'static, A: Prop, B: 'static>(
    builder: impl Fn(Imp<A, Cont<R, B>>) -> Cont<R, A> + 'static,
) -> Cont<R, A> {
    Cont::new(move |outer: Imp<A, R>| {
        let escape = Rc::clone(&outer);
        let exit: Imp<A, Cont<R, B>> = Rc::new(move |a: A| {
            let consumer = Rc::clone(&escape);
            Cont::new(move |_discarded: Imp<B, R>| consumer(a.clone()))
        });
        builder(exit).run_with(outer)
    })
}

/// `((A → M<⊥>) → M<⊥>) ===> M<A>`, with `M<X> = Cont<R, X>`
///
/// Double-negation elimination, recovered as a control effect. The
/// refutation `A → M<⊥>` handed to `double_negation` is the `exit` of
/// [`call_cc`]: applying it to an `a` jumps out with `a`. A computation of
/// `⊥` that does finish is eliminated with [`absurd`]. This relies on the
/// non-local exit, not on excluded middle as a value.
#[must_use]
pub fn double_negation_elim_call_cc<R: 'static, A: Prop>(
    double_negation: impl Fn(Imp<A, Cont<R, Bottom>>) -> Cont<R, Bottom> + 'static,
) -> Cont<R, A> {
    call_cc(move |exit: Imp<A, Cont<R, Bottom>>| {
        double_negation(exit).flat_map(|bottom: Bottom| absurd::<Cont<R, A>>(bottom))
    })
}
