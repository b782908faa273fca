//! Hilbert-style proofs as SKI combinators.
//!
//! The axiom schemes `K` and `S` of the implicational Hilbert system are
//! the types of the `K` and `S` combinators; modus ponens is application.
//! The identity `A → A` is then a theorem, proved as `S K K`.

use std::rc::Rc;

use crate::deduction::{Imp, Prop};

/// `S: (C → (A → B)) → ((C → A) → (C → B))`
#[must_use]
pub fn s<A: 'static, B: 'static, C: Prop>(x: Imp<C, Imp<A, B>>) -> Imp<Imp<C, A>, Imp<C, B>> {
    Rc::new(move |y: Imp<C, A>| {
        let premise = Rc::clone(&x);
        let applied: Imp<C, B> = Rc::new(move |c: C| premise(c.clone())(y(c)));
        applied
    })
}

/// `K: A → (B → A)`
#[must_use]
pub fn k<A: Prop, B: 'static>(a: A) -> Imp<B, A> {
    Rc::new(move |_: B| a.clone())
}

/// `I = S K K: A → A`
///
/// The first `K` is taken at `A → ((A → A) → A)` and the second at
/// `A → (A → A)`, so `S K K a = K a (K a) = a`.
///
///     use curry_howard::combinators::i;
///
///     assert_eq!(i("hello"), "hello");
///     assert_eq!(i(123), 123);
#[must_use]
pub fn i<A: Prop>(a: A) -> A {
    let first: Imp<A, Imp<Imp<A, A>, A>> = Rc::new(k::<A, Imp<A, A>>);
    let second: Imp<A, Imp<A, A>> = Rc::new(k::<A, A>);
    s(first)(second)(a)
}
