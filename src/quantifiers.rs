//! Universal and existential quantification over types.
//!
//! A generic function is a proof of `∀X.(X → B)`: one body that works for
//! every `X`. Currying the quantifier gives `∀X.(X → B) ≅ (∃X.X) → B`,
//! where a value of `∃X.X` is a witness whose type has been forgotten
//! (`Box<dyn Any>`). Bounding `X` by a capability `P` gives
//! `∀(X <: P).(X → B) ≅ (∃(X <: P).X) → B`, with [`AnyP`] as the erased
//! witness.
//!
//! A generic function is not a first-class value in Rust, so the universal
//! side of each isomorphism is a trait with a generic method
//! ([`ForAll`], [`ForAllP`]).

use std::any::Any;

// ── (A₁ → B) ∧ (A₂ → B) ∧ ⋯ ≅ ∀X.(X → B) ──────────────────────────────

/// One conjunct of the family `(A₁ → B) ∧ (A₂ → B) ∧ ⋯`.
#[must_use]
pub const fn int_to_bool(_: i64) -> bool {
    true
}

/// Another conjunct of the family, at `A = f64`.
#[must_use]
pub const fn float_to_bool(_: f64) -> bool {
    true
}

/// Another conjunct of the family, at `A = &str`.
#[must_use]
pub const fn str_to_bool(_: &str) -> bool {
    true
}

/// The whole family at once: `∀X.(X → bool)`.
#[must_use]
pub fn x_to_bool<X>(_: X) -> bool {
    true
}

// ── ∀X.(X → B) ≅ (∃X.X) → B ─────────────────────────────────────────

/// A proof of `∀X.(X → B)`.
pub trait ForAll<B> {
    /// Instantiates the quantifier at `X`.
    fn call<X: Any>(&self, x: X) -> B;
}

/// [`x_to_bool`] as a value of `∀X.(X → bool)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XToBool;

impl ForAll<bool> for XToBool {
    fn call<X: Any>(&self, x: X) -> bool {
        x_to_bool(x)
    }
}

/// `∀X.(X → B) ===> (∃X.X) → B`
///
/// Instantiates the quantifier at the existential package itself.
pub fn forall_to_exists<B>(forall: impl ForAll<B>) -> impl Fn(Box<dyn Any>) -> B {
    move |exists: Box<dyn Any>| forall.call(exists)
}

/// `(∃X.X) → B ===> ∀X.(X → B)`
///
/// Packs each `X` into the existential before applying.
pub fn exists_to_forall<B>(exists: impl Fn(Box<dyn Any>) -> B) -> impl ForAll<B> {
    PackThen(exists)
}

struct PackThen<F>(F);

impl<B, F: Fn(Box<dyn Any>) -> B> ForAll<B> for PackThen<F> {
    fn call<X: Any>(&self, x: X) -> B {
        (self.0)(Box::new(x))
    }
}

/// `∀X.(X → bool)`, entered statically.
#[must_use]
pub fn forall_x_to_bool<X: Any>(x: X) -> bool {
    XToBool.call(x)
}

/// `(∃X.X) → bool`, entered with an erased witness.
#[must_use]
pub fn any_to_bool(any: Box<dyn Any>) -> bool {
    forall_to_exists(XToBool)(any)
}

// ── ∀(X <: P).(X → B) ≅ (∃(X <: P).X) → B ───────────────────────────

/// The bounding capability.
pub trait P {
    /// The observable projection of a witness.
    fn value(&self) -> String;
}

/// `∃(X <: P).X`: a witness of `P` with its type erased.
///
/// Stores only the observable projection of the original witness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnyP {
    /// The projection captured from the erased witness.
    pub value: String,
}

impl AnyP {
    /// Erases any witness of `P`, statically or dynamically typed.
    #[must_use]
    pub fn erase<X: P + ?Sized>(x: &X) -> Self {
        Self { value: x.value() }
    }
}

impl P for AnyP {
    fn value(&self) -> String {
        self.value.clone()
    }
}

/// A proof of `∀(X <: P).(X → B)`.
pub trait ForAllP<B> {
    /// Instantiates the quantifier at `X`.
    fn call<X: P>(&self, x: &X) -> B;
}

/// `∀(X <: P).(X → B) ===> (∃(X <: P).X) → B`
pub fn forall_p_to_exists<B>(forall: impl ForAllP<B>) -> impl Fn(AnyP) -> B {
    move |exists: AnyP| forall.call(&exists)
}

/// `(∃(X <: P).X) → B ===> ∀(X <: P).(X → B)`
pub fn exists_p_to_forall<B>(exists: impl Fn(AnyP) -> B) -> impl ForAllP<B> {
    EraseThen(exists)
}

struct EraseThen<F>(F);

impl<B, F: Fn(AnyP) -> B> ForAllP<B> for EraseThen<F> {
    fn call<X: P>(&self, x: &X) -> B {
        (self.0)(AnyP::erase(x))
    }
}

/// `∀(X <: P).(X → bool)`: does the witness have a non-empty projection?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Observed;

impl ForAllP<bool> for Observed {
    fn call<X: P>(&self, x: &X) -> bool {
        !x.value().is_empty()
    }
}

/// The generic entry point, specialised per `X`.
#[must_use]
pub fn forall_x_protocol_to_bool<X: P>(x: &X) -> bool {
    Observed.call(x)
}

/// The dynamic entry point: erases the witness behind the trait object and
/// re-enters the generic one at `X = AnyP`.
#[must_use]
pub fn protocol_to_bool(p: &dyn P) -> bool {
    forall_x_protocol_to_bool(&AnyP::erase(p))
}

/// The opaque entry point: `X` is fixed by the caller but hidden from
/// this signature.
#[must_use]
pub fn some_protocol_to_bool(p: &impl P) -> bool {
    forall_x_protocol_to_bool(p)
}
