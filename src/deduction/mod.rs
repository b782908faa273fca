//! Natural deduction as typed proof terms.
//!
//! Each function signature states an inference rule or theorem and each
//! body is its proof. The rules build up in layers:
//!
//! - [`minimal`]: introduction and elimination rules for `→ ∧ ∨ ¬`.
//! - [`intuitionistic`]: minimal logic plus [`absurd`] (ex falso),
//!   double-negation introduction, and three De Morgan laws.
//! - `classical` (feature `classical`): excluded middle and its relatives,
//!   stated but unprovable; calling them unwinds.
//! - [`decidable`]: the classical laws for a proposition whose instance of
//!   excluded middle is given.
//! - [`glivenko`]: double-negation translations of the classical laws,
//!   proved intuitionistically.
//! - [`cont`] and [`cps`]: continuations, `call/cc`, and the CPS
//!   transform.
//!
//! Everything outside `classical` is total: it returns for every input
//! and never unwinds on its own.
//!
//! # The classical boundary
//!
//! The intuitionistic fragment rejects direct proofs of the classical
//! laws. Falsity has no value to fabricate: a match on `⊥` with no arms
//! is already exhaustive,
//!
//! ```
//! use curry_howard::deduction::Bottom;
//!
//! fn anything(bottom: Bottom) -> u8 {
//!     match bottom {}
//! }
//! ```
//!
//! so there is no variant to construct a refutation from:
//!
//! ```compile_fail
//! use curry_howard::deduction::{Bottom, Either, Not};
//!
//! fn excluded_middle<A: 'static>() -> Either<A, Not<A>> {
//!     Either::Right(Not::new(|_a: A| Bottom::Absurd))
//! }
//! ```
//!
//! Applying a double negation yields `⊥`, never an `A`:
//!
//! ```compile_fail
//! use curry_howard::deduction::{Bottom, Not};
//!
//! fn double_negation_elim<A: 'static>(not_not_a: Not<Not<A>>) -> A {
//!     not_not_a.refute(Not::new(|_a: A| -> Bottom { unimplemented!() }))
//! }
//! ```
//!
//! Refuting one conjunct needs a witness of the other, which a generic
//! `B` does not supply:
//!
//! ```compile_fail
//! use curry_howard::deduction::{Either, Not};
//!
//! fn de_morgan4<A: 'static, B: 'static>(not_ab: Not<(A, B)>) -> Either<Not<A>, Not<B>> {
//!     Either::Left(Not::new(move |a: A| not_ab.refute((a, B::default()))))
//! }
//! ```
//!
//! Peirce's law needs an `A → B`, and an `A` is not a `⊥`:
//!
//! ```compile_fail
//! use std::rc::Rc;
//!
//! use curry_howard::deduction::{Imp, absurd};
//!
//! fn peirce_law<A: 'static, B: 'static>(aba: Imp<Imp<A, B>, A>) -> A {
//!     aba(Rc::new(|a: A| -> B { absurd(a) }))
//! }
//! ```

#[cfg(feature = "classical")]
pub mod classical;
pub mod cont;
pub mod cps;
pub mod decidable;
pub mod glivenko;
pub mod intuitionistic;
pub mod minimal;
mod types;

pub use cont::{Cont, call_cc, double_negation_elim_call_cc};
pub use cps::{
    Continuation, Suspended, contraposition, cps_transform, from_cps, from_cps_erased, to_cps,
    to_cps_at,
};
pub use decidable::{de_morgan4_decided, double_negation_elim_decided, peirce_law_decided};
pub use glivenko::{de_morgan4_il, double_negation_elim_il, excluded_middle_il, peirce_law_il};
pub use intuitionistic::{
    absurd, de_morgan, de_morgan2, de_morgan3, double_negation_intro, single_negation_to_triple,
    triple_negation_to_single,
};
pub use minimal::{
    and_elim1, and_elim2, and_intro, imply_elim, imply_intro, not_elim, not_intro, or_elim,
    or_intro1, or_intro2,
};
pub use types::{Bottom, Either, Imp, Not, Prop};
