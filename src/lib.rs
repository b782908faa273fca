//! `curry_howard` — propositions as types, proofs as programs.
//!
//! Each logical proposition is encoded as a Rust type and each proof as a
//! function inhabiting it. A proof is checked by compiling it: a function
//! that type-checks without falling back on a classical axiom is a valid
//! intuitionistic derivation of its signature.

/// Hilbert-style proofs as SKI combinators.
pub mod combinators;
/// Natural deduction, the classical boundary, and continuations.
pub mod deduction;
/// Error types for proof terms that cannot be built honestly.
pub mod error;
/// Quantifier duality over generic and type-erased witnesses.
pub mod quantifiers;
/// Page-by-page smoke transcript.
pub mod transcript;

pub use error::{ClassicalLaw, ProofError};
