//! Shared test doubles for exercising proof terms.
//!
//! A refutation of a concrete proposition such as `i32` is a function into
//! an uninhabited type, so the only way a test can hand one to a proof is a
//! function that never returns. [`refute`] diverges by unwinding with a
//! [`Refuted`] payload carrying the witness it was applied to, and
//! [`caught_refutation`] recovers that witness. Two negations are
//! extensionally equal when applying both to the same witness unwinds with
//! the same payload.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

/// Unwind payload raised by [`refute`].
#[derive(Debug)]
pub struct Refuted(pub Box<dyn Any + Send>);

static QUIET_REFUTATIONS: Once = Once::new();

/// Keeps expected refutations out of the test output while leaving every
/// other panic message untouched.
fn silence_refutations() {
    QUIET_REFUTATIONS.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if info.payload().is::<Refuted>() {
                return;
            }
            previous(info);
        }));
    });
}

/// Diverges with a [`Refuted`] payload carrying `witness`.
///
/// Use it as the body of a hand-supplied refutation:
///
///     use test_helpers::{caught_refutation, refute};
///
///     let refutation = |n: i32| -> std::convert::Infallible { refute(n) };
///     assert_eq!(caught_refutation::<i32, _>(|| refutation(7)), Some(7));
///
/// # Panics
///
/// Always; unwinding is how the refutation reports the witness.
pub fn refute<T: Any + Send>(witness: T) -> ! {
    silence_refutations();
    panic::panic_any(Refuted(Box::new(witness)))
}

/// Runs `f` and returns the witness it was refuted with, if any.
///
/// Returns `None` when `f` completes normally or when the refuted witness
/// is not a `T`. Panics that are not refutations are resumed unchanged.
#[must_use]
pub fn caught_refutation<T: Any, R>(f: impl FnOnce() -> R) -> Option<T> {
    silence_refutations();
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => None,
        Err(payload) => match payload.downcast::<Refuted>() {
            Ok(refuted) => refuted.0.downcast::<T>().ok().map(|witness| *witness),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// Runs `f` and returns its unwind payload when that payload is a `P`.
///
/// Returns `None` when `f` completes normally. Payloads of any other type
/// are resumed unchanged.
#[must_use]
pub fn caught_payload<P: Any, R>(f: impl FnOnce() -> R) -> Option<P> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => None,
        Err(payload) => match payload.downcast::<P>() {
            Ok(caught) => Some(*caught),
            Err(other) => panic::resume_unwind(other),
        },
    }
}
