//! Page-by-page smoke transcript.
//!
//! Each page of the demonstration (natural deduction, quantifiers,
//! combinators) carries a fixed list of sample evaluations. Proofs are
//! checked by the compiler; running a page only confirms its terms also
//! evaluate without failing at run time. Each check emits a `debug` event
//! and each finished page an `info` event.

use std::fmt;
use std::rc::Rc;

use crate::combinators::i;
use crate::deduction::{
    Bottom, Cont, Either, Imp, Not, and_elim2, and_intro, call_cc, de_morgan4_il,
    double_negation_elim_call_cc, double_negation_elim_decided, double_negation_elim_il,
    double_negation_intro, excluded_middle_il, from_cps, imply_elim, or_elim, or_intro2,
    peirce_law_il, single_negation_to_triple, to_cps, triple_negation_to_single,
};
use crate::quantifiers::{
    AnyP, ForAll, any_to_bool, exists_to_forall, float_to_bool, forall_x_protocol_to_bool,
    forall_x_to_bool, int_to_bool, protocol_to_bool, str_to_bool, x_to_bool,
};

/// A page of the demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Gentzen-style natural deduction, the classical boundary, and
    /// continuations.
    NaturalDeduction,
    /// Quantifier duality over generic and erased witnesses.
    ForAllAndExists,
    /// Hilbert-style proofs as SKI combinators.
    HilbertCombinators,
}

impl Page {
    /// Every page, in presentation order.
    pub const ALL: [Self; 3] = [
        Self::NaturalDeduction,
        Self::ForAllAndExists,
        Self::HilbertCombinators,
    ];

    /// Returns the stable page identifier.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::NaturalDeduction => "natural-deduction",
            Self::ForAllAndExists => "forall-and-exists",
            Self::HilbertCombinators => "hilbert-combinators",
        }
    }

    /// Returns the sample evaluations of this page.
    #[must_use]
    pub fn checks(self) -> Vec<Check> {
        match self {
            Self::NaturalDeduction => natural_deduction_checks(),
            Self::ForAllAndExists => forall_and_exists_checks(),
            Self::HilbertCombinators => hilbert_combinator_checks(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A named sample evaluation that should hold.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    name: &'static str,
    holds: fn() -> bool,
}

impl Check {
    /// Creates a check.
    #[must_use]
    pub const fn new(name: &'static str, holds: fn() -> bool) -> Self {
        Self { name, holds }
    }

    /// Returns the check name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Errors raised while evaluating a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscriptError {
    /// A sample evaluation returned `false`.
    #[error("page {page} failed check '{check}'")]
    CheckFailed {
        /// The page being evaluated.
        page: Page,
        /// The name of the failing check.
        check: &'static str,
    },
}

/// The record of a page that evaluated successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// The evaluated page.
    pub page: Page,
    /// Names of the checks that held, in evaluation order.
    pub passed: Vec<&'static str>,
}

impl Transcript {
    /// Renders the transcript in a deterministic multi-line format suitable
    /// for snapshot tests.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("{} | {} checks\n", self.page, self.passed.len());
        for name in &self.passed {
            out.push_str("  ok ");
            out.push_str(name);
            out.push('\n');
        }
        out.push('✅');
        out
    }
}

/// Evaluates every check of `page`.
///
/// # Errors
///
/// Returns [`TranscriptError::CheckFailed`] for the first check that does
/// not hold.
pub fn evaluate(page: Page) -> Result<Transcript, TranscriptError> {
    run_checks(page, &page.checks())
}

/// Evaluates every page in presentation order.
///
/// # Errors
///
/// Returns the first [`TranscriptError`] raised by any page.
pub fn evaluate_all() -> Result<Vec<Transcript>, TranscriptError> {
    Page::ALL.into_iter().map(evaluate).collect()
}

/// Evaluates `checks` in order on behalf of `page`, stopping at the first
/// one that does not hold.
///
/// # Errors
///
/// Returns [`TranscriptError::CheckFailed`] naming that check.
pub fn run_checks(page: Page, checks: &[Check]) -> Result<Transcript, TranscriptError> {
    let mut passed = Vec::with_capacity(checks.len());
    for check in checks {
        let name = check.name();
        let holds = (check.holds)();
        tracing::debug!(page = %page, check = name, holds, "check evaluated");
        if !holds {
            return Err(TranscriptError::CheckFailed { page, check: name });
        }
        passed.push(name);
    }
    tracing::info!(page = %page, checks = passed.len(), "page evaluated");
    Ok(Transcript { page, passed })
}

/// Whether `not_a` reports itself as a negation mentioning `inner`.
fn negates<A>(not_a: &Not<A>, inner: &str) -> bool {
    let shown = format!("{not_a:?}");
    shown.starts_with("Not<") && shown.contains(inner)
}

fn natural_deduction_checks() -> Vec<Check> {
    vec![
        Check::new("modus_ponens", || imply_elim(2, |n: i32| n + 1) == 3),
        Check::new("conjunction", || and_elim2(and_intro(1, "b")) == "b"),
        Check::new("proof_by_cases", || {
            or_elim(or_intro2::<i32, &str>("r"), |_| false, |s| s == "r")
        }),
        Check::new("negation_round_trip", || {
            // ¬⊥ is the one negation that holds outright.
            let not_bottom = Not::new(|bottom: Bottom| bottom);
            let single = triple_negation_to_single(single_negation_to_triple(not_bottom));
            negates(&single, "Bottom")
        }),
        Check::new("glivenko_translations", || {
            let lem = excluded_middle_il::<i32>();
            let dne = double_negation_elim_il(double_negation_intro(double_negation_intro(1)));
            let not_pair = Not::new(|(bottom, _): (Bottom, i32)| bottom);
            let de_morgan = de_morgan4_il(single_negation_to_triple(not_pair));
            let premise: Imp<Imp<i32, ()>, i32> = Rc::new(|_ab: Imp<i32, ()>| 0);
            let peirce = peirce_law_il(double_negation_intro(premise));
            negates(&lem, "Either")
                && negates(&dne, "i32")
                && negates(&de_morgan, "Either")
                && negates(&peirce, "i32")
        }),
        Check::new("decided_double_negation", || {
            double_negation_elim_decided(Either::Left(3), &double_negation_intro(3)) == 3
        }),
        Check::new("call_cc_early_exit", || {
            let early: Cont<i32, i32> = call_cc(|exit: Imp<i32, Cont<i32, ()>>| {
                exit(1).flat_map(|(): ()| Cont::pure(2))
            });
            early.run(|n| n) == 1
        }),
        Check::new("double_negation_elim_call_cc", || {
            let recovered: Cont<i32, i32> =
                double_negation_elim_call_cc(|refute: Imp<i32, Cont<i32, Bottom>>| refute(42));
            recovered.run(|n| n) == 42
        }),
        Check::new("cps_round_trip", || from_cps(to_cps("cps")) == "cps"),
    ]
}

fn forall_and_exists_checks() -> Vec<Check> {
    vec![
        Check::new("generic_family", || {
            int_to_bool(1) && float_to_bool(1.0) && str_to_bool("s") && x_to_bool(())
        }),
        Check::new("forall_to_exists", || {
            any_to_bool(Box::new(1_u8)) == forall_x_to_bool(1_u8)
        }),
        Check::new("exists_to_forall", || exists_to_forall(any_to_bool).call("s")),
        Check::new("bounded_entry_points_agree", || {
            let witness = AnyP {
                value: "p".to_owned(),
            };
            protocol_to_bool(&witness) == forall_x_protocol_to_bool(&witness)
        }),
    ]
}

fn hilbert_combinator_checks() -> Vec<Check> {
    vec![
        Check::new("identity_on_strings", || i("hello") == "hello"),
        Check::new("identity_on_integers", || i(123) == 123),
    ]
}
