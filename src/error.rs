//! Error types for proof terms that cannot be built honestly.

use std::fmt;

/// Classical laws that have no proof term in the intuitionistic fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassicalLaw {
    /// `A ∨ ¬A`.
    ExcludedMiddle,
    /// `¬¬A → A`.
    DoubleNegationElimination,
    /// `¬(A ∧ B) → ¬A ∨ ¬B`.
    DeMorganConjunction,
    /// `((A → B) → A) → A`.
    PeirceLaw,
}

impl ClassicalLaw {
    /// Every law on the classical side of the boundary.
    pub const ALL: [Self; 4] = [
        Self::ExcludedMiddle,
        Self::DoubleNegationElimination,
        Self::DeMorganConjunction,
        Self::PeirceLaw,
    ];

    /// Returns the stable, machine-readable code string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExcludedMiddle => "classical.excluded_middle",
            Self::DoubleNegationElimination => "classical.double_negation_elim",
            Self::DeMorganConjunction => "classical.de_morgan_conjunction",
            Self::PeirceLaw => "classical.peirce_law",
        }
    }

    /// Returns the law as a formula.
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::ExcludedMiddle => "A ∨ ¬A",
            Self::DoubleNegationElimination => "¬¬A → A",
            Self::DeMorganConjunction => "¬(A ∧ B) → ¬A ∨ ¬B",
            Self::PeirceLaw => "((A → B) → A) → A",
        }
    }
}

impl fmt::Display for ClassicalLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by proof terms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProofError {
    /// A classical law was invoked; it is expressible but not provable.
    #[error("{law} (`{}`) has no intuitionistic proof", .law.formula())]
    ClassicalBoundary {
        /// The law whose stub was reached.
        law: ClassicalLaw,
    },

    /// A type-erased continuation answered with a value of the wrong type.
    #[error("erased continuation did not answer with a `{expected}`")]
    ErasedAnswer {
        /// Name of the type the caller asked for.
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let mut codes: Vec<&str> = ClassicalLaw::ALL.iter().map(|law| law.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ClassicalLaw::ALL.len());
    }

    #[test]
    fn boundary_message_names_code_and_formula() {
        let err = ProofError::ClassicalBoundary {
            law: ClassicalLaw::PeirceLaw,
        };
        assert_eq!(
            err.to_string(),
            "classical.peirce_law (`((A → B) → A) → A`) has no intuitionistic proof"
        );
    }

    #[test]
    fn erased_answer_names_expected_type() {
        let err = ProofError::ErasedAnswer { expected: "i32" };
        assert!(err.to_string().contains("`i32`"));
    }
}
