//! Validation outcome reporting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single reason a VIN failed validation.
///
/// `Display` renders the stable human-readable message for each reason;
/// match on the variants for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reason {
    /// No VIN was supplied, or it was empty.
    MissingVin,
    /// The VIN matches none of the legal shapes.
    PatternMismatch,
    /// The embedded check digit disagrees with the computed one.
    CheckDigitMismatch {
        /// The check digit the weighted sum produces.
        expected: char,
        /// The character actually stored in the check-digit position.
        actual: char,
    },
    /// A character without a transliteration value made the check digit
    /// uncomputable.
    CheckDigitUncomputable {
        /// The offending character.
        character: char,
    },
    /// The embedded year code cannot denote the reported model year.
    YearMismatch,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::MissingVin => write!(f, "VIN is not a string."),
            Reason::PatternMismatch => write!(f, "VIN fails pattern check."),
            Reason::CheckDigitMismatch { expected, actual } => {
                write!(f, "VIN check digit does not match ({expected} !== {actual}).")
            }
            Reason::CheckDigitUncomputable { character } => {
                write!(
                    f,
                    "VIN check digit cannot be computed ('{character}' has no transliteration value)."
                )
            }
            Reason::YearMismatch => write!(f, "VIN year is incorrect."),
        }
    }
}

/// The outcome of one validation call.
///
/// A VIN is valid exactly when no failure reasons were recorded; the
/// reasons keep the order the checks ran in, and independent checks can
/// record more than one reason per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    reasons: Vec<Reason>,
}

impl Validation {
    pub(crate) fn new() -> Self {
        Self {
            reasons: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, reason: Reason) {
        self.reasons.push(reason);
    }

    /// True when no failure reasons were recorded.
    pub fn is_valid(&self) -> bool {
        self.reasons.is_empty()
    }

    /// The recorded failure reasons, in check order.
    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    /// Consume the report, returning the recorded reasons.
    pub fn into_reasons(self) -> Vec<Reason> {
        self.reasons
    }

    /// The recorded reasons rendered as human-readable messages.
    pub fn messages(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }
}
