//! # vincheck
//!
//! Vehicle Identification Number validation: structural pattern checks,
//! weighted check-digit verification, and model-year cross-checking.
//!
//! Validation is a pure function of the input. A candidate VIN passes
//! through up to three stages:
//!
//! 1. **Pattern** — the string must match one of the legal shapes
//!    (modern 17-character forms or the legacy short form), matched
//!    case-insensitively against the whole string.
//! 2. **Check digit** — for North-American VINs (first character
//!    `1`–`5`) with a reported model year of 1995 or later, the ninth
//!    character must equal the weighted-sum check digit.
//! 3. **Model year** — the tenth character encodes the model year on a
//!    30-year cycle; a reported year must be a legal reading of it.
//!
//! Failures are collected as structured [`Reason`]s in a [`Validation`]
//! report rather than raised; every input produces a definite result.
//!
//! ## Quick Start
//!
//! ```rust
//! use vincheck::{Reason, validate};
//!
//! let report = validate(Some("WDDUG8CB9FA092680"), Some(2015));
//! assert!(report.is_valid());
//!
//! let report = validate(Some("3FA6P0PU0ER395281"), Some(2014));
//! assert_eq!(
//!     report.reasons(),
//!     &[Reason::CheckDigitMismatch { expected: '6', actual: '0' }]
//! );
//! assert_eq!(
//!     report.messages(),
//!     vec!["VIN check digit does not match (6 !== 0)."]
//! );
//! ```
//!
//! The building blocks — [`check_digit`], [`year_from_vin`] and the
//! pattern constants — are exposed for callers composing their own
//! checks.

mod check_digit;
mod pattern;
mod report;
mod validate;
mod year;

pub use check_digit::{CheckDigitError, check_digit};
pub use pattern::{NORTH_AMERICA, VIN_PATTERN, is_north_american, matches_vin_pattern};
pub use report::{Reason, Validation};
pub use validate::validate;
pub use year::{YEAR_CODES, year_from_vin, year_from_vin_as_of};
