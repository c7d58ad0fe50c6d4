//! Top-level VIN validation.

use crate::check_digit::check_digit;
use crate::pattern::{is_north_american, matches_vin_pattern};
use crate::report::{Reason, Validation};
use crate::year::year_from_vin;

/// Reported model years before this are exempt from check-digit and
/// year cross-checks; earlier numbering predates reliable check digits.
const ENFORCEMENT_CUTOFF: i32 = 1995;

/// Validate a candidate VIN, optionally cross-checking the model year
/// on record.
///
/// Structural checks always run: the input must be present, non-empty
/// and match one of the legal shapes. When a reported year of 1995 or
/// later is supplied, two further checks run against it:
///
/// - the embedded check digit must match the computed one, enforced for
///   North-American VINs only (other regions do not mandate it);
/// - the embedded year code must admit the reported year as a reading.
///
/// Both cross-checks can record a reason in the same call. Without a
/// reported year only structural validity is assessed.
///
/// # Example
///
/// ```rust
/// use vincheck::{Reason, validate};
///
/// assert!(validate(Some("WDDUG8CB9FA092680"), Some(2015)).is_valid());
///
/// let report = validate(Some("SU"), Some(2014));
/// assert_eq!(report.reasons(), &[Reason::PatternMismatch]);
/// ```
pub fn validate(vin: Option<&str>, reported_year: Option<i32>) -> Validation {
    let mut report = Validation::new();

    let Some(vin) = vin.filter(|v| !v.is_empty()) else {
        report.push(Reason::MissingVin);
        return report;
    };

    if !matches_vin_pattern(vin) {
        report.push(Reason::PatternMismatch);
        return report;
    }

    let Some(year) = reported_year.filter(|&y| y >= ENFORCEMENT_CUTOFF) else {
        return report;
    };

    if is_north_american(vin) {
        match (check_digit(vin), vin.chars().nth(8)) {
            (Ok(expected), Some(actual)) => {
                let actual = actual.to_ascii_uppercase();
                if expected != actual {
                    report.push(Reason::CheckDigitMismatch { expected, actual });
                }
            }
            (Err(err), _) => {
                report.push(Reason::CheckDigitUncomputable {
                    character: err.character,
                });
            }
            // Pattern-valid VINs are at least ten characters, but a
            // missing check-digit position is skipped rather than read.
            (Ok(_), None) => {}
        }
    }

    if year_from_vin(vin, Some(year)) != year {
        report.push(Reason::YearMismatch);
    }

    report
}
