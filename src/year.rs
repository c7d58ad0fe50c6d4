//! Model-year decoding from the tenth VIN position.
//!
//! A single character encodes the model year, so the code repeats every
//! 30 years: `A` stands for 1980, 2010, 2040 and so on. The decoder
//! resolves the ambiguity against the year on record when one is
//! supplied, and otherwise picks the most recent cycle that does not
//! run past next calendar year (vehicles are sold up to one model year
//! ahead).

use chrono::{Datelike, Local};

/// The 30 model-year code characters in encoding order. `I`, `O`, `Q`,
/// `U`, `Z` and `0` are never used as year codes.
pub const YEAR_CODES: &str = "ABCDEFGHJKLMNPRSTVWXY123456789";

/// First model year of the encoding scheme.
const CYCLE_START: i32 = 1980;

/// The year-code alphabet repeats on this period.
const CYCLE_LENGTH: i32 = 30;

/// Decode the model year embedded in a 17-character VIN.
///
/// Returns the reported year when it is a legal reading of the year
/// code, the most recent plausible year otherwise, and `0` when the
/// year is indeterminate (any input that is not exactly 17 characters
/// decodes to `0`).
pub fn year_from_vin(vin: &str, reported_year: Option<i32>) -> i32 {
    year_from_vin_as_of(vin, reported_year, Local::now().year())
}

/// Like [`year_from_vin`], decoding as of an explicit calendar year
/// instead of the wall clock. Useful when replaying historical records.
///
/// Candidate years at most one year past `calendar_year` are considered
/// plausible.
pub fn year_from_vin_as_of(vin: &str, reported_year: Option<i32>, calendar_year: i32) -> i32 {
    if vin.chars().count() != 17 {
        return 0;
    }
    let Some(code) = vin.chars().nth(9) else {
        return 0;
    };

    let ordinal = YEAR_CODES
        .find(code.to_ascii_uppercase())
        .map(|i| i as i32)
        .unwrap_or(-1);
    let boundary = calendar_year + 1;

    let mut year = CYCLE_START + ordinal;
    while year <= boundary {
        if reported_year == Some(year) {
            return year;
        }
        if year + CYCLE_LENGTH > boundary {
            return year;
        }
        year += CYCLE_LENGTH;
    }
    0
}
