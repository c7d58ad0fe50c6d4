//! Structural VIN pattern matching.
//!
//! Three legal shapes are recognized, matched case-insensitively against
//! the whole string:
//!
//! 1. Modern 17-character VIN: nine body characters, a tenth with a
//!    narrower alphabet, one more body character, then six serial digits.
//! 2. Legacy pre-1981 VIN: 5–11 identifier characters followed by five
//!    serial digits.
//! 3. 17-character VIN with an explicit check-digit slot: eight
//!    characters, a digit or literal `X`, then eight more.
//!
//! The ambiguous letters `I` and `O` never appear in the 17-character
//! shapes; the legacy shape only rules out `I`.

use std::sync::LazyLock;

use regex::Regex;

/// Compiled pattern accepting the three legal VIN shapes.
pub static VIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[a-hj-mp-z0-9]{9}[a-hj-mp-rtv-z0-9][a-hj-mp-z0-9][0-9]{6}|[a-hj-z0-9]{5,11}[0-9]{5}|[a-hj-npr-z0-9]{8}[0-9x][a-hj-npr-z0-9]{8})$",
    )
    .expect("VIN pattern must compile")
});

/// First-character test for North-American VINs (world manufacturer
/// identifiers `1`–`5`), which carry a mandatory check digit.
pub static NORTH_AMERICA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-5]").expect("North-America pattern must compile"));

/// Check whether `vin` matches one of the legal VIN shapes.
pub fn matches_vin_pattern(vin: &str) -> bool {
    VIN_PATTERN.is_match(vin)
}

/// Check whether `vin` was assigned by a North-American manufacturer.
pub fn is_north_american(vin: &str) -> bool {
    NORTH_AMERICA.is_match(vin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_17_char_vins() {
        assert!(matches_vin_pattern("WDDUG8CB9FA092680"));
        assert!(matches_vin_pattern("1G5EC13D5B7100001"));
        assert!(matches_vin_pattern("ZACCJABT0FPB66932"));
    }

    #[test]
    fn check_digit_slot_accepts_x() {
        assert!(matches_vin_pattern("1M8GDM9AXKP042788"));
    }

    #[test]
    fn legacy_short_vins() {
        assert!(matches_vin_pattern("9111121907"));
        // 11 identifier characters + 5 serial digits is the longest
        // legacy shape; this one matches the modern shape instead.
        assert!(matches_vin_pattern("00042512110000705"));
    }

    #[test]
    fn case_insensitive() {
        assert!(matches_vin_pattern("wddug8cb9fa092680"));
        assert!(matches_vin_pattern("1m8gdm9axkp042788"));
    }

    #[test]
    fn rejects_ambiguous_letters() {
        assert!(!matches_vin_pattern("3FI6P0PU0ER395281"));
        assert!(!matches_vin_pattern("3FO6P0PU0ER395281"));
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(!matches_vin_pattern(""));
        assert!(!matches_vin_pattern("SU"));
        assert!(!matches_vin_pattern("WDDUG8CB9FA09268"));
        assert!(!matches_vin_pattern("WDDUG8CB9FA0926800"));
    }

    #[test]
    fn rejects_partial_matches() {
        assert!(!matches_vin_pattern(" WDDUG8CB9FA092680"));
        assert!(!matches_vin_pattern("WDDUG8CB9FA092680 "));
    }

    #[test]
    fn north_american_prefixes() {
        assert!(is_north_american("1G5EC13D5B7100001"));
        assert!(is_north_american("3FA6P0PU0ER395281"));
        assert!(!is_north_american("WDDUG8CB9FA092680"));
        assert!(!is_north_american("ZACCJABT0FPB66932"));
        assert!(!is_north_american("9111121907"));
    }
}
