//! Hipparcos designation parsing and ADQL literal escaping.

use once_cell::sync::Lazy;
use regex::Regex;

static HIP_ANY_CASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)HIP\s*(\d+)").expect("valid HIP pattern"));
static HIP_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"HIP\s*(\d+)").expect("valid HIP pattern"));

fn capture_hip(re: &Regex, text: &str) -> Option<u32> {
    let digits = re.captures(text)?.get(1)?.as_str();
    // HIP numbering starts at 1
    digits.parse::<u32>().ok().filter(|n| *n > 0)
}

/// Whether the text contains a `HIP <digits>` designation, ignoring case,
/// regardless of whether the digits form a usable HIP number.
pub fn is_hip_designation(text: &str) -> bool {
    HIP_ANY_CASE.is_match(text)
}

/// Finds a `HIP <digits>` designation anywhere in user-supplied text,
/// ignoring case. `"HIP 12345"`, `"hip12345"` and `"Gl 1 = HIP 171"` all match.
pub fn parse_hip_designation(text: &str) -> Option<u32> {
    capture_hip(&HIP_ANY_CASE, text)
}

/// Same as [`parse_hip_designation`] but case-sensitive, for identifiers
/// returned by SIMBAD which always spell the catalog prefix in upper case.
pub fn extract_hip_from_simbad(text: &str) -> Option<u32> {
    capture_hip(&HIP_UPPER, text)
}

/// Escapes a value for use inside a single-quoted ADQL string literal.
///
/// Only quotes are doubled; this keeps the query well-formed for ordinary
/// star names but is not a general injection guard.
pub fn escape_adql_literal(text: &str) -> String {
    text.replace('\'', "''")
}
