//! Skip-marker filename sanitization.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of characters that may not appear in a skip-marker filename.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\-_+.]+").expect("DISALLOWED must compile"));

/// Strip every run of characters outside `[\w\-_+.]`.
///
/// Never fails; an empty string is a valid result.
pub fn sanitize(name: &str) -> String {
    DISALLOWED.replace_all(name, "").into_owned()
}
