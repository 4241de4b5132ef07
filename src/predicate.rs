//! In-memory assertions that produce check results.

use std::fmt::Debug;

use crate::check::CheckResult;

/// `Ok` if `list` contains `item`, otherwise an `Error` naming both.
///
/// # Example
///
/// ```
/// use medic::check::CheckResult;
/// use medic::predicate::in_list;
///
/// let installed = ["nodejs", "ruby"];
/// assert_eq!(in_list(&"ruby", &installed, "asdf plugin add ruby"), CheckResult::Ok);
/// assert!(in_list(&"erlang", &installed, "asdf plugin add erlang").is_error());
/// ```
pub fn in_list<T: PartialEq + Debug>(item: &T, list: &[T], remedy: &str) -> CheckResult {
    if list.contains(item) {
        CheckResult::Ok
    } else {
        CheckResult::error(format!("{:?} not found in {:?}", item, list), remedy)
    }
}
