//! Comparator helpers for sorting and validating loose version input

use std::cmp::Ordering;

use crate::version::input::VersionInput;
use crate::version::value::SemanticVersion;

/// Ascending comparator: `Greater` when `a` is newer than `b`.
///
/// Both sides are parsed first, so invalid input compares as the invalid
/// version. `compare(a, b) as i32` yields `1`, `-1` or `0`.
///
/// ```
/// use semantic_version::compare;
///
/// let mut versions = vec!["1.2.4", "1", "0.1.0"];
/// versions.sort_by(|a, b| compare(*a, *b));
/// assert_eq!(versions, ["0.1.0", "1", "1.2.4"]);
/// ```
pub fn compare(a: impl Into<VersionInput>, b: impl Into<VersionInput>) -> Ordering {
    let a = SemanticVersion::parse(a);
    let b = SemanticVersion::parse(b);

    if a.is_newer(b) {
        Ordering::Greater
    } else if a.is_older(b) {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Descending comparator: newest first
pub fn compare_by_latest(a: impl Into<VersionInput>, b: impl Into<VersionInput>) -> Ordering {
    compare(b, a)
}

/// Parse `version` only to report whether it is valid
pub fn is_valid(version: impl Into<VersionInput>) -> bool {
    SemanticVersion::parse(version).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.10", "1.2.10", Ordering::Equal)]
    #[case("1.2.1", "1.1.5", Ordering::Greater)]
    #[case("1.1.1", "1.1.5", Ordering::Less)]
    #[case("1", "1.0.0", Ordering::Equal)]
    #[case("0.9.9", "1", Ordering::Less)]
    #[case("", "0.0.0", Ordering::Less)] // invalid sorts first
    #[case("abc", "", Ordering::Equal)] // two invalid values are same
    fn compare_orders_versions(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(compare(a, b), expected);
        assert_eq!(compare_by_latest(a, b), expected.reverse());
    }

    #[test]
    fn compare_maps_to_sort_comparator_integers() {
        assert_eq!(compare("2", "1") as i32, 1);
        assert_eq!(compare("1", "2") as i32, -1);
        assert_eq!(compare("1", "1") as i32, 0);
    }

    #[test]
    fn compare_accepts_mixed_shapes() {
        let version = SemanticVersion::parse("1.2.3");

        assert_eq!(compare(version, [1, 2, 3]), Ordering::Equal);
        assert_eq!(compare([1, 3], "1.2.9"), Ordering::Greater);
        assert_eq!(compare(&version, "2"), Ordering::Less);
    }

    #[test]
    fn sort_ascending() {
        let mut versions = vec![
            "1.2.4", "1.0.1", "1.5.3", "1", "0.1.0", "4.5", "1.2.1", "2.1.3",
        ];
        versions.sort_by(|a, b| compare(*a, *b));

        assert_eq!(
            versions,
            vec!["0.1.0", "1", "1.0.1", "1.2.1", "1.2.4", "1.5.3", "2.1.3", "4.5"]
        );
    }

    #[test]
    fn sort_by_latest() {
        let mut versions = vec!["1.2.4", "1.0.1", "4.5", "invalid", "2.1.3"];
        versions.sort_by(|a, b| compare_by_latest(*a, *b));

        assert_eq!(versions, vec!["4.5", "2.1.3", "1.2.4", "1.0.1", "invalid"]);
    }

    #[rstest]
    #[case("1.2.3", true)]
    #[case("", false)]
    #[case("1.2.*", false)]
    fn is_valid_checks_text(#[case] version: &str, #[case] expected: bool) {
        assert_eq!(is_valid(version), expected);
    }

    #[test]
    fn is_valid_checks_lists() {
        assert!(is_valid([0]));
        assert!(!is_valid([1, 2, -10]));
        assert!(!is_valid(Vec::<i64>::new()));
    }
}
