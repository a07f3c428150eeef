//! General helpers: joining, case-insensitive lookup, range checks, inversion.

use std::fmt;

/// Delimiter used by [`JoinExt::join_default`].
pub const DEFAULT_DELIMITER: char = ',';

/// Joins the textual form of every item in a sequence.
pub trait JoinExt {
    /// Joins the items, inserting `delimiter` between each pair.
    ///
    /// The delimiter may be a string or a single character. An empty
    /// sequence produces an empty string.
    fn join_with<D: fmt::Display>(self, delimiter: D) -> String;

    /// Joins the items with [`DEFAULT_DELIMITER`].
    fn join_default(self) -> String
    where
        Self: Sized,
    {
        self.join_with(DEFAULT_DELIMITER)
    }
}

impl<I> JoinExt for I
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    fn join_with<D: fmt::Display>(self, delimiter: D) -> String {
        let delimiter = delimiter.to_string();
        let mut joined = String::new();

        for (index, item) in self.into_iter().enumerate() {
            if index > 0 {
                joined.push_str(&delimiter);
            }
            joined.push_str(&item.to_string());
        }

        joined
    }
}

/// Case-insensitive membership test over a sequence of strings.
pub trait ContainsIgnoreCase {
    /// Returns true if any element equals `target`, ignoring case.
    fn contains_ignore_case(self, target: &str) -> bool;
}

impl<I> ContainsIgnoreCase for I
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn contains_ignore_case(self, target: &str) -> bool {
        self.into_iter()
            .any(|candidate| eq_ignore_case(candidate.as_ref(), target))
    }
}

/// Compares two strings after lower-casing both.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    a.to_lowercase() == b.to_lowercase()
}

/// Checks whether `value` lies between `min` and `max`.
///
/// With `inclusive` false the bounds themselves are outside the range.
/// Passing `min > max` is the caller's problem: no value satisfies both
/// comparisons, so the result is always false.
pub fn is_in_range<T: PartialOrd>(value: &T, min: &T, max: &T, inclusive: bool) -> bool {
    if inclusive {
        value >= min && value <= max
    } else {
        value > min && value < max
    }
}

/// Range checks as methods on any ordered type.
pub trait InRange: PartialOrd + Sized {
    /// See [`is_in_range`].
    fn is_in_range(&self, min: Self, max: Self, inclusive: bool) -> bool {
        is_in_range(self, &min, &max, inclusive)
    }

    /// Exclusive range check.
    fn is_between(&self, min: Self, max: Self) -> bool {
        self.is_in_range(min, max, false)
    }

    /// Inclusive range check.
    fn is_within(&self, min: Self, max: Self) -> bool {
        self.is_in_range(min, max, true)
    }
}

impl<T: PartialOrd> InRange for T {}

/// In-place boolean negation.
pub trait Invert {
    /// Flips the value and returns the new state.
    fn invert(&mut self) -> bool;
}

impl Invert for bool {
    fn invert(&mut self) -> bool {
        *self = !*self;
        *self
    }
}

/// Flips `flag` in place and returns the new value.
pub fn invert(flag: &mut bool) -> bool {
    flag.invert()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn join_with_char() {
        assert_eq!(["a", "b", "c"].join_with(','), "a,b,c");
    }

    #[test]
    fn join_with_str() {
        assert_eq!(vec![1_u32, 2, 3].join_with(" | "), "1 | 2 | 3");
    }

    #[test]
    fn join_default_uses_comma() {
        assert_eq!(vec!["x", "y"].join_default(), "x,y");
    }

    #[test]
    fn join_empty_and_single() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(empty.join_default(), "");
        assert_eq!(["only"].join_with(';'), "only");
    }

    #[test]
    fn join_borrowed_collection() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!((&items).join_with('-'), "a-b");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn contains_ignore_case_matches() {
        assert!(["Foo", "Bar"].contains_ignore_case("foo"));
        assert!(["Foo", "Bar"].contains_ignore_case("BAR"));
        assert!(!["Foo", "Bar"].contains_ignore_case("baz"));
    }

    #[test]
    fn contains_ignore_case_empty() {
        let empty: Vec<&str> = Vec::new();
        assert!(!empty.contains_ignore_case(""));
    }

    #[test]
    fn contains_ignore_case_unicode() {
        let words = vec!["Straße".to_string(), "ÉCOLE".to_string()];
        assert!((&words).contains_ignore_case("école"));
        assert!(!words.contains_ignore_case("STRASSE"));
    }

    #[test]
    fn range_examples() {
        assert!(is_in_range(&5, &1, &10, false));
        assert!(!is_in_range(&1, &1, &10, false));
        assert!(is_in_range(&1, &1, &10, true));
        assert!(is_in_range(&10, &1, &10, true));
        assert!(!is_in_range(&11, &1, &10, true));
    }

    #[test]
    fn range_methods() {
        assert!(5_i32.is_between(1, 10));
        assert!(!10_i32.is_between(1, 10));
        assert!(10_i32.is_within(1, 10));
        assert!(2.5_f64.is_in_range(2.0, 3.0, false));
        assert!("m".is_between("a", "z"));
    }

    #[test]
    fn range_inverted_bounds_is_never_true() {
        assert!(!is_in_range(&5, &10, &1, false));
        assert!(!is_in_range(&5, &10, &1, true));
    }

    #[test]
    fn range_nan_is_outside() {
        assert!(!f64::NAN.is_within(f64::MIN, f64::MAX));
    }

    #[test]
    fn invert_flips_in_place() {
        let mut flag = false;
        assert!(flag.invert());
        assert!(flag);
        assert!(!invert(&mut flag));
        assert!(!flag);
    }

    // ── property tests ────────────────────────────────────────────

    mod prop {
        use super::*;
        use proptest::prelude::*;
        use proptest::prelude::prop;

        proptest! {
            #[test]
            fn join_then_split_roundtrips(
                items in prop::collection::vec("[a-z0-9]{1,8}", 1..12),
                delimiter in "[,;|/ .:#-]{1,3}"
            ) {
                let joined = (&items).join_with(&delimiter);
                let split: Vec<String> = joined.split(delimiter.as_str()).map(str::to_string).collect();
                prop_assert_eq!(split, items);
            }

            #[test]
            fn join_with_char_delimiter_roundtrips(
                items in prop::collection::vec("[a-z0-9]{1,8}", 1..12),
                delimiter in prop::sample::select(vec![',', ';', '|', '\t', ' '])
            ) {
                let joined = (&items).join_with(delimiter);
                let split: Vec<String> = joined.split(delimiter).map(str::to_string).collect();
                prop_assert_eq!(split, items);
            }

            #[test]
            fn contains_matches_lowercase_comparison(
                items in prop::collection::vec(".{0,6}", 0..8),
                target in ".{0,6}"
            ) {
                let expected = items
                    .iter()
                    .any(|item| item.to_lowercase() == target.to_lowercase());
                prop_assert_eq!((&items).contains_ignore_case(&target), expected);
            }

            #[test]
            fn range_agrees_with_comparisons(x in any::<i64>(), a in any::<i64>(), b in any::<i64>()) {
                prop_assume!(a < b);
                prop_assert_eq!(x.is_in_range(a, b, false), a < x && x < b);
                prop_assert_eq!(x.is_in_range(a, b, true), a <= x && x <= b);
            }

            #[test]
            fn invert_twice_restores(original in any::<bool>()) {
                let mut flag = original;
                flag.invert();
                flag.invert();
                prop_assert_eq!(flag, original);
            }
        }
    }
}
