//! Case-insensitive, locale-aware ordering of archive entry paths.
//!
//! Archive producers are inconsistent about casing (`Page01.JPG` next to
//! `page02.jpg`), so page order must not depend on byte values. The
//! comparator collates with the ICU4X collator at secondary strength, which
//! ignores case differences while keeping accented characters ordered the
//! way a human expects: the equivalent of case-folding both operands and
//! then collating, rather than a raw byte comparison.
//!
//! One comparator is built per document open and reused for every sort and
//! fetch lookup; it is `Send + Sync`.

use std::cmp::Ordering;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};

use crate::{Error, Result};

/// Total, case-insensitive, locale-aware order over entry path strings.
pub struct PathComparator {
    collator: CollatorBorrowed<'static>,
}

impl std::fmt::Debug for PathComparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathComparator").finish_non_exhaustive()
    }
}

impl PathComparator {
    /// Creates a comparator with default locale preferences.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Collation`] if the collation data lookup fails.
    pub fn new() -> Result<Self> {
        let mut options = CollatorOptions::default();
        // Secondary strength: case differences are ignored, accents are not.
        options.strength = Some(Strength::Secondary);

        let collator = Collator::try_new(CollatorPreferences::default(), options)
            .map_err(|e| Error::Collation(e.to_string()))?;

        Ok(Self { collator })
    }

    /// Compares two entry paths.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }

    /// Returns true if the two paths compare equal under this order.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let cmp = PathComparator::new().unwrap();
        assert_eq!(cmp.compare("Page01.JPG", "page01.jpg"), Ordering::Equal);
        assert!(cmp.matches("A.png", "a.PNG"));
    }

    #[test]
    fn test_order_ignores_original_casing() {
        let cmp = PathComparator::new().unwrap();
        // A.jpg < b.JPG iff a < b case-folded, regardless of casing.
        assert_eq!(cmp.compare("A.jpg", "b.JPG"), Ordering::Less);
        assert_eq!(cmp.compare("B.jpg", "a.JPG"), Ordering::Greater);
    }

    #[test]
    fn test_total_order_on_distinct_paths() {
        let cmp = PathComparator::new().unwrap();
        let mut paths = vec!["c.png", "B.png", "a.png"];
        paths.sort_by(|x, y| cmp.compare(x, y));
        assert_eq!(paths, vec!["a.png", "B.png", "c.png"]);
    }

    #[test]
    fn test_sorting_is_independent_of_input_order() {
        let cmp = PathComparator::new().unwrap();
        let mut first = vec!["x/2.png", "X/1.png", "a.png"];
        let mut second = vec!["a.png", "x/2.png", "X/1.png"];
        first.sort_by(|x, y| cmp.compare(x, y));
        second.sort_by(|x, y| cmp.compare(x, y));
        assert_eq!(first, second);
    }
}
