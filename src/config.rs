//! Ledger configuration.

/// Categories recognized when no custom set is configured.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "food",
    "transport",
    "shopping",
    "entertainment",
    "bills",
    "health",
    "salary",
    "other",
];

/// Settings that shape ledger validation.
///
/// An empty category set accepts any non-empty category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Recognized category labels.
    categories: Vec<String>,
}

impl Default for LedgerConfig {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.iter().copied())
    }
}

impl LedgerConfig {
    /// Creates a configuration with the given category set.
    ///
    /// Labels are trimmed; blanks and duplicates are dropped.
    #[inline]
    #[must_use]
    pub fn new<I, T>(categories: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut set: Vec<String> = Vec::new();
        for raw in categories {
            let label = raw.as_ref().trim();
            if !label.is_empty() && !set.iter().any(|known| known == label) {
                set.push(label.to_owned());
            }
        }
        Self { categories: set }
    }

    /// Creates a configuration that accepts any non-empty category.
    #[inline]
    #[must_use]
    pub const fn unrestricted() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Parses a comma-separated category list such as
    /// `"food, rent, salary"`.
    #[inline]
    #[must_use]
    pub fn from_category_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Returns the recognized categories in configuration order.
    #[inline]
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns `true` if `category` may be used for a new transaction.
    #[inline]
    #[must_use]
    pub fn is_recognized(&self, category: &str) -> bool {
        self.categories.is_empty() || self.categories.iter().any(|known| known == category)
    }
}
