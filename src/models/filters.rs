//! Selectors used by the filter engine.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Keyword that disables a filter.
const ALL: &str = "all";

/// Restricts the view by transaction sign.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    /// No restriction.
    #[default]
    All,
    /// Only strictly positive amounts.
    Income,
    /// Only strictly negative amounts.
    Expense,
}

impl fmt::Display for TypeFilter {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::All => ALL,
            Self::Income => "income",
            Self::Expense => "expense",
        };
        f.write_str(name)
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ALL => Ok(Self::All),
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!(
                "unknown transaction type {other:?} (expected all, income or expense)"
            )),
        }
    }
}

/// Restricts the view to a single category.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// No restriction.
    #[default]
    All,
    /// Only transactions whose category equals this value exactly.
    Only(String),
}

impl CategoryFilter {
    /// Builds a filter from a raw selector value, where `"all"` disables
    /// filtering.
    #[inline]
    #[must_use]
    pub fn from_selector(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    /// Returns `true` if the category passes this filter.
    #[inline]
    #[must_use]
    pub fn accepts(&self, category: &str) -> bool {
        match *self {
            Self::All => true,
            Self::Only(ref wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::All => f.write_str(ALL),
            Self::Only(ref category) => f.write_str(category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = core::convert::Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selector(s))
    }
}
