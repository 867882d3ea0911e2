//! Variant lookup tables shared by the style primitives.

use std::str::FromStr;

/// A closed set of visual variants, each mapped to a class string.
pub trait StyleTable: Copy + FromStr {
    /// CSS classes for this entry.
    fn classes(self) -> &'static str;
}

/// Name did not match any entry of a variant table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {table} variant: {name:?}")]
pub struct UnknownVariant {
    /// Which table was consulted.
    pub table: &'static str,
    /// The name that failed to match.
    pub name: String,
}

/// A variant given either as a typed value or by name.
///
/// Names are resolved against the table when the key is built. A name that
/// matches nothing is kept as-is and contributes no classes, so the
/// component falls back to its base styling instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleKey<T> {
    /// A recognized entry.
    Known(T),
    /// A name with no matching entry.
    Unknown(String),
}

impl<T: StyleTable> StyleKey<T> {
    /// Resolve a variant name.
    pub fn named(name: &str) -> Self {
        name.parse::<T>()
            .map_or_else(|_| Self::Unknown(name.to_string()), Self::Known)
    }

    /// Classes for the resolved entry, empty when unknown.
    #[must_use]
    pub fn classes(&self) -> &'static str {
        match self {
            Self::Known(entry) => entry.classes(),
            Self::Unknown(_) => "",
        }
    }

    #[must_use]
    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(entry) => Some(*entry),
            Self::Unknown(_) => None,
        }
    }
}

impl<T: StyleTable> From<T> for StyleKey<T> {
    fn from(entry: T) -> Self {
        Self::Known(entry)
    }
}

impl<T: StyleTable> From<&str> for StyleKey<T> {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl<T: StyleTable> From<String> for StyleKey<T> {
    fn from(name: String) -> Self {
        Self::named(&name)
    }
}

/// Join non-empty class fragments with single spaces.
pub(crate) fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Implements [`FromStr`] and [`StyleTable`] for a variant enum from a
/// `Variant => ("name", "classes")` listing.
macro_rules! style_table {
    ($ty:ident, $table:literal, { $($variant:ident => ($name:literal, $classes:literal)),+ $(,)? }) => {
        impl $ty {
            /// Every entry of the table, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Lowercase name used in markup and configuration.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl $crate::ui::components::style::StyleTable for $ty {
            fn classes(self) -> &'static str {
                match self {
                    $($ty::$variant => $classes),+
                }
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::ui::components::style::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err($crate::ui::components::style::UnknownVariant {
                        table: $table,
                        name: s.to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use style_table;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_classes_skips_blanks() {
        assert_eq!(join_classes(&["a b", "", "  ", "c"]), "a b c");
    }
}
