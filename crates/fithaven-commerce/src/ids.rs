//! Newtype IDs for type-safe identifiers.
//!
//! Fixture data numbers everything with small positive integers, so the
//! newtypes wrap integers. Keeping them distinct prevents passing a
//! `ReviewId` where a `ProductId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate integer-backed newtype ID structs.
macro_rules! define_id {
    ($name:ident, $inner:ty) => {
        /// A unique identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Create a new ID from its raw value.
            pub const fn new(id: $inner) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub const fn get(&self) -> $inner {
                self.0
            }

            /// The identifier that follows this one.
            pub fn next(&self) -> Self {
                Self(self.0.saturating_add(1))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(ProductId, u32);
define_id!(ReviewId, u32);
define_id!(MessageId, u64);

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(ProductId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(7);
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn test_id_next() {
        assert_eq!(MessageId::new(1).next(), MessageId::new(2));
        assert_eq!(ReviewId::new(u32::MAX).next(), ReviewId::new(u32::MAX));
    }

    #[test]
    fn test_id_parse() {
        let id: ProductId = " 3 ".parse().unwrap();
        assert_eq!(id, ProductId::new(3));
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", ProductId::new(42)), "42");
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&ProductId::new(5)).unwrap();
        assert_eq!(json, "5");
    }
}
