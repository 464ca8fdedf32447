//! Strongly-typed ID wrappers for line items and history entries
//!
//! Ids are opaque strings: fresh ones are UUID v4 in simple form, but any
//! string written by an earlier version of the data file is accepted as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Number of characters shown when an id is displayed in a table
pub const SHORT_ID_LEN: usize = 8;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().simple().to_string())
            }

            /// Wrap an existing id string
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the underlying string
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Shortened form for table output
            pub fn short(&self) -> &str {
                match self.0.char_indices().nth(SHORT_ID_LEN) {
                    Some((idx, _)) => &self.0[..idx],
                    None => &self.0,
                }
            }

            /// Whether this id starts with the given (non-empty) prefix
            pub fn matches_prefix(&self, prefix: &str) -> bool {
                !prefix.is_empty() && self.0.starts_with(prefix)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

define_id!(ItemId);
define_id!(HistoryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let ids: std::collections::HashSet<ItemId> = (0..1000).map(|_| ItemId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_short_display() {
        let id = ItemId::new();
        assert_eq!(id.short().len(), SHORT_ID_LEN);
        assert!(id.as_str().starts_with(id.short()));

        let legacy = HistoryId::from("k3j4h5g");
        assert_eq!(legacy.short(), "k3j4h5g");
    }

    #[test]
    fn test_legacy_id_deserializes() {
        let id: ItemId = serde_json::from_str("\"ab12cd3\"").unwrap();
        assert_eq!(id.as_str(), "ab12cd3");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ab12cd3\"");
    }

    #[test]
    fn test_matches_prefix() {
        let id = ItemId::from("abcdef123");
        assert!(id.matches_prefix("abc"));
        assert!(!id.matches_prefix("abd"));
        assert!(!id.matches_prefix(""));
    }
}
