use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A set of normalized preference tokens (work formats, employment types).
///
/// Profiles often store these as one delimited string such as
/// `"Remote, Remote/Office"`; both that and a JSON array are accepted.
/// Tokens are trimmed and lowercased, empties are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PreferenceSet(BTreeSet<String>);

impl PreferenceSet {
    pub fn from_delimited(raw: &str) -> Self {
        raw.split(',').collect()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(&normalize_token(value))
    }

    /// Substring containment against any token. Mirrors how the legacy
    /// profile pages tested delimited strings.
    pub fn contains_substring(&self, value: &str) -> bool {
        let needle = normalize_token(value);
        !needle.is_empty() && self.0.iter().any(|token| token.contains(&needle))
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PreferenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|s| normalize_token(s.as_ref()))
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }
}

pub fn normalize_token(value: &str) -> String {
    value.trim().to_lowercase()
}

/// A delimited string or an array; non-string array items are skipped and
/// any other value reads as an empty set.
impl<'de> Deserialize<'de> for PreferenceSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(raw) => Self::from_delimited(&raw),
            Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
            _ => Self::default(),
        })
    }
}
