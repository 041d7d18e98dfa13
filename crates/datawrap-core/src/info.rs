//! Auxiliary info passed alongside get and set operations
//!
//! Info is an ordered list of key/value pairs whose meaning is defined by
//! the format or the wrapper. An absent info and an empty one are the same
//! thing.

use crate::error::{DataError, DataResult};
use crate::payload::Payload;
use std::any::Any;

/// A single key/value pair of auxiliary info
#[derive(Debug)]
pub struct InfoPair {
    pub key: String,
    pub value: Payload,
}

impl InfoPair {
    pub fn new(key: impl Into<String>, value: impl Into<Payload>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered collection of [`InfoPair`]s
#[derive(Debug, Default)]
pub struct Info {
    pairs: Vec<InfoPair>,
}

impl Info {
    /// The "no auxiliary info" sentinel
    pub const fn none() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair (builder pattern)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Payload>) -> Self {
        self.push(InfoPair::new(key, value));
        self
    }

    pub fn push(&mut self, pair: InfoPair) {
        self.pairs.push(pair);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InfoPair> {
        self.pairs.iter()
    }

    /// First value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Payload> {
        self.pairs.iter().find(|p| p.key == key).map(|p| &p.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Typed lookup
    ///
    /// Returns `Ok(None)` when the key is absent and `OperationFailed` when
    /// it is present with a different type.
    pub fn get_as<T: Any>(&self, key: &str) -> DataResult<Option<&T>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value.downcast_ref::<T>().map(Some).ok_or_else(|| {
                DataError::failed(format!(
                    "info '{}' has type {}, expected {}",
                    key,
                    value.type_name(),
                    std::any::type_name::<T>()
                ))
            }),
        }
    }
}

impl FromIterator<InfoPair> for Info {
    fn from_iter<I: IntoIterator<Item = InfoPair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Info {
    type Item = InfoPair;
    type IntoIter = std::vec::IntoIter<InfoPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_empty() {
        let info = Info::none();
        assert!(info.is_empty());
        assert_eq!(info.len(), 0);
        assert!(info.get("pointer").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let info = Info::new().with("pretty", true).with("pretty", false);
        assert_eq!(info.len(), 2);
        assert_eq!(info.get_as::<bool>("pretty").unwrap(), Some(&true));
    }

    #[test]
    fn test_get_as_wrong_type() {
        let info = Info::new().with("pretty", "yes");
        let err = info.get_as::<bool>("pretty").unwrap_err();
        assert!(err.is_operation_failed());
        assert!(err.to_string().contains("info 'pretty'"));
    }

    #[test]
    fn test_collect_pairs() {
        let info: Info = vec![
            InfoPair::new("pointer", "/a"),
            InfoPair::new("pretty", true),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = info.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["pointer", "pretty"]);
        assert!(info.contains_key("pointer"));
        assert!(!info.contains_key("missing"));
    }
}
