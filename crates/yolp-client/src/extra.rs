//! Overflow storage for response keys that have no named field.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::json;

/// JSON object keys captured from a detail record that the model does not
/// name explicitly.
///
/// Keys keep the spelling the server used; lookups ignore ASCII case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraFields(Map<String, Value>);

impl ExtraFields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value stored under `key`, compared case-insensitively.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).or_else(|| {
            self.0
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        })
    }

    /// Decodes the value stored under `key` into `T`.
    ///
    /// Returns `None` when the key is absent or the value does not have the
    /// shape of `T`.
    #[must_use]
    pub fn get_extra<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        json::from_value(value.clone()).ok()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Removes `key` (case-insensitively) and decodes it into `T`. A missing
    /// key and an explicit `null` both yield `Ok(None)`.
    pub(crate) fn take<T: DeserializeOwned>(
        &mut self,
        key: &str,
    ) -> Result<Option<T>, serde_json::Error> {
        let Some(stored) = self.0.keys().find(|k| k.eq_ignore_ascii_case(key)).cloned() else {
            return Ok(None);
        };
        match self.0.remove(&stored) {
            Some(value) => json::from_value(value),
            None => Ok(None),
        }
    }
}

impl FromIterator<(String, Value)> for ExtraFields {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ExtraFields {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
