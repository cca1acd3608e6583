use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Key-value slot map used for entity attributes and metadata.
///
/// Last write wins. A missing key reads as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slots {
    values: HashMap<String, Value>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Typed read. `None` if the slot is absent or holds a value that does
    /// not deserialize into `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Overwrite the slot and return the stored value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &Value {
        let key = key.into();
        let value = value.into();
        self.values.insert(key.clone(), value);
        &self.values[&key]
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Slots
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl From<serde_json::Map<String, Value>> for Slots {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}
