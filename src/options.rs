use std::collections::BTreeMap;

use crate::{Error, Result};

/// Form or query parameters, in the order they are sent.
pub type Params = Vec<(String, String)>;

/// Caller-supplied parameters of an endpoint call.
///
/// Which keys an endpoint accepts is checked when the call is made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options(BTreeMap<String, String>);

impl Options {
    pub fn new() -> Self {
        Default::default()
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn set<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        self.insert(key, value);
        self
    }

    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<String>
    where
        K: Into<String>,
        V: ToString,
    {
        self.0.insert(key.into(), value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Options
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (k, v) in iter {
            options.insert(k, v);
        }
        options
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Options
where
    K: Into<String>,
    V: ToString,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// The option keys one endpoint understands.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Endpoint {
    name: &'static str,
    allowed: &'static [&'static str],
    required: &'static [&'static str],
}

impl Endpoint {
    pub(crate) const fn new(
        name: &'static str,
        allowed: &'static [&'static str],
        required: &'static [&'static str],
    ) -> Self {
        Endpoint {
            name,
            allowed,
            required,
        }
    }

    /// Validate `options` and merge the `forced` fields over them.
    ///
    /// Forced keys are accepted from the caller but always overwritten.
    pub(crate) fn params(&self, options: Options, forced: &[(&str, &str)]) -> Result<Params> {
        let mut merged = options.0;
        if let Some(key) = merged.keys().find(|k| {
            !self.allowed.contains(&k.as_str()) && !forced.iter().any(|(f, _)| *f == k.as_str())
        }) {
            return Err(Error::UnknownOption {
                endpoint: self.name,
                key: key.clone(),
            });
        }
        for (key, value) in forced {
            merged.insert((*key).to_string(), (*value).to_string());
        }
        if let Some(key) = self.required.iter().find(|k| !merged.contains_key(**k)) {
            return Err(Error::MissingOption {
                endpoint: self.name,
                key: *key,
            });
        }
        Ok(merged.into_iter().collect())
    }
}
