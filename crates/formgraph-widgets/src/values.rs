//! Flat, multi-valued form submissions.

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Submitted key → values mapping.
///
/// Keys are case sensitive and keep the order in which they first appeared.
/// Repeated keys accumulate their values in submission order.
///
/// # Example
///
/// ```
/// use formgraph_widgets::FormValues;
///
/// let values = FormValues::from_query("Title=Dr&Tags.0=a+b&Tags.1=c%26d").unwrap();
/// assert_eq!(values.get("Title"), Some("Dr"));
/// assert_eq!(values.get("Tags.0"), Some("a b"));
/// assert_eq!(values.get("Tags.1"), Some("c&d"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: IndexMap<String, Vec<String>>,
}

impl FormValues {
    /// Create an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` body.
    ///
    /// `+` decodes to a space and percent escapes are decoded as UTF-8.
    /// A pair without `=` is a key with an empty value.
    pub fn from_query(query: &str) -> Result<Self> {
        let mut values = FormValues::new();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            values.append(decode_component(key)?, decode_component(value)?);
        }
        Ok(values)
    }

    /// Builder-style [`FormValues::append`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(key, value);
        self
    }

    /// Add one value under `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    /// First value submitted under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value submitted under `key`, in order.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns `true` if `key` was submitted at all.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Submitted keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn decode_component(raw: &str) -> Result<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| Error::submission(format!("cannot decode {raw:?}: {e}")))
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FormValues::new();
        for (key, value) in iter {
            values.append(key, value);
        }
        values
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
