//! Scalar field types with lenient wire decoding.
//!
//! Responsibilities:
//! - [`ForceString`]: a value Grafana writes as either a number or a string.
//! - [`Tags`]: an insertion-ordered set of unique tag names.
//!
//! Does NOT handle:
//! - Any validation of the string contents (units like `"200px"` are opaque).

use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A string field that tolerates numeric input.
///
/// Decoding accepts a JSON string as-is and a JSON number formatted as an
/// integer (fractions are truncated). Any other JSON type, including `null`,
/// decodes to an empty string. Encoding always produces a JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ForceString(String);

impl ForceString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for ForceString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ForceString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ForceString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ForceString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for ForceString {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<&str> for ForceString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ForceStringWire {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for ForceString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match ForceStringWire::deserialize(deserializer)? {
            ForceStringWire::Text(s) => s,
            ForceStringWire::Unsigned(n) => n.to_string(),
            ForceStringWire::Signed(n) => n.to_string(),
            // Saturating cast truncates toward zero.
            ForceStringWire::Float(n) => (n as i64).to_string(),
            ForceStringWire::Other(_) => String::new(),
        };
        Ok(Self(value))
    }
}

/// An ordered set of unique tags.
///
/// First insertion wins: duplicates are dropped, and the relative order of
/// surviving tags never changes. Serializes as a plain JSON array; decodes
/// from an array (duplicates removed) or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tags(Vec<String>);

impl Tags {
    /// Build a tag set from `tags`, keeping the first occurrence of each.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Self::default();
        out.add(tags);
        out
    }

    /// Replace the contents with `tags`, deduplicated.
    pub fn set<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.clear();
        self.add(tags);
    }

    /// Append every tag not already present.
    pub fn add<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = self.0.iter().cloned().collect();
        for tag in tags {
            let tag = tag.into();
            if seen.insert(tag.clone()) {
                self.0.push(tag);
            }
        }
    }

    /// Delete the named tags. Unknown names are ignored.
    pub fn remove<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let doomed: HashSet<String> = tags.into_iter().map(|t| t.as_ref().to_string()).collect();
        if doomed.is_empty() {
            return;
        }
        self.0.retain(|tag| !doomed.contains(tag));
    }

    pub fn value(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for Tags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Vec<String>>::deserialize(deserializer)?;
        Ok(Self::new(raw.unwrap_or_default()))
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
