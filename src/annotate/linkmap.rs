//! Ordered trigger-phrase to URL mapping.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

/// One trigger-phrase rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRule {
    /// Literal phrase to find in prose (case-insensitive match key).
    pub phrase: String,
    /// Target URL the phrase links to.
    pub url: String,
}

/// Mapping from trigger phrases to target URLs for one block of prose.
///
/// Phrases are unique case-insensitively; a later duplicate overwrites
/// the earlier URL but keeps the original definition position. Iteration
/// follows definition order, which makes downstream tie-breaking between
/// equal-start matches deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMap {
    rules: Vec<LinkRule>,
}

impl LinkMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. Replaces the URL of an existing phrase
    /// (case-insensitive) and returns the replaced URL.
    pub fn insert(&mut self, phrase: impl Into<String>, url: impl Into<String>) -> Option<String> {
        let phrase = phrase.into();
        let url = url.into();

        if let Some(rule) = self
            .rules
            .iter_mut()
            .find(|r| eq_phrase(&r.phrase, &phrase))
        {
            return Some(std::mem::replace(&mut rule.url, url));
        }

        self.rules.push(LinkRule { phrase, url });
        None
    }

    /// Look up the URL for a phrase (case-insensitive).
    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| eq_phrase(&r.phrase, phrase))
            .map(|r| r.url.as_str())
    }

    /// Iterate rules in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &LinkRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Case-insensitive phrase equality.
#[inline]
fn eq_phrase(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl<'a, const N: usize> From<[(&'a str, &'a str); N]> for LinkMap {
    fn from(pairs: [(&'a str, &'a str); N]) -> Self {
        let mut map = Self::new();
        for (phrase, url) in pairs {
            map.insert(phrase, url);
        }
        map
    }
}

impl Serialize for LinkMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for rule in &self.rules {
            map.serialize_entry(&rule.phrase, &rule.url)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LinkMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LinkMapVisitor;

        impl<'de> Visitor<'de> for LinkMapVisitor {
            type Value = LinkMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of trigger phrases to URLs")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                // MapAccess yields entries in document order, which is
                // exactly the definition order the map preserves.
                let mut map = LinkMap::new();
                while let Some((phrase, url)) = access.next_entry::<String, String>()? {
                    map.insert(phrase, url);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(LinkMapVisitor)
    }
}
