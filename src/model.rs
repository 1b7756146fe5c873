use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "lenient_id")]
    pub category: u64,
    pub difficulty: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    /// Display name. The service calls this field `type`.
    #[serde(rename = "type")]
    pub name: String,
}

/// What the service reports as the active category for a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurrentCategory {
    Category(Category),
    Id(u64),
    Name(String),
}

impl CurrentCategory {
    /// Resolve to a category id, looking names up in `categories`.
    pub fn id(&self, categories: &CategoryMap) -> Option<u64> {
        match self {
            CurrentCategory::Category(c) => Some(c.id),
            CurrentCategory::Id(id) => Some(*id),
            CurrentCategory::Name(name) => name
                .parse::<u64>()
                .ok()
                .or_else(|| categories.find_by_name(name)),
        }
    }

    pub fn label<'a>(&'a self, categories: &'a CategoryMap) -> Option<&'a str> {
        match self {
            CurrentCategory::Category(c) => Some(c.name.as_str()),
            CurrentCategory::Id(id) => categories.resolve(*id),
            CurrentCategory::Name(name) => Some(name.as_str()),
        }
    }
}

/// Category id to display name, ordered by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryMap(BTreeMap<u64, String>);

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the display name for `id`. A miss is a display gap, not an error.
    pub fn resolve(&self, id: u64) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    pub fn find_by_name(&self, name: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> {
        self.0.iter().map(|(id, name)| (*id, name.as_str()))
    }

    /// Id of the `idx`-th category in sidebar order.
    pub fn id_at(&self, idx: usize) -> Option<u64> {
        self.0.keys().nth(idx).copied()
    }

    pub fn position(&self, id: u64) -> Option<usize> {
        self.0.keys().position(|k| *k == id)
    }
}

impl FromIterator<Category> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self(iter.into_iter().map(|c| (c.id, c.name)).collect())
    }
}

/// Accepts `3` and `"3"`; the service stores question categories as text.
fn lenient_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a non-negative integer or a numeric string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(|_| E::custom(format!("negative id {}", v)))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
            v.trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid id {:?}", v)))
        }
    }

    deserializer.deserialize_any(IdVisitor)
}
