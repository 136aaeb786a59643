// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw declaration shapes submitted by contributors.
//!
//! Everything here is deliberately lenient: every field has a default,
//! unknown fields are ignored, and list-valued fields accept a single
//! (optionally comma-separated) string. Canonical shapes are produced later
//! by the normalizer.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Insertion-ordered map of declarations keyed by slug.
///
/// Inserting an existing key replaces the value wholesale and keeps the
/// key's original position. Iteration follows registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationMap<T> {
    entries: Vec<(String, T)>,
    index: HashMap<String, usize>,
}

impl<T> DeclarationMap<T> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or replace `key`. Returns the replaced value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let pos = self.index.remove(key)?;
        let (_, value) = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(value)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Registration position of `key`.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut T)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Apply `f` to every value, keeping keys and order.
    pub fn map_values<U>(self, mut f: impl FnMut(&str, T) -> U) -> DeclarationMap<U> {
        let entries = self
            .entries
            .into_iter()
            .map(|(k, v)| {
                let mapped = f(&k, v);
                (k, mapped)
            })
            .collect();
        DeclarationMap {
            entries,
            index: self.index,
        }
    }

    /// Keep only entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &T) -> bool) {
        self.entries.retain(|(k, v)| keep(k, v));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(pos, (k, _))| (k.clone(), pos))
            .collect();
    }
}

impl<T> Default for DeclarationMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for DeclarationMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, T> Extend<(K, T)> for DeclarationMap<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<T> IntoIterator for DeclarationMap<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T: Serialize> Serialize for DeclarationMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct DeclarationMapVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for DeclarationMapVisitor<T> {
    type Value = DeclarationMap<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a table of declarations keyed by slug")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = DeclarationMap::new();
        while let Some((key, value)) = access.next_entry::<String, T>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DeclarationMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DeclarationMapVisitor(PhantomData))
    }
}

/// A field that accepts either one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    One(String),
    Many(Vec<String>),
}

impl StringList {
    /// Canonical items: a single string is split on commas, every item is
    /// trimmed, empty items are dropped and duplicates removed (first wins).
    pub fn items(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            StringList::One(s) => s.split(',').collect(),
            StringList::Many(list) => list.iter().map(String::as_str).collect(),
        };
        let mut out: Vec<String> = Vec::with_capacity(raw.len());
        for item in raw.into_iter().map(str::trim).filter(|s| !s.is_empty()) {
            if !out.iter().any(|seen| seen == item) {
                out.push(item.to_string());
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

impl Default for StringList {
    fn default() -> Self {
        StringList::Many(Vec::new())
    }
}

impl From<&str> for StringList {
    fn from(value: &str) -> Self {
        StringList::One(value.to_string())
    }
}

impl From<Vec<&str>> for StringList {
    fn from(value: Vec<&str>) -> Self {
        StringList::Many(value.into_iter().map(String::from).collect())
    }
}

/// A boolean flag that contributors may also spell as a string or number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl FlagValue {
    /// `yes`, `true`, `1` and `on` (any case) are true; anything else is false.
    pub fn as_bool(&self) -> bool {
        match self {
            FlagValue::Bool(b) => *b,
            FlagValue::Number(n) => *n != 0,
            FlagValue::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "yes" | "true" | "1" | "on"
            ),
        }
    }
}

impl Default for FlagValue {
    fn default() -> Self {
        FlagValue::Bool(false)
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

/// A product type declaration as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawType {
    /// Display label; the slug is used when absent.
    pub name: Option<String>,
    /// Reference to the behavior implementation replacing the host default.
    #[serde(alias = "class")]
    pub implementation: Option<String>,
    /// Types or options whose visibility rules this type inherits.
    pub extends: StringList,
    /// Tabs scoped to this type.
    pub tabs: Vec<RawTab>,
    /// Option groups to reveal while this type is selected.
    pub show_groups: StringList,
    /// Tabs to reveal while this type is selected.
    pub show_tabs: StringList,
}

/// A product option (checkbox) declaration as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawOption {
    pub label: Option<String>,
    #[serde(alias = "desc")]
    pub description: Option<String>,
    /// Targets (type slugs) where the checkbox is shown.
    #[serde(rename = "for")]
    pub targets: StringList,
    pub default: FlagValue,
    /// Save through the product's native setter instead of metadata.
    #[serde(alias = "prop", alias = "is_native_property")]
    pub native: FlagValue,
    pub extends: StringList,
    pub tabs: Vec<RawTab>,
    pub show_groups: StringList,
    pub show_tabs: StringList,
}

/// A product data tab declaration as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTab {
    pub id: Option<String>,
    /// Registry key alias; `id` is used when absent.
    pub key: Option<String>,
    pub label: Option<String>,
    pub icon: Option<String>,
    #[serde(alias = "prio")]
    pub priority: Option<i64>,
    pub panel: StringList,
    #[serde(rename = "for")]
    pub targets: StringList,
}

impl RawTab {
    /// Registry key of this tab: the explicit alias, else the id.
    pub fn registry_key(&self) -> String {
        self.key
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

/// Type declarations keyed by slug.
pub type TypeBag = DeclarationMap<RawType>;

/// Option declarations keyed by option key.
pub type OptionBag = DeclarationMap<RawOption>;

/// Explicit tab declarations keyed by owner group.
pub type TabBag = DeclarationMap<Vec<RawTab>>;

/// The three collected bags, in pipeline order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    pub types: TypeBag,
    pub options: OptionBag,
    pub tabs: TabBag,
}
