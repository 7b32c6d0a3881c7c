//! Field table: the rules to apply to each named field.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::rules::Rule;

/// Mapping from field name to the ordered rules applied to it.
///
/// Rules within a field run in declaration order. Callers must not depend
/// on the order fields are visited in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(IndexMap<String, Vec<Rule>>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Fields::insert`].
    pub fn with(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.insert(name, rules);
        self
    }

    /// Set the rules for a field, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, rules: Vec<Rule>) -> Option<Vec<Rule>> {
        self.0.insert(name.into(), rules)
    }

    pub fn get(&self, name: &str) -> Option<&[Rule]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.0
            .iter()
            .map(|(name, rules)| (name.as_str(), rules.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<Rule>)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, Vec<Rule>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, rules)| (name.into(), rules))
                .collect(),
        )
    }
}
