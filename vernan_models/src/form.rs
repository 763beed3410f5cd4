use std::collections::{BTreeMap, BTreeSet};

use crate::field::FieldName;

/// The current value of every field. All four fields are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Iterates over `(field, value)` pairs in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}

/// Per-field error messages. A missing entry and an empty string both mean
/// "no error".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn get(&self, field: FieldName) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: FieldName, error: String) {
        self.0.insert(field, error);
    }

    pub fn has_errors(&self) -> bool {
        self.0.values().any(|error| !error.is_empty())
    }

    /// Iterates over the fields that currently carry a non-empty error.
    pub fn errors(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0
            .iter()
            .filter(|(_, error)| !error.is_empty())
            .map(|(&field, error)| (field, error.as_str()))
    }
}

impl FromIterator<(FieldName, String)> for ErrorMap {
    fn from_iter<T: IntoIterator<Item = (FieldName, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Fields the user has interacted with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedSet(BTreeSet<FieldName>);

impl TouchedSet {
    pub fn all() -> Self {
        Self(FieldName::ALL.into_iter().collect())
    }

    pub fn insert(&mut self, field: FieldName) {
        self.0.insert(field);
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
