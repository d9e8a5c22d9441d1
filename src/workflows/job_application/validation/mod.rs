mod parsers;
mod rules;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{FormData, FormField};
use super::visibility::VisibilityFlags;

/// A single field failing validation at submit time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: FormField,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Failing fields and the message rendered next to each of them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FormField, String>);

impl ErrorMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Comma separated field names, for log lines.
    pub fn field_names(&self) -> String {
        self.fields()
            .map(FormField::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<FieldValidationError> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = FieldValidationError>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|error| (error.field, error.message))
                .collect(),
        )
    }
}

/// Run every field rule against the current values.
///
/// Conditional fields are only checked while `flags` shows them.
pub fn validate(data: &FormData, flags: &VisibilityFlags) -> ErrorMap {
    rules::FIELD_RULES
        .iter()
        .filter_map(|rule| rule(data, flags))
        .collect()
}
