//! Field-level validation errors for request parameters.

use std::{collections::BTreeMap, fmt};

/// Validation messages keyed by the wire (camelCase) name of the offending field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error when `value` is empty or only whitespace.
    pub fn require(&mut self, field: &str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, format!("The {} field is required.", label));
        }
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `Ok(())` when no errors were recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect();
        write!(f, "{}", fields.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_flags_blank_values() {
        let mut errors = FieldErrors::new();
        errors.require("name", "Name", "   ");
        errors.require("description", "Description", "filled");

        let fields = errors.into_inner();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["name"], vec!["The Name field is required.".to_string()]);
    }

    #[test]
    fn into_result_is_ok_without_errors() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn display_lists_each_field() {
        let mut errors = FieldErrors::new();
        errors.add("name", "too short");
        errors.add("sessionName", "missing");

        assert_eq!(errors.to_string(), "name: too short; sessionName: missing");
    }
}
