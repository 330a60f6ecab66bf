use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select(&'static [&'static str]),
    TextArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    /// Element id shared by the control and its `<label for>`.
    pub fn id(&self) -> &'static str {
        self.name
    }
}

pub const SERVICES: &[&str] = &["Brand identity", "Web design", "Video production", "Marketing strategy"];

pub const CONSULTATION_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "name", label: "Your name", kind: FieldKind::Text, required: true },
    FieldSpec { name: "email", label: "Email address", kind: FieldKind::Email, required: true },
    FieldSpec { name: "phone", label: "Phone (optional)", kind: FieldKind::Tel, required: false },
    FieldSpec { name: "service", label: "Service", kind: FieldKind::Select(SERVICES), required: true },
    FieldSpec { name: "message", label: "Tell us about your project", kind: FieldKind::TextArea, required: true },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequired(Vec<&'static str>),
}

/// Checks that every required field has a non-blank value.
pub fn validate(fields: &[FieldSpec], values: &HashMap<&'static str, String>) -> Result<(), FormError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|field| field.required)
        .filter(|field| values.get(field.name).map_or(true, |value| value.trim().is_empty()))
        .map(|field| field.name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(FormError::MissingRequired(missing))
    }
}
