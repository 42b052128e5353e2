use std::fmt;

use serde_json::Value;

use super::path::FieldPath;

/// The primitive shape a field was expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    String,
    NonEmptyString,
    Boolean,
    Object,
    Array,
    AbsoluteUrl,
    BlockType,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::String => "string",
            Shape::NonEmptyString => "non-empty string",
            Shape::Boolean => "boolean",
            Shape::Object => "object",
            Shape::Array => "array",
            Shape::AbsoluteUrl => "absolute URL",
            Shape::BlockType => "block type tag",
        };
        f.write_str(name)
    }
}

/// Name of the JSON type actually found, for error messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationErrorKind {
    #[error("missing required field, expected {expected}")]
    Missing { expected: Shape },

    #[error("expected {expected}, found {found}")]
    WrongType { expected: Shape, found: &'static str },

    #[error("expected non-empty string, found empty string")]
    Empty,

    #[error("expected absolute URL, found {value:?}")]
    InvalidUrl { value: String },

    #[error("expected slug of letters, digits, '-' and '_', found {value:?}")]
    InvalidSlug { value: String },

    #[error("unknown block type {tag:?}")]
    UnknownBlockType { tag: String },

    #[error("invalid value {value:?}, expected one of {}", .allowed.join(", "))]
    InvalidEnum {
        value: String,
        allowed: &'static [&'static str],
    },
}

/// A schema violation: the first offending field and what was wrong with it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{path}: {kind}")]
pub struct ValidationError {
    pub path: FieldPath,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(path: FieldPath, kind: ValidationErrorKind) -> Self {
        Self { path, kind }
    }

    pub(crate) fn missing(path: FieldPath, expected: Shape) -> Self {
        Self::new(path, ValidationErrorKind::Missing { expected })
    }

    pub(crate) fn wrong_type(path: FieldPath, expected: Shape, found: &Value) -> Self {
        Self::new(
            path,
            ValidationErrorKind::WrongType {
                expected,
                found: type_name(found),
            },
        )
    }
}

/// Failure to turn stored text into a [`super::Post`].
#[derive(Debug, thiserror::Error)]
pub enum PostSourceError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid post: {0}")]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_path_and_shape() {
        let err = ValidationError::missing(
            FieldPath::root().key("content").index(0).key("text"),
            Shape::String,
        );
        assert_eq!(
            err.to_string(),
            "content[0].text: missing required field, expected string"
        );
    }

    #[test]
    fn wrong_type_reports_found_type() {
        let err = ValidationError::wrong_type(
            FieldPath::root().key("published"),
            Shape::Boolean,
            &Value::String("yes".into()),
        );
        assert_eq!(err.to_string(), "published: expected boolean, found string");
    }

    #[test]
    fn invalid_enum_lists_allowed_values() {
        let err = ValidationError::new(
            FieldPath::root().key("height"),
            ValidationErrorKind::InvalidEnum {
                value: "huge".into(),
                allowed: &["small", "medium", "large"],
            },
        );
        assert_eq!(
            err.to_string(),
            "height: invalid value \"huge\", expected one of small, medium, large"
        );
    }
}
