use serde_json::{Map, Value};

use super::error::{Shape, ValidationError, ValidationErrorKind};
use super::path::FieldPath;
use super::slug::is_valid_slug;
use super::url::is_absolute_url;

/// A validated JSON object together with its location in the document.
///
/// Every accessor reports failures against `path.key(field)`, so callers never
/// assemble paths by hand. `null` is treated the same as an absent field.
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: FieldPath,
}

impl<'a> Fields<'a> {
    pub fn object(value: &'a Value, path: FieldPath) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            other => Err(ValidationError::wrong_type(path, Shape::Object, other)),
        }
    }

    pub fn field_path(&self, key: &str) -> FieldPath {
        self.path.key(key)
    }

    pub fn optional(&self, key: &str) -> Option<&'a Value> {
        match self.map.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    pub fn required(&self, key: &str, expected: Shape) -> Result<&'a Value, ValidationError> {
        self.optional(key)
            .ok_or_else(|| ValidationError::missing(self.field_path(key), expected))
    }

    pub fn string(&self, key: &str) -> Result<String, ValidationError> {
        let value = self.required(key, Shape::String)?;
        as_string(value, self.field_path(key), Shape::String)
    }

    pub fn non_empty_string(&self, key: &str) -> Result<String, ValidationError> {
        let value = self.required(key, Shape::NonEmptyString)?;
        let text = as_string(value, self.field_path(key), Shape::NonEmptyString)?;
        if text.is_empty() {
            return Err(ValidationError::new(
                self.field_path(key),
                ValidationErrorKind::Empty,
            ));
        }
        Ok(text)
    }

    pub fn optional_string(&self, key: &str) -> Result<Option<String>, ValidationError> {
        self.optional(key)
            .map(|value| as_string(value, self.field_path(key), Shape::String))
            .transpose()
    }

    pub fn bool_or(&self, key: &str, default: bool) -> Result<bool, ValidationError> {
        match self.optional(key) {
            None => Ok(default),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(other) => Err(ValidationError::wrong_type(
                self.field_path(key),
                Shape::Boolean,
                other,
            )),
        }
    }

    /// A string usable as a single URL path segment and file stem.
    pub fn slug(&self, key: &str) -> Result<String, ValidationError> {
        let slug = self.string(key)?;
        if !is_valid_slug(&slug) {
            return Err(ValidationError::new(
                self.field_path(key),
                ValidationErrorKind::InvalidSlug { value: slug },
            ));
        }
        Ok(slug)
    }

    pub fn absolute_url(&self, key: &str) -> Result<String, ValidationError> {
        let value = self.required(key, Shape::AbsoluteUrl)?;
        let url = as_string(value, self.field_path(key), Shape::AbsoluteUrl)?;
        if !is_absolute_url(&url) {
            return Err(ValidationError::new(
                self.field_path(key),
                ValidationErrorKind::InvalidUrl { value: url },
            ));
        }
        Ok(url)
    }

    pub fn array(&self, key: &str) -> Result<&'a Vec<Value>, ValidationError> {
        let value = self.required(key, Shape::Array)?;
        as_array(value, self.field_path(key))
    }

    pub fn string_array(&self, key: &str) -> Result<Vec<String>, ValidationError> {
        let items = self.array(key)?;
        string_items(items, &self.field_path(key))
    }
}

pub(crate) fn as_string(
    value: &Value,
    path: FieldPath,
    expected: Shape,
) -> Result<String, ValidationError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        other => Err(ValidationError::wrong_type(path, expected, other)),
    }
}

pub(crate) fn as_array(value: &Value, path: FieldPath) -> Result<&Vec<Value>, ValidationError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(ValidationError::wrong_type(path, Shape::Array, other)),
    }
}

pub(crate) fn string_items(items: &[Value], path: &FieldPath) -> Result<Vec<String>, ValidationError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| as_string(item, path.index(i), Shape::String))
        .collect()
}
