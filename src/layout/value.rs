//! Style property values and size resolution
//!
//! Shoes styles accept several shapes for the same property: `width: 120`,
//! `width: 0.5`, `width: "50%"`, and negative forms of each that measure from
//! the far edge of the container (`width: -20` is "20 pixels less than the
//! container"). [`SizeRequest`] is the parsed form; [`resolve_size`] turns a raw
//! property value into pixels for a given container dimension.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Style properties of a drawable, keyed by style name
pub type Properties = BTreeMap<String, PropertyValue>;

/// A raw style property value as handed over by the drawable tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Nil,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    List(Vec<PropertyValue>),
    Table(BTreeMap<String, PropertyValue>),
}

impl PropertyValue {
    pub fn is_nil(&self) -> bool {
        matches!(self, PropertyValue::Nil)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Int(i) => Some(*i as f64),
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Nil => write!(f, "nil"),
            PropertyValue::Int(i) => write!(f, "{}", i),
            PropertyValue::Float(v) => write!(f, "{:?}", v),
            PropertyValue::Text(s) => write!(f, "{:?}", s),
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::List(items) => {
                let inner = items
                    .iter()
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{}]", inner)
            }
            PropertyValue::Table(entries) => {
                let inner = entries
                    .iter()
                    .map(|(k, v)| format!("{} = {}", k, v))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{}}}", inner)
            }
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Int(v as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Float(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Text(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Text(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(PropertyValue::Nil)
    }
}

/// A value that cannot be interpreted as a size request
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unexpected size-request value: {0}")]
pub struct MalformedSize(pub PropertyValue);

/// A parsed size request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeRequest {
    /// Whole pixels; negative counts back from the far edge
    Pixels(i64),
    /// Fraction of the container; negative means `1.0 + value`
    Fraction(f64),
}

impl SizeRequest {
    /// Parse a raw property value. `Ok(None)` means the property is unset.
    pub fn parse(value: &PropertyValue) -> Result<Option<SizeRequest>, MalformedSize> {
        let malformed = || MalformedSize(value.clone());
        match value {
            PropertyValue::Nil => Ok(None),
            PropertyValue::Int(px) => Ok(Some(SizeRequest::Pixels(*px))),
            PropertyValue::Float(f) if f.is_finite() => Ok(Some(SizeRequest::Fraction(*f))),
            PropertyValue::Text(s) => {
                let number = s.strip_suffix('%').ok_or_else(malformed)?;
                let pct: f64 = number.parse().map_err(|_| malformed())?;
                if !pct.is_finite() {
                    return Err(malformed());
                }
                Ok(Some(SizeRequest::Fraction(pct / 100.0)))
            }
            _ => Err(malformed()),
        }
    }

    /// Turn the request into pixels for a container dimension
    pub fn resolve(self, container: f64) -> f64 {
        match self {
            SizeRequest::Pixels(px) if px < 0 => (container + px as f64).max(0.0),
            SizeRequest::Pixels(px) => px as f64,
            SizeRequest::Fraction(f) if f < 0.0 => (container * (1.0 + f)).max(0.0),
            SizeRequest::Fraction(f) => container * f,
        }
    }
}

/// Resolve a raw property value against a container dimension.
///
/// Returns `Ok(None)` for nil so callers can fall through to their defaults.
pub fn resolve_size(value: &PropertyValue, container: f64) -> Result<Option<f64>, MalformedSize> {
    Ok(SizeRequest::parse(value)?.map(|req| req.resolve(container)))
}
