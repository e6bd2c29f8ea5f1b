//! Upstream numeric and scaling fields arrive as numbers, numeric strings ("25%"),
//! or lists of either. These types accept every shape and keep both a numeric
//! and a display view.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

use crate::error::DecodeError;

/// Numbers plus the raw text they came from. Built from a JSON number, string,
/// or array of numbers/strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueList {
    nums: Vec<f64>,
    display: Vec<String>,
}

impl ValueList {
    pub fn from_json(value: &Value) -> Result<Self, DecodeError> {
        let mut list = ValueList::default();
        match value {
            Value::Null => {}
            Value::Number(_) | Value::String(_) => {
                list.push_scalar(value);
            }
            Value::Array(items) => {
                for item in items {
                    list.push_scalar(item);
                }
                if list.display.is_empty() {
                    return Err(DecodeError::UnsupportedValueShape(value.to_string()));
                }
            }
            other => return Err(DecodeError::UnsupportedValueShape(other.to_string())),
        }
        Ok(list)
    }

    /// Adds one number or string. Anything else is ignored.
    fn push_scalar(&mut self, value: &Value) {
        match value {
            Value::Number(n) => {
                if let Some(num) = n.as_f64() {
                    self.nums.push(num);
                    self.display.push(format_float(num));
                }
            }
            Value::String(s) => {
                let trimmed = s.trim();
                self.display.push(trimmed.to_string());
                if let Some(num) = parse_float_string(trimmed) {
                    self.nums.push(num);
                }
            }
            _ => {}
        }
    }

    pub fn numbers(&self) -> Vec<f64> {
        self.nums.clone()
    }

    pub fn display(&self) -> Vec<String> {
        self.display.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty() && self.nums.is_empty()
    }
}

impl<'de> Deserialize<'de> for ValueList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        ValueList::from_json(&raw).map_err(de::Error::custom)
    }
}

/// Scaling tags ("AP", "AD") from a single string or a list of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScalingList(Vec<String>);

impl ScalingList {
    pub fn from_json(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(ScalingList::default()),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Ok(ScalingList::default())
                } else {
                    Ok(ScalingList(vec![trimmed.to_string()]))
                }
            }
            Value::Array(items) => {
                let mut tags = Vec::with_capacity(items.len());
                for item in items {
                    let Value::String(s) = item else {
                        return Err(DecodeError::UnsupportedScalingShape(value.to_string()));
                    };
                    let trimmed = s.trim();
                    if !trimmed.is_empty() {
                        tags.push(trimmed.to_string());
                    }
                }
                Ok(ScalingList(tags))
            }
            other => Err(DecodeError::UnsupportedScalingShape(other.to_string())),
        }
    }

    /// First tag, or "" when there is none.
    pub fn primary(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or("")
    }

    pub fn all(&self) -> Vec<String> {
        self.0.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for ScalingList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        ScalingList::from_json(&raw).map_err(de::Error::custom)
    }
}

/// Parses "25", " 25 ", "25%" as 25.0. Only one trailing percent sign is stripped.
pub fn parse_float_string(s: &str) -> Option<f64> {
    let t = s.trim();
    let t = t.strip_suffix('%').unwrap_or(t);
    t.trim().parse::<f64>().ok()
}

/// Shortest decimal that round-trips: 100.0 -> "100", 0.25 -> "0.25".
pub fn format_float(value: f64) -> String {
    format!("{value}")
}
