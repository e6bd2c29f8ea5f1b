use std::collections::HashMap;

use serde::Serialize;

/// One named, leveled parameter of an ability (one value per star level).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityVariable {
    pub name: String,
    /// Free-form kind tag (damage, heal, ...). Empty means unset.
    #[serde(rename = "type")]
    pub var_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<f64>,
    /// Upstream text as written ("50%"); not necessarily 1:1 with `values`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub display_values: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub scaling: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scalings: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub css_class: String,
}

impl AbilityVariable {
    pub fn new(name: impl Into<String>) -> Self {
        AbilityVariable {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_values(mut self, values: &[f64]) -> Self {
        self.values = values.to_vec();
        self
    }

    pub fn with_display_values<S: AsRef<str>>(mut self, values: &[S]) -> Self {
        self.display_values = values.iter().map(|v| v.as_ref().to_string()).collect();
        self
    }

    /// Sets `scalings` and keeps `scaling` pointing at the first entry.
    pub fn with_scalings<S: AsRef<str>>(mut self, scalings: &[S]) -> Self {
        self.scalings = scalings.iter().map(|s| s.as_ref().to_string()).collect();
        self.scaling = self.scalings.first().cloned().unwrap_or_default();
        self
    }

    pub fn with_type(mut self, var_type: impl Into<String>) -> Self {
        self.var_type = var_type.into();
        self
    }

    pub fn with_css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = css_class.into();
        self
    }
}

/// A unit's ability after normalization. Immutable once built; the formatter
/// only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description_raw: String,
    pub variables: HashMap<String, AbilityVariable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Ability {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Ability {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Adds a variable keyed by its name; a later variable with the same name replaces it.
    pub fn with_variable(mut self, variable: AbilityVariable) -> Self {
        self.variables.insert(variable.name.clone(), variable);
        self
    }

    /// The text the formatter renders: trimmed `description`, else trimmed `description_raw`.
    pub fn display_text(&self) -> &str {
        let desc = self.description.trim();
        if desc.is_empty() {
            self.description_raw.trim()
        } else {
            desc
        }
    }
}
