use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::ability::{format_ability_description, unresolved_tokens};
use crate::data::adapter::adapt_ability;
use crate::data::loader::read_set_file;
use crate::data::set_file::SetFile;
use crate::error::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    /// Champion the diagnostic refers to, or `champions[i]` when unnamed.
    pub context: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub path: String,
    pub champions: usize,
    /// Champions whose ability produced any formatted text.
    pub formatted: usize,
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }
}

/// Read a set file and check every champion's ability. Load failures are
/// returned as errors; content problems become diagnostics.
pub fn validate_set_file(path: impl AsRef<Path>) -> Result<ValidationReport, LoadError> {
    let path = path.as_ref();
    let set = read_set_file(path)?;
    let mut report = validate_set(&set);
    report.path = path.display().to_string();
    Ok(report)
}

/// Format each ability without asset lookups and report what did not resolve.
pub fn validate_set(set: &SetFile) -> ValidationReport {
    let mut report = ValidationReport {
        champions: set.champions.len(),
        ..Default::default()
    };

    for (idx, champion) in set.champions.iter().enumerate() {
        let name = champion.name.as_deref().unwrap_or("").trim();
        let context = if name.is_empty() {
            format!("champions[{idx}]")
        } else {
            name.to_string()
        };

        if name.is_empty() {
            report.push(ValidationSeverity::Error, &context, "champion has no name");
        }
        if champion.cost.is_none() {
            report.push(ValidationSeverity::Warning, &context, "champion has no cost");
        }

        let ability = adapt_ability(&champion.ability, None);
        let html = format_ability_description(&ability);
        if html.is_empty() {
            report.push(ValidationSeverity::Info, &context, "ability has no description");
            continue;
        }
        report.formatted += 1;

        for token in unresolved_tokens(&ability) {
            report.push(
                ValidationSeverity::Warning,
                &context,
                format!("unresolved token {token}"),
            );
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(json: &str) -> SetFile {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn clean_set_has_no_diagnostics() {
        let report = validate_set(&set(
            r#"{"champions":[{"name":"Ahri","cost":4,"ability":{"description":"Deals @Damage@ damage",
                "variables":{"Damage":{"values":[100,150,200]}}}}]}"#,
        ));
        assert_eq!(report.champions, 1);
        assert_eq!(report.formatted, 1);
        assert!(report.diagnostics.is_empty());
        assert!(!report.has_errors());
    }

    #[test]
    fn unresolved_tokens_are_warnings() {
        let report = validate_set(&set(
            r#"{"champions":[{"name":"Jinx","cost":2,"ability":{"description":"Deals @Missing@ and {Other}"}}]}"#,
        ));
        assert_eq!(report.count(ValidationSeverity::Warning), 2);
        assert!(report.diagnostics.iter().all(|d| d.context == "Jinx"));
        assert!(!report.has_errors());
    }

    #[test]
    fn unnamed_champion_is_an_error() {
        let report = validate_set(&set(r#"{"champions":[{"cost":1}]}"#));
        assert!(report.has_errors());
        assert_eq!(report.diagnostics[0].context, "champions[0]");
        assert_eq!(report.count(ValidationSeverity::Info), 1);
        assert_eq!(report.formatted, 0);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        assert!(validate_set_file("does/not/exist.json").is_err());
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&ValidationSeverity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
