//! Renders an [Ability] description into an HTML fragment.
//!
//! Stages, in order: escape → parenthesized scaling groups → `@Token@` → `{Token}`
//! → line breaks. Tokens whose variable is unknown stay in the output verbatim.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::ability::model::{Ability, AbilityVariable};
use crate::ability::values::format_float;

/// `@MagicDamage@`, `@MagicDamage.values@`, `@AttackSpeed*100@`.
static AT_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([A-Za-z0-9_*]+(?:\.[A-Za-z0-9_*]+)?)@").unwrap());
/// `{MagicDamage}`, `{MagicDamage.scaling}`, `{AttackSpeed*100}`.
static BRACE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_.*]+)\}").unwrap());
/// A parenthetical containing at least one `@token@`.
static PAREN_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*([^()]*@[^@()]+@[^()]*)\s*\)").unwrap());

const SCALING_PLUS: &str = r#"<span class="ability-scaling-plus">+</span>"#;
const SCALING_PAREN_OPEN: &str = r#"<span class="ability-scaling-paren">(</span>"#;
const SCALING_PAREN_CLOSE: &str = r#"<span class="ability-scaling-paren">)</span>"#;

/// Canonical scaling code -> icon classes.
const SCALING_ICONS: &[(&str, &str)] = &[
    ("AP", "ability-token ability-icon ability-icon-ap"),
    ("AD", "ability-token ability-icon ability-icon-ad"),
    ("AS", "ability-token ability-icon ability-icon-as"),
    ("ARMOR", "ability-token ability-icon ability-icon-armor"),
    ("MR", "ability-token ability-icon ability-icon-mr"),
    ("CC", "ability-token ability-icon ability-icon-crit-chance"),
    ("CD", "ability-token ability-icon ability-icon-crit-damage"),
    ("HP", "ability-token ability-icon ability-icon-health"),
    ("MANA", "ability-token ability-icon ability-icon-mana"),
    ("RANGE", "ability-token ability-icon ability-icon-range"),
    ("SOULS", "ability-token ability-icon ability-icon-souls"),
];

/// Where token text comes from when the requested field is missing or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    DisplayValues,
    NumericValues,
    Type,
    Name,
    FieldName,
}

/// Fallback order after the requested field produced nothing. The last entry
/// echoes the field name itself so a resolved token never renders blank.
pub const CONTENT_FALLBACK_CHAIN: [ContentSource; 5] = [
    ContentSource::DisplayValues,
    ContentSource::NumericValues,
    ContentSource::Type,
    ContentSource::Name,
    ContentSource::FieldName,
];

impl ContentSource {
    fn extract(self, var: &AbilityVariable, field: &str) -> String {
        match self {
            ContentSource::DisplayValues => join_display_values(&var.display_values),
            ContentSource::NumericValues => join_numeric_values(&var.values),
            ContentSource::Type => var.var_type.clone(),
            ContentSource::Name => var.name.clone(),
            ContentSource::FieldName => field.to_string(),
        }
    }
}

/// Renders the ability description as HTML. Returns an empty string when both
/// `description` and `description_raw` are blank.
///
/// The result is already escaped and must be embedded as-is.
pub fn format_ability_description(ability: &Ability) -> String {
    let desc = ability.display_text();
    if desc.is_empty() {
        return String::new();
    }

    let vars = &ability.variables;
    let escaped = escape_html(desc);
    let with_paren = replace_parenthesized_tokens(&escaped, vars);
    let with_at = replace_tokens(&with_paren, vars, &AT_TOKEN_RE);
    let with_brace = replace_tokens(&with_at, vars, &BRACE_TOKEN_RE);
    with_brace.replace('\n', "<br />").trim().to_string()
}

/// Token names referenced by the description that have no matching variable.
/// These are the tokens that will stay visible in the rendered output.
pub fn unresolved_tokens(ability: &Ability) -> Vec<String> {
    let desc = ability.display_text();
    let mut missing = Vec::new();
    for re in [&*AT_TOKEN_RE, &*BRACE_TOKEN_RE] {
        for caps in re.captures_iter(desc) {
            let (name, _) = split_token(&caps[1]);
            if !ability.variables.contains_key(name) && !missing.iter().any(|m| m == &caps[0]) {
                missing.push(caps[0].to_string());
            }
        }
    }
    missing
}

fn replace_parenthesized_tokens(desc: &str, vars: &HashMap<String, AbilityVariable>) -> String {
    if vars.is_empty() {
        return desc.to_string();
    }
    PAREN_TOKEN_RE
        .replace_all(desc, |caps: &Captures| {
            let inner = caps[1].trim();
            let rendered = replace_tokens(inner, vars, &AT_TOKEN_RE);
            let rendered = replace_tokens(&rendered, vars, &BRACE_TOKEN_RE);
            if rendered.is_empty() || rendered == inner {
                return caps[0].to_string();
            }
            format!(
                r#"<span class="ability-scaling-group">{SCALING_PAREN_OPEN}{rendered}{SCALING_PAREN_CLOSE}</span>"#
            )
        })
        .into_owned()
}

fn replace_tokens(desc: &str, vars: &HashMap<String, AbilityVariable>, re: &Regex) -> String {
    if vars.is_empty() {
        return desc.to_string();
    }
    re.replace_all(desc, |caps: &Captures| {
        let (name, field) = split_token(&caps[1]);
        let Some(var) = vars.get(name) else {
            return caps[0].to_string();
        };
        let rendered = render_ability_value(var, field);
        if rendered.is_empty() {
            caps[0].to_string()
        } else {
            rendered
        }
    })
    .into_owned()
}

fn render_ability_value(var: &AbilityVariable, field: &str) -> String {
    let content = select_ability_content(var, field);
    if content.is_empty() {
        return String::new();
    }

    if field == "scaling" {
        let icons = render_scaling_icons(var);
        if !icons.is_empty() {
            return icons;
        }
    }

    let css = var.css_class.trim();
    let classes = if css.is_empty() {
        "ability-token".to_string()
    } else {
        format!("ability-token {css}")
    };
    format!(
        r#"<span class="{}">{}</span>"#,
        escape_html(&classes),
        escape_html(&content)
    )
}

/// Text for `field` of a variable: `values` (or no field), `scaling`, `type`;
/// anything missing falls through [CONTENT_FALLBACK_CHAIN].
pub fn select_ability_content(var: &AbilityVariable, field: &str) -> String {
    let selected = match field {
        "values" | "" => {
            let joined = join_display_values(&var.display_values);
            if joined.is_empty() {
                join_numeric_values(&var.values)
            } else {
                joined
            }
        }
        "scaling" => {
            if !var.scalings.is_empty() {
                var.scalings.join(" + ")
            } else {
                var.scaling.clone()
            }
        }
        "type" => var.var_type.clone(),
        _ => String::new(),
    };
    if !selected.is_empty() {
        return selected;
    }

    CONTENT_FALLBACK_CHAIN
        .iter()
        .map(|source| source.extract(var, field))
        .find(|content| !content.is_empty())
        .unwrap_or_default()
}

fn join_display_values(values: &[String]) -> String {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

fn join_numeric_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_float(*v))
        .collect::<Vec<_>>()
        .join("/")
}

/// `Name.field` -> (`Name`, `field`); `Name` -> (`Name`, "").
fn split_token(token: &str) -> (&str, &str) {
    token.split_once('.').unwrap_or((token, ""))
}

fn scaling_parts(var: &AbilityVariable) -> Vec<&str> {
    if !var.scalings.is_empty() {
        return var.scalings.iter().map(String::as_str).collect();
    }
    if !var.scaling.trim().is_empty() {
        return vec![var.scaling.as_str()];
    }
    Vec::new()
}

fn render_scaling_icons(var: &AbilityVariable) -> String {
    let mut rendered = Vec::new();
    for part in scaling_parts(var) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let label = escape_html(part);
        rendered.push(match scaling_icon_class(part) {
            Some(icon_class) => format!(
                r#"<span class="ability-scaling-block"><span class="{icon_class}" aria-label="{label}"><span class="ability-icon-text">{label}</span></span></span>"#
            ),
            None => format!(r#"<span class="ability-token">{label}</span>"#),
        });
    }
    rendered.join(SCALING_PLUS)
}

fn scaling_icon_class(raw: &str) -> Option<&'static str> {
    let key = normalize_scaling_key(raw);
    if key.is_empty() {
        return None;
    }
    SCALING_ICONS
        .iter()
        .find(|(code, _)| *code == key)
        .map(|(_, class)| *class)
}

/// "ap" -> "AP", "Crit Chance" -> "CRITCHANCE", "M.R." -> "MR".
fn normalize_scaling_key(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Escapes `& < > " '` for safe embedding in element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
