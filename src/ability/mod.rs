//! Ability descriptions: value/scaling normalization, legacy description cleanup
//! and rendering of templated descriptions into HTML fragments.
//!
//! Token syntax accepted in descriptions: `@Name@`, `@Name.field@`, `{Name}`,
//! `{Name.field}`. Unknown names are left visible in the output.

mod formatter;
mod model;
mod normalize;
mod values;

pub use formatter::{
    escape_html, format_ability_description, select_ability_content, unresolved_tokens,
    ContentSource, CONTENT_FALLBACK_CHAIN,
};
pub use model::{Ability, AbilityVariable};
pub use normalize::normalize_description;
pub use values::{format_float, parse_float_string, ScalingList, ValueList};
