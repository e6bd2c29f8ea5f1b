//! Display helpers for unit stats in the builder tooltip.

/// 0.25 -> "25%".
pub fn format_percent(value: f64) -> String {
    format!("{}%", (value * 100.0).round() as i64)
}

/// Always two decimals: 0.8 -> "0.80".
pub fn format_attack_speed(value: f64) -> String {
    format!("{value:.2}")
}

/// [50, 75, 113] -> "50/75/113"; empty -> "N/A".
pub fn format_int_list(values: &[i64]) -> String {
    format_int_list_with_sep(values, "/")
}

pub fn format_int_list_with_sep(values: &[i64], sep: &str) -> String {
    if values.is_empty() {
        return "N/A".to_string();
    }
    let sep = if sep.is_empty() { "/" } else { sep };
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// "initial/max", or "0" for units without mana.
pub fn format_mana(initial: i64, mana: i64) -> String {
    if initial == 0 && mana == 0 {
        return "0".to_string();
    }
    format!("{initial}/{mana}")
}
