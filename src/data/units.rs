//! Unit models served to the builder page and the JSON API.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ability::Ability;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Trait {
    pub name: String,
    /// Resolved icon path; empty when no local icon was found.
    pub icon: String,
}

/// Base stats shown in the unit tooltip. `hp` and `damage` hold one value per star level.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitStats {
    pub hp: Vec<i64>,
    pub damage: Vec<i64>,
    pub armor: i64,
    pub magic_resist: i64,
    pub attack_speed: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub mana: i64,
    pub initial_mana: i64,
    pub range: i64,
    pub ability_power: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub name: String,
    pub cost: i64,
    /// Portrait path (local asset) or upstream portrait URL.
    pub url: String,
    pub traits: Vec<Trait>,
    pub ability: Ability,
    pub unlock: bool,
    pub unlock_description: String,
    pub role: String,
    pub stats: UnitStats,
}

/// Everything loaded from the set file, built once at startup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitsData {
    pub units: Vec<Unit>,
    /// Champions dropped because no image could be resolved.
    pub skipped: usize,
    pub loaded_at: DateTime<Utc>,
}

impl UnitsData {
    pub fn new(units: Vec<Unit>) -> Self {
        UnitsData {
            units,
            skipped: 0,
            loaded_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}
