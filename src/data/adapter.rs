//! Maps raw set-file champions into [Unit]s: trims text, picks the description
//! source, normalizes variables and resolves local assets.

use std::collections::HashMap;

use crate::ability::{normalize_description, Ability, AbilityVariable};
use crate::assets::{trait_slug, unit_slug, AssetIndex};
use crate::data::set_file::{SetAbility, SetChampion, SetStats};
use crate::data::units::{Trait, Unit, UnitStats};

/// Asset indexes consulted while adapting champions.
#[derive(Debug, Clone, Copy)]
pub struct AssetLookups<'a> {
    pub trait_icons: &'a AssetIndex,
    pub unit_images: &'a AssetIndex,
    pub spell_icons: &'a AssetIndex,
}

/// Normalize one ability. `spell_icon` is the already-resolved icon path, if any.
///
/// Mapping-form variables mean the description is already in placeholder form;
/// otherwise the legacy text goes through [normalize_description].
pub fn adapt_ability(raw: &SetAbility, spell_icon: Option<&str>) -> Ability {
    let description = raw.description.as_deref().unwrap_or("");
    let description_raw = raw.description_raw.as_deref().unwrap_or("").trim();

    let mut desc = description.trim();
    if desc.is_empty() {
        desc = description_raw;
    }

    let structured = raw.variables.map();
    let desc = if structured.is_none() && !description.trim().is_empty() {
        let clean = normalize_description(description);
        if clean.is_empty() {
            desc.to_string()
        } else {
            clean
        }
    } else {
        desc.to_string()
    };

    let mut variables = HashMap::new();
    if let Some(map) = structured {
        for (name, v) in map {
            let name = name.trim().to_string();
            let var = AbilityVariable {
                name: name.clone(),
                var_type: trimmed(v.var_type.as_deref()),
                values: v.values.numbers(),
                display_values: v.values.display(),
                scaling: v.scaling.primary().trim().to_string(),
                scalings: v.scaling.all(),
                css_class: trimmed(v.css_class.as_deref()),
            };
            variables.insert(name, var);
        }
    } else if let Some(list) = raw.variables.list() {
        for v in list {
            let name = v.name.trim().to_string();
            let var = AbilityVariable {
                name: name.clone(),
                values: v.value.numbers(),
                display_values: v.value.display(),
                ..Default::default()
            };
            variables.insert(name, var);
        }
    }

    Ability {
        name: trimmed(raw.name.as_deref()),
        description: desc,
        description_raw: description_raw.to_string(),
        variables,
        icon: spell_icon
            .map(str::trim)
            .filter(|icon| !icon.is_empty())
            .map(str::to_string),
    }
}

/// Adapt one champion. Returns `None` when no portrait can be resolved, so the
/// page never shows a broken thumbnail.
pub fn adapt_champion(champion: &SetChampion, assets: AssetLookups<'_>) -> Option<Unit> {
    let name = trimmed(champion.name.as_deref());
    let name_key = unit_slug(&name);
    let api_key = unit_slug(champion.api_name.as_deref().unwrap_or(""));

    let url = lookup(assets.unit_images, &[&name_key, &api_key])
        .or_else(|| {
            champion
                .icons
                .portrait
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
        })?
        .to_string();

    let traits = champion
        .traits
        .iter()
        .flatten()
        .map(|t| Trait {
            name: t.clone(),
            icon: assets
                .trait_icons
                .get(&trait_slug(t))
                .cloned()
                .unwrap_or_default(),
        })
        .collect();

    let spell_key = unit_slug(champion.ability.spell_key.as_deref().unwrap_or(""));
    let spell_icon = lookup(assets.spell_icons, &[&name_key, &api_key, &spell_key]);

    Some(Unit {
        name,
        cost: champion.cost.unwrap_or(0),
        url,
        traits,
        ability: adapt_ability(&champion.ability, spell_icon),
        unlock: champion.unlock.unwrap_or(false),
        unlock_description: champion.unlock_description.clone().unwrap_or_default(),
        role: champion.role.clone().unwrap_or_default(),
        stats: adapt_stats(&champion.stats),
    })
}

/// Round stats for display; ability power is always the base 100.
pub fn adapt_stats(stats: &SetStats) -> UnitStats {
    UnitStats {
        hp: round_list(&stats.hp.numbers()),
        damage: round_list(&stats.damage.numbers()),
        armor: round_to_int(stats.armor.unwrap_or(0.0)),
        magic_resist: round_to_int(stats.magic_resist.unwrap_or(0.0)),
        attack_speed: stats.attack_speed.unwrap_or(0.0),
        crit_chance: stats.crit_chance.unwrap_or(0.0),
        crit_multiplier: stats.crit_multiplier.unwrap_or(0.0),
        mana: round_to_int(stats.mana.unwrap_or(0.0)),
        initial_mana: round_to_int(stats.initial_mana.unwrap_or(0.0)),
        range: round_to_int(stats.range.unwrap_or(0.0)),
        ability_power: 100,
    }
}

/// First non-empty hit for any of `keys`, in order. Empty keys are skipped.
fn lookup<'a>(index: &'a AssetIndex, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter(|k| !k.is_empty())
        .find_map(|k| index.get(*k).map(String::as_str).filter(|v| !v.is_empty()))
}

fn trimmed(value: Option<&str>) -> String {
    value.unwrap_or("").trim().to_string()
}

fn round_to_int(value: f64) -> i64 {
    value.round() as i64
}

fn round_list(values: &[f64]) -> Vec<i64> {
    values.iter().map(|v| round_to_int(*v)).collect()
}
