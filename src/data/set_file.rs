//! Raw shapes of the generated set JSON, before normalization.
//! Only the fields the builder uses are decoded; everything else is ignored.

use std::collections::HashMap;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::ability::{ScalingList, ValueList};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetFile {
    #[serde(default)]
    pub champions: Vec<SetChampion>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetChampion {
    #[serde(default)]
    pub api_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cost: Option<i64>,
    #[serde(default)]
    pub traits: Option<Vec<String>>,
    #[serde(default)]
    pub ability: SetAbility,
    #[serde(default)]
    pub icons: SetIcons,
    #[serde(default)]
    pub unlock: Option<bool>,
    #[serde(default)]
    pub unlock_description: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub stats: SetStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAbility {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_raw: Option<String>,
    #[serde(default)]
    pub variables: RawAbilityVariables,
    #[serde(default)]
    pub spell_key: Option<String>,
}

/// Legacy `{name, value}` entry of a list-form variable set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetVariable {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: ValueList,
}

/// Entry of the mapping-form variable set (keyed by variable name).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAbilityVariable {
    #[serde(default)]
    pub values: ValueList,
    #[serde(rename = "type", default)]
    pub var_type: Option<String>,
    #[serde(default)]
    pub scaling: ScalingList,
    #[serde(default)]
    pub css_class: Option<String>,
}

/// `ability.variables` is either an object keyed by name or a legacy list of
/// `{name, value}` pairs. The first JSON token decides which.
#[derive(Debug, Clone, Default)]
pub enum RawAbilityVariables {
    #[default]
    Absent,
    Map(HashMap<String, DetailedAbilityVariable>),
    List(Vec<SetVariable>),
}

impl RawAbilityVariables {
    pub fn map(&self) -> Option<&HashMap<String, DetailedAbilityVariable>> {
        match self {
            RawAbilityVariables::Map(map) if !map.is_empty() => Some(map),
            _ => None,
        }
    }

    pub fn list(&self) -> Option<&[SetVariable]> {
        match self {
            RawAbilityVariables::List(list) if !list.is_empty() => Some(list),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for RawAbilityVariables {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(RawAbilityVariables::Map)
                .map_err(de::Error::custom),
            value @ Value::Array(_) => serde_json::from_value(value)
                .map(RawAbilityVariables::List)
                .map_err(de::Error::custom),
            _ => Ok(RawAbilityVariables::Absent),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetIcons {
    #[serde(default)]
    pub square: Option<String>,
    #[serde(default)]
    pub tile: Option<String>,
    #[serde(default)]
    pub portrait: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStats {
    #[serde(default)]
    pub armor: Option<f64>,
    #[serde(default)]
    pub attack_speed: Option<f64>,
    #[serde(default)]
    pub crit_chance: Option<f64>,
    #[serde(default)]
    pub crit_multiplier: Option<f64>,
    #[serde(default)]
    pub damage: ValueList,
    #[serde(default)]
    pub hp: ValueList,
    #[serde(default)]
    pub initial_mana: Option<f64>,
    #[serde(default)]
    pub magic_resist: Option<f64>,
    #[serde(default)]
    pub mana: Option<f64>,
    #[serde(default)]
    pub range: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_object_decodes_as_map() {
        let ability: SetAbility = serde_json::from_str(
            r#"{"variables":{"Damage":{"values":[1,2,3],"scaling":["AP"],"type":"damage"}}}"#,
        )
        .unwrap();
        let map = ability.variables.map().expect("map form");
        assert_eq!(map["Damage"].values.numbers(), vec![1.0, 2.0, 3.0]);
        assert_eq!(map["Damage"].scaling.primary(), "AP");
        assert!(ability.variables.list().is_none());
    }

    #[test]
    fn variables_array_decodes_as_list() {
        let ability: SetAbility =
            serde_json::from_str(r#"{"variables":[{"name":"Damage","value":["10","20"]}]}"#).unwrap();
        let list = ability.variables.list().expect("list form");
        assert_eq!(list[0].name, "Damage");
        assert_eq!(list[0].value.display(), vec!["10", "20"]);
        assert!(ability.variables.map().is_none());
    }

    #[test]
    fn variables_null_or_missing_is_absent() {
        let ability: SetAbility = serde_json::from_str(r#"{"variables":null}"#).unwrap();
        assert!(matches!(ability.variables, RawAbilityVariables::Absent));
        let ability: SetAbility = serde_json::from_str("{}").unwrap();
        assert!(matches!(ability.variables, RawAbilityVariables::Absent));
    }

    #[test]
    fn bad_value_shape_inside_variables_is_an_error() {
        let err = serde_json::from_str::<SetAbility>(r#"{"variables":{"Damage":{"values":{"x":1}}}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("unsupported number list format"));
    }

    #[test]
    fn champion_tolerates_nulls() {
        let champ: SetChampion = serde_json::from_str(
            r#"{"name":"Ahri","cost":null,"traits":null,"stats":{"hp":[500,900,1620],"armor":null}}"#,
        )
        .unwrap();
        assert_eq!(champ.name.as_deref(), Some("Ahri"));
        assert_eq!(champ.stats.hp.numbers(), vec![500.0, 900.0, 1620.0]);
        assert_eq!(champ.stats.armor, None);
    }
}
