use sft::ability::{
    format_ability_description, normalize_description, select_ability_content, Ability,
    AbilityVariable, ValueList,
};

fn damage_ability(description: &str) -> Ability {
    Ability::new("Test", description)
        .with_variable(AbilityVariable::new("Damage").with_values(&[10.0, 20.0, 30.0]))
}

#[test]
fn formatting_is_deterministic() {
    let ability = Ability::new("Spirit Rush", "Deals @Damage@ (@Damage.scaling@) and {Heal}")
        .with_variable(
            AbilityVariable::new("Damage")
                .with_values(&[100.0, 150.0, 200.0])
                .with_scalings(&["AP", "AD"]),
        )
        .with_variable(AbilityVariable::new("Heal").with_display_values(&["5%", "7%"]));

    let first = format_ability_description(&ability);
    for _ in 0..20 {
        assert_eq!(format_ability_description(&ability), first);
    }
}

#[test]
fn value_lists_from_json() {
    let list = ValueList::from_json(&serde_json::json!([1, 2, 3])).unwrap();
    assert_eq!(list.numbers(), vec![1.0, 2.0, 3.0]);
    assert_eq!(list.display(), vec!["1", "2", "3"]);

    let percent = ValueList::from_json(&serde_json::json!("25%")).unwrap();
    assert_eq!(percent.display(), vec!["25%"]);
    assert_eq!(percent.numbers(), vec![25.0]);
}

#[test]
fn unknown_brace_token_stays_literal() {
    let html = format_ability_description(&damage_ability("Gain {Foo} shield"));
    assert_eq!(html, "Gain {Foo} shield");
}

#[test]
fn plain_parenthetical_is_not_wrapped() {
    let html = format_ability_description(&damage_ability("Stuns (after a delay) foes"));
    assert_eq!(html, "Stuns (after a delay) foes");
}

#[test]
fn parenthetical_with_token_is_wrapped() {
    let html = format_ability_description(&damage_ability("Strikes (deals @Damage@)"));
    assert_eq!(
        html,
        "Strikes <span class=\"ability-scaling-group\">\
         <span class=\"ability-scaling-paren\">(</span>\
         deals <span class=\"ability-token\">10/20/30</span>\
         <span class=\"ability-scaling-paren\">)</span></span>"
    );
}

#[test]
fn known_and_unknown_scaling_icons() {
    let ap = Ability::new("A", "{Dmg.scaling}")
        .with_variable(AbilityVariable::new("Dmg").with_scalings(&["AP"]));
    let html = format_ability_description(&ap);
    assert!(html.contains("ability-icon-ap"));
    assert!(html.contains("aria-label=\"AP\""));

    let unknown = Ability::new("A", "{Dmg.scaling}")
        .with_variable(AbilityVariable::new("Dmg").with_scalings(&["XYZ"]));
    assert_eq!(
        format_ability_description(&unknown),
        "<span class=\"ability-token\">XYZ</span>"
    );
}

#[test]
fn multiple_scalings_are_joined_with_plus() {
    let ability = Ability::new("A", "@Dmg.scaling@")
        .with_variable(AbilityVariable::new("Dmg").with_scalings(&["AP", "Armor"]));
    let html = format_ability_description(&ability);
    assert!(html.contains("ability-icon-ap"));
    assert!(html.contains("ability-icon-armor"));
    assert_eq!(html.matches("ability-scaling-plus").count(), 1);
}

#[test]
fn normalizer_rewrites_legacy_tokens() {
    assert_eq!(
        normalize_description("deals @Damage@ to enemies"),
        "deals {Damage} to enemies"
    );
}

#[test]
fn blank_descriptions_render_empty() {
    let mut ability = Ability::new("Empty", "   ");
    ability.description_raw = "\n\t".to_string();
    assert_eq!(format_ability_description(&ability), "");
}

#[test]
fn description_raw_is_used_when_description_blank() {
    let mut ability = damage_ability("");
    ability.description_raw = "Fallback @Damage@".to_string();
    assert_eq!(
        format_ability_description(&ability),
        "Fallback <span class=\"ability-token\">10/20/30</span>"
    );
}

#[test]
fn markup_in_description_is_escaped() {
    let html = format_ability_description(&damage_ability("<img src=x onerror=alert(1)> & 'q'"));
    assert_eq!(html, "&lt;img src=x onerror=alert(1)&gt; &amp; &#39;q&#39;");
}

#[test]
fn newlines_become_breaks() {
    let html = format_ability_description(&damage_ability("Line one\nLine two"));
    assert_eq!(html, "Line one<br />Line two");
}

#[test]
fn times_hundred_suffix_is_not_multiplied() {
    let ability = Ability::new("A", "Gain @AS*100@% attack speed")
        .with_variable(AbilityVariable::new("AS").with_values(&[0.25]));
    let html = format_ability_description(&ability);
    assert_eq!(html, "Gain @AS*100@% attack speed");

    let literal = Ability::new("A", "Gain {AS*100}%")
        .with_variable(AbilityVariable::new("AS*100").with_values(&[25.0]));
    assert_eq!(
        format_ability_description(&literal),
        "Gain <span class=\"ability-token\">25</span>%"
    );
}

#[test]
fn css_class_is_appended() {
    let ability = Ability::new("A", "{Heal}").with_variable(
        AbilityVariable::new("Heal")
            .with_values(&[50.0])
            .with_css_class("heal"),
    );
    assert_eq!(
        format_ability_description(&ability),
        "<span class=\"ability-token heal\">50</span>"
    );
}

#[test]
fn content_falls_back_through_chain() {
    let typed = AbilityVariable::new("Bonus").with_type("damage");
    assert_eq!(select_ability_content(&typed, "values"), "damage");
    assert_eq!(select_ability_content(&AbilityVariable::new("Bonus"), "values"), "Bonus");
    assert_eq!(select_ability_content(&AbilityVariable::default(), "custom"), "custom");
    assert_eq!(
        select_ability_content(&AbilityVariable::new("X").with_values(&[1.5]), "scaling"),
        "1.5"
    );
}

#[test]
fn parenthetical_with_unknown_token_is_left_alone() {
    let ability = Ability::new("Spirit Rush", "Deals @MagicDamage@ magic damage (@Scaling@)")
        .with_variable(
            AbilityVariable::new("MagicDamage")
                .with_values(&[100.0, 150.0, 200.0])
                .with_scalings(&["AP"]),
        );
    assert_eq!(
        format_ability_description(&ability),
        "Deals <span class=\"ability-token\">100/150/200</span> magic damage (@Scaling@)"
    );
}

#[test]
fn formatting_from_many_threads_agrees() {
    let ability = Ability::new("Spirit Rush", "Deals @Damage@ (@Damage.scaling@)").with_variable(
        AbilityVariable::new("Damage")
            .with_values(&[100.0, 150.0, 200.0])
            .with_scalings(&["AP"]),
    );
    let expected = format_ability_description(&ability);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| format_ability_description(&ability)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
