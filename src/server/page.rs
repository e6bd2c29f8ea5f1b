//! Server-rendered builder page.
//!
//! Every interpolated string goes through [escape_html] except the ability
//! formatter output, which is already escaped markup.

use std::fmt::Write as _;

use crate::ability::{escape_html, format_ability_description};
use crate::data::board::BoardView;
use crate::data::stats_format::{
    format_attack_speed, format_int_list, format_mana, format_percent,
};
use crate::data::units::Unit;
use crate::server::manifest::AssetPaths;
use crate::server::static_files::{static_path, unit_webp_srcset};

pub struct PageContext<'a> {
    pub units: &'a [Unit],
    pub board: &'a BoardView,
    pub static_base: &'a str,
    /// Canonical site URL; no link is emitted when empty.
    pub canonical: &'a str,
    pub assets: &'a AssetPaths,
}

pub fn render_builder_page(ctx: &PageContext<'_>) -> String {
    let mut out = String::with_capacity(16 * 1024 + ctx.units.len() * 2048);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("<title>TFT Team Builder</title>\n");
    if !ctx.canonical.is_empty() {
        let _ = writeln!(
            out,
            "<link rel=\"canonical\" href=\"{}\">",
            escape_html(ctx.canonical)
        );
    }
    let _ = writeln!(
        out,
        "<link rel=\"stylesheet\" href=\"{}\">",
        escape_html(&static_path(ctx.static_base, &ctx.assets.css))
    );
    out.push_str("</head>\n<body>\n<main class=\"builder\">\n");

    render_board(&mut out, ctx.board);
    render_unit_pool(&mut out, ctx);

    out.push_str("</main>\n");
    let _ = writeln!(
        out,
        "<script type=\"module\" src=\"{}\"></script>",
        escape_html(&static_path(ctx.static_base, &ctx.assets.js))
    );
    out.push_str("</body>\n</html>\n");
    out
}

fn render_board(out: &mut String, board: &BoardView) {
    out.push_str("<section class=\"board\" aria-label=\"Board\">\n");
    for row in &board.rows {
        let class = if row.offset { "hex-row hex-row-offset" } else { "hex-row" };
        let _ = writeln!(out, "<div class=\"{class}\" data-row=\"{}\">", row.index);
        for col in &board.cols {
            let _ = writeln!(
                out,
                "<div class=\"hex\" data-row=\"{}\" data-col=\"{col}\"></div>",
                row.index
            );
        }
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
}

fn render_unit_pool(out: &mut String, ctx: &PageContext<'_>) {
    out.push_str("<section class=\"unit-pool\" aria-label=\"Units\">\n<ul class=\"unit-list\">\n");
    for unit in ctx.units {
        render_unit_card(out, unit, ctx.static_base);
    }
    out.push_str("</ul>\n</section>\n");
}

fn render_unit_card(out: &mut String, unit: &Unit, static_base: &str) {
    let name = escape_html(&unit.name);
    let traits = unit
        .traits
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let _ = writeln!(
        out,
        "<li class=\"unit-card cost-{}\" data-name=\"{name}\" data-cost=\"{}\" data-traits=\"{}\" data-role=\"{}\">",
        unit.cost,
        unit.cost,
        escape_html(&traits),
        escape_html(&unit.role)
    );

    let src = escape_html(&static_path(static_base, &unit.url));
    let srcset = unit_webp_srcset(static_base, &unit.url, &[]);
    out.push_str("<picture>");
    if !srcset.is_empty() {
        let _ = write!(
            out,
            "<source type=\"image/webp\" srcset=\"{}\" sizes=\"64px\">",
            escape_html(&srcset)
        );
    }
    let _ = writeln!(
        out,
        "<img class=\"unit-image\" src=\"{src}\" alt=\"{name}\" loading=\"lazy\" width=\"64\" height=\"64\"></picture>"
    );
    let _ = writeln!(out, "<span class=\"unit-name\">{name}</span>");

    if unit.unlock {
        let _ = writeln!(
            out,
            "<span class=\"unit-unlock\" title=\"{}\">Unlock</span>",
            escape_html(&unit.unlock_description)
        );
    }

    out.push_str("<div class=\"unit-tooltip\" role=\"tooltip\">\n");
    render_traits(out, unit, static_base);
    render_stats(out, unit);
    render_ability(out, unit, static_base);
    out.push_str("</div>\n</li>\n");
}

fn render_traits(out: &mut String, unit: &Unit, static_base: &str) {
    if unit.traits.is_empty() {
        return;
    }
    out.push_str("<ul class=\"unit-traits\">");
    for t in &unit.traits {
        out.push_str("<li class=\"unit-trait\">");
        if !t.icon.is_empty() {
            let _ = write!(
                out,
                "<img class=\"trait-icon\" src=\"{}\" alt=\"\" width=\"16\" height=\"16\">",
                escape_html(&static_path(static_base, &t.icon))
            );
        }
        let _ = write!(out, "<span>{}</span></li>", escape_html(&t.name));
    }
    out.push_str("</ul>\n");
}

fn render_stats(out: &mut String, unit: &Unit) {
    let s = &unit.stats;
    let rows = [
        ("Health", format_int_list(&s.hp)),
        ("Attack Damage", format_int_list(&s.damage)),
        ("Ability Power", s.ability_power.to_string()),
        ("Armor", s.armor.to_string()),
        ("Magic Resist", s.magic_resist.to_string()),
        ("Attack Speed", format_attack_speed(s.attack_speed)),
        ("Crit Chance", format_percent(s.crit_chance)),
        ("Crit Damage", format_percent(s.crit_multiplier)),
        ("Mana", format_mana(s.initial_mana, s.mana)),
        ("Range", s.range.to_string()),
    ];
    out.push_str("<dl class=\"unit-stats\">");
    for (label, value) in rows {
        let _ = write!(out, "<dt>{label}</dt><dd>{}</dd>", escape_html(&value));
    }
    out.push_str("</dl>\n");
}

fn render_ability(out: &mut String, unit: &Unit, static_base: &str) {
    let description = format_ability_description(&unit.ability);
    if description.is_empty() {
        return;
    }

    out.push_str("<div class=\"unit-ability\">\n<div class=\"ability-header\">");
    if let Some(icon) = &unit.ability.icon {
        let _ = write!(
            out,
            "<img class=\"ability-icon-image\" src=\"{}\" alt=\"\" width=\"32\" height=\"32\">",
            escape_html(&static_path(static_base, icon))
        );
    }
    let _ = writeln!(
        out,
        "<span class=\"ability-name\">{}</span></div>",
        escape_html(&unit.ability.name)
    );
    let _ = writeln!(out, "<p class=\"ability-description\">{description}</p>");
    out.push_str("</div>\n");
}
