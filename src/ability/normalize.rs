//! Best-effort cleanup of legacy tooltip text into `{Name}` placeholder form.
//! Only used when an ability ships without structured variables.

use std::sync::LazyLock;

use regex::Regex;

static TRACKER_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<TFTTrackerLabel>.*?</TFTTrackerLabel>").unwrap());
static UNIT_PROPERTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@TFTUnitProperty\.[^@]+@").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[^>]+?>").unwrap());
static ICON_SCALE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%i:[^%]+%").unwrap());
// Word boundaries, digits and spaces are ASCII-only here.
static KEYWORD_NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)keyword(?-u:\s)*[0-9]*(?-u:\b)").unwrap()
});
static KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?-u:\b)keyword(?-u:\b)").unwrap());
static DOUBLE_BRACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{[^{}]+\}\}").unwrap());
static LEGACY_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([A-Za-z0-9_]+(?:\*100)?)@").unwrap());

/// Cleans a raw upstream description. Steps run in a fixed order, each on the
/// previous step's output. Returns an empty string when nothing useful is left.
///
/// `@Damage*100@` becomes `{Damage*100}`; the multiplier is kept as written and
/// never applied.
pub fn normalize_description(desc: &str) -> String {
    let s = desc.replace("&nbsp;", " ");
    let s = TRACKER_LABEL_RE.replace_all(&s, "");
    let s = UNIT_PROPERTY_RE.replace_all(&s, "");
    let s = TAG_RE.replace_all(&s, "");
    let s = s.replace("\\\"", "").replace("\">", "");
    let s = ICON_SCALE_RE.replace_all(&s, "");
    let s = KEYWORD_NUMBERED_RE.replace_all(&s, "");
    let s = KEYWORD_RE.replace_all(&s, "");
    let s = DOUBLE_BRACE_RE.replace_all(&s, "");
    let s = LEGACY_VAR_RE.replace_all(&s, "{${1}}");
    let s = s.replace(" ()", "");
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::normalize_description;

    #[test]
    fn converts_legacy_tokens_to_braces() {
        assert_eq!(
            normalize_description("deals @Damage@ to enemies"),
            "deals {Damage} to enemies"
        );
        assert_eq!(
            normalize_description("gains @Bonus*100@% attack speed"),
            "gains {Bonus*100}% attack speed"
        );
    }

    #[test]
    fn strips_tracker_labels_across_lines() {
        let raw = "Heal allies.<TFTTrackerLabel>Healed:\n@TFTUnitProperty.Healed@</TFTTrackerLabel>";
        assert_eq!(normalize_description(raw), "Heal allies.");
    }

    #[test]
    fn strips_markup_and_noise() {
        let raw = "<magicDamage>@Damage@ magic damage</magicDamage>&nbsp;%i:scaleAP% \\\"keyword12 stun";
        assert_eq!(normalize_description(raw), "{Damage} magic damage stun");
    }

    #[test]
    fn removes_double_braces_and_empty_parens() {
        let raw = "Deals damage ({{ TFT_Keyword_Burn }}) to the target";
        assert_eq!(normalize_description(raw), "Deals damage to the target");
    }

    #[test]
    fn removes_unit_property_tokens_and_collapses_whitespace() {
        let raw = "  Stacks: @TFTUnitProperty.:TFT_Stacks@\n\n  more   text ";
        assert_eq!(normalize_description(raw), "Stacks: more text");
    }

    #[test]
    fn keyword_removal_is_case_insensitive_and_whole_word() {
        assert_eq!(normalize_description("KEYWORD Wound enemies"), "Wound enemies");
        assert_eq!(normalize_description("keywords stay"), "keywords stay");
    }

    #[test]
    fn keyword_boundaries_ignore_non_ascii_neighbours() {
        assert_eq!(normalize_description("éKeyword12 stun"), "é stun");
        assert_eq!(normalize_description("keyword٣ stun"), "٣ stun");
    }

    #[test]
    fn strips_stray_attribute_closers() {
        assert_eq!(normalize_description("Burns\"> nearby enemies"), "Burns nearby enemies");
    }

    #[test]
    fn returns_empty_when_only_noise() {
        assert_eq!(normalize_description("<br><br>&nbsp;"), "");
        assert_eq!(normalize_description(""), "");
    }
}
