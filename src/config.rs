// Runtime configuration, loaded from environment variables with defaults.

use std::path::PathBuf;

use crate::data::loader::LoadUnitsConfig;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SET_DATA_PATH: &str = "data/set16_champions.json";
pub const DEFAULT_TRAIT_ASSETS_DIR: &str = "static/assets/Traits/SET16";
pub const DEFAULT_UNIT_ASSETS_DIR: &str = "static/assets/Units/SET16";
pub const DEFAULT_SPELL_ASSETS_DIR: &str = "static/assets/Spells/SET16/webp-64";
pub const DEFAULT_MANIFEST_PATH: &str = "static/dist/manifest.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    pub bind_addr: String,
    /// Generated set JSON with the champion list.
    pub set_data_path: PathBuf,
    pub trait_assets_dir: PathBuf,
    pub unit_assets_dir: PathBuf,
    pub spell_assets_dir: PathBuf,
    /// Directory served under `static_base_url`.
    pub static_dir: PathBuf,
    pub static_base_url: String,
    /// `max-age` for static files; 0 disables caching.
    pub static_cache_secs: u64,
    /// Absolute site URL used for the canonical link.
    pub site_url: String,
    /// JSON manifest mapping `app.css` / `app.js` to fingerprinted files.
    pub manifest_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            set_data_path: PathBuf::from(DEFAULT_SET_DATA_PATH),
            trait_assets_dir: PathBuf::from(DEFAULT_TRAIT_ASSETS_DIR),
            unit_assets_dir: PathBuf::from(DEFAULT_UNIT_ASSETS_DIR),
            spell_assets_dir: PathBuf::from(DEFAULT_SPELL_ASSETS_DIR),
            static_dir: PathBuf::from("static"),
            static_base_url: "/static".to_string(),
            static_cache_secs: 0,
            site_url: "http://localhost:8080".to_string(),
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Environment variables:
    /// - `SFT_BIND` - full bind address, e.g. `127.0.0.1:3000` (wins over `PORT`)
    /// - `PORT` - `8080` or `:8080`, bound on all interfaces
    /// - `SET_DATA_PATH`, `TRAIT_ASSETS_DIR`, `UNIT_ASSETS_DIR`, `SPELL_ASSETS_DIR`
    /// - `STATIC_DIR`, `STATIC_BASE_URL`, `STATIC_CACHE_SECONDS`
    /// - `SITE_URL`, `ASSET_MANIFEST_PATH`
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [Config::load] but reads variables through `lookup`.
    /// Blank values are ignored; unparsable numbers keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Config::default();

        if let Some(v) = get("PORT") {
            cfg.bind_addr = bind_addr_from_port(v.trim());
        }
        if let Some(v) = get("SFT_BIND") {
            cfg.bind_addr = v.trim().to_string();
        }
        if let Some(v) = get("SET_DATA_PATH") {
            cfg.set_data_path = PathBuf::from(v);
        }
        if let Some(v) = get("TRAIT_ASSETS_DIR") {
            cfg.trait_assets_dir = PathBuf::from(v);
        }
        if let Some(v) = get("UNIT_ASSETS_DIR") {
            cfg.unit_assets_dir = PathBuf::from(v);
        }
        if let Some(v) = get("SPELL_ASSETS_DIR") {
            cfg.spell_assets_dir = PathBuf::from(v);
        }
        if let Some(v) = get("STATIC_DIR") {
            cfg.static_dir = PathBuf::from(v);
        }
        if let Some(v) = get("STATIC_BASE_URL") {
            cfg.static_base_url = v;
        }
        if let Some(secs) = get("STATIC_CACHE_SECONDS").and_then(|v| v.trim().parse().ok()) {
            cfg.static_cache_secs = secs;
        }
        if let Some(v) = get("SITE_URL") {
            cfg.site_url = v;
        }
        if let Some(v) = get("ASSET_MANIFEST_PATH") {
            cfg.manifest_path = PathBuf::from(v);
        }

        cfg
    }

    /// Site URL with exactly one trailing slash; empty stays empty.
    pub fn canonical_url(&self) -> String {
        let trimmed = self.site_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("{trimmed}/")
        }
    }

    /// Static mount point normalized to `/segment` form, `/static` when blank.
    pub fn static_mount(&self) -> String {
        let trimmed = self.static_base_url.trim().trim_matches('/');
        if trimmed.is_empty() {
            "/static".to_string()
        } else {
            format!("/{trimmed}")
        }
    }

    pub fn units_config(&self) -> LoadUnitsConfig {
        LoadUnitsConfig {
            set_data_path: self.set_data_path.clone(),
            trait_dir: self.trait_assets_dir.clone(),
            unit_dir: self.unit_assets_dir.clone(),
            spell_dir: self.spell_assets_dir.clone(),
        }
    }
}

/// Accepts "8080" or ":8080" and binds on all interfaces.
fn bind_addr_from_port(port: &str) -> String {
    let port = port.trim_start_matches(':');
    format!("0.0.0.0:{port}")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_with(&[]), Config::default());
    }

    #[test]
    fn port_accepts_bare_and_colon_forms() {
        assert_eq!(config_with(&[("PORT", "9000")]).bind_addr, "0.0.0.0:9000");
        assert_eq!(config_with(&[("PORT", ":9001")]).bind_addr, "0.0.0.0:9001");
        let both = config_with(&[("PORT", "9000"), ("SFT_BIND", "127.0.0.1:3000")]);
        assert_eq!(both.bind_addr, "127.0.0.1:3000");
    }

    #[test]
    fn cache_seconds_ignores_invalid_values() {
        assert_eq!(config_with(&[("STATIC_CACHE_SECONDS", "3600")]).static_cache_secs, 3600);
        assert_eq!(config_with(&[("STATIC_CACHE_SECONDS", "-5")]).static_cache_secs, 0);
        assert_eq!(config_with(&[("STATIC_CACHE_SECONDS", "soon")]).static_cache_secs, 0);
    }

    #[test]
    fn paths_are_overridable() {
        let cfg = config_with(&[
            ("SET_DATA_PATH", "custom/path.json"),
            ("TRAIT_ASSETS_DIR", "custom/traits"),
            ("UNIT_ASSETS_DIR", "   "),
        ]);
        assert_eq!(cfg.set_data_path, PathBuf::from("custom/path.json"));
        assert_eq!(cfg.trait_assets_dir, PathBuf::from("custom/traits"));
        assert_eq!(cfg.unit_assets_dir, PathBuf::from(DEFAULT_UNIT_ASSETS_DIR));
    }

    #[test]
    fn canonical_url_has_single_trailing_slash() {
        let mut cfg = Config::default();
        for (input, expected) in [
            ("https://example.com", "https://example.com/"),
            ("https://example.com/", "https://example.com/"),
            ("https://example.com//", "https://example.com/"),
            ("", ""),
        ] {
            cfg.site_url = input.to_string();
            assert_eq!(cfg.canonical_url(), expected, "input {input:?}");
        }
    }

    #[test]
    fn static_mount_is_normalized() {
        let mut cfg = Config::default();
        cfg.static_base_url = "assets/".to_string();
        assert_eq!(cfg.static_mount(), "/assets");
        cfg.static_base_url = "/".to_string();
        assert_eq!(cfg.static_mount(), "/static");
    }
}
