//! Fingerprinted CSS/JS lookup from the frontend build manifest.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::warn;

pub const DEFAULT_APP_CSS: &str = "/dist/app.css";
pub const DEFAULT_APP_JS: &str = "/dist/app.js";

/// Versioned asset URLs the builder page links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub css: String,
    pub js: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            css: DEFAULT_APP_CSS.to_string(),
            js: DEFAULT_APP_JS.to_string(),
        }
    }
}

pub trait AssetResolver {
    fn resolve(&self) -> AssetPaths;
}

/// Reads `{"app.css": "...", "app.js": "..."}`. Anything missing or unreadable
/// falls back to `defaults`.
#[derive(Debug, Clone)]
pub struct ManifestAssetResolver {
    pub manifest_path: PathBuf,
    pub defaults: AssetPaths,
}

impl ManifestAssetResolver {
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        ManifestAssetResolver {
            manifest_path: manifest_path.into(),
            defaults: AssetPaths::default(),
        }
    }

    fn load_manifest(&self) -> Option<HashMap<String, String>> {
        let raw = match fs::read_to_string(&self.manifest_path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %self.manifest_path.display(), error = %err, "asset manifest not found");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(manifest) => Some(manifest),
            Err(err) => {
                warn!(path = %self.manifest_path.display(), error = %err, "asset manifest parse error");
                None
            }
        }
    }

    pub fn resolve_from_manifest(&self, manifest: Option<&HashMap<String, String>>) -> AssetPaths {
        let mut assets = self.defaults.clone();
        let Some(manifest) = manifest else {
            return assets;
        };
        if let Some(css) = non_blank(manifest.get("app.css")) {
            assets.css = css;
        }
        if let Some(js) = non_blank(manifest.get("app.js")) {
            assets.js = js;
        }
        assets
    }
}

impl AssetResolver for ManifestAssetResolver {
    fn resolve(&self) -> AssetPaths {
        let manifest = self.load_manifest();
        self.resolve_from_manifest(manifest.as_ref())
    }
}

/// Fixed paths, for tests and for running without a frontend build.
#[derive(Debug, Clone, Default)]
pub struct StaticAssetResolver {
    pub assets: AssetPaths,
}

impl AssetResolver for StaticAssetResolver {
    fn resolve(&self) -> AssetPaths {
        self.assets.clone()
    }
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
