//! Asset lookup: scans an asset directory once and maps a slug of each file name
//! to its path, so traits, unit portraits and spell icons can be found by name.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

/// Slug -> forward-slash path (`static/assets/Units/SET16/Ahri.png`).
pub type AssetIndex = HashMap<String, String>;

/// Builds an [AssetIndex] from one directory.
#[derive(Debug, Clone, Copy)]
pub struct AssetIndexer {
    /// Turns a file stem into its lookup key.
    pub slug: fn(&str) -> String,
    /// Lowercase extensions with the dot (".png"). Empty indexes every file.
    pub filter_ext: &'static [&'static str],
}

impl Default for AssetIndexer {
    fn default() -> Self {
        AssetIndexer {
            slug: unit_slug,
            filter_ext: &[],
        }
    }
}

/// Trait icons, keyed by [trait_slug].
pub const TRAIT_INDEXER: AssetIndexer = AssetIndexer {
    slug: trait_slug,
    filter_ext: &[],
};

/// Unit portraits, keyed by [unit_slug].
pub const UNIT_INDEXER: AssetIndexer = AssetIndexer {
    slug: unit_slug,
    filter_ext: &[],
};

/// Spell icons; image formats only.
pub const SPELL_INDEXER: AssetIndexer = AssetIndexer {
    slug: unit_slug,
    filter_ext: &[".png", ".jpg", ".jpeg", ".webp"],
};

impl AssetIndexer {
    /// Scan `dir` (not recursive). A missing or unreadable directory gives an empty index.
    ///
    /// Fingerprinted names keep only the part before the first dot:
    /// `Anivia.CjTbL0xA.jpg` is indexed as `anivia`.
    pub fn index(&self, dir: impl AsRef<Path>) -> AssetIndex {
        let dir = dir.as_ref();
        let mut index = AssetIndex::new();

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(dir = %dir.display(), %err, "asset directory not readable");
                return index;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            let (stem, ext) = split_extension(file_name);
            if !self.accepts_extension(&ext) {
                continue;
            }

            let base = match stem.find('.') {
                Some(dot) if dot > 0 => &stem[..dot],
                _ => stem,
            };
            let key = (self.slug)(base);
            index.insert(key, path.to_string_lossy().replace('\\', "/"));
        }

        index
    }

    fn accepts_extension(&self, ext: &str) -> bool {
        self.filter_ext.is_empty()
            || self
                .filter_ext
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    }
}

/// "Ahri.CjTbL0xA.jpg" -> ("Ahri.CjTbL0xA", ".jpg"). Extension is lowercased.
fn split_extension(file_name: &str) -> (&str, String) {
    match file_name.rfind('.') {
        Some(dot) => (&file_name[..dot], file_name[dot..].to_lowercase()),
        None => (file_name, String::new()),
    }
}

/// Trait lookup key: lowercase, spaces to dashes, apostrophes and dots removed.
pub fn trait_slug(name: &str) -> String {
    name.to_lowercase()
        .replace(' ', "-")
        .replace(['\'', '.'], "")
}

/// Unit lookup key: lowercase ASCII letters and digits only.
pub fn unit_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_slug_examples() {
        assert_eq!(trait_slug("Freljord"), "freljord");
        assert_eq!(trait_slug("Black Rose"), "black-rose");
        assert_eq!(trait_slug("Kai'Sa"), "kaisa");
        assert_eq!(trait_slug("Dr. Mundo"), "dr-mundo");
    }

    #[test]
    fn unit_slug_examples() {
        assert_eq!(unit_slug("Ahri"), "ahri");
        assert_eq!(unit_slug("Kai'Sa"), "kaisa");
        assert_eq!(unit_slug("Dr. Mundo"), "drmundo");
        assert_eq!(unit_slug("TFT13_Ahri"), "tft13ahri");
    }

    #[test]
    fn split_extension_lowercases() {
        assert_eq!(split_extension("Ahri.CjTbL0xA.JPG"), ("Ahri.CjTbL0xA", ".jpg".to_string()));
        assert_eq!(split_extension("README"), ("README", String::new()));
    }

    #[test]
    fn predefined_indexers() {
        assert_eq!((TRAIT_INDEXER.slug)("Black Rose"), "black-rose");
        assert_eq!((UNIT_INDEXER.slug)("Dr. Mundo"), "drmundo");
        for ext in SPELL_INDEXER.filter_ext {
            assert!([".png", ".jpg", ".jpeg", ".webp"].contains(ext));
        }
    }

    #[test]
    fn scans_fingerprinted_files_and_skips_subdirectories() {
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("sft-assets-{stamp}"));
        fs::create_dir_all(dir.join("webp-64")).unwrap();
        fs::write(dir.join("Anivia.CjTbL0xA.jpg"), b"jpg").unwrap();
        fs::write(dir.join("Kai'Sa.PNG"), b"png").unwrap();
        fs::write(dir.join("notes.txt"), b"txt").unwrap();

        let index = SPELL_INDEXER.index(&dir);
        assert_eq!(index.len(), 2);
        assert!(index["anivia"].ends_with("/Anivia.CjTbL0xA.jpg"));
        assert!(index["kaisa"].ends_with("/Kai'Sa.PNG"));
        assert!(!index.contains_key("webp64"));

        let all = UNIT_INDEXER.index(&dir);
        assert!(all.contains_key("notes"));
        assert!(!all.contains_key("webp64"));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_directory_gives_empty_index() {
        let index = AssetIndexer::default().index("definitely/not/a/real/dir");
        assert!(index.is_empty());
    }
}
