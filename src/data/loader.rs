//! Load the set file once, index local assets and adapt champions into units.
//! The result is cached for the process lifetime and shared via Arc.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tracing::{info, warn};

use crate::assets::{SPELL_INDEXER, TRAIT_INDEXER, UNIT_INDEXER};
use crate::config::{
    DEFAULT_SET_DATA_PATH, DEFAULT_SPELL_ASSETS_DIR, DEFAULT_TRAIT_ASSETS_DIR,
    DEFAULT_UNIT_ASSETS_DIR,
};
use crate::data::adapter::{adapt_champion, AssetLookups};
use crate::data::set_file::SetFile;
use crate::data::units::{Unit, UnitsData};
use crate::error::LoadError;

/// Where the loader reads data and assets from. Blank paths get defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadUnitsConfig {
    pub set_data_path: PathBuf,
    pub trait_dir: PathBuf,
    pub unit_dir: PathBuf,
    pub spell_dir: PathBuf,
}

impl LoadUnitsConfig {
    pub fn apply_defaults(&mut self) {
        fill_default(&mut self.set_data_path, DEFAULT_SET_DATA_PATH);
        fill_default(&mut self.trait_dir, DEFAULT_TRAIT_ASSETS_DIR);
        fill_default(&mut self.unit_dir, DEFAULT_UNIT_ASSETS_DIR);
        fill_default(&mut self.spell_dir, DEFAULT_SPELL_ASSETS_DIR);
    }
}

fn fill_default(path: &mut PathBuf, default: &str) {
    if path.as_os_str().is_empty() {
        *path = PathBuf::from(default);
    }
}

/// Anything that can hand out the loaded units. The server depends on this
/// rather than on [UnitsLoader] directly.
pub trait UnitsSource: Send + Sync {
    fn load_units(&self) -> Result<Arc<UnitsData>, Arc<LoadError>>;
}

/// File-backed [UnitsSource]. The first call does the work; later calls return
/// the cached result, including a cached failure.
#[derive(Debug)]
pub struct UnitsLoader {
    cfg: LoadUnitsConfig,
    data: OnceLock<Result<Arc<UnitsData>, Arc<LoadError>>>,
}

impl UnitsLoader {
    pub fn new(mut cfg: LoadUnitsConfig) -> Self {
        cfg.apply_defaults();
        UnitsLoader {
            cfg,
            data: OnceLock::new(),
        }
    }
}

impl UnitsSource for UnitsLoader {
    fn load_units(&self) -> Result<Arc<UnitsData>, Arc<LoadError>> {
        self.data
            .get_or_init(|| load_units_from_disk(&self.cfg).map(Arc::new).map_err(Arc::new))
            .clone()
    }
}

/// Read and decode the set JSON.
pub fn read_set_file(path: impl AsRef<Path>) -> Result<SetFile, LoadError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the dataset without caching. Champions lacking any image are skipped.
pub fn load_units_from_disk(cfg: &LoadUnitsConfig) -> Result<UnitsData, LoadError> {
    let set = read_set_file(&cfg.set_data_path)?;

    let trait_icons = TRAIT_INDEXER.index(&cfg.trait_dir);
    let unit_images = UNIT_INDEXER.index(&cfg.unit_dir);
    let spell_icons = SPELL_INDEXER.index(&cfg.spell_dir);
    let assets = AssetLookups {
        trait_icons: &trait_icons,
        unit_images: &unit_images,
        spell_icons: &spell_icons,
    };

    let mut units = Vec::with_capacity(set.champions.len());
    let mut skipped = 0;
    for champion in &set.champions {
        match adapt_champion(champion, assets) {
            Some(unit) => units.push(unit),
            None => {
                skipped += 1;
                warn!(
                    champion = champion.name.as_deref().unwrap_or("<unnamed>"),
                    "skipping champion without image"
                );
            }
        }
    }
    sort_units_by_cost_and_name(&mut units);

    info!(
        path = %cfg.set_data_path.display(),
        units = units.len(),
        skipped,
        traits = trait_icons.len(),
        portraits = unit_images.len(),
        spells = spell_icons.len(),
        "unit data loaded"
    );

    let mut data = UnitsData::new(units);
    data.skipped = skipped;
    Ok(data)
}

/// Cheapest first, then alphabetical. Stable.
pub fn sort_units_by_cost_and_name(units: &mut [Unit]) {
    units.sort_by(|a, b| a.cost.cmp(&b.cost).then_with(|| a.name.cmp(&b.name)));
}
