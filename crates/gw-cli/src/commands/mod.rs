pub mod level;
pub mod normalize;
pub mod roll;
pub mod show;
pub mod validate;

use std::path::{Path, PathBuf};

use tracing::debug;

use gw_core::{Character, JsonLocalizer, Localizer, NoLocalizer, StatCatalog};

/// Optional catalog and translation files shared by several commands.
#[derive(Debug, Default)]
pub struct SetupPaths {
    pub catalog: Option<PathBuf>,
    pub lang: Option<PathBuf>,
}

/// Catalog and localizer loaded from [`SetupPaths`].
pub struct Setup {
    pub catalog: StatCatalog,
    pub localizer: Box<dyn Localizer>,
}

impl SetupPaths {
    pub fn load(&self) -> Result<Setup, String> {
        let catalog = load_catalog(self.catalog.as_deref())?;
        let localizer: Box<dyn Localizer> = match &self.lang {
            Some(path) => {
                let localizer = JsonLocalizer::load(path)
                    .map_err(|e| format!("cannot read translations {}: {e}", path.display()))?;
                debug!(keys = localizer.len(), path = %path.display(), "loaded translations");
                Box::new(localizer)
            }
            None => Box::new(NoLocalizer),
        };
        Ok(Setup { catalog, localizer })
    }
}

/// Load a stat catalog, or the built-in Grimwild stats.
fn load_catalog(path: Option<&Path>) -> Result<StatCatalog, String> {
    match path {
        Some(path) => {
            let catalog = StatCatalog::load(path)
                .map_err(|e| format!("cannot read catalog {}: {e}", path.display()))?;
            if catalog.is_empty() {
                return Err(format!("catalog {} defines no stats", path.display()));
            }
            Ok(catalog)
        }
        None => Ok(StatCatalog::grimwild()),
    }
}

/// Load a character file.
fn load_character(path: &Path) -> Result<Character, String> {
    Character::load(path).map_err(|e| format!("cannot read character {}: {e}", path.display()))
}
