//! Read-only registry of catalogs keyed by bundle name and locale suffix

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

/// Base name of the compiled-in XPath diagnostics bundle.
pub const XPATH_ERRORS: &str = "xpath-errors";

/// Compiled-in catalog data. The unsuffixed entry is the default-locale
/// bundle the resolver falls back to.
const EMBEDDED: &[(&str, &str)] = &[
    ("xpath-errors", include_str!("../locales/xpath-errors.json")),
    ("xpath-errors_ca", include_str!("../locales/xpath-errors_ca.json")),
    ("xpath-errors_de", include_str!("../locales/xpath-errors_de.json")),
    ("xpath-errors_es", include_str!("../locales/xpath-errors_es.json")),
    ("xpath-errors_fr", include_str!("../locales/xpath-errors_fr.json")),
    ("xpath-errors_it", include_str!("../locales/xpath-errors_it.json")),
    ("xpath-errors_zh_TW", include_str!("../locales/xpath-errors_zh_TW.json")),
];

/// A registry entry. Embedded entries defer parsing until first access and
/// memoize the result, so racing first lookups from multiple threads
/// converge on a single parsed catalog.
#[derive(Debug)]
enum Slot {
    Embedded {
        json: &'static str,
        parsed: OnceCell<Option<Catalog>>,
    },
    Ready(Catalog),
}

impl Slot {
    fn catalog(&self, name: &str) -> Option<&Catalog> {
        match self {
            Slot::Ready(catalog) => Some(catalog),
            Slot::Embedded { json, parsed } => parsed
                .get_or_init(|| match Catalog::from_json(json) {
                    Ok(catalog) => Some(catalog),
                    // Embedded data is validated at build time, so this
                    // branch is unreachable short of a packaging defect.
                    Err(e) => {
                        error!("Embedded catalog '{}' failed to parse: {}", name, e);
                        None
                    }
                })
                .as_ref(),
        }
    }
}

/// Immutable mapping from `base_name + locale_suffix` to [`Catalog`].
///
/// Built once, read-only afterward. Steady-state lookups take no locks.
#[derive(Debug)]
pub struct CatalogRegistry {
    slots: HashMap<String, Slot>,
}

impl CatalogRegistry {
    /// Registry over the compiled-in bundles.
    ///
    /// Embedded entries parse lazily on first access and memoize, so
    /// constructing this repeatedly stays cheap.
    pub fn builtin() -> Self {
        let slots = EMBEDDED
            .iter()
            .map(|&(name, json)| {
                (
                    name.to_string(),
                    Slot::Embedded {
                        json,
                        parsed: OnceCell::new(),
                    },
                )
            })
            .collect();
        Self { slots }
    }

    /// Load every `*.json` file in `dir` as a catalog keyed by its file stem.
    ///
    /// This is a one-time load; files are parsed eagerly so bad data is
    /// reported here rather than at resolve time.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> CatalogResult<Self> {
        let dir = dir.as_ref();
        let mut slots = HashMap::new();

        let entries = fs::read_dir(dir).map_err(|source| CatalogError::ResourceLoad {
            path: dir.to_string_lossy().to_string(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| CatalogError::ResourceLoad {
                path: dir.to_string_lossy().to_string(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            debug!("Loading catalog file: {:?}", path);
            let json = fs::read_to_string(&path).map_err(|source| CatalogError::ResourceLoad {
                path: path.to_string_lossy().to_string(),
                source,
            })?;
            let catalog = Catalog::from_json(&json).map_err(|source| CatalogError::Parse {
                name: name.to_string(),
                source,
            })?;
            slots.insert(name.to_string(), Slot::Ready(catalog));
        }

        info!("Loaded {} catalogs from {:?}", slots.len(), dir);
        Ok(Self { slots })
    }

    /// Look up a catalog by its fully-suffixed registry name.
    pub fn get(&self, name: &str) -> Option<&Catalog> {
        self.slots.get(name).and_then(|slot| slot.catalog(name))
    }

    /// Check whether a registry name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Iterate over all registry names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Number of registered catalogs.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the registry holds no catalogs at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
