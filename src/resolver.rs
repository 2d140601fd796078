//! Locale-to-catalog resolution with default fallback

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::locale::Locale;
use crate::registry::CatalogRegistry;
use tracing::{debug, warn};

/// Selects the best-matching catalog for a requested locale.
///
/// Resolution is a two-step lookup over the injected registry: the exact
/// `base_name + suffix` entry first, then the unsuffixed default bundle.
/// When both are absent the bundle is missing from the build entirely and
/// [`CatalogError::CatalogNotFound`] is returned.
#[derive(Debug)]
pub struct MessageResolver {
    registry: CatalogRegistry,
}

impl MessageResolver {
    /// Create a resolver over an explicit registry.
    pub fn new(registry: CatalogRegistry) -> Self {
        Self { registry }
    }

    /// Resolver over the compiled-in bundles.
    pub fn builtin() -> Self {
        Self::new(CatalogRegistry::builtin())
    }

    /// Resolve a bundle base name and locale to a catalog.
    pub fn resolve(&self, base_name: &str, locale: &Locale) -> CatalogResult<&Catalog> {
        let name = format!("{}{}", base_name, locale.suffix());

        if let Some(catalog) = self.registry.get(&name) {
            debug!("Resolved catalog '{}' for locale {}", name, locale);
            return Ok(catalog);
        }

        if let Some(catalog) = self.registry.get(base_name) {
            warn!(
                "No catalog '{}' for locale {}, falling back to default bundle '{}'",
                name, locale, base_name
            );
            return Ok(catalog);
        }

        Err(CatalogError::CatalogNotFound {
            base_name: base_name.to_string(),
            locale: locale.clone(),
        })
    }

    /// Resolve a bundle and fetch one template string.
    ///
    /// Missing keys within a resolved catalog echo back as the key itself;
    /// only a missing bundle is an error.
    pub fn message<'a>(
        &'a self,
        base_name: &str,
        locale: &Locale,
        key: &'a str,
    ) -> CatalogResult<&'a str> {
        Ok(self.resolve(base_name, locale)?.get_or_key(key))
    }

    /// The registry this resolver reads from.
    pub fn registry(&self) -> &CatalogRegistry {
        &self.registry
    }
}
