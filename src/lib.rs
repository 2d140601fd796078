//! Localized message catalogs for XPath processor diagnostics
//!
//! This crate ships per-locale tables mapping fixed error/warning message
//! keys to translated template strings, together with the small resolver
//! that selects the best-available table for a requested locale. It
//! includes:
//!
//! - An immutable [`Locale`] value type with the resource-suffix rule
//! - Compiled-in catalogs validated at build time
//! - A read-only [`CatalogRegistry`] keyed by bundle name and locale suffix
//! - A [`MessageResolver`] with fallback to the default (unsuffixed) bundle
//!
//! Template strings keep their positional placeholders (`{0}`, `{1}`, …)
//! verbatim; substituting arguments into them is the caller's concern.
//!
//! # Example
//!
//! ```rust
//! use xpath_i18n::{Locale, MessageResolver, XPATH_ERRORS};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = MessageResolver::builtin();
//! let catalog = resolver.resolve(XPATH_ERRORS, &Locale::with_country("es", "ES"))?;
//!
//! println!("{}", catalog.get_or_key("ER_UNKNOWN_AXIS"));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod locale;
pub mod registry;
pub mod resolver;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use locale::Locale;
pub use registry::{CatalogRegistry, XPATH_ERRORS};
pub use resolver::MessageResolver;
