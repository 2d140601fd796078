//! Integration tests for catalog resolution

use std::fs;
use tempfile::TempDir;
use xpath_i18n::{CatalogError, CatalogRegistry, Locale, MessageResolver, XPATH_ERRORS};

/// Create a temporary directory with test catalog files
fn create_test_catalogs() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    fs::write(
        temp_dir.path().join("greetings.json"),
        r#"{
            "language": "en",
            "direction": "ltr",
            "HELLO": "Hello, {0}!",
            "GOODBYE": "Goodbye!"
        }"#,
    )
    .unwrap();

    fs::write(
        temp_dir.path().join("greetings_es.json"),
        r#"{
            "language": "es",
            "direction": "ltr",
            "HELLO": "¡Hola, {0}!",
            "GOODBYE": "¡Adiós!"
        }"#,
    )
    .unwrap();

    temp_dir
}

#[test]
fn test_builtin_resolves_exact_locale() {
    let resolver = MessageResolver::builtin();

    let catalog = resolver
        .resolve(XPATH_ERRORS, &Locale::with_country("es", "ES"))
        .unwrap();
    assert_eq!(catalog.language_tag(), Some("es"));
    assert_eq!(
        catalog.get("ER_EMPTY_EXPRESSION"),
        Some("¡Expresión vacía!")
    );
}

#[test]
fn test_country_is_ignored_outside_the_special_case() {
    let resolver = MessageResolver::builtin();

    // ca_ES and bare ca land on the same catalog
    let with_country = resolver
        .resolve(XPATH_ERRORS, &Locale::with_country("ca", "ES"))
        .unwrap();
    let bare = resolver.resolve(XPATH_ERRORS, &Locale::new("ca")).unwrap();
    assert_eq!(with_country, bare);
    assert_eq!(with_country.language_tag(), Some("ca"));
}

#[test]
fn test_reserved_country_selects_regional_catalog() {
    let resolver = MessageResolver::builtin();

    let catalog = resolver
        .resolve(XPATH_ERRORS, &Locale::with_country("zh", "TW"))
        .unwrap();
    assert_eq!(catalog.language_tag(), Some("zh_TW"));

    // No plain zh catalog ships, so zh without the reserved country falls
    // back to the default bundle
    let fallback = resolver.resolve(XPATH_ERRORS, &Locale::new("zh")).unwrap();
    assert_eq!(fallback.language_tag(), Some("en"));
}

#[test]
fn test_unknown_locale_falls_back_to_default() {
    let resolver = MessageResolver::builtin();

    let catalog = resolver
        .resolve(XPATH_ERRORS, &Locale::with_country("pt", "BR"))
        .unwrap();
    assert_eq!(catalog.language_tag(), Some("en"));
    assert_eq!(catalog.get("ER_EMPTY_EXPRESSION"), Some("Empty expression!"));
}

#[test]
fn test_unknown_base_name_is_catalog_not_found() {
    let resolver = MessageResolver::builtin();

    let err = resolver
        .resolve("xslt-errors", &Locale::new("es"))
        .unwrap_err();
    match err {
        CatalogError::CatalogNotFound { base_name, locale } => {
            assert_eq!(base_name, "xslt-errors");
            assert_eq!(locale, Locale::new("es"));
        }
        other => panic!("Expected CatalogNotFound, got: {:?}", other),
    }
}

#[test]
fn test_resolve_is_idempotent() {
    let resolver = MessageResolver::builtin();
    let locale = Locale::with_country("it", "IT");

    let first = resolver.resolve(XPATH_ERRORS, &locale).unwrap().clone();
    let second = resolver.resolve(XPATH_ERRORS, &locale).unwrap();
    assert_eq!(&first, second);

    // A cold registry resolves to the same content as a warm one
    let cold = MessageResolver::builtin();
    assert_eq!(&first, cold.resolve(XPATH_ERRORS, &locale).unwrap());
}

#[test]
fn test_message_convenience_echoes_missing_keys() {
    let resolver = MessageResolver::builtin();
    let locale = Locale::new("fr");

    let message = resolver
        .message(XPATH_ERRORS, &locale, "ER_EMPTY_EXPRESSION")
        .unwrap();
    assert_eq!(message, "Expression vide !");

    let missing = resolver
        .message(XPATH_ERRORS, &locale, "ER_NOT_A_SHIPPED_KEY")
        .unwrap();
    assert_eq!(missing, "ER_NOT_A_SHIPPED_KEY");
}

#[test]
fn test_from_dir_loads_catalogs_by_file_stem() {
    let temp_dir = create_test_catalogs();
    let registry = CatalogRegistry::from_dir(temp_dir.path()).unwrap();
    assert_eq!(registry.len(), 2);

    let resolver = MessageResolver::new(registry);

    let spanish = resolver
        .resolve("greetings", &Locale::with_country("es", "ES"))
        .unwrap();
    assert_eq!(spanish.get("HELLO"), Some("¡Hola, {0}!"));

    // it has no catalog of its own and lands on the default
    let fallback = resolver.resolve("greetings", &Locale::new("it")).unwrap();
    assert_eq!(fallback.get("HELLO"), Some("Hello, {0}!"));
}

#[test]
fn test_from_dir_reports_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("no-such-dir");

    let err = CatalogRegistry::from_dir(&missing).unwrap_err();
    assert!(matches!(err, CatalogError::ResourceLoad { .. }));
}

#[test]
fn test_from_dir_reports_bad_catalog_data() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("broken.json"),
        r#"{"ER_COUNT": 42}"#,
    )
    .unwrap();

    let err = CatalogRegistry::from_dir(temp_dir.path()).unwrap_err();
    match err {
        CatalogError::Parse { name, .. } => assert_eq!(name, "broken"),
        other => panic!("Expected Parse error, got: {:?}", other),
    }
}

#[test]
fn test_from_dir_ignores_non_json_files() {
    let temp_dir = create_test_catalogs();
    fs::write(temp_dir.path().join("README.txt"), "not a catalog").unwrap();

    let registry = CatalogRegistry::from_dir(temp_dir.path()).unwrap();
    assert_eq!(registry.len(), 2);
    assert!(!registry.contains("README"));
}

#[test]
fn test_registry_names_and_lookup() {
    let registry = CatalogRegistry::builtin();

    assert!(registry.contains("xpath-errors"));
    assert!(registry.contains("xpath-errors_zh_TW"));
    assert!(!registry.contains("xpath-errors_pt"));
    assert!(registry.get("xpath-errors_pt").is_none());
    assert_eq!(registry.names().count(), registry.len());
}
