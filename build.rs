//! Build script validating the shipped catalog files.
//!
//! Catches packaging defects at compile time instead of resolve time:
//! - every `locales/*.json` file is a flat string-to-string object
//! - no value is empty
//! - every localized file carries exactly the default bundle's key set
//! - positional placeholder tokens (`{0}`, `{1}`, …) match the default's

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

type Messages = BTreeMap<String, String>;

/// Collect the positional placeholder tokens in a template string.
fn placeholder_tokens(template: &str) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let tail = &rest[open..];
        if let Some(close) = tail.find('}') {
            let inner = &tail[1..close];
            if !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit()) {
                tokens.insert(tail[..=close].to_string());
            }
        }
        rest = &rest[open + 1..];
    }
    tokens
}

fn load_catalog(path: &Path) -> Result<Messages, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let messages: Messages = serde_json::from_str(&content)
        .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;

    for (key, value) in &messages {
        if value.is_empty() {
            return Err(format!("{}: empty value for key '{}'", path.display(), key));
        }
    }
    Ok(messages)
}

fn find_catalog_files(locales_dir: &Path) -> Result<BTreeMap<String, PathBuf>, String> {
    let mut files = BTreeMap::new();
    let entries = fs::read_dir(locales_dir)
        .map_err(|e| format!("failed to read {}: {}", locales_dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("failed to read directory entry: {}", e))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| format!("invalid catalog file name: {}", path.display()))?;
        files.insert(stem.to_string(), path);
    }

    if files.is_empty() {
        return Err(format!("no catalog files found in {}", locales_dir.display()));
    }
    Ok(files)
}

fn validate_locales() -> Result<(), String> {
    println!("cargo:rerun-if-changed=locales");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set")?;
    let locales_dir = Path::new(&manifest_dir).join("locales");
    let catalog_files = find_catalog_files(&locales_dir)?;

    let mut catalogs: HashMap<String, Messages> = HashMap::new();
    for (stem, path) in &catalog_files {
        let messages = load_catalog(path)?;
        println!("{}: {} messages", stem, messages.len());
        catalogs.insert(stem.clone(), messages);
    }

    let mut errors = Vec::new();

    // Locale suffixes start at the first underscore; bundle base names use
    // hyphens only.
    for (stem, messages) in &catalogs {
        let base = stem.split('_').next().unwrap_or(stem.as_str());
        if base == stem.as_str() {
            continue;
        }
        let Some(default) = catalogs.get(base) else {
            errors.push(format!("{}: no default bundle '{}'", stem, base));
            continue;
        };

        for key in default.keys() {
            if !messages.contains_key(key) {
                errors.push(format!("{}: missing key '{}'", stem, key));
            }
        }
        for key in messages.keys() {
            if !default.contains_key(key) {
                errors.push(format!("{}: extra key '{}'", stem, key));
            }
        }
        for (key, template) in messages {
            if let Some(default_template) = default.get(key) {
                let expected = placeholder_tokens(default_template);
                let found = placeholder_tokens(template);
                if expected != found {
                    errors.push(format!(
                        "{}: placeholder mismatch for '{}' (expected {:?}, found {:?})",
                        stem, key, expected, found
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("\n"))
    }
}

fn main() {
    if let Err(e) = validate_locales() {
        eprintln!("catalog validation failed:\n{}", e);
        process::exit(1);
    }
}
