use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module provides functions for validating ISO 639-1 (2-letter) and
/// ISO 639-3 (3-letter) language codes and resolving them to display names.
/// Look up a language by its ISO 639-1 or ISO 639-3 code
pub fn lookup_language(code: &str) -> Result<Language> {
    let normalized_code = code.trim().to_lowercase();

    let language = match normalized_code.len() {
        2 => Language::from_639_1(&normalized_code),
        3 => Language::from_639_3(&normalized_code),
        _ => None,
    };

    language.ok_or_else(|| anyhow!("Invalid language code: {}", code))
}

/// Validate that a string is a recognized ISO language code
pub fn validate_language_code(code: &str) -> Result<()> {
    lookup_language(code).map(|_| ())
}

/// English display name for a language code (e.g., "en" -> "English")
pub fn get_language_name(code: &str) -> Result<String> {
    Ok(lookup_language(code)?.to_name().to_string())
}
