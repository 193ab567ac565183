//! Localization lookup.
//!
//! Strings are resolved by key from an embedded English table. Values use
//! `{{name}}` placeholders. A key with no entry resolves to the key itself,
//! so an unknown transaction mode still produces a visible title.

use std::collections::HashMap;
use std::sync::OnceLock;

const EN: &str = include_str!("../assets/locales/en.json");

// ============================================================================
// Translations
// ============================================================================

/// A key/value string table.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    /// Parses a table from a flat JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not a string-to-string object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            entries: serde_json::from_str(json)?,
        })
    }

    /// The embedded English table.
    #[must_use]
    pub fn english() -> &'static Self {
        static ENGLISH: OnceLock<Translations> = OnceLock::new();
        ENGLISH.get_or_init(|| {
            Self::from_json(EN).unwrap_or_else(|err| {
                tracing::warn!("Embedded translations are invalid: {err}");
                Self::default()
            })
        })
    }

    /// Whether the table has an entry for `key`.
    #[cfg(test)]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Resolves `key` and substitutes `{{name}}` placeholders from `values`.
    #[must_use]
    pub fn lookup(&self, key: &str, values: &[(&str, &str)]) -> String {
        let Some(template) = self.entries.get(key) else {
            tracing::debug!("Missing translation for {key}");
            return key.to_string();
        };

        values
            .iter()
            .fold(template.clone(), |acc, (name, value)| {
                acc.replace(&format!("{{{{{name}}}}}"), value)
            })
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Resolves `key` in the English table.
#[must_use]
pub fn t(key: &str) -> String {
    Translations::english().lookup(key, &[])
}

/// Resolves `key` in the English table with placeholder values.
#[must_use]
pub fn t_with(key: &str, values: &[(&str, &str)]) -> String {
    Translations::english().lookup(key, values)
}

// ============================================================================
// Tests
// ============================================================================
