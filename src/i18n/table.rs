use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use anyhow::Context;

use super::Locale;

#[derive(Debug, Default, Clone)]
pub struct LocaleTable {
    strings: HashMap<Locale, HashMap<String, String>>,
}

impl LocaleTable {
    // A table that fails to parse degrades to an empty one.
    pub fn embedded() -> Arc<LocaleTable> {
        static EMBEDDED: OnceLock<Arc<LocaleTable>> = OnceLock::new();
        EMBEDDED
            .get_or_init(|| {
                let mut table = LocaleTable::default();
                for locale in Locale::ALL {
                    let strings = parse_strings(embedded_source(locale)).unwrap_or_else(|e| {
                        tracing::error!(locale = %locale, error = %e, "embedded translations are invalid");
                        HashMap::new()
                    });
                    table.insert(locale, strings);
                }
                Arc::new(table)
            })
            .clone()
    }

    // A missing `<code>.json` leaves that locale empty; a malformed one is an error.
    pub fn from_dir(dir: &Path) -> anyhow::Result<Self> {
        let mut table = LocaleTable::default();
        for locale in Locale::ALL {
            let path = dir.join(format!("{}.json", locale.as_str()));
            if !path.exists() {
                tracing::warn!(path = %path.display(), "translation file missing");
                table.insert(locale, HashMap::new());
                continue;
            }
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let strings = parse_strings(&raw)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            table.insert(locale, strings);
        }
        Ok(table)
    }

    pub fn insert(&mut self, locale: Locale, strings: HashMap<String, String>) {
        self.strings.insert(locale, strings);
    }

    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.strings
            .get(&locale)
            .and_then(|strings| strings.get(key))
            .map(String::as_str)
    }

    pub fn len(&self, locale: Locale) -> usize {
        self.strings.get(&locale).map_or(0, HashMap::len)
    }
}

fn embedded_source(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/i18n/ru.json")),
        Locale::Ro => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/i18n/ro.json")),
        Locale::En => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/i18n/en.json")),
    }
}

fn parse_strings(raw: &str) -> Result<HashMap<String, String>, serde_json::Error> {
    serde_json::from_str(raw)
}
