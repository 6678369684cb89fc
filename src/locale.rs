//! Message catalogs for the two site languages.

use std::{path::Path, str::FromStr};

use crate::foundation::error::{MuxuError, MuxuResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = MuxuError;

    fn from_str(s: &str) -> MuxuResult<Self> {
        match s {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            other => Err(MuxuError::validation(format!(
                "unsupported locale '{other}' (expected es or en)"
            ))),
        }
    }
}

/// Nested JSON message tree addressed by dotted keys (`"hero.title"`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Messages {
    root: serde_json::Value,
}

impl Messages {
    pub fn from_json_str(s: &str) -> MuxuResult<Self> {
        let root = serde_json::from_str(s).map_err(|e| MuxuError::serde(format!("messages: {e}")))?;
        Ok(Self { root })
    }

    /// Load `<dir>/<code>.json`. A missing or malformed file yields an empty catalog, so every
    /// lookup falls back to its key.
    pub fn load(dir: &Path, locale: Locale) -> Self {
        let path = dir.join(format!("{}.json", locale.code()));
        let parsed = std::fs::read_to_string(&path)
            .map_err(|e| MuxuError::asset(format!("{}: {e}", path.display())))
            .and_then(|s| Self::from_json_str(&s));
        match parsed {
            Ok(m) => m,
            Err(err) => {
                tracing::warn!(%err, locale = locale.code(), "messages unavailable");
                Self::default()
            }
        }
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        key.split('.')
            .try_fold(&self.root, |node, part| node.as_object()?.get(part))?
            .as_str()
    }

    /// Translate `key`, replacing every `{name}` with its parameter. Keys that are missing or
    /// do not name a string come back unchanged.
    pub fn t(&self, key: &str, params: &[(&str, &str)]) -> String {
        match self.lookup(key) {
            Some(text) => params.iter().fold(text.to_owned(), |acc, (name, value)| {
                acc.replace(&format!("{{{name}}}"), value)
            }),
            None => key.to_owned(),
        }
    }

    /// `products.<id>.<field>`, or `fallback` when untranslated.
    pub fn product_field(&self, product_id: &str, field: &str, fallback: &str) -> String {
        self.lookup(&format!("products.{product_id}.{field}"))
            .unwrap_or(fallback)
            .to_owned()
    }
}

#[cfg(test)]
#[path = "../tests/unit/locale.rs"]
mod tests;
