//! Language tags and labels.
//!
//! Corpora, caches and coding logs are keyed by a BCP47 language tag.
//! Charts use a human readable label instead (`en` -> `English`).
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use oxilangtag::LanguageTag;

use crate::error::Error;

lazy_static! {
    /// English names of the languages we usually work with.
    /// Tags that are missing here are labelled with the tag itself.
    static ref LABELS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("ar", "Arabic");
        m.insert("de", "German");
        m.insert("en", "English");
        m.insert("es", "Spanish");
        m.insert("fr", "French");
        m.insert("hi", "Hindi");
        m.insert("id", "Indonesian");
        m.insert("it", "Italian");
        m.insert("ja", "Japanese");
        m.insert("ko", "Korean");
        m.insert("nl", "Dutch");
        m.insert("pl", "Polish");
        m.insert("pt", "Portuguese");
        m.insert("ru", "Russian");
        m.insert("th", "Thai");
        m.insert("tr", "Turkish");
        m.insert("zh", "Chinese");
        m
    };
}

/// A corpus language: normalized tag + display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lang {
    tag: LanguageTag<String>,
    label: String,
}

impl Lang {
    pub fn new(tag: LanguageTag<String>) -> Self {
        let label = LABELS
            .get(tag.primary_language())
            .map(|l| l.to_string())
            .unwrap_or_else(|| tag.as_str().to_string());
        Self { tag, label }
    }

    /// Tag as used in file names (`en`, `pt-BR`...).
    pub fn as_str(&self) -> &str {
        self.tag.as_str()
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl FromStr for Lang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageTag::parse_and_normalize(s.trim())
            .map(Lang::new)
            .map_err(|_| Error::UnknownLang(s.to_string()))
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_label() {
        let l: Lang = "en".parse().unwrap();
        assert_eq!(l.label(), "English");
        assert_eq!(l.as_str(), "en");
    }

    #[test]
    fn unknown_label_is_tag() {
        let l: Lang = "gsw".parse().unwrap();
        assert_eq!(l.label(), "gsw");
    }

    #[test]
    fn region_uses_primary_language() {
        let l: Lang = "pt-br".parse().unwrap();
        assert_eq!(l.as_str(), "pt-BR");
        assert_eq!(l.label(), "Portuguese");
    }

    #[test]
    fn invalid_tag() {
        assert!(matches!(
            "not a tag!".parse::<Lang>(),
            Err(Error::UnknownLang(_))
        ));
    }
}
