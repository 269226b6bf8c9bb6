/*! Corpora

A [Corpus] is the ordered, read-only list of raw records (tweets) of a language.
Records are addressed by their position, which is what cache entries point to.

Corpora are obtained from a [CorpusProvider]:
- [MemoryProvider] holds records given at construction (tests, small runs).
- [FileProvider] reads `<lang>.jsonl` or `<lang>.txt` files from a folder.
!*/
mod files;

use std::collections::HashMap;

use crate::error::Error;
use crate::lang::Lang;

pub use files::{FileProvider, Record};

/// Randomly indexable records of a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    records: Vec<String>,
}

impl Corpus {
    pub fn new(records: Vec<String>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.records.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Source of corpora.
pub trait CorpusProvider {
    fn get(&self, lang: &Lang) -> Result<Corpus, Error>;

    fn length(&self, lang: &Lang) -> Result<usize, Error> {
        self.get(lang).map(|c| c.len())
    }
}

/// Provider holding corpora in memory, keyed by language tag.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    corpora: HashMap<String, Corpus>,
}

impl MemoryProvider {
    pub fn insert(&mut self, lang: &Lang, corpus: Corpus) -> &mut Self {
        self.corpora.insert(lang.as_str().to_string(), corpus);
        self
    }
}

impl CorpusProvider for MemoryProvider {
    fn get(&self, lang: &Lang) -> Result<Corpus, Error> {
        self.corpora
            .get(lang.as_str())
            .cloned()
            .ok_or_else(|| Error::MissingLang(lang.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_access() {
        let c: Corpus = vec!["a", "b"].into_iter().collect();
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(1), Some("b"));
        assert_eq!(c.get(2), None);
    }

    #[test]
    fn memory_provider() {
        let en: Lang = "en".parse().unwrap();
        let it: Lang = "it".parse().unwrap();
        let mut p = MemoryProvider::default();
        p.insert(&en, vec!["hello 😀"].into_iter().collect());

        assert_eq!(p.length(&en).unwrap(), 1);
        assert!(matches!(p.get(&it), Err(Error::MissingLang(_))));
    }
}
