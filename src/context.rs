//! Per-run context.
//!
//! Owns every loaded language (corpus + emoji index). Each run builds its own
//! [Context], nothing is shared between runs or instances.
use log::info;
use rayon::prelude::*;

use crate::cache::{EmojiCache, EmojiIndex, LogProgress, Origin};
use crate::corpus::{Corpus, CorpusProvider};
use crate::emoji::Tokenize;
use crate::error::Error;
use crate::lang::Lang;
use crate::stats::LangStats;

/// Progress is logged every this many records.
const PROGRESS_EVERY: usize = 50_000;

#[derive(Debug)]
pub struct LangData {
    pub lang: Lang,
    pub corpus: Corpus,
    pub index: EmojiIndex,
    pub origin: Origin,
}

#[derive(Debug)]
pub struct Context {
    cache: EmojiCache,
    langs: Vec<LangData>,
}

impl Context {
    pub fn new(cache: EmojiCache) -> Self {
        Self {
            cache,
            langs: Vec::new(),
        }
    }

    pub fn cache(&self) -> &EmojiCache {
        &self.cache
    }

    fn load_one<P, T>(cache: &EmojiCache, lang: &Lang, provider: &P, tokenizer: &T) -> Result<LangData, Error>
    where
        P: CorpusProvider + ?Sized,
        T: Tokenize + ?Sized,
    {
        let corpus = provider.get(lang)?;
        let total = cache.size().min(corpus.len());
        let mut progress = LogProgress::new(lang, total, PROGRESS_EVERY);
        let cached = cache.build_or_load(lang, &corpus, &Tok(tokenizer), &mut progress)?;
        info!(
            "[{}] {} emoji tweets ({:?})",
            lang,
            cached.index.len(),
            cached.origin
        );
        Ok(LangData {
            lang: lang.clone(),
            corpus,
            index: cached.index,
            origin: cached.origin,
        })
    }

    fn insert(&mut self, data: LangData) {
        match self.langs.iter_mut().find(|d| d.lang == data.lang) {
            Some(existing) => *existing = data,
            None => self.langs.push(data),
        }
    }

    /// Loads `lang` (build-or-load its index). Reloading a language replaces it.
    pub fn load<P, T>(&mut self, lang: &Lang, provider: &P, tokenizer: &T) -> Result<Origin, Error>
    where
        P: CorpusProvider + ?Sized,
        T: Tokenize + ?Sized,
    {
        let data = Self::load_one(&self.cache, lang, provider, tokenizer)?;
        let origin = data.origin;
        self.insert(data);
        Ok(origin)
    }

    /// Loads every language, one after the other or one thread per language.
    ///
    /// Languages keep the given order either way.
    pub fn load_all<P, T>(
        &mut self,
        langs: &[Lang],
        provider: &P,
        tokenizer: &T,
        parallel: bool,
    ) -> Result<(), Error>
    where
        P: CorpusProvider + Sync + ?Sized,
        T: Tokenize + Sync + ?Sized,
    {
        let loaded: Vec<LangData> = if parallel {
            let cache = &self.cache;
            langs
                .par_iter()
                .map(|lang| Self::load_one(cache, lang, provider, tokenizer))
                .collect::<Result<Vec<_>, Error>>()?
        } else {
            langs
                .iter()
                .map(|lang| Self::load_one(&self.cache, lang, provider, tokenizer))
                .collect::<Result<Vec<_>, Error>>()?
        };
        for data in loaded {
            self.insert(data);
        }
        Ok(())
    }

    pub fn langs(&self) -> impl Iterator<Item = &Lang> {
        self.langs.iter().map(|d| &d.lang)
    }

    pub fn data(&self, lang: &Lang) -> Result<&LangData, Error> {
        self.langs
            .iter()
            .find(|d| &d.lang == lang)
            .ok_or_else(|| Error::MissingLang(lang.to_string()))
    }

    pub fn stats(&self, lang: &Lang) -> Result<LangStats<'_>, Error> {
        let data = self.data(lang)?;
        Ok(LangStats::new(&data.index, &data.corpus, self.cache.size()))
    }

    /// Stats of every loaded language, in load order.
    pub fn all_stats(&self) -> Vec<(Lang, LangStats<'_>)> {
        self.langs
            .iter()
            .map(|d| {
                (
                    d.lang.clone(),
                    LangStats::new(&d.index, &d.corpus, self.cache.size()),
                )
            })
            .collect()
    }
}

/// Sized adapter so unsized tokenizers can go through the generic cache API.
struct Tok<'a, T: Tokenize + ?Sized>(&'a T);

impl<'a, T: Tokenize + ?Sized> Tokenize for Tok<'a, T> {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.0.tokenize(text)
    }
}
