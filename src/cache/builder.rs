//! Build-or-load logic.
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use super::file::{CacheFile, Lookup};
use super::index::{EmojiIndex, IndexEntry};
use crate::corpus::Corpus;
use crate::emoji::Tokenize;
use crate::error::Error;
use crate::lang::Lang;

/// Receives the number of records scanned so far, after each record.
pub trait Progress {
    fn update(&mut self, scanned: usize);

    /// Called once the scan is over.
    fn finish(&mut self, _scanned: usize) {}
}

/// Discards progress.
pub struct NoProgress;

impl Progress for NoProgress {
    fn update(&mut self, _scanned: usize) {}
}

/// Logs progress every `every` records.
pub struct LogProgress {
    lang: String,
    total: usize,
    every: usize,
}

impl LogProgress {
    pub fn new(lang: &Lang, total: usize, every: usize) -> Self {
        Self {
            lang: lang.to_string(),
            total,
            every: every.max(1),
        }
    }
}

impl Progress for LogProgress {
    fn update(&mut self, scanned: usize) {
        if scanned % self.every == 0 {
            info!("[{}] scanned {}/{} records", self.lang, scanned, self.total);
        }
    }

    fn finish(&mut self, scanned: usize) {
        info!("[{}] scan done: {} records", self.lang, scanned);
    }
}

/// Where a [Cached] index comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Read back from the cache file, no tokenization happened.
    Loaded,
    /// Built by scanning the corpus. `saved` is false if the cache file could not be written.
    Built { saved: bool },
}

#[derive(Debug)]
pub struct Cached {
    pub index: EmojiIndex,
    pub origin: Origin,
}

/// Cache folder and scan bound.
#[derive(Debug, Clone)]
pub struct EmojiCache {
    dir: PathBuf,
    size: usize,
}

impl EmojiCache {
    pub fn new(dir: &Path, size: usize) -> Self {
        Self {
            dir: dir.to_path_buf(),
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn file(&self, lang: &Lang) -> CacheFile {
        CacheFile::new(&self.dir.join(format!("{}_emoji.csv", lang.as_str())))
    }

    /// Remove the cache file of `lang`, if any, so that the next
    /// [EmojiCache::build_or_load] rebuilds it.
    pub fn invalidate(&self, lang: &Lang) -> Result<bool, Error> {
        let file = self.file(lang);
        match std::fs::remove_file(file.path()) {
            Ok(()) => {
                info!("[{}] removed {:?}", lang, file.path());
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Scan the first `size` records of `corpus` (or the whole corpus if shorter).
    pub fn scan<T: Tokenize, P: Progress>(
        &self,
        corpus: &Corpus,
        tokenizer: &T,
        progress: &mut P,
    ) -> Result<EmojiIndex, Error> {
        let mut index = EmojiIndex::default();
        let mut scanned = 0;
        for (tweet_index, text) in corpus.iter().take(self.size).enumerate() {
            let clusters = tokenizer.tokenize(text);
            if !clusters.is_empty() {
                index.push(IndexEntry::new(clusters, tweet_index))?;
            }
            scanned = tweet_index + 1;
            progress.update(scanned);
        }
        progress.finish(scanned);
        Ok(index)
    }

    /// Load the index of `lang` from its cache file, or build it from `corpus` and save it.
    ///
    /// A failed save is logged and reported through [Origin::Built], the index is still returned.
    /// A corrupt cache file is an error.
    pub fn build_or_load<T: Tokenize, P: Progress>(
        &self,
        lang: &Lang,
        corpus: &Corpus,
        tokenizer: &T,
        progress: &mut P,
    ) -> Result<Cached, Error> {
        let file = self.file(lang);
        match file.read()? {
            Lookup::Found(index) => {
                info!(
                    "[{}] cache file {:?} found, {} entries",
                    lang,
                    file.path(),
                    index.len()
                );
                Ok(Cached {
                    index,
                    origin: Origin::Loaded,
                })
            }
            Lookup::NotFound => {
                warn!(
                    "[{}] cache file {:?} not found, processing corpus",
                    lang,
                    file.path()
                );
                let index = self.scan(corpus, tokenizer, progress)?;
                let saved = match file.write(&index) {
                    Ok(()) => true,
                    Err(e) => {
                        error!("[{}] could not write {:?}: {}", lang, file.path(), e);
                        false
                    }
                };
                Ok(Cached {
                    index,
                    origin: Origin::Built { saved },
                })
            }
        }
    }
}
