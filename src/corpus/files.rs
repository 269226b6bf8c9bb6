//! File backed corpora.
//!
//! A corpus folder holds one file per language, either
//! - `<lang>.jsonl`: one JSON object per line, text in `tweet` (or `text`),
//! - `<lang>.txt`: one record per line.
//!
//! `.jsonl` is preferred when both exist.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{Corpus, CorpusProvider};
use crate::error::Error;
use crate::lang::Lang;

/// A corpus line in `.jsonl` files. Other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(alias = "text")]
    pub tweet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FileProvider {
    src: PathBuf,
}

impl FileProvider {
    pub fn new(src: &Path) -> Self {
        Self {
            src: src.to_path_buf(),
        }
    }

    fn path(&self, lang: &Lang, extension: &str) -> PathBuf {
        let mut p = self.src.join(lang.as_str());
        p.set_extension(extension);
        p
    }

    fn read_jsonl(path: &Path) -> Result<Corpus, Error> {
        let reader = BufReader::new(File::open(path)?);
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: Record = serde_json::from_str(&line)?;
            records.push(record.tweet);
        }
        Ok(Corpus::new(records))
    }

    fn read_lines(path: &Path) -> Result<Corpus, Error> {
        let reader = BufReader::new(File::open(path)?);
        let records = reader.lines().collect::<Result<Vec<String>, _>>()?;
        Ok(Corpus::new(records))
    }
}

impl CorpusProvider for FileProvider {
    fn get(&self, lang: &Lang) -> Result<Corpus, Error> {
        let jsonl = self.path(lang, "jsonl");
        let txt = self.path(lang, "txt");

        let corpus = if jsonl.exists() {
            debug!("[{}] reading {:?}", lang, jsonl);
            Self::read_jsonl(&jsonl)?
        } else if txt.exists() {
            debug!("[{}] reading {:?}", lang, txt);
            Self::read_lines(&txt)?
        } else {
            return Err(Error::MissingLang(format!(
                "{} (no {:?} or {:?})",
                lang, jsonl, txt
            )));
        };

        info!("[{}] corpus loaded: {} records", lang, corpus.len());
        Ok(corpus)
    }
}
