//! Cache file codec.
//!
//! One headerless CSV row per [IndexEntry]:
//! 1. the clusters, as a JSON array of strings (`["😀","❤️"]`),
//! 1. the tweet index, in decimal.
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::index::{EmojiIndex, IndexEntry};
use crate::error::Error;

/// Result of reading a cache file. A missing file is not an error.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup {
    Found(EmojiIndex),
    NotFound,
}

#[derive(Debug, Clone)]
pub struct CacheFile {
    path: PathBuf,
}

impl CacheFile {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupt(&self, line: u64, reason: String) -> Error {
        Error::CorruptCache {
            path: self.path.clone(),
            line,
            reason,
        }
    }

    /// Reads the whole file. Any malformed row aborts the read.
    pub fn read(&self) -> Result<Lookup, Error> {
        if !self.path.exists() {
            debug!("{:?} not found", self.path);
            return Ok(Lookup::NotFound);
        }
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{:?} not found", self.path);
                return Ok(Lookup::NotFound);
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut index = EmojiIndex::default();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(row as u64 + 1);

            if record.len() != 2 {
                return Err(self.corrupt(line, format!("expected 2 fields, got {}", record.len())));
            }

            let clusters: Vec<String> = serde_json::from_str(&record[0])
                .map_err(|e| self.corrupt(line, format!("bad cluster list: {}", e)))?;
            let tweet_index: usize = record[1]
                .trim()
                .parse()
                .map_err(|e| self.corrupt(line, format!("bad tweet index {:?}: {}", &record[1], e)))?;

            index
                .push(IndexEntry::new(clusters, tweet_index))
                .map_err(|e| self.corrupt(line, e.to_string()))?;
        }

        Ok(Lookup::Found(index))
    }

    /// Writes (replacing) the whole index.
    ///
    /// A failed write leaves the previous cache file, if any, untouched.
    pub fn write(&self, index: &EmojiIndex) -> Result<(), Error> {
        self.commit(|file| {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(file);

            for entry in index {
                let clusters = serde_json::to_string(entry.clusters())?;
                writer.write_record([clusters, entry.tweet_index().to_string()])?;
            }
            writer.flush()?;
            Ok(())
        })
    }

    /// `<path>.tmp`, next to the cache file.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Fills a temporary file with `fill`, then renames it over the cache file.
    /// On any error the temporary file is removed.
    fn commit<F>(&self, fill: F) -> Result<(), Error>
    where
        F: FnOnce(File) -> Result<(), Error>,
    {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.tmp_path();
        let result = File::create(&tmp)
            .map_err(Error::from)
            .and_then(fill)
            .and_then(|()| std::fs::rename(&tmp, &self.path).map_err(Error::from));

        match result {
            Ok(()) => {
                debug!("renamed {:?} to {:?}", tmp, self.path);
                Ok(())
            }
            Err(e) => {
                match std::fs::remove_file(&tmp) {
                    Err(rm) if rm.kind() != ErrorKind::NotFound => {
                        warn!("could not remove {:?}: {}", tmp, rm)
                    }
                    _ => (),
                }
                Err(e)
            }
        }
    }
}
