//! Coding log files.
//!
//! Logs live in a single folder and are named `<lang>_coding_<n>.csv`.
//! Each row is `(text, labels)`, without header. A new session always
//! creates a new file numbered after the highest existing one.
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Error;
use crate::lang::Lang;

#[derive(Debug, Clone)]
pub struct CodingLog {
    dir: PathBuf,
    lang: Lang,
}

impl CodingLog {
    pub fn new(dir: &Path, lang: &Lang) -> Self {
        Self {
            dir: dir.to_path_buf(),
            lang: lang.clone(),
        }
    }

    fn prefix(&self) -> String {
        format!("{}_coding_", self.lang.as_str())
    }

    pub fn path(&self, id: usize) -> PathBuf {
        self.dir.join(format!("{}{}.csv", self.prefix(), id))
    }

    /// Ids of existing logs for this language, ascending.
    pub fn ids(&self) -> Result<Vec<usize>, Error> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let prefix = self.prefix();
        let mut ids: Vec<usize> = std::fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let name = entry.file_name();
                let name = name.to_str()?;
                name.strip_prefix(&prefix)?
                    .strip_suffix(".csv")?
                    .parse()
                    .ok()
            })
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    /// Id the next written log will get.
    pub fn next_id(&self) -> Result<usize, Error> {
        Ok(self.ids()?.last().map(|id| id + 1).unwrap_or(0))
    }

    /// Writes `rows` in a new log file and returns its id.
    ///
    /// Fails rather than overwriting an existing file.
    pub fn write_new(&self, rows: &[(String, String)]) -> Result<usize, Error> {
        std::fs::create_dir_all(&self.dir)?;
        let id = self.next_id()?;
        let path = self.path(id);
        let file = OpenOptions::new().write(true).create_new(true).open(&path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        for (text, labels) in rows {
            writer.write_record([text, labels])?;
        }
        writer.flush()?;

        info!("[{}] wrote {} rows to {:?}", self.lang, rows.len(), path);
        Ok(id)
    }

    /// Reads log `id`. `None` if it does not exist.
    pub fn read(&self, id: usize) -> Result<Option<Vec<(String, String)>>, Error> {
        let path = self.path(id);
        if !path.exists() {
            return Ok(None);
        }
        debug!("[{}] reading {:?}", self.lang, path);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(File::open(&path)?);
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let text = record.get(0).unwrap_or_default().to_string();
            let labels = record.get(1).unwrap_or_default().to_string();
            rows.push((text, labels));
        }
        Ok(Some(rows))
    }
}
