/*! Corpus preparation

Turns a raw CSV export into a corpus file usable by [crate::corpus::FileProvider]:

1. rows are read from a CSV with headers, text in `tweet` (or `text`), optional `date`,
1. rows older than `since` are dropped (lexicographic comparison, so `2022` keeps every `2022-..` date),
1. remaining rows are shuffled with a fixed seed,
1. the first `size` rows are written as `.jsonl`.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::corpus::Record;
use crate::error::Error;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 497;

#[derive(Debug, Clone)]
pub struct PrepareOptions {
    /// Keep rows with `date >= since`. Rows without a date are dropped when set.
    pub since: Option<String>,
    pub size: usize,
    pub seed: u64,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            since: None,
            size: 500_000,
            seed: DEFAULT_SEED,
        }
    }
}

fn column(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
}

/// Reads `src`, writes the prepared corpus to `dst` and returns the number of written records.
pub fn prepare(src: &Path, dst: &Path, opts: &PrepareOptions) -> Result<usize, Error> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(src)?;
    let headers = reader.headers()?.clone();

    let text_col = column(&headers, &["tweet", "text"]).ok_or_else(|| {
        Error::Custom(format!("{:?} has no `tweet` or `text` column", src))
    })?;
    let date_col = column(&headers, &["date", "created_at"]);
    if opts.since.is_some() && date_col.is_none() {
        warn!("{:?} has no date column, every row will be dropped", src);
    }

    let mut records = Vec::new();
    let mut total = 0usize;
    for row in reader.records() {
        let row = row?;
        total += 1;
        let date = date_col.and_then(|c| row.get(c)).map(str::to_string);
        if let Some(since) = &opts.since {
            match &date {
                Some(d) if d.as_str() >= since.as_str() => (),
                _ => continue,
            }
        }
        if let Some(tweet) = row.get(text_col) {
            records.push(Record {
                tweet: tweet.to_string(),
                date,
            });
        }
    }
    info!("{:?}: kept {}/{} rows", src, records.len(), total);

    let mut rng = StdRng::seed_from_u64(opts.seed);
    records.shuffle(&mut rng);
    records.truncate(opts.size);

    if let Some(parent) = dst.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut out = BufWriter::new(File::create(dst)?);
    for record in &records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    info!("wrote {} records to {:?}", records.len(), dst);
    Ok(records.len())
}
