/*! Chart sinks

Statistics are handed to a [Sink] as a titled [Chart]. Rendering is up to the sink:

- [TextSink] prints aligned tables (stdout in the binary).
- [CsvSink] writes one CSV file per chart, named after the title.

Several sinks can be chained through [Sinks].
!*/
use std::io::Write;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::info;
use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Scalar(f64),
    /// One bar per label (usually one per language).
    Bars(Vec<(String, f64)>),
    /// Ranked items, `first_rank` being the 0-based rank of the first one.
    Ranked {
        first_rank: usize,
        items: Vec<(String, f64)>,
    },
}

pub trait Sink {
    fn render(&mut self, title: &str, chart: &Chart) -> Result<(), Error>;
}

/// Sink chaining.
#[derive(Default)]
pub struct Sinks(Vec<Box<dyn Sink>>);

impl Sinks {
    pub fn add(&mut self, sink: Box<dyn Sink>) -> &mut Sinks {
        self.0.push(sink);
        self
    }
}

impl Sink for Sinks {
    fn render(&mut self, title: &str, chart: &Chart) -> Result<(), Error> {
        for sink in &mut self.0 {
            sink.render(title, chart)?;
        }
        Ok(())
    }
}

/// Plain text tables.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for TextSink<W> {
    fn render(&mut self, title: &str, chart: &Chart) -> Result<(), Error> {
        writeln!(self.out, "== {}", title)?;
        match chart {
            Chart::Scalar(v) => writeln!(self.out, "{:.6}", v)?,
            Chart::Bars(bars) => {
                let width = bars.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
                for (label, value) in bars {
                    writeln!(self.out, "{:<width$}  {:.6}", label, value, width = width)?;
                }
            }
            Chart::Ranked { first_rank, items } => {
                for (i, (label, value)) in items.iter().enumerate() {
                    writeln!(self.out, "{:>5}. {}  {}", first_rank + i + 1, label, value)?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Row<'a> {
    rank: Option<usize>,
    label: &'a str,
    value: f64,
}

/// Writes `<dir>/<title slug>.csv`, overwriting previous renders of the same title.
pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// `Top 10 English emoji` -> `top_10_english_emoji`
    fn slug(title: &str) -> String {
        title
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .join("_")
    }

    pub fn path(&self, title: &str) -> PathBuf {
        let mut p = self.dir.join(Self::slug(title));
        p.set_extension("csv");
        p
    }
}

impl Sink for CsvSink {
    fn render(&mut self, title: &str, chart: &Chart) -> Result<(), Error> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path(title);
        let mut out = csv::WriterBuilder::new().from_path(&path)?;

        match chart {
            Chart::Scalar(value) => out.serialize(Row {
                rank: None,
                label: title,
                value: *value,
            })?,
            Chart::Bars(bars) => {
                for (label, value) in bars {
                    out.serialize(Row {
                        rank: None,
                        label,
                        value: *value,
                    })?;
                }
            }
            Chart::Ranked { first_rank, items } => {
                for (i, (label, value)) in items.iter().enumerate() {
                    out.serialize(Row {
                        rank: Some(first_rank + i + 1),
                        label,
                        value: *value,
                    })?;
                }
            }
        }
        out.flush()?;
        info!("wrote {:?}", path);
        Ok(())
    }
}
