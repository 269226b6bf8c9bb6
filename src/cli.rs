//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use emocorpus::lang::Lang;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "emocorpus", about = "emoji statistics over tweet corpora.")]
/// Holds every command that is callable by the `emocorpus` command.
pub enum Emocorpus {
    #[structopt(about = "Extract emoji clusters and build the per-language caches")]
    Extract(Extract),
    #[structopt(about = "Compute and display statistics")]
    Stats(Stats),
    #[structopt(about = "Manually code a random sample of emoji tweets")]
    Annotate(Annotate),
    #[structopt(about = "Recompute label tallies from a saved coding log")]
    Replay(Replay),
    #[structopt(about = "Prepare a corpus file from a CSV export")]
    Prepare(Prepare),
}

#[derive(Debug, StructOpt)]
/// Corpus/cache locations, shared by commands that load data.
pub struct DataOpts {
    #[structopt(
        long = "langs",
        help = "comma separated language tags",
        default_value = "en,it",
        use_delimiter = true
    )]
    pub langs: Vec<Lang>,
    #[structopt(
        parse(from_os_str),
        long = "corpus-dir",
        help = "folder holding <lang>.jsonl or <lang>.txt corpora",
        default_value = "data"
    )]
    pub corpus_dir: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "cache-dir",
        help = "folder holding <lang>_emoji.csv caches",
        default_value = "."
    )]
    pub cache_dir: PathBuf,
    #[structopt(
        short = "s",
        long = "size",
        help = "number of leading records scanned per language",
        default_value = "500000"
    )]
    pub size: usize,
    #[structopt(short = "p", long = "parallel", help = "one thread per language")]
    pub parallel: bool,
}

#[derive(Debug, StructOpt)]
pub struct Extract {
    #[structopt(flatten)]
    pub data: DataOpts,
    #[structopt(short = "f", long = "force", help = "rebuild existing caches")]
    pub force: bool,
}

#[derive(Debug, StructOpt)]
pub struct Stats {
    #[structopt(flatten)]
    pub data: DataOpts,
    #[structopt(
        parse(from_os_str),
        long = "out-dir",
        help = "also write every chart as csv in this folder"
    )]
    pub out_dir: Option<PathBuf>,
    #[structopt(subcommand)]
    pub report: ReportKind,
}

#[derive(Debug, StructOpt)]
pub enum ReportKind {
    #[structopt(about = "share of tweets containing any emoji")]
    Prevalence,
    #[structopt(about = "share of emoji tweets containing a given emoji")]
    Specific {
        #[structopt(help = "a single emoji")]
        emoji: String,
    },
    #[structopt(about = "most frequent emoji (counted once per tweet)")]
    Top {
        #[structopt(default_value = "10")]
        k: usize,
    },
    #[structopt(about = "share of emoji tweets containing a handshape emoji")]
    Handshape {
        #[structopt(
            parse(from_os_str),
            long = "handshape",
            default_value = "handshape_emoji.csv"
        )]
        path: PathBuf,
    },
    #[structopt(about = "emoji per character in tweets containing emoji")]
    Density,
    #[structopt(about = "distinct emoji over emoji occurrences")]
    Ttr,
    #[structopt(about = "emoji ranked by prevalence gap between languages")]
    Diverge {
        #[structopt(default_value = "10", help = "emoji per page")]
        k: usize,
        #[structopt(
            long = "pages",
            help = "print this many pages instead of browsing interactively"
        )]
        pages: Option<usize>,
    },
}

#[derive(Debug, StructOpt)]
pub struct Annotate {
    #[structopt(flatten)]
    pub data: DataOpts,
    #[structopt(help = "language to sample from")]
    pub lang: Lang,
    #[structopt(short = "n", default_value = "20", help = "number of samples")]
    pub n: usize,
    #[structopt(long = "seed", help = "seed for reproducible samples")]
    pub seed: Option<u64>,
    #[structopt(
        parse(from_os_str),
        long = "log-dir",
        default_value = "coding",
        help = "coding logs folder"
    )]
    pub log_dir: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Replay {
    pub lang: Lang,
    #[structopt(help = "log number")]
    pub log_id: usize,
    #[structopt(
        parse(from_os_str),
        long = "log-dir",
        default_value = "coding",
        help = "coding logs folder"
    )]
    pub log_dir: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Prepare command and parameters.
///
/// ```sh
/// emocorpus prepare --since 2022 --size 500000 tweets.csv data/en.jsonl
/// ```
pub struct Prepare {
    #[structopt(parse(from_os_str), help = "csv export (tweet or text column)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination .jsonl corpus file")]
    pub dst: PathBuf,
    #[structopt(long = "since", help = "keep rows dated on or after this (e.g. 2022)")]
    pub since: Option<String>,
    #[structopt(short = "s", long = "size", default_value = "500000")]
    pub size: usize,
    #[structopt(long = "seed", default_value = "497")]
    pub seed: u64,
}
