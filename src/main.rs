//! # emocorpus
//!
//! Emoji usage in multilingual tweet corpora.
//!
//! Tweets are scanned once per language: the emoji clusters of every tweet are
//! cached in `<lang>_emoji.csv`, and every statistic is then computed from those caches.
//!
//! ## Getting started
//!
//! ```sh
//! emocorpus 0.1.0
//! emoji statistics over tweet corpora.
//!
//! USAGE:
//!     emocorpus <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     annotate    Manually code a random sample of emoji tweets
//!     extract     Extract emoji clusters and build the per-language caches
//!     help        Prints this message or the help of the given subcommand(s)
//!     prepare     Prepare a corpus file from a CSV export
//!     replay      Recompute label tallies from a saved coding log
//!     stats       Compute and display statistics
//! ```
//!
//! Logging goes through `RUST_LOG` (`info` by default).
use std::io::{self, BufRead, Write};

use emocorpus::annotate::{self, Annotator, CodingLog};
use emocorpus::cache::EmojiCache;
use emocorpus::context::Context;
use emocorpus::corpus::FileProvider;
use emocorpus::emoji::ClusterTokenizer;
use emocorpus::error::Error;
use emocorpus::prepare::{self, PrepareOptions};
use emocorpus::report;
use emocorpus::sink::{CsvSink, Sink, Sinks, TextSink};
use emocorpus::stats::CategorySet;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn load(data: &cli::DataOpts) -> Result<Context, Error> {
    let provider = FileProvider::new(&data.corpus_dir);
    let mut ctx = Context::new(EmojiCache::new(&data.cache_dir, data.size));
    ctx.load_all(&data.langs, &provider, &ClusterTokenizer, data.parallel)?;
    Ok(ctx)
}

fn browse<S: Sink>(ctx: &Context, k: usize, pages: Option<usize>, sink: &mut S) -> Result<(), Error> {
    let mut pager = report::divergence_pager(ctx, k);
    if pager.items().is_empty() {
        warn!("no emoji to rank");
        return Ok(());
    }

    if let Some(pages) = pages {
        for _ in 0..pages {
            report::divergence_page(&pager).render(sink)?;
            pager.next_page();
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        report::divergence_page(&pager).render(sink)?;
        print!("[enter] next page, [q] quit > ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 || line.trim() == "q" {
            break;
        }
        pager.next_page();
    }
    Ok(())
}

fn stats(opts: cli::Stats) -> Result<(), Error> {
    let ctx = load(&opts.data)?;

    let mut sink = Sinks::default();
    sink.add(Box::new(TextSink::new(io::stdout())));
    if let Some(out_dir) = &opts.out_dir {
        sink.add(Box::new(CsvSink::new(out_dir)));
    }

    match opts.report {
        cli::ReportKind::Prevalence => report::prevalence(&ctx).render(&mut sink)?,
        cli::ReportKind::Specific { emoji } => {
            report::specific_prevalence(&ctx, &emoji).render(&mut sink)?
        }
        cli::ReportKind::Top { k } => {
            for r in report::top_k(&ctx, k) {
                r.render(&mut sink)?;
            }
        }
        cli::ReportKind::Handshape { path } => match CategorySet::from_path(&path)? {
            Some(set) => report::category_rate(&ctx, &set).render(&mut sink)?,
            None => warn!("no handshape file, skipping"),
        },
        cli::ReportKind::Density => report::density(&ctx).render(&mut sink)?,
        cli::ReportKind::Ttr => report::type_token_ratio(&ctx).render(&mut sink)?,
        cli::ReportKind::Diverge { k, pages } => browse(&ctx, k, pages, &mut sink)?,
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = cli::Emocorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Emocorpus::Extract(e) => {
            let cache = EmojiCache::new(&e.data.cache_dir, e.data.size);
            if e.force {
                for lang in &e.data.langs {
                    cache.invalidate(lang)?;
                }
            }
            let ctx = load(&e.data)?;
            for lang in ctx.langs() {
                let data = ctx.data(lang)?;
                println!(
                    "{}\t{} emoji tweets / {} records\t{:?}",
                    lang,
                    data.index.len(),
                    data.corpus.len(),
                    data.origin
                );
            }
        }

        cli::Emocorpus::Stats(s) => stats(s)?,

        cli::Emocorpus::Annotate(a) => {
            let provider = FileProvider::new(&a.data.corpus_dir);
            let mut ctx = Context::new(EmojiCache::new(&a.data.cache_dir, a.data.size));
            ctx.load(&a.lang, &provider, &ClusterTokenizer)?;
            let data = ctx.data(&a.lang)?;

            let mut rng = match a.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let log = CodingLog::new(&a.log_dir, &a.lang);
            let mut annotator = Annotator::new(&a.lang, &data.index, &data.corpus, log);

            let stdin = io::stdin();
            annotate::console::run(
                &mut annotator,
                a.n,
                &mut rng,
                &mut stdin.lock(),
                &mut io::stdout(),
            )?;
        }

        cli::Emocorpus::Replay(r) => {
            let log = CodingLog::new(&r.log_dir, &r.lang);
            let tally = annotate::replay_log(&log, &r.lang, r.log_id)?;
            let (p, r_count, n) = tally.as_tuple();
            println!("p: {}, r: {}, n: {}", p, r_count, n);
        }

        cli::Emocorpus::Prepare(p) => {
            let opts = PrepareOptions {
                since: p.since,
                size: p.size,
                seed: p.seed,
            };
            prepare::prepare(&p.src, &p.dst, &opts)?;
        }
    };
    Ok(())
}
