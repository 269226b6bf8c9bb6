use std::path::Path;

use emocorpus::annotate::{replay_log, CodingLog, LabelTally};
use emocorpus::cache::{CacheFile, EmojiCache, EmojiIndex, IndexEntry, Lookup, Origin};
use emocorpus::context::Context;
use emocorpus::corpus::{CorpusProvider, FileProvider};
use emocorpus::emoji::ClusterTokenizer;
use emocorpus::lang::Lang;
use emocorpus::report;
use emocorpus::sink::Chart;
use emocorpus::stats::CategorySet;
use tempfile::tempdir;

fn write_corpora(dir: &Path) {
    std::fs::write(
        dir.join("en.jsonl"),
        concat!(
            r#"{"tweet": "good morning 😀"}"#,
            "\n",
            r#"{"tweet": "no emoji in this one"}"#,
            "\n",
            r#"{"tweet": "😀 love it ❤️ 😀"}"#,
            "\n",
        ),
    )
    .unwrap();
    std::fs::write(
        dir.join("it.txt"),
        "buongiorno 👍🏻\nche dici 🤌🤌\nniente\nforza 🇮🇹\n",
    )
    .unwrap();
}

fn langs() -> (Lang, Lang) {
    ("en".parse().unwrap(), "it".parse().unwrap())
}

#[test_log::test]
fn english_scenario() {
    let dir = tempdir().unwrap();
    write_corpora(dir.path());
    let (en, _) = langs();

    let mut ctx = Context::new(EmojiCache::new(dir.path(), 3));
    ctx.load(&en, &FileProvider::new(dir.path()), &ClusterTokenizer)
        .unwrap();

    let expected = EmojiIndex::from_entries(vec![
        IndexEntry::new(vec!["😀".to_string()], 0),
        IndexEntry::new(
            vec!["😀".to_string(), "❤️".to_string(), "😀".to_string()],
            2,
        ),
    ])
    .unwrap();
    assert_eq!(ctx.data(&en).unwrap().index, expected);

    let stats = ctx.stats(&en).unwrap();
    assert!((stats.prevalence() - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(stats.top_k(1), vec![("😀".to_string(), 2)]);
    // 2 distinct clusters over 4 occurrences
    assert_eq!(stats.type_token_ratio(), 0.5);
}

#[test_log::test]
fn build_or_load_is_idempotent() {
    let dir = tempdir().unwrap();
    write_corpora(dir.path());
    let (en, it) = langs();
    let provider = FileProvider::new(dir.path());
    let cache_dir = dir.path().join("cache");

    let mut first = Context::new(EmojiCache::new(&cache_dir, 500_000));
    first
        .load_all(&[en.clone(), it.clone()], &provider, &ClusterTokenizer, true)
        .unwrap();

    let mut second = Context::new(EmojiCache::new(&cache_dir, 500_000));
    second
        .load_all(&[en.clone(), it.clone()], &provider, &ClusterTokenizer, false)
        .unwrap();

    for lang in [&en, &it] {
        let a = first.data(lang).unwrap();
        let b = second.data(lang).unwrap();
        assert_eq!(a.origin, Origin::Built { saved: true });
        assert_eq!(b.origin, Origin::Loaded);
        assert_eq!(a.index, b.index);

        // the file on disk decodes to the same index
        let file = CacheFile::new(&cache_dir.join(format!("{}_emoji.csv", lang)));
        assert_eq!(file.read().unwrap(), Lookup::Found(a.index.clone()));
    }
}

#[test_log::test]
fn cross_language_reports() {
    let dir = tempdir().unwrap();
    write_corpora(dir.path());
    let (en, it) = langs();
    let provider = FileProvider::new(dir.path());
    assert_eq!(provider.length(&it).unwrap(), 4);

    let mut ctx = Context::new(EmojiCache::new(dir.path(), 500_000));
    ctx.load_all(&[en, it], &provider, &ClusterTokenizer, false)
        .unwrap();

    match report::prevalence(&ctx).chart {
        Chart::Bars(bars) => {
            for (_, v) in &bars {
                assert!((0.0..=1.0).contains(v));
            }
            assert_eq!(bars[1], ("Italian".to_string(), 0.75));
        }
        other => panic!("unexpected chart {:?}", other),
    }

    let handshapes: CategorySet = vec!["thumbs_up", "pinched_fingers"].into_iter().collect();
    assert_eq!(
        report::category_rate(&ctx, &handshapes).chart,
        Chart::Bars(vec![
            ("English".to_string(), 0.0),
            ("Italian".to_string(), 2.0 / 3.0)
        ])
    );

    let mut pager = report::divergence_pager(&ctx, 2);
    let first_page = pager.page().to_vec();
    assert_eq!(first_page[0].cluster, "😀");
    assert_eq!(first_page[0].divergence, 1.0);
    for _ in 0..pager.page_count() {
        pager.next_page();
    }
    assert_eq!(pager.page(), first_page.as_slice());
}

#[test_log::test]
fn replay_missing_log_is_zero() {
    let dir = tempdir().unwrap();
    let (en, _) = langs();
    let log = CodingLog::new(&dir.path().join("coding"), &en);
    assert_eq!(replay_log(&log, &en, 3).unwrap(), LabelTally::default());
}
