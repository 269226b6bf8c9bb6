use criterion::{black_box, criterion_group, criterion_main, Criterion};
use emocorpus::cache::{EmojiIndex, IndexEntry};
use emocorpus::corpus::Corpus;
use emocorpus::emoji::{ClusterTokenizer, Tokenize};
use emocorpus::stats::LangStats;

pub fn tokenizer_benchmark(c: &mut Criterion) {
    let tokenizer = ClusterTokenizer;
    let plain = "This is a completely innocent phrase, with no emoji at all in it. ".repeat(8);
    let mixed = "ciao 👋🏽 ci vediamo stasera 🍕🍕 alle 8️⃣? 👨‍👩‍👧 🇮🇹 ❤ grazie 🙏 ".repeat(8);

    c.bench_function("tokenize plain", |b| {
        b.iter(|| tokenizer.tokenize(black_box(&plain)))
    });
    c.bench_function("tokenize mixed", |b| {
        b.iter(|| tokenizer.tokenize(black_box(&mixed)))
    });
}

pub fn stats_benchmark(c: &mut Criterion) {
    let tokenizer = ClusterTokenizer;
    let corpus: Corpus = (0..10_000)
        .map(|i| match i % 3 {
            0 => "nothing to see here".to_string(),
            1 => format!("tweet {} 😀🎉", i),
            _ => format!("tweet {} 👍🏻 ❤️ 😀", i),
        })
        .collect();
    let entries = corpus
        .iter()
        .enumerate()
        .filter_map(|(i, t)| {
            let clusters = tokenizer.tokenize(t);
            (!clusters.is_empty()).then(|| IndexEntry::new(clusters, i))
        })
        .collect();
    let index = EmojiIndex::from_entries(entries).unwrap();
    let stats = LangStats::new(&index, &corpus, corpus.len());

    c.bench_function("top_k", |b| b.iter(|| stats.top_k(black_box(10))));
    c.bench_function("type_token_ratio", |b| b.iter(|| stats.type_token_ratio()));
}

criterion_group!(benches, tokenizer_benchmark, stats_benchmark);
criterion_main!(benches);
