//! Per-language statistics.
use std::collections::HashSet;

use log::warn;

use super::category::CategorySet;
use super::counter::OrderedCounter;
use crate::cache::{EmojiIndex, IndexEntry};
use crate::corpus::Corpus;
use crate::emoji::{canonical_name, is_emoji};

/// Read-only view over a language's index and corpus.
#[derive(Debug, Clone, Copy)]
pub struct LangStats<'a> {
    index: &'a EmojiIndex,
    corpus: &'a Corpus,
    size: usize,
}

/// Distinct clusters of an entry, in order of appearance.
fn unique_clusters(entry: &IndexEntry) -> Vec<&str> {
    let mut seen = HashSet::new();
    entry
        .clusters()
        .iter()
        .map(String::as_str)
        .filter(|c| seen.insert(*c))
        .collect()
}

fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

impl<'a> LangStats<'a> {
    /// `size` is the scan bound the index was built with.
    pub fn new(index: &'a EmojiIndex, corpus: &'a Corpus, size: usize) -> Self {
        Self {
            index,
            corpus,
            size,
        }
    }

    pub fn index(&self) -> &'a EmojiIndex {
        self.index
    }

    /// Number of records the index covers: the scan bound, clamped to the corpus length.
    pub fn scanned(&self) -> usize {
        self.size.min(self.corpus.len())
    }

    /// Fraction of scanned tweets holding at least one emoji.
    pub fn prevalence(&self) -> f64 {
        let scanned = self.scanned();
        let with_emoji = self
            .index
            .iter()
            .take_while(|e| e.tweet_index() < scanned)
            .count();
        ratio(with_emoji as f64, scanned as f64)
    }

    /// Number and fraction of emoji tweets that contain `target`.
    ///
    /// `target` should be a single emoji cluster. Anything else is reported,
    /// then matched literally.
    pub fn specific_prevalence(&self, target: &str) -> (usize, f64) {
        if !is_emoji(target) {
            warn!("{:?} is not a single emoji cluster", target);
        }
        let count = self.index.iter().filter(|e| e.contains(target)).count();
        (count, ratio(count as f64, self.index.len() as f64))
    }

    /// Number of tweets each cluster appears in, in first-seen order.
    pub fn tweet_counts(&self) -> OrderedCounter {
        let mut counter = OrderedCounter::default();
        for entry in self.index {
            for cluster in unique_clusters(entry) {
                counter.add(cluster);
            }
        }
        counter
    }

    /// `k` clusters appearing in the most tweets.
    ///
    /// A tweet counts once per cluster, however many times it repeats it.
    pub fn top_k(&self, k: usize) -> Vec<(String, u64)> {
        self.tweet_counts().most_common(k)
    }

    /// Fraction of emoji tweets with at least one cluster whose canonical name is in `category`.
    pub fn category_rate(&self, category: &CategorySet) -> f64 {
        let matching = self
            .index
            .iter()
            .filter(|entry| {
                unique_clusters(entry)
                    .into_iter()
                    .any(|c| category.contains(&canonical_name(c)))
            })
            .count();
        ratio(matching as f64, self.index.len() as f64)
    }

    /// Emoji per character, over tweets holding emoji.
    ///
    /// Characters are Unicode scalar values. Entries pointing outside of the corpus are skipped.
    pub fn density(&self) -> f64 {
        let (emoji, chars) = self
            .index
            .iter()
            .filter_map(|e| {
                self.corpus
                    .get(e.tweet_index())
                    .map(|text| (e.clusters().len(), text.chars().count()))
            })
            .fold((0usize, 0usize), |(emoji, chars), (e, c)| (emoji + e, chars + c));
        ratio(emoji as f64, chars as f64)
    }

    /// Distinct clusters over cluster occurrences.
    pub fn type_token_ratio(&self) -> f64 {
        let mut counter = OrderedCounter::default();
        for cluster in self.index.iter().flat_map(|e| e.clusters()) {
            counter.add(cluster);
        }
        ratio(counter.len() as f64, counter.total() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(clusters: &[&str], idx: usize) -> IndexEntry {
        IndexEntry::new(clusters.iter().map(|c| c.to_string()).collect(), idx)
    }

    fn english() -> (EmojiIndex, Corpus) {
        let index =
            EmojiIndex::from_entries(vec![entry(&["😀"], 0), entry(&["😀", "❤️"], 2)]).unwrap();
        let corpus = vec!["hi 😀", "nothing", "😀❤️"].into_iter().collect();
        (index, corpus)
    }

    #[test]
    fn scenario() {
        let (index, corpus) = english();
        let s = LangStats::new(&index, &corpus, 3);

        assert!((s.prevalence() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(s.top_k(1), vec![("😀".to_string(), 2)]);
        assert!((s.type_token_ratio() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn prevalence_clamped_to_corpus() {
        let (index, corpus) = english();
        let s = LangStats::new(&index, &corpus, 500_000);
        assert_eq!(s.scanned(), 3);
        assert!((s.prevalence() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn prevalence_ignores_entries_past_bound() {
        let (index, corpus) = english();
        let s = LangStats::new(&index, &corpus, 2);
        assert!((s.prevalence() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn prevalence_empty() {
        let index = EmojiIndex::default();
        let corpus = Corpus::default();
        let s = LangStats::new(&index, &corpus, 10);
        assert_eq!(s.prevalence(), 0.0);
        assert_eq!(s.type_token_ratio(), 0.0);
        assert_eq!(s.density(), 0.0);
        assert_eq!(s.specific_prevalence("😀"), (0, 0.0));
    }

    #[test]
    fn top_k_dedups_within_tweet() {
        let index = EmojiIndex::from_entries(vec![
            entry(&["🎉", "🎉", "🎉"], 0),
            entry(&["😀"], 1),
            entry(&["😀"], 2),
        ])
        .unwrap();
        let corpus = Corpus::default();
        let s = LangStats::new(&index, &corpus, 3);
        assert_eq!(
            s.top_k(5),
            vec![("😀".to_string(), 2), ("🎉".to_string(), 1)]
        );
    }

    #[test]
    fn top_k_ties_first_seen() {
        let index = EmojiIndex::from_entries(vec![
            entry(&["🎉", "😀"], 0),
            entry(&["😀", "🎉", "🔥"], 1),
        ])
        .unwrap();
        let corpus = Corpus::default();
        let s = LangStats::new(&index, &corpus, 2);
        let top: Vec<String> = s.top_k(3).into_iter().map(|(c, _)| c).collect();
        assert_eq!(top, vec!["🎉", "😀", "🔥"]);
    }

    #[test]
    fn specific() {
        let (index, corpus) = english();
        let s = LangStats::new(&index, &corpus, 3);
        assert_eq!(s.specific_prevalence("❤️"), (1, 0.5));
        assert_eq!(s.specific_prevalence("😀"), (2, 1.0));
        // not an emoji: reported, still computed
        assert_eq!(s.specific_prevalence("abc"), (0, 0.0));
    }

    #[test]
    fn category_strips_skin_tone() {
        let index = EmojiIndex::from_entries(vec![
            entry(&["👍🏻"], 0),
            entry(&["😀"], 1),
        ])
        .unwrap();
        let corpus = Corpus::default();
        let s = LangStats::new(&index, &corpus, 2);
        let set: CategorySet = vec!["thumbs_up"].into_iter().collect();
        assert_eq!(s.category_rate(&set), 0.5);
    }

    #[test]
    fn density() {
        let index = EmojiIndex::from_entries(vec![entry(&["😀"], 0), entry(&["😀", "🎉"], 2)])
            .unwrap();
        // 4 chars + 2 chars
        let corpus = vec!["abc😀", "nothing here", "😀🎉"].into_iter().collect();
        let s = LangStats::new(&index, &corpus, 3);
        assert_eq!(s.density(), 0.5);
    }
}
