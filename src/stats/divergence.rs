//! Cross-language differential ranking.
//!
//! For each cluster seen in any language, compute its per-language prevalence
//! (tweets containing it / emoji tweets), then the spread between the highest
//! and lowest prevalence. Clusters are ranked by decreasing spread.
use log::debug;

use super::aggregate::LangStats;
use super::counter::OrderedCounter;
use crate::lang::Lang;

#[derive(Debug, Clone, PartialEq)]
pub struct Divergence {
    pub cluster: String,
    /// max - min prevalence across languages.
    pub divergence: f64,
    /// Language with the highest prevalence (first one on ties).
    pub leader: Lang,
    /// Prevalence per language, in the order languages were given.
    pub prevalences: Vec<f64>,
}

/// Rank every cluster seen in `langs` by prevalence divergence.
///
/// Clusters missing from a language have a prevalence of 0 there.
/// Equal divergences keep the order in which clusters were first seen,
/// languages taken in the given order.
pub fn differential_ranking(langs: &[(Lang, LangStats<'_>)]) -> Vec<Divergence> {
    if langs.is_empty() {
        return Vec::new();
    }

    let counts: Vec<(OrderedCounter, usize)> = langs
        .iter()
        .map(|(_, stats)| (stats.tweet_counts(), stats.index().len()))
        .collect();

    let mut union = OrderedCounter::default();
    for (counter, _) in &counts {
        for cluster in counter.keys() {
            union.touch(cluster);
        }
    }
    debug!("{} distinct clusters over {} languages", union.len(), langs.len());

    let mut ranking: Vec<Divergence> = union
        .keys()
        .map(|cluster| {
            let prevalences: Vec<f64> = counts
                .iter()
                .map(|(counter, total)| {
                    if *total == 0 {
                        0.0
                    } else {
                        counter.get(cluster) as f64 / *total as f64
                    }
                })
                .collect();

            let (leader, max) = prevalences.iter().enumerate().fold(
                (0, f64::MIN),
                |(best, max), (i, p)| if *p > max { (i, *p) } else { (best, max) },
            );
            let min = prevalences.iter().copied().fold(f64::MAX, f64::min);

            Divergence {
                cluster: cluster.to_string(),
                divergence: max - min,
                leader: langs[leader].0.clone(),
                prevalences,
            }
        })
        .collect();

    // stable: ties keep union order
    ranking.sort_by(|a, b| b.divergence.total_cmp(&a.divergence));
    ranking
}

/// Fixed-size pages over a ranked list.
///
/// Moving past the last page wraps back to the first one.
#[derive(Debug, Clone)]
pub struct Pager<T> {
    items: Vec<T>,
    page_size: usize,
    offset: usize,
}

impl<T> Pager<T> {
    /// A `page_size` of 0 is treated as 1.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            offset: 0,
        }
    }

    /// Current page.
    pub fn page(&self) -> &[T] {
        let end = (self.offset + self.page_size).min(self.items.len());
        &self.items[self.offset.min(end)..end]
    }

    /// Rank of the first item of the current page.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_number(&self) -> usize {
        self.offset / self.page_size
    }

    pub fn page_count(&self) -> usize {
        (self.items.len() + self.page_size - 1) / self.page_size
    }

    /// Moves to the next page, wrapping to the first one, and returns it.
    pub fn next_page(&mut self) -> &[T] {
        self.offset += self.page_size;
        if self.offset >= self.items.len() {
            self.offset = 0;
        }
        self.page()
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{EmojiIndex, IndexEntry};
    use crate::corpus::Corpus;

    fn index(entries: &[&[&str]]) -> EmojiIndex {
        EmojiIndex::from_entries(
            entries
                .iter()
                .enumerate()
                .map(|(i, e)| IndexEntry::new(e.iter().map(|c| c.to_string()).collect(), i))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn ranks_by_spread() {
        let en_idx = index(&[&["😀"], &["😀", "❤️"], &["🔥"], &["😀"]]);
        let it_idx = index(&[&["❤️"], &["❤️"], &["🇮🇹", "😀"], &["❤️"]]);
        let corpus = Corpus::default();
        let en: Lang = "en".parse().unwrap();
        let it: Lang = "it".parse().unwrap();

        let langs = vec![
            (en.clone(), LangStats::new(&en_idx, &corpus, 4)),
            (it.clone(), LangStats::new(&it_idx, &corpus, 4)),
        ];
        let ranking = differential_ranking(&langs);
        let clusters: Vec<&str> = ranking.iter().map(|d| d.cluster.as_str()).collect();

        // 😀: .75 vs .25, ❤️: .25 vs .75, 🔥: .25 vs 0, 🇮🇹: 0 vs .25
        assert_eq!(clusters, vec!["😀", "❤️", "🔥", "🇮🇹"]);
        assert_eq!(ranking[0].leader, en);
        assert_eq!(ranking[1].leader, it);
        assert_eq!(ranking[3].leader, it);
        assert_eq!(ranking[0].divergence, 0.5);
        assert_eq!(ranking[2].prevalences, vec![0.25, 0.0]);
    }

    #[test]
    fn deterministic() {
        let a = index(&[&["😀", "🎉"], &["🔥"]]);
        let b = index(&[&["🎉"], &["🌹", "😀"]]);
        let corpus = Corpus::default();
        let langs = vec![
            ("en".parse().unwrap(), LangStats::new(&a, &corpus, 2)),
            ("it".parse().unwrap(), LangStats::new(&b, &corpus, 2)),
        ];
        let first = differential_ranking(&langs);
        for _ in 0..5 {
            assert_eq!(differential_ranking(&langs), first);
        }
    }

    #[test]
    fn single_language_has_no_spread() {
        let a = index(&[&["😀"]]);
        let corpus = Corpus::default();
        let langs = vec![("en".parse().unwrap(), LangStats::new(&a, &corpus, 1))];
        let ranking = differential_ranking(&langs);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].divergence, 0.0);
    }

    #[test]
    fn no_language() {
        assert!(differential_ranking(&[]).is_empty());
    }

    #[test]
    fn pager_wraps() {
        let mut p = Pager::new((0..5).collect::<Vec<u32>>(), 2);
        assert_eq!(p.page(), &[0, 1]);
        assert_eq!(p.page_count(), 3);
        assert_eq!(p.next_page(), &[2, 3]);
        assert_eq!(p.next_page(), &[4]);
        assert_eq!(p.page_number(), 2);
        assert_eq!(p.next_page(), &[0, 1]);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn pager_exact_fit_and_empty() {
        let mut p = Pager::new(vec!['a', 'b'], 2);
        assert_eq!(p.next_page(), &['a', 'b']);

        let mut empty: Pager<char> = Pager::new(vec![], 3);
        assert!(empty.page().is_empty());
        assert!(empty.next_page().is_empty());
        assert_eq!(empty.page_count(), 0);
    }
}
