/*! Reports

Cross-language reports: each function runs one query over every loaded language
and packs the results into a titled [Chart], ready for a [crate::sink::Sink].
!*/
use crate::context::Context;
use crate::emoji::canonical_name;
use crate::error::Error;
use crate::sink::{Chart, Sink};
use crate::stats::{differential_ranking, CategorySet, Divergence, LangStats, Pager};

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub chart: Chart,
}

impl Report {
    pub fn render<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), Error> {
        sink.render(&self.title, &self.chart)
    }
}

fn per_lang<F>(ctx: &Context, title: String, f: F) -> Report
where
    F: Fn(&LangStats<'_>) -> f64,
{
    let bars = ctx
        .all_stats()
        .iter()
        .map(|(lang, stats)| (lang.label().to_string(), f(stats)))
        .collect();
    Report {
        title,
        chart: Chart::Bars(bars),
    }
}

pub fn prevalence(ctx: &Context) -> Report {
    per_lang(
        ctx,
        "Percent of tweets containing any emoji".to_string(),
        |s| s.prevalence(),
    )
}

pub fn specific_prevalence(ctx: &Context, target: &str) -> Report {
    per_lang(
        ctx,
        format!("Percent of tweets containing {}", target),
        |s| s.specific_prevalence(target).1,
    )
}

pub fn category_rate(ctx: &Context, category: &CategorySet) -> Report {
    per_lang(
        ctx,
        "Percent of tweets with emoji containing handshape emoji".to_string(),
        |s| s.category_rate(category),
    )
}

pub fn density(ctx: &Context) -> Report {
    per_lang(
        ctx,
        "Emoji per character in tweets containing emoji".to_string(),
        |s| s.density(),
    )
}

pub fn type_token_ratio(ctx: &Context) -> Report {
    per_lang(ctx, "Emoji type-token ratio".to_string(), |s| {
        s.type_token_ratio()
    })
}

/// One ranked chart per language.
pub fn top_k(ctx: &Context, k: usize) -> Vec<Report> {
    ctx.all_stats()
        .iter()
        .map(|(lang, stats)| Report {
            title: format!("Top {} {} Emoji", k, lang.label()),
            chart: Chart::Ranked {
                first_rank: 0,
                items: stats
                    .top_k(k)
                    .into_iter()
                    .map(|(cluster, count)| (cluster, count as f64))
                    .collect(),
            },
        })
        .collect()
}

/// Differential ranking of every loaded language, `k` clusters per page.
pub fn divergence_pager(ctx: &Context, k: usize) -> Pager<Divergence> {
    Pager::new(differential_ranking(&ctx.all_stats()), k)
}

/// Current page of `pager` as a chart. Items read `😀 en (grinning_face)`.
pub fn divergence_page(pager: &Pager<Divergence>) -> Report {
    let items = pager
        .page()
        .iter()
        .map(|d| {
            (
                format!("{} {} ({})", d.cluster, d.leader, canonical_name(&d.cluster)),
                d.divergence,
            )
        })
        .collect();
    Report {
        title: format!(
            "Most divergent emoji, page {}/{}",
            pager.page_number() + 1,
            pager.page_count().max(1)
        ),
        chart: Chart::Ranked {
            first_rank: pager.offset(),
            items,
        },
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::cache::EmojiCache;
    use crate::corpus::MemoryProvider;
    use crate::emoji::ClusterTokenizer;
    use crate::lang::Lang;

    fn context(dir: &std::path::Path) -> Context {
        let en: Lang = "en".parse().unwrap();
        let it: Lang = "it".parse().unwrap();
        let mut p = MemoryProvider::default();
        p.insert(&en, vec!["hi 😀", "plain", "😀 ❤️", "👍🏻 ok"].into_iter().collect())
            .insert(&it, vec!["ciao 🤌", "🤌🤌", "niente", "❤"].into_iter().collect());
        let mut ctx = Context::new(EmojiCache::new(dir, 100));
        ctx.load_all(&[en, it], &p, &ClusterTokenizer, false).unwrap();
        ctx
    }

    #[test]
    fn prevalence_bars() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        assert_eq!(
            prevalence(&ctx).chart,
            Chart::Bars(vec![("English".to_string(), 0.75), ("Italian".to_string(), 0.75)])
        );
    }

    #[test]
    fn handshape() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        let set: CategorySet = vec!["thumbs_up", "pinched_fingers"].into_iter().collect();
        match category_rate(&ctx, &set).chart {
            Chart::Bars(bars) => {
                assert!((bars[0].1 - 1.0 / 3.0).abs() < 1e-12);
                assert!((bars[1].1 - 2.0 / 3.0).abs() < 1e-12);
            }
            other => panic!("unexpected chart {:?}", other),
        }
    }

    #[test]
    fn top_per_lang() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        let reports = top_k(&ctx, 1);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].title, "Top 1 Italian Emoji");
        assert_eq!(
            reports[1].chart,
            Chart::Ranked {
                first_rank: 0,
                items: vec![("🤌".to_string(), 2.0)]
            }
        );
    }

    #[test]
    fn divergence_pages() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        let mut pager = divergence_pager(&ctx, 2);
        // 😀 (.67, en), 🤌 (.67, it), 👍🏻 (.33), ❤️ (0)
        let first = divergence_page(&pager);
        pager.next_page();
        let second = divergence_page(&pager);
        pager.next_page();
        assert_eq!(divergence_page(&pager), first);

        match (first.chart, second.chart) {
            (
                Chart::Ranked { items: a, first_rank: 0 },
                Chart::Ranked { items: b, first_rank: 2 },
            ) => {
                assert!(a[0].0.starts_with("😀 en"));
                assert!(a[1].0.starts_with("🤌 it"));
                assert!(b[0].0.starts_with("👍🏻 en"));
                assert_eq!(b[1].1, 0.0);
            }
            other => panic!("unexpected charts {:?}", other),
        }
    }
}
