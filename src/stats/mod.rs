/*! Aggregation engine

Read-only statistics over cached emoji indices.

- [LangStats] answers per-language queries (prevalence, top emoji, density...).
- [differential_ranking] compares languages cluster by cluster and returns a [Pager] over the most divergent clusters.
- [CategorySet] is a set of canonical emoji names used as a semantic filter (handshapes).
!*/
mod aggregate;
mod category;
mod counter;
mod divergence;

pub use aggregate::LangStats;
pub use category::CategorySet;
pub use counter::OrderedCounter;
pub use divergence::{differential_ranking, Divergence, Pager};
