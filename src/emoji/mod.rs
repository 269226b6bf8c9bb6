/*! Emoji clusters

Turns raw text into the ordered list of emoji clusters it contains,
and maps clusters to their canonical textual name.

- [Tokenize] is implemented by anything able to split a record into clusters. [ClusterTokenizer] is the default one.
- [canonical_name] gives the skin-tone-free name used by category filters (`👍🏽` -> `thumbs_up`).
!*/
mod cluster;
mod name;

pub use cluster::{is_emoji, ClusterTokenizer, Tokenize};
pub use name::{canonical_name, strip_skin_tone};
