/*! Emoji index cache

Extraction over a full corpus is slow, so its result is kept on disk and reused.

- [EmojiIndex] is the per-language result: for each tweet holding at least one emoji, its clusters and position in the corpus.
- [CacheFile] reads and writes an [EmojiIndex] (`<lang>_emoji.csv`).
- [EmojiCache] decides between the two: load if a file exists, scan and save otherwise.
!*/
mod builder;
mod file;
mod index;

pub use builder::{Cached, EmojiCache, LogProgress, NoProgress, Origin, Progress};
pub use file::{CacheFile, Lookup};
pub use index::{EmojiIndex, IndexEntry};
