//! Emoji index.
use crate::error::Error;

/// Clusters of a single tweet, and the position of the tweet in its corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    clusters: Vec<String>,
    tweet_index: usize,
}

impl IndexEntry {
    pub fn new(clusters: Vec<String>, tweet_index: usize) -> Self {
        Self {
            clusters,
            tweet_index,
        }
    }

    pub fn clusters(&self) -> &[String] {
        &self.clusters
    }

    pub fn tweet_index(&self) -> usize {
        self.tweet_index
    }

    pub fn contains(&self, cluster: &str) -> bool {
        self.clusters.iter().any(|c| c == cluster)
    }
}

/// Ordered list of [IndexEntry] for a language.
///
/// Entries are sorted by strictly ascending `tweet_index` and never hold an empty cluster list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiIndex {
    entries: Vec<IndexEntry>,
}

impl EmojiIndex {
    /// Builds an index, checking ordering and non-emptiness.
    pub fn from_entries(entries: Vec<IndexEntry>) -> Result<Self, Error> {
        let mut index = Self::default();
        for entry in entries {
            index.push(entry)?;
        }
        Ok(index)
    }

    /// Appends an entry. Fails if it would break the index invariants.
    pub fn push(&mut self, entry: IndexEntry) -> Result<(), Error> {
        if entry.clusters.is_empty() {
            return Err(Error::Custom(format!(
                "empty entry for tweet {}",
                entry.tweet_index
            )));
        }
        if let Some(last) = self.entries.last() {
            if last.tweet_index >= entry.tweet_index {
                return Err(Error::Custom(format!(
                    "tweet {} comes after tweet {}",
                    entry.tweet_index, last.tweet_index
                )));
            }
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    pub fn get(&self, position: usize) -> Option<&IndexEntry> {
        self.entries.get(position)
    }
}

impl<'a> IntoIterator for &'a EmojiIndex {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(clusters: &[&str], idx: usize) -> IndexEntry {
        IndexEntry::new(clusters.iter().map(|c| c.to_string()).collect(), idx)
    }

    #[test]
    fn ordered() {
        let idx = EmojiIndex::from_entries(vec![entry(&["😀"], 0), entry(&["🎉"], 4)]).unwrap();
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.get(1).unwrap().tweet_index(), 4);
    }

    #[test]
    fn unordered_rejected() {
        assert!(EmojiIndex::from_entries(vec![entry(&["😀"], 3), entry(&["🎉"], 1)]).is_err());
        assert!(EmojiIndex::from_entries(vec![entry(&["😀"], 3), entry(&["🎉"], 3)]).is_err());
    }

    #[test]
    fn empty_entry_rejected() {
        let mut idx = EmojiIndex::default();
        assert!(idx.push(entry(&[], 0)).is_err());
        assert!(idx.is_empty());
    }

    #[test]
    fn contains() {
        let e = entry(&["😀", "❤️"], 0);
        assert!(e.contains("❤️"));
        assert!(!e.contains("❤"));
    }
}
