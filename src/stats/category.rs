//! Emoji categories.
//!
//! A category is a set of canonical names (see [crate::emoji::canonical_name]).
//! The handshape category is read from a one-row CSV file:
//!
//! ```text
//! waving_hand,raised_back_of_hand,OK_hand,pinched_fingers,thumbs_up,...
//! ```
use std::collections::HashSet;
use std::path::Path;

use log::{info, warn};

use crate::emoji::strip_skin_tone;
use crate::error::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet(HashSet<String>);

impl CategorySet {
    /// Reads the first row of `path`.
    ///
    /// Returns `None` (and warns) if the file does not exist.
    pub fn from_path(path: &Path) -> Result<Option<Self>, Error> {
        if !path.exists() {
            warn!("category file {:?} not found", path);
            return Ok(None);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let set: Self = match reader.records().next() {
            Some(row) => row?.iter().collect(),
            None => Self::default(),
        };

        if set.is_empty() {
            warn!("category file {:?} is empty", path);
        } else {
            info!("loaded {} names from {:?}", set.len(), path);
        }
        Ok(Some(set))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CategorySet {
    /// Names are trimmed and skin tones removed. Empty names are skipped.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|name| strip_skin_tone(name.as_ref().trim()))
                .filter(|name| !name.is_empty())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("handshape_emoji.csv");
        std::fs::write(&path, "thumbs_up, OK_hand,waving_hand_dark_skin_tone,\nignored\n").unwrap();

        let set = CategorySet::from_path(&path).unwrap().unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("thumbs_up"));
        assert!(set.contains("OK_hand"));
        assert!(set.contains("waving_hand"));
        assert!(!set.contains("ignored"));
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        assert_eq!(
            CategorySet::from_path(&dir.path().join("nope.csv")).unwrap(),
            None
        );
    }

    #[test]
    fn empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "").unwrap();
        assert!(CategorySet::from_path(&path).unwrap().unwrap().is_empty());
    }
}
