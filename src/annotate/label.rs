//! Labels and tallies.
use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    P,
    R,
    N,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::P, Label::R, Label::N];

    pub fn as_char(&self) -> char {
        match self {
            Label::P => 'p',
            Label::R => 'r',
            Label::N => 'n',
        }
    }

    /// Parses a whole label string. Fails on empty input or on any
    /// character outside of the alphabet, returning the first offending one.
    pub fn parse_all(input: &str) -> Result<Vec<Label>, Option<char>> {
        if input.is_empty() {
            return Err(None);
        }
        input
            .chars()
            .map(|c| Label::try_from(c).map_err(Some))
            .collect()
    }
}

impl TryFrom<char> for Label {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'p' => Ok(Label::P),
            'r' => Ok(Label::R),
            'n' => Ok(Label::N),
            other => Err(other),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Per-label counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelTally {
    pub p: u64,
    pub r: u64,
    pub n: u64,
}

impl LabelTally {
    pub fn add(&mut self, label: Label) {
        match label {
            Label::P => self.p += 1,
            Label::R => self.r += 1,
            Label::N => self.n += 1,
        }
    }

    pub fn add_all(&mut self, labels: &[Label]) {
        labels.iter().for_each(|l| self.add(*l));
    }

    pub fn get(&self, label: Label) -> u64 {
        match label {
            Label::P => self.p,
            Label::R => self.r,
            Label::N => self.n,
        }
    }

    pub fn as_tuple(&self) -> (u64, u64, u64) {
        (self.p, self.r, self.n)
    }

    pub fn total(&self) -> u64 {
        self.p + self.r + self.n
    }

    /// (label, count) pairs, for charts.
    pub fn pairs(&self) -> Vec<(String, f64)> {
        Label::ALL
            .iter()
            .map(|l| (l.to_string(), self.get(*l) as f64))
            .collect()
    }
}
