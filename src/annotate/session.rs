//! Annotation session state machine.
//!
//! ```text
//! Idle --start--> Sampling --handle(label)...--> Sampling --finish--> Idle
//! Idle --replay--> Replaying --> Idle
//! ```
use log::{error, info, warn};
use rand::Rng;

use super::coding_log::CodingLog;
use super::label::{Label, LabelTally};
use crate::cache::EmojiIndex;
use crate::corpus::Corpus;
use crate::error::Error;
use crate::lang::Lang;

/// A drawn tweet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub tweet_index: usize,
    pub text: String,
}

/// What to show to the annotator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// 1-based position in the session.
    pub number: usize,
    pub total: usize,
    pub tweet_index: usize,
    pub text: String,
}

/// Outcome of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Label the prompted tweet.
    Prompt(Prompt),
    /// The input was not a valid label string; the same tweet is prompted again.
    Rejected { input: String, prompt: Prompt },
    /// Every sample was labelled, call [Annotator::finish].
    Done,
}

/// Ongoing sampling round.
#[derive(Debug, Clone, Default)]
pub struct Round {
    samples: Vec<Sample>,
    position: usize,
    accepted: Vec<(String, String)>,
    tally: LabelTally,
}

impl Round {
    fn prompt(&self) -> Option<Prompt> {
        self.samples.get(self.position).map(|s| Prompt {
            number: self.position + 1,
            total: self.samples.len(),
            tweet_index: s.tweet_index,
            text: s.text.clone(),
        })
    }

    fn step(&self) -> Step {
        self.prompt().map(Step::Prompt).unwrap_or(Step::Done)
    }

    pub fn tally(&self) -> &LabelTally {
        &self.tally
    }

    pub fn remaining(&self) -> usize {
        self.samples.len() - self.position
    }
}

#[derive(Debug, Clone)]
pub enum State {
    Idle,
    Sampling(Round),
    Replaying,
}

/// Result of a finished sampling round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finished {
    pub tally: LabelTally,
    /// Id of the written log, `None` if nothing was written.
    pub log_id: Option<usize>,
}

pub struct Annotator<'a> {
    lang: Lang,
    index: &'a EmojiIndex,
    corpus: &'a Corpus,
    log: CodingLog,
    state: State,
}

impl<'a> Annotator<'a> {
    pub fn new(lang: &Lang, index: &'a EmojiIndex, corpus: &'a Corpus, log: CodingLog) -> Self {
        Self {
            lang: lang.clone(),
            index,
            corpus,
            log,
            state: State::Idle,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Draws `n` entries uniformly, with replacement.
    pub fn draw<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<Sample> {
        if self.index.is_empty() {
            return Vec::new();
        }
        (0..n)
            .filter_map(|_| self.index.get(rng.gen_range(0..self.index.len())))
            .map(|entry| {
                let text = self.corpus.get(entry.tweet_index()).unwrap_or_else(|| {
                    warn!(
                        "[{}] tweet {} is not in the corpus",
                        self.lang,
                        entry.tweet_index()
                    );
                    ""
                });
                Sample {
                    tweet_index: entry.tweet_index(),
                    text: text.to_string(),
                }
            })
            .collect()
    }

    /// Starts a round of `n` samples. Only valid when idle.
    pub fn start<R: Rng>(&mut self, n: usize, rng: &mut R) -> Result<Step, Error> {
        if !matches!(self.state, State::Idle) {
            return Err(Error::InvalidState(
                "a sampling round is already running".to_string(),
            ));
        }
        if self.index.is_empty() {
            warn!("[{}] no emoji tweet to sample from", self.lang);
        }

        let round = Round {
            samples: self.draw(n, rng),
            ..Default::default()
        };
        info!("[{}] sampling {} tweets", self.lang, round.samples.len());
        let step = round.step();
        self.state = State::Sampling(round);
        Ok(step)
    }

    /// Handles one line of label input for the current sample.
    pub fn handle(&mut self, input: &str) -> Result<Step, Error> {
        let round = match &mut self.state {
            State::Sampling(round) => round,
            _ => return Err(Error::InvalidState("no sampling round".to_string())),
        };
        let prompt = match round.prompt() {
            Some(p) => p,
            None => return Ok(Step::Done),
        };

        let input = input.trim();
        match Label::parse_all(input) {
            Ok(labels) => {
                round.tally.add_all(&labels);
                round.accepted.push((prompt.text, input.to_string()));
                round.position += 1;
                Ok(round.step())
            }
            Err(bad) => {
                match bad {
                    Some(c) => warn!("rejected {:?}: {:?} is not one of p, r, n", input, c),
                    None => warn!("rejected empty label"),
                }
                Ok(Step::Rejected {
                    input: input.to_string(),
                    prompt,
                })
            }
        }
    }

    /// Ends the round, even if samples remain, and writes accepted labels to a new log.
    pub fn finish(&mut self) -> Result<Finished, Error> {
        let round = match std::mem::replace(&mut self.state, State::Idle) {
            State::Sampling(round) => round,
            other => {
                self.state = other;
                return Err(Error::InvalidState("no sampling round".to_string()));
            }
        };

        if round.remaining() > 0 {
            warn!(
                "[{}] round ended with {} unlabelled samples",
                self.lang,
                round.remaining()
            );
        }

        let log_id = if round.accepted.is_empty() {
            warn!("[{}] nothing labelled, no log written", self.lang);
            None
        } else {
            match self.log.write_new(&round.accepted) {
                Ok(id) => Some(id),
                Err(e) => {
                    error!("[{}] could not write coding log: {}", self.lang, e);
                    None
                }
            }
        };

        Ok(Finished {
            tally: round.tally,
            log_id,
        })
    }

    /// Recomputes the tally of an existing log. A missing log gives an empty tally.
    pub fn replay(&mut self, log_id: usize) -> Result<LabelTally, Error> {
        if !matches!(self.state, State::Idle) {
            return Err(Error::InvalidState(
                "cannot replay during a sampling round".to_string(),
            ));
        }
        self.state = State::Replaying;
        let result = replay_log(&self.log, &self.lang, log_id);
        self.state = State::Idle;
        result
    }
}

/// Tally of log `log_id`, without any prompting.
pub fn replay_log(log: &CodingLog, lang: &Lang, log_id: usize) -> Result<LabelTally, Error> {
    let mut tally = LabelTally::default();
    let rows = match log.read(log_id)? {
        Some(rows) => rows,
        None => {
            warn!("[{}] coding log {:?} not found", lang, log.path(log_id));
            return Ok(tally);
        }
    };

    for (_, labels) in &rows {
        for c in labels.chars() {
            match Label::try_from(c) {
                Ok(label) => tally.add(label),
                Err(c) => warn!("[{}] skipping unknown label {:?}", lang, c),
            }
        }
    }
    info!("[{}] replayed {} rows from log {}", lang, rows.len(), log_id);
    Ok(tally)
}
