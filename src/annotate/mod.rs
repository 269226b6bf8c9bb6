/*! Manual coding

Human labelling of sampled emoji tweets.

- [Annotator] is the session state machine: [Annotator::start] draws samples, [Annotator::handle] takes one label input at a time, [Annotator::finish] writes the log and returns the tally. [Annotator::replay] recomputes a tally from an existing log.
- [CodingLog] manages the numbered per-language log files.
- [console] drives an [Annotator] from a line reader (stdin in the binary).

Labels are strings over the `{p, r, n}` alphabet, a tweet may get several (`"pr"`).
!*/
mod coding_log;
pub mod console;
mod label;
mod session;

pub use coding_log::CodingLog;
pub use label::{Label, LabelTally};
pub use session::{replay_log, Annotator, Finished, Prompt, Round, Sample, State, Step};
