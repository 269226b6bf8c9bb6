//! Line-based driver for an [Annotator].
//!
//! Reads one label string per line. End of input finishes the round early.
use std::io::{BufRead, Write};

use rand::Rng;

use super::session::{Annotator, Finished, Prompt, Step};
use crate::error::Error;

fn show<W: Write>(output: &mut W, prompt: &Prompt) -> Result<(), Error> {
    writeln!(
        output,
        "\n[{}/{}] tweet {}\n{}\nlabels (p/r/n)> ",
        prompt.number, prompt.total, prompt.tweet_index, prompt.text
    )?;
    output.flush()?;
    Ok(())
}

/// Runs a full round of `n` samples, prompting on `output` and reading labels from `input`.
pub fn run<B, W, R>(
    annotator: &mut Annotator<'_>,
    n: usize,
    rng: &mut R,
    input: &mut B,
    output: &mut W,
) -> Result<Finished, Error>
where
    B: BufRead,
    W: Write,
    R: Rng,
{
    let mut step = annotator.start(n, rng)?;
    let mut line = String::new();

    loop {
        match &step {
            Step::Done => break,
            Step::Prompt(prompt) => show(output, prompt)?,
            Step::Rejected { input, prompt } => {
                writeln!(
                    output,
                    "invalid label {:?}: use only p, r and n (e.g. \"pr\")",
                    input
                )?;
                show(output, prompt)?;
            }
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        step = annotator.handle(&line)?;
    }

    let finished = annotator.finish()?;
    let (p, r, n) = finished.tally.as_tuple();
    writeln!(output, "p: {}, r: {}, n: {}", p, r, n)?;
    if let Some(id) = finished.log_id {
        writeln!(output, "saved as log {}", id)?;
    }
    Ok(finished)
}
