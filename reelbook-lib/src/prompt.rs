//! Line-oriented prompting over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Reads whole lines from `input` and writes prompts to `output`.
///
/// Every read returns `None` once the input is exhausted.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of output.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()
    }

    /// Print `question` on its own line, then read the answer.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        self.say(question)?;
        self.read_line()
    }

    /// Print `label [current]: ` without a newline, then read a replacement.
    ///
    /// Yields `Some(None)` when the user just pressed Enter.
    pub fn ask_replacement(
        &mut self,
        label: &str,
        current: impl Display,
    ) -> io::Result<Option<Option<String>>> {
        write!(self.output, "{label} [{current}]: ")?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .map(|answer| (!answer.is_empty()).then_some(answer)))
    }

    /// Read one line with surrounding whitespace trimmed.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
