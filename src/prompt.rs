#![forbid(unsafe_code)]

//! Line-oriented interactive prompts

use std::io::{self, BufRead, Write};

/// Asks the user a question and reads one line of answer
pub trait Prompt {
    /// Shows `message` and returns the answer without its line terminator
    ///
    /// Returns `Ok(None)` when the input is exhausted.
    fn prompt_line(&mut self, message: &str) -> io::Result<Option<String>>;

    /// Writes an informational line to the user
    fn say(&mut self, message: &str) -> io::Result<()>;
}

/// Prompt over any reader/writer pair, normally stdin and stdout
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompt, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt attached to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn prompt_line(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(answer))
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }
}
