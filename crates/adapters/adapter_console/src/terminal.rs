//! Line-oriented console over a reader/writer pair.

use std::io::{self, BufRead, Write};

use patternhub_app::ports::Console;

/// Console backed by a buffered reader and a writer.
///
/// Write failures are logged and otherwise ignored; a failed or exhausted
/// read is reported as "no answer".
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the underlying writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn say(&mut self, line: &str) {
        if let Err(err) = writeln!(self.writer, "{line}") {
            tracing::warn!(error = %err, "failed to write to console");
        }
    }

    fn ask(&mut self, question: &str) -> Option<String> {
        if let Err(err) = write!(self.writer, "{question}").and_then(|()| self.writer.flush()) {
            tracing::warn!(error = %err, "failed to write prompt");
        }

        let mut answer = String::new();
        match self.reader.read_line(&mut answer) {
            Ok(0) => {
                tracing::debug!("input exhausted");
                None
            }
            Ok(_) => Some(answer.trim_end_matches(['\r', '\n']).to_string()),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read answer");
                None
            }
        }
    }
}
