//! Console port — line-oriented output and yes/no questions.

/// Line-oriented interaction with the user.
///
/// Every status line produced by the subsystems goes through [`say`](Self::say);
/// the only input ever read is the answer to a question.
pub trait Console {
    /// Print one line of output.
    fn say(&mut self, line: &str);

    /// Print `question` and read one line of input.
    ///
    /// Returns `None` when no answer is available (end of input or a read
    /// failure). Callers treat that as a negative answer.
    fn ask(&mut self, question: &str) -> Option<String>;
}
