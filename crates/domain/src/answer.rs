//! Answer — a yes/no decision read from the user.

/// The outcome of a yes/no question.
///
/// Anything that is not the expected affirmative word, including a missing
/// line, counts as [`Answer::No`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Interpret a raw input line against the affirmative word.
    ///
    /// Surrounding whitespace and letter case are ignored.
    #[must_use]
    pub fn parse(input: Option<&str>, affirmative: &str) -> Self {
        match input {
            Some(line) if line.trim().to_lowercase() == affirmative.to_lowercase() => Self::Yes,
            _ => Self::No,
        }
    }

    #[must_use]
    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}
