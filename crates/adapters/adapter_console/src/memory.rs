//! Scripted console that keeps everything in memory.

use std::collections::VecDeque;

use patternhub_app::ports::Console;

/// Console that answers from a script and records every line and prompt.
#[derive(Debug, Default, Clone)]
pub struct MemoryConsole {
    answers: VecDeque<String>,
    lines: Vec<String>,
    questions: Vec<String>,
}

impl MemoryConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A console that hands out `answers` in order, then runs dry.
    #[must_use]
    pub fn with_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Everything said so far, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Every prompt asked so far, in order.
    #[must_use]
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Scripted answers not consumed yet.
    #[must_use]
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|said| said == line)
    }

    /// Position of the first line equal to `line`.
    #[must_use]
    pub fn position(&self, line: &str) -> Option<usize> {
        self.lines.iter().position(|said| said == line)
    }
}

impl Console for MemoryConsole {
    fn say(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn ask(&mut self, question: &str) -> Option<String> {
        self.questions.push(question.to_string());
        self.answers.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_record_lines_in_order() {
        let mut console = MemoryConsole::new();
        console.say("first");
        console.say("second");
        assert_eq!(console.lines(), ["first", "second"]);
        assert_eq!(console.position("second"), Some(1));
        assert!(!console.contains("third"));
    }

    #[test]
    fn should_answer_from_script_then_run_dry() {
        let mut console = MemoryConsole::with_answers(["y"]);

        assert_eq!(console.ask("one?").as_deref(), Some("y"));
        assert_eq!(console.ask("two?"), None);
        assert_eq!(console.questions(), ["one?", "two?"]);
        assert_eq!(console.remaining_answers(), 0);
    }
}
