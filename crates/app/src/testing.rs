//! In-memory [`Console`] used by the unit tests of this crate.

use std::collections::VecDeque;

use crate::ports::Console;

/// Records every line and question, answers from a script.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    pub lines: Vec<String>,
    pub questions: Vec<String>,
    answers: VecDeque<String>,
}

impl RecordingConsole {
    pub fn with_answers(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

impl Console for RecordingConsole {
    fn say(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn ask(&mut self, question: &str) -> Option<String> {
        self.questions.push(question.to_string());
        self.answers.pop_front()
    }
}
