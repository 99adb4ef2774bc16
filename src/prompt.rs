//! Interactive questions, behind a trait so runs can be scripted.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of answers for interactive questions
pub trait Prompter {
    /// Ask a yes/no question; only an explicit `y` counts as yes
    fn confirm(&mut self, question: &str) -> bool;

    /// Show `message` and wait for the user to acknowledge it
    fn pause(&mut self, message: &str);
}

/// Treat a free-form answer as affirmative or not
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Prompter reading answers from standard input
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    fn read_answer(question: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", question)?;
        stdout.flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(input)
    }
}

impl Prompter for StdinPrompter {
    fn confirm(&mut self, question: &str) -> bool {
        match Self::read_answer(question) {
            Ok(answer) => is_affirmative(&answer),
            // No readable answer is never consent
            Err(_) => false,
        }
    }

    fn pause(&mut self, message: &str) {
        let _ = Self::read_answer(message);
    }
}

/// Prompter replaying canned answers, for tests and headless runs
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// Every question and pause message received, in order
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, question: &str) -> bool {
        self.asked.push(question.to_string());
        self.answers
            .pop_front()
            .map(|a| is_affirmative(&a))
            .unwrap_or(false)
    }

    fn pause(&mut self, message: &str) {
        self.asked.push(message.to_string());
    }
}
