// SPDX-License-Identifier: PMPL-1.0-or-later

//! Operator capability: the human (or scripted) side of the recovery loop.

use anyhow::{bail, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the operator is being asked, with enough context to phrase it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorPrompt<'a> {
    /// First prompt for a name neither the cache nor the reference knows.
    Unresolved { raw_name: &'a str },
    /// Re-prompt after the previous candidate failed validation.
    InvalidCode {
        raw_name: &'a str,
        candidate: &'a str,
    },
}

/// A source of candidate codes for unresolved names.
///
/// The resolver calls [`request_code`](Operator::request_code) in a loop
/// until the reference accepts an answer; implementations decide how to
/// obtain each candidate (blocking terminal read, scripted list, ...).
pub trait Operator {
    fn request_code(&mut self, prompt: &OperatorPrompt<'_>) -> Result<String>;
}

/// Interactive operator reading from stdin. Blocks the whole pipeline
/// until a line arrives; there is no timeout by design.
#[derive(Debug, Default)]
pub struct ConsoleOperator;

impl ConsoleOperator {
    pub fn new() -> Self {
        Self
    }
}

impl Operator for ConsoleOperator {
    fn request_code(&mut self, prompt: &OperatorPrompt<'_>) -> Result<String> {
        match prompt {
            OperatorPrompt::Unresolved { raw_name } => {
                println!(
                    "{} {}",
                    "unable to resolve country:".yellow().bold(),
                    raw_name
                );
                print!("please enter the ISO 3166-1 alpha-3 code for {raw_name}: ");
            }
            OperatorPrompt::InvalidCode {
                raw_name,
                candidate,
            } => {
                println!("{} {}", "invalid code:".red().bold(), candidate);
                print!("please enter the ISO 3166-1 alpha-3 code for {raw_name}: ");
            }
        }
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            bail!("operator input closed while a country name was unresolved");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Operator fed from a fixed list of answers. For tests and any
/// non-interactive caller that wants deterministic recovery.
#[derive(Debug, Default)]
pub struct ScriptedOperator {
    answers: Vec<String>,
    next: usize,
}

impl ScriptedOperator {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }

    /// Number of prompts answered so far.
    pub fn prompts_seen(&self) -> usize {
        self.next
    }
}

impl Operator for ScriptedOperator {
    fn request_code(&mut self, prompt: &OperatorPrompt<'_>) -> Result<String> {
        let Some(answer) = self.answers.get(self.next) else {
            bail!("scripted operator exhausted after {} answers ({prompt:?})", self.next);
        };
        self.next += 1;
        Ok(answer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_operator_replays_in_order() {
        let mut op = ScriptedOperator::new(["AAA", "BBB"]);
        let prompt = OperatorPrompt::Unresolved { raw_name: "Nowhere" };
        assert_eq!(op.request_code(&prompt).unwrap(), "AAA");
        assert_eq!(op.request_code(&prompt).unwrap(), "BBB");
        assert_eq!(op.prompts_seen(), 2);
    }

    #[test]
    fn scripted_operator_errors_when_exhausted() {
        let mut op = ScriptedOperator::new(Vec::<String>::new());
        let prompt = OperatorPrompt::Unresolved { raw_name: "Nowhere" };
        assert!(op.request_code(&prompt).is_err());
    }
}
