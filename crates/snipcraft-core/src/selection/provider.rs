//! The choice-provider seam between the selection flow and a terminal

use crate::error::SelectionError;
use std::collections::VecDeque;

/// One selectable option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub hint: String,
    /// Checked when the prompt opens
    pub selected: bool,
}

impl Choice {
    pub fn new(label: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hint: hint.into(),
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// A row of a multi-select prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Non-selectable heading
    Separator(String),
    Option(Choice),
}

/// A multi-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelect {
    pub message: String,
    pub entries: Vec<Entry>,
}

impl MultiSelect {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            entries: Vec::new(),
        }
    }

    pub fn separator(&mut self, label: impl Into<String>) {
        self.entries.push(Entry::Separator(label.into()));
    }

    /// Append an option and return its entry index
    pub fn option(&mut self, choice: Choice) -> usize {
        self.entries.push(Entry::Option(choice));
        self.entries.len() - 1
    }

    /// Entry indices of selectable options, in display order
    pub fn option_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| matches!(entry, Entry::Option(_)))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn choice(&self, index: usize) -> Option<&Choice> {
        match self.entries.get(index) {
            Some(Entry::Option(choice)) => Some(choice),
            _ => None,
        }
    }
}

/// Interactive capability the selection flow is driven against
pub trait ChoiceProvider {
    /// Ask a multi-choice question; returns the entry indices the user confirmed
    fn multi_select(&mut self, prompt: &MultiSelect) -> Result<Vec<usize>, SelectionError>;

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, SelectionError>;

    /// Show validation feedback before a re-prompt
    fn warn(&mut self, message: &str) -> Result<(), SelectionError>;
}

/// A pre-recorded answer for [`ScriptedProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Pick options by their position among selectable options (separators skipped)
    Nth(Vec<usize>),
    /// Pick options by label; each label picks its first match
    Labels(Vec<String>),
    /// Accept whatever the prompt pre-selects
    Defaults,
    Confirm(bool),
    Cancel,
}

impl Answer {
    pub fn labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Answer::Labels(labels.into_iter().map(Into::into).collect())
    }
}

/// Replays a fixed script of answers, recording every prompt it was shown
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    answers: VecDeque<Answer>,
    pub prompts: Vec<MultiSelect>,
    pub confirmations: Vec<String>,
    pub warnings: Vec<String>,
}

impl ScriptedProvider {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, asked: &str) -> Result<Answer, SelectionError> {
        self.answers
            .pop_front()
            .ok_or_else(|| SelectionError::InvalidAnswer(format!("no answer left for '{asked}'")))
    }
}

impl ChoiceProvider for ScriptedProvider {
    fn multi_select(&mut self, prompt: &MultiSelect) -> Result<Vec<usize>, SelectionError> {
        self.prompts.push(prompt.clone());
        let options = prompt.option_indices();

        match self.next_answer(&prompt.message)? {
            Answer::Nth(positions) => positions
                .into_iter()
                .map(|pos| {
                    options.get(pos).copied().ok_or_else(|| {
                        SelectionError::InvalidAnswer(format!(
                            "prompt '{}' has no option #{pos}",
                            prompt.message
                        ))
                    })
                })
                .collect(),
            Answer::Labels(labels) => labels
                .iter()
                .map(|label| {
                    options
                        .iter()
                        .copied()
                        .find(|&idx| prompt.choice(idx).is_some_and(|c| &c.label == label))
                        .ok_or_else(|| {
                            SelectionError::InvalidAnswer(format!(
                                "prompt '{}' has no option '{label}'",
                                prompt.message
                            ))
                        })
                })
                .collect(),
            Answer::Defaults => Ok(options
                .into_iter()
                .filter(|&idx| prompt.choice(idx).is_some_and(|c| c.selected))
                .collect()),
            Answer::Cancel => Err(SelectionError::Cancelled),
            Answer::Confirm(_) => Err(SelectionError::InvalidAnswer(format!(
                "expected a selection for '{}'",
                prompt.message
            ))),
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, SelectionError> {
        self.confirmations.push(message.to_string());
        match self.next_answer(message)? {
            Answer::Confirm(value) => Ok(value),
            Answer::Defaults => Ok(default),
            Answer::Cancel => Err(SelectionError::Cancelled),
            other => Err(SelectionError::InvalidAnswer(format!(
                "expected a confirmation for '{message}', got {other:?}"
            ))),
        }
    }

    fn warn(&mut self, message: &str) -> Result<(), SelectionError> {
        self.warnings.push(message.to_string());
        Ok(())
    }
}
