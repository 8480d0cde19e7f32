//! Charm-style choice provider using cliclack

use crate::config::Palette;
use crate::error::SelectionError;
use crate::selection::{ChoiceProvider, Entry, MultiSelect};

/// Rows shown at once before the list scrolls
const MAX_ROWS: usize = 12;

/// [`ChoiceProvider`] backed by the terminal
pub struct TerminalProvider<'p> {
    palette: &'p Palette,
}

impl<'p> TerminalProvider<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self { palette }
    }

    /// Separators become a colored prefix on the hint of the options below them
    fn hint(&self, section: Option<&str>, hint: &str) -> String {
        match section {
            Some(label) => {
                let painted = self.palette.paint(&label.to_lowercase(), label);
                if hint.is_empty() {
                    painted.to_string()
                } else {
                    format!("{} · {}", painted, hint)
                }
            }
            None => hint.to_string(),
        }
    }
}

impl ChoiceProvider for TerminalProvider<'_> {
    fn multi_select(&mut self, prompt: &MultiSelect) -> Result<Vec<usize>, SelectionError> {
        let mut multi = cliclack::multiselect(&prompt.message)
            .required(false)
            .max_rows(MAX_ROWS);

        let mut initial = Vec::new();
        let mut section: Option<&str> = None;
        for (idx, entry) in prompt.entries.iter().enumerate() {
            match entry {
                Entry::Separator(label) => section = Some(label.as_str()),
                Entry::Option(choice) => {
                    multi = multi.item(idx, &choice.label, self.hint(section, &choice.hint));
                    if choice.selected {
                        initial.push(idx);
                    }
                }
            }
        }

        if !initial.is_empty() {
            multi = multi.initial_values(initial);
        }

        Ok(multi.interact()?)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, SelectionError> {
        Ok(cliclack::confirm(message).initial_value(default).interact()?)
    }

    fn warn(&mut self, message: &str) -> Result<(), SelectionError> {
        Ok(cliclack::log::warning(message)?)
    }
}
