//! Three-stage interactive narrowing: types, then groups, then components

use super::provider::{Choice, ChoiceProvider, MultiSelect};
use crate::components::{Component, SelectedComponent};
use crate::error::SelectionError;
use crate::taxonomy::{self, GroupKey, GroupRef};
use std::collections::HashSet;
use tracing::debug;

/// Prompt and label text used by the flow
///
/// `{group}` and `{count}` placeholders are substituted where noted.
#[derive(Debug, Clone)]
pub struct FlowMessages {
    pub select_types: String,
    pub select_groups: String,
    pub all_groups: String,
    pub select_items: String,
    /// Label of a whole-group option, `{group}` substituted
    pub whole_group: String,
    /// Hint next to a whole-group option, `{count}` substituted
    pub group_size: String,
    pub empty_selection: String,
}

impl Default for FlowMessages {
    fn default() -> Self {
        Self {
            select_types: "Select component types".to_string(),
            select_groups: "Select groups".to_string(),
            all_groups: "All groups".to_string(),
            select_items: "Select components".to_string(),
            whole_group: "All of {group}".to_string(),
            group_size: "components: {count}".to_string(),
            empty_selection: "Select at least one option".to_string(),
        }
    }
}

/// One selectable row of the item stage
#[derive(Debug, Clone)]
pub enum ItemChoice<'a> {
    /// A whole group bucket
    Group {
        group: GroupRef,
        members: Vec<&'a Component>,
    },
    Leaf(&'a Component),
}

impl<'a> ItemChoice<'a> {
    fn expand(&self) -> Vec<&'a Component> {
        match self {
            ItemChoice::Group { members, .. } => members.clone(),
            ItemChoice::Leaf(component) => vec![*component],
        }
    }
}

/// Flow states, in order
#[derive(Debug, Clone)]
pub enum FlowState<'a> {
    SelectTypes,
    SelectGroups {
        types: Vec<String>,
    },
    SelectItems {
        types: Vec<String>,
        /// `None` means no group restriction
        groups: Option<HashSet<GroupRef>>,
    },
    Finalize {
        picks: Vec<ItemChoice<'a>>,
    },
    Complete,
}

/// Drives a [`ChoiceProvider`] through the selection stages
pub struct SelectionFlow<'a> {
    components: &'a [Component],
    messages: FlowMessages,
    state: FlowState<'a>,
}

impl<'a> SelectionFlow<'a> {
    pub fn new(components: &'a [Component]) -> Self {
        Self {
            components,
            messages: FlowMessages::default(),
            state: FlowState::SelectTypes,
        }
    }

    pub fn with_messages(mut self, messages: FlowMessages) -> Self {
        self.messages = messages;
        self
    }

    pub fn state(&self) -> &FlowState<'a> {
        &self.state
    }

    /// Run every stage to completion
    pub fn run<P>(mut self, provider: &mut P) -> Result<Vec<SelectedComponent>, SelectionError>
    where
        P: ChoiceProvider + ?Sized,
    {
        loop {
            if let Some(selection) = self.step(provider)? {
                return Ok(selection);
            }
        }
    }

    /// Advance one state. Returns the selection once `Finalize` has run.
    pub fn step<P>(
        &mut self,
        provider: &mut P,
    ) -> Result<Option<Vec<SelectedComponent>>, SelectionError>
    where
        P: ChoiceProvider + ?Sized,
    {
        let state = std::mem::replace(&mut self.state, FlowState::Complete);

        let (next, selection) = match state {
            FlowState::SelectTypes => {
                let types = self.select_types(provider)?;
                (FlowState::SelectGroups { types }, None)
            }
            FlowState::SelectGroups { types } => {
                let groups = self.select_groups(provider, &types)?;
                (FlowState::SelectItems { types, groups }, None)
            }
            FlowState::SelectItems { types, groups } => {
                let picks = self.select_items(provider, &types, groups.as_ref())?;
                (FlowState::Finalize { picks }, None)
            }
            FlowState::Finalize { picks } => (FlowState::Complete, Some(finalize(&picks))),
            FlowState::Complete => (FlowState::Complete, Some(Vec::new())),
        };

        self.state = next;
        Ok(selection)
    }

    fn select_types<P>(&self, provider: &mut P) -> Result<Vec<String>, SelectionError>
    where
        P: ChoiceProvider + ?Sized,
    {
        let types = taxonomy::available_types(self.components);
        if types.len() < 2 {
            debug!(?types, "single type, skipping type prompt");
            return Ok(types);
        }

        let mut prompt = MultiSelect::new(&self.messages.select_types);
        for kind in &types {
            let count = self.components.iter().filter(|c| &c.kind == kind).count();
            prompt.option(Choice::new(kind, self.count_hint(count)).selected(true));
        }

        let chosen = self.ask(provider, &prompt)?;
        Ok(chosen.into_iter().map(|pos| types[pos].clone()).collect())
    }

    fn select_groups<P>(
        &self,
        provider: &mut P,
        types: &[String],
    ) -> Result<Option<HashSet<GroupRef>>, SelectionError>
    where
        P: ChoiceProvider + ?Sized,
    {
        let groups = taxonomy::available_groups(self.components, types);
        if groups.is_empty() {
            return Ok(None);
        }

        let mut prompt = MultiSelect::new(&self.messages.select_groups);
        prompt.option(Choice::new(&self.messages.all_groups, "").selected(true));
        for group in &groups {
            prompt.option(Choice::new(&group.group, &group.kind));
        }

        let chosen = self.ask(provider, &prompt)?;
        // Position 0 is the synthetic "all groups" option
        if chosen.contains(&0) {
            return Ok(None);
        }

        let restriction: HashSet<GroupRef> = chosen
            .into_iter()
            .map(|pos| groups[pos - 1].clone())
            .collect();
        debug!(groups = restriction.len(), "group restriction applied");
        Ok(Some(restriction))
    }

    fn select_items<P>(
        &self,
        provider: &mut P,
        types: &[String],
        groups: Option<&HashSet<GroupRef>>,
    ) -> Result<Vec<ItemChoice<'a>>, SelectionError>
    where
        P: ChoiceProvider + ?Sized,
    {
        let tree = taxonomy::structure(self.components, types, groups);
        // Only types left with components after the group restriction count
        let show_separators = tree.types.iter().filter(|b| !b.is_empty()).count() > 1;

        let mut prompt = MultiSelect::new(&self.messages.select_items);
        let mut rows: Vec<ItemChoice<'a>> = Vec::new();

        for type_bucket in tree.types.iter().filter(|b| !b.is_empty()) {
            if show_separators {
                prompt.separator(type_bucket.kind.to_uppercase());
            }

            for bucket in &type_bucket.groups {
                if let GroupKey::Named(name) = &bucket.key {
                    prompt.option(Choice::new(
                        self.messages.whole_group.replace("{group}", name),
                        self.count_hint(bucket.components.len()),
                    ));
                    rows.push(ItemChoice::Group {
                        group: GroupRef::new(&type_bucket.kind, name),
                        members: bucket.components.clone(),
                    });
                }

                for &component in &bucket.components {
                    prompt.option(Choice::new(&component.title, &component.description));
                    rows.push(ItemChoice::Leaf(component));
                }
            }
        }

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let chosen = self.ask(provider, &prompt)?;
        Ok(chosen.into_iter().map(|pos| rows[pos].clone()).collect())
    }

    /// Prompt until a non-empty answer; returns sorted, deduplicated option positions
    fn ask<P>(&self, provider: &mut P, prompt: &MultiSelect) -> Result<Vec<usize>, SelectionError>
    where
        P: ChoiceProvider + ?Sized,
    {
        let options = prompt.option_indices();

        loop {
            let answer = provider.multi_select(prompt)?;

            let mut positions = answer
                .into_iter()
                .map(|idx| {
                    options.iter().position(|&o| o == idx).ok_or_else(|| {
                        SelectionError::InvalidAnswer(format!(
                            "entry {idx} of '{}' is not selectable",
                            prompt.message
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if positions.is_empty() {
                provider.warn(&self.messages.empty_selection)?;
                continue;
            }

            positions.sort_unstable();
            positions.dedup();
            return Ok(positions);
        }
    }

    fn count_hint(&self, count: usize) -> String {
        self.messages.group_size.replace("{count}", &count.to_string())
    }
}

/// Expand picks in list order and number them from 0
fn finalize(picks: &[ItemChoice<'_>]) -> Vec<SelectedComponent> {
    number(picks.iter().flat_map(ItemChoice::expand))
}

/// Every component in store order, numbered from 0
pub fn select_all(components: &[Component]) -> Vec<SelectedComponent> {
    number(components.iter())
}

fn number<'c>(components: impl Iterator<Item = &'c Component>) -> Vec<SelectedComponent> {
    components
        .enumerate()
        .map(|(sequence_id, component)| SelectedComponent {
            component: component.clone(),
            sequence_id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::provider::{Answer, Entry, ScriptedProvider};

    fn component(title: &str, kind: &str, group: Option<&str>) -> Component {
        Component {
            title: title.to_string(),
            description: format!("{title} snippet"),
            kind: kind.to_string(),
            group: group.map(str::to_string),
            content: format!("{title}-content"),
            source_file: format!("{title}.json"),
        }
    }

    fn sample() -> Vec<Component> {
        vec![
            component("Reset", "css", None),
            component("Primary", "css", Some("buttons")),
            component("Ghost", "css", Some("buttons")),
            component("Grid", "css", Some("layout")),
            component("Card", "html", Some("layout")),
            component("Footer", "html", None),
        ]
    }

    fn titles(selection: &[SelectedComponent]) -> Vec<&str> {
        selection
            .iter()
            .map(|s| s.component.title.as_str())
            .collect()
    }

    fn ids(selection: &[SelectedComponent]) -> Vec<usize> {
        selection.iter().map(|s| s.sequence_id).collect()
    }

    #[test]
    fn test_single_type_skips_type_prompt() {
        let components = vec![component("A", "css", None), component("B", "css", None)];
        let mut provider = ScriptedProvider::new([Answer::labels(["B"])]);

        let selection = SelectionFlow::new(&components).run(&mut provider).unwrap();

        assert_eq!(titles(&selection), vec!["B"]);
        // Only the item prompt was shown, without separators
        assert_eq!(provider.prompts.len(), 1);
        assert!(provider.prompts[0]
            .entries
            .iter()
            .all(|e| matches!(e, Entry::Option(_))));
    }

    #[test]
    fn test_type_prompt_defaults_to_all_types() {
        let components = sample();
        let mut provider = ScriptedProvider::new([
            Answer::Defaults,
            Answer::Defaults,
            Answer::labels(["Footer"]),
        ]);

        let selection = SelectionFlow::new(&components).run(&mut provider).unwrap();
        assert_eq!(titles(&selection), vec!["Footer"]);

        let type_prompt = &provider.prompts[0];
        let labels: Vec<_> = type_prompt
            .option_indices()
            .into_iter()
            .filter_map(|i| type_prompt.choice(i))
            .filter(|c| c.selected)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels, vec!["css", "html"]);
    }

    #[test]
    fn test_empty_type_answer_reprompts() {
        let components = sample();
        let mut provider = ScriptedProvider::new([
            Answer::Nth(vec![]),
            Answer::labels(["html"]),
            Answer::Defaults,
            Answer::labels(["Card"]),
        ]);

        let selection = SelectionFlow::new(&components).run(&mut provider).unwrap();

        assert_eq!(titles(&selection), vec!["Card"]);
        assert_eq!(provider.warnings.len(), 1);
        assert_eq!(provider.remaining(), 0);
    }

    #[test]
    fn test_no_groups_skips_group_prompt() {
        let components = vec![component("A", "css", None), component("B", "js", None)];
        let mut provider = ScriptedProvider::new([Answer::Defaults, Answer::labels(["A", "B"])]);

        let selection = SelectionFlow::new(&components).run(&mut provider).unwrap();

        assert_eq!(titles(&selection), vec!["A", "B"]);
        assert_eq!(provider.prompts.len(), 2);
        // Two types active, so each gets a separator
        assert_eq!(
            provider.prompts[1].entries[0],
            Entry::Separator("CSS".to_string())
        );
    }

    #[test]
    fn test_all_groups_option_lifts_restriction() {
        let components = sample();
        let mut provider = ScriptedProvider::new([
            Answer::labels(["css"]),
            Answer::labels(["All groups", "buttons"]),
        ]);

        let mut flow = SelectionFlow::new(&components);
        flow.step(&mut provider).unwrap();
        flow.step(&mut provider).unwrap();

        match flow.state() {
            FlowState::SelectItems { groups, types } => {
                assert!(groups.is_none());
                assert_eq!(types, &vec!["css".to_string()]);
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn test_group_restriction_keeps_ungrouped_items() {
        let components = sample();
        let mut provider = ScriptedProvider::new([
            Answer::labels(["css"]),
            Answer::labels(["buttons"]),
            Answer::Defaults,
        ]);

        let mut flow = SelectionFlow::new(&components);
        for _ in 0..2 {
            flow.step(&mut provider).unwrap();
        }
        // Item stage with nothing picked: warn, and the script is exhausted
        let err = flow.step(&mut provider).unwrap_err();
        assert!(matches!(err, SelectionError::InvalidAnswer(_)));

        let item_prompt = provider.prompts.last().unwrap();
        let labels: Vec<_> = item_prompt
            .option_indices()
            .into_iter()
            .filter_map(|i| item_prompt.choice(i))
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Reset", "All of buttons", "Primary", "Ghost"]);
    }

    #[test]
    fn test_restriction_to_one_type_hides_separators() {
        let components = vec![
            component("Primary", "css", Some("buttons")),
            component("Card", "html", Some("layout")),
        ];
        let mut provider = ScriptedProvider::new([
            Answer::Defaults,
            Answer::labels(["buttons"]),
            Answer::labels(["Primary"]),
        ]);

        let selection = SelectionFlow::new(&components).run(&mut provider).unwrap();

        assert_eq!(titles(&selection), vec!["Primary"]);
        let item_prompt = &provider.prompts[2];
        assert!(item_prompt
            .entries
            .iter()
            .all(|e| matches!(e, Entry::Option(_))));
    }

    #[test]
    fn test_count_hint_reads_for_a_single_member() {
        let components = vec![
            component("Primary", "css", Some("buttons")),
            component("Reset", "css", None),
        ];
        let mut provider = ScriptedProvider::new([Answer::Defaults, Answer::labels(["Reset"])]);

        SelectionFlow::new(&components).run(&mut provider).unwrap();

        let item_prompt = &provider.prompts[1];
        let group_row = item_prompt
            .option_indices()
            .into_iter()
            .filter_map(|i| item_prompt.choice(i))
            .find(|c| c.label == "All of buttons")
            .unwrap();
        assert_eq!(group_row.hint, "components: 1");
    }

    #[test]
    fn test_empty_group_answer_reprompts() {
        let components = sample();
        let mut provider = ScriptedProvider::new([
            Answer::labels(["css"]),
            Answer::Nth(vec![]),
            Answer::labels(["layout"]),
            Answer::labels(["Grid"]),
        ]);

        let selection = SelectionFlow::new(&components).run(&mut provider).unwrap();
        assert_eq!(titles(&selection), vec!["Grid"]);
        assert_eq!(provider.warnings.len(), 1);
    }

    #[test]
    fn test_group_and_member_yield_two_entries() {
        let components = sample();
        let mut provider = ScriptedProvider::new([
            Answer::labels(["css"]),
            Answer::Defaults,
            Answer::labels(["Ghost", "All of buttons"]),
        ]);

        let selection = SelectionFlow::new(&components).run(&mut provider).unwrap();

        assert_eq!(titles(&selection), vec!["Primary", "Ghost", "Ghost"]);
        assert_eq!(ids(&selection), vec![0, 1, 2]);
        let ghost_ids: Vec<_> = selection
            .iter()
            .filter(|s| s.component.title == "Ghost")
            .map(|s| s.sequence_id)
            .collect();
        assert_eq!(ghost_ids, vec![1, 2]);
    }

    #[test]
    fn test_finalize_follows_list_order() {
        let components = sample();
        let mut provider = ScriptedProvider::new([
            Answer::Defaults,
            Answer::Defaults,
            Answer::labels(["Footer", "Reset", "All of layout"]),
        ]);

        let selection = SelectionFlow::new(&components).run(&mut provider).unwrap();

        // "All of layout" resolves to the first match, the css layout group
        assert_eq!(titles(&selection), vec!["Reset", "Grid", "Footer"]);
        assert_eq!(ids(&selection), vec![0, 1, 2]);
    }

    #[test]
    fn test_cancel_stops_the_flow() {
        let components = sample();
        let mut provider = ScriptedProvider::new([Answer::Defaults, Answer::Cancel]);

        let err = SelectionFlow::new(&components)
            .run(&mut provider)
            .unwrap_err();
        assert!(matches!(err, SelectionError::Cancelled));
    }

    #[test]
    fn test_custom_messages_are_used() {
        let components = vec![component("A", "css", Some("g"))];
        let messages = FlowMessages {
            whole_group: "Todo {group}".to_string(),
            ..FlowMessages::default()
        };
        let mut provider = ScriptedProvider::new([Answer::Defaults, Answer::labels(["Todo g"])]);

        let selection = SelectionFlow::new(&components)
            .with_messages(messages)
            .run(&mut provider)
            .unwrap();
        assert_eq!(titles(&selection), vec!["A"]);
    }

    #[test]
    fn test_select_all_numbers_in_store_order() {
        let components = sample();
        let selection = select_all(&components);
        assert_eq!(ids(&selection), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(selection[4].component.title, "Card");
    }
}
