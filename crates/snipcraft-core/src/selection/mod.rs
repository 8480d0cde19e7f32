//! Interactive selection of components
//!
//! The flow is an explicit state machine (`SelectTypes` → `SelectGroups` →
//! `SelectItems` → `Finalize`) driven against a [`ChoiceProvider`], so it runs
//! the same way against a terminal or a scripted set of answers.

pub mod flow;
pub mod provider;

pub use flow::{select_all, FlowMessages, FlowState, ItemChoice, SelectionFlow};
pub use provider::{Answer, Choice, ChoiceProvider, Entry, MultiSelect, ScriptedProvider};
