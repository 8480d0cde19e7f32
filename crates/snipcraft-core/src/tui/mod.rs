//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod commands;
#[cfg(feature = "tui")]
mod prompts;

#[cfg(feature = "tui")]
pub use commands::{build, init, list, show_config, BuildArgs, CommandStatus, Ui};
#[cfg(feature = "tui")]
pub use prompts::TerminalProvider;
