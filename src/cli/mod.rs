//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, RenderArgs};
pub use commands::{
    edits_from_args, handle_config_action, load_config, open_initial_image, prompt_for_image,
    run_interactive, run_render, Settings,
};
pub use enums::CharacterSet;
