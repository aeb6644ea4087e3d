//! Top-level error type for the command-line front end.

use std::path::PathBuf;

use crate::ascii::RampError;
use crate::config::ConfigError;
use crate::edit::EditError;
use crate::loader::LoadError;
use crate::output::OutputError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("invalid edit: {0}")]
    Edit(#[from] EditError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("invalid ramp: {0}")]
    Ramp(#[from] RampError),

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
