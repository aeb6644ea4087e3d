//! Subcommand handlers and the interactive entry point.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::args::{Args, ConfigAction, RenderArgs};
use crate::ascii::{CharSet, CharacterRamp, PixelMatrix};
use crate::config::{default_path, Config, DEFAULT_CONFIG_TEMPLATE};
use crate::edit::{CropSide, EditState};
use crate::error::AppError;
use crate::loader::ImageLoader;
use crate::menu::{Menu, MenuOptions, Prompter, TerminalPrompter};
use crate::output;
use crate::render::render;
use crate::session::Session;

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub ramp: CharacterRamp,
    pub output_path: PathBuf,
    pub max_scale_percent: u32,
}

impl Settings {
    /// CLI > config file > built-in defaults.
    pub fn resolve(args: &Args, config: &Config) -> Result<Self, AppError> {
        let ramp = if let Some(glyphs) = &args.ramp {
            glyphs.parse::<CharacterRamp>()?
        } else if let Some(charset) = args.charset {
            CharSet::from(charset).ramp()
        } else {
            config.ramp()?
        };

        Ok(Self {
            ramp,
            output_path: args.output.clone().unwrap_or_else(|| config.output_path()),
            max_scale_percent: config.menu.max_scale_percent,
        })
    }

    pub fn menu_options(&self) -> MenuOptions {
        MenuOptions {
            output_path: self.output_path.clone(),
            max_scale_percent: self.max_scale_percent,
        }
    }
}

/// Load the config named on the command line, or the default one if present.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, AppError> {
    match explicit {
        Some(path) => Ok(Config::load_from(path)?),
        None => match Config::load() {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Ok(Config::default())
            }
        },
    }
}

/// Build the edit state described by `render` flags, validating each value.
pub fn edits_from_args(args: &RenderArgs, matrix: &PixelMatrix) -> Result<EditState, AppError> {
    let mut edits = EditState::new(matrix.width(), matrix.height());
    edits.set_inverted(args.invert);
    edits.set_threshold(args.min_threshold, args.max_threshold, args.fill)?;

    let margins = [
        (CropSide::Left, args.crop_left),
        (CropSide::Right, args.crop_right),
        (CropSide::Top, args.crop_top),
        (CropSide::Bottom, args.crop_bottom),
    ];
    for (side, amount) in margins {
        if let Some(amount) = amount {
            edits.set_crop(side, amount)?;
        }
    }

    edits.set_scale(args.scale_width, args.scale_height)?;
    Ok(edits)
}

/// Non-interactive render: load, apply flags, write to `--output` or `out`.
pub fn run_render<W: Write>(
    args: &RenderArgs,
    settings: &Settings,
    loader: &dyn ImageLoader,
    out: W,
) -> Result<(), AppError> {
    let matrix = loader.load(&args.image)?;
    let edits = edits_from_args(args, &matrix)?;
    let grid = render(&matrix, &edits, &settings.ramp);

    match &args.output {
        Some(path) => output::save(&grid, path)?,
        None => output::display(&grid, out)?,
    }
    Ok(())
}

/// Ask for image paths until one loads.
pub fn prompt_for_image<P: Prompter, W: Write>(
    prompter: &mut P,
    out: &mut W,
    loader: &dyn ImageLoader,
) -> io::Result<(PathBuf, PixelMatrix)> {
    loop {
        let path = prompter.prompt_path("Please enter the filename of your image: ")?;
        match loader.load(&path) {
            Ok(matrix) => return Ok((path, matrix)),
            Err(e) => writeln!(out, "Invalid image: {}. Please try again.", e)?,
        }
    }
}

/// Load the image named on the command line, falling back to prompting
/// whenever it is missing or fails to load for any reason.
pub fn open_initial_image<P: Prompter, W: Write>(
    image: Option<&Path>,
    prompter: &mut P,
    out: &mut W,
    loader: &dyn ImageLoader,
) -> io::Result<(PathBuf, PixelMatrix)> {
    if let Some(path) = image {
        match loader.load(path) {
            Ok(matrix) => return Ok((path.to_path_buf(), matrix)),
            Err(e) => writeln!(out, "Invalid image: {}. Please try again.", e)?,
        }
    }
    prompt_for_image(prompter, out, loader)
}

/// Open the interactive editor on stdin/stdout.
///
/// Closing stdin ends the session quietly, like choosing Exit.
pub fn run_interactive(
    image: Option<&Path>,
    settings: &Settings,
    loader: &dyn ImageLoader,
) -> Result<(), AppError> {
    let mut prompter = TerminalPrompter::stdio();
    let mut out = io::stdout();

    let opened = open_initial_image(image, &mut prompter, &mut out, loader);
    let result = opened.and_then(|(path, matrix)| {
        let session = Session::new(path, matrix, settings.ramp.clone());
        Menu::new(session, loader, prompter, out, settings.menu_options()).run()
    });

    match result {
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            log::debug!("input closed, leaving editor");
            Ok(())
        }
        other => Ok(other?),
    }
}

/// Handle config subcommand actions.
pub fn handle_config_action<W: Write>(
    action: ConfigAction,
    settings: &Settings,
    config_path: Option<&Path>,
    mut out: W,
) -> Result<(), AppError> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            writeln!(out, "Current configuration:")?;
            writeln!(out, "  Ramp: \"{}\" ({} levels)", settings.ramp, settings.ramp.len())?;
            writeln!(out, "  Output: {}", settings.output_path.display())?;
            writeln!(out, "  Max scale: {}%", settings.max_scale_percent)?;
            writeln!(out)?;
            if config_path.exists() {
                writeln!(out, "Config file: {} (exists)", config_path.display())?;
            } else {
                writeln!(out, "Config file: {} (not found)", config_path.display())?;
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(AppError::ConfigExists(config_path));
            }
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            log::info!("wrote default config to {}", config_path.display());
            writeln!(out, "Created config file: {}", config_path.display())?;
        }
    }
    Ok(())
}
