//! Interactive edit menu.
//!
//! The menu owns the [`Session`] and drives it from validated answers
//! supplied by a [`Prompter`]. Messages go to a separate writer so the whole
//! loop can be scripted in tests.

mod prompt;

pub use prompt::{Prompter, TerminalPrompter};

use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::DEFAULT_MAX_SCALE_PERCENT;
use crate::edit::{CropSide, EditState};
use crate::loader::ImageLoader;
use crate::output::{self, DEFAULT_OUTPUT_PATH};
use crate::session::Session;

/// Top-level menu entries, numbered from 1 in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ChangeImage,
    Display,
    Save,
    Invert,
    Threshold,
    Crop,
    Scale,
    Reset,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::ChangeImage,
        MenuChoice::Display,
        MenuChoice::Save,
        MenuChoice::Invert,
        MenuChoice::Threshold,
        MenuChoice::Crop,
        MenuChoice::Scale,
        MenuChoice::Reset,
        MenuChoice::Exit,
    ];

    /// Entry for a 1-based menu number.
    pub fn from_number(n: i64) -> Option<Self> {
        let idx = usize::try_from(n.checked_sub(1)?).ok()?;
        Self::ALL.get(idx).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ChangeImage => "Change image",
            MenuChoice::Display => "Display",
            MenuChoice::Save => "Save",
            MenuChoice::Invert => "Invert brightness",
            MenuChoice::Threshold => "Adjust threshold",
            MenuChoice::Crop => "Crop",
            MenuChoice::Scale => "Scale",
            MenuChoice::Reset => "Reset edits",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Settings the menu needs beyond the session itself.
#[derive(Debug, Clone)]
pub struct MenuOptions {
    /// Path offered by the save action.
    pub output_path: PathBuf,
    /// Upper bound for scale prompts.
    pub max_scale_percent: u32,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            max_scale_percent: DEFAULT_MAX_SCALE_PERCENT,
        }
    }
}

/// Interactive control loop over one editing session.
pub struct Menu<'a, P, W> {
    session: Session,
    loader: &'a dyn ImageLoader,
    prompter: P,
    out: W,
    options: MenuOptions,
}

impl<'a, P: Prompter, W: Write> Menu<'a, P, W> {
    pub fn new(
        session: Session,
        loader: &'a dyn ImageLoader,
        prompter: P,
        out: W,
        options: MenuOptions,
    ) -> Self {
        Self {
            session,
            loader,
            prompter,
            out,
            options,
        }
    }

    pub fn into_parts(self) -> (Session, P, W) {
        (self.session, self.prompter, self.out)
    }

    /// Show the menu and handle choices until the user exits.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let n = self
                .prompter
                .prompt_bounded_int("Choose an option: ", 1, MenuChoice::ALL.len() as i64)?;
            let Some(choice) = MenuChoice::from_number(n) else {
                continue;
            };
            if !self.handle(choice)? {
                writeln!(self.out, "Goodbye.")?;
                return Ok(());
            }
        }
    }

    /// Run one menu entry. Returns `false` when the loop should stop.
    pub fn handle(&mut self, choice: MenuChoice) -> io::Result<bool> {
        log::debug!("menu choice: {:?}", choice);
        match choice {
            MenuChoice::ChangeImage => self.change_image()?,
            MenuChoice::Display => self.display()?,
            MenuChoice::Save => self.save()?,
            MenuChoice::Invert => self.invert()?,
            MenuChoice::Threshold => self.threshold()?,
            MenuChoice::Crop => self.crop()?,
            MenuChoice::Scale => self.scale()?,
            MenuChoice::Reset => self.reset()?,
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Editing {}", self.session.source().display())?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            if *choice == MenuChoice::Invert {
                let state = if self.session.edits().inverted() { "on" } else { "off" };
                writeln!(self.out, "  {}. {} ({})", i + 1, choice.label(), state)?;
            } else {
                writeln!(self.out, "  {}. {}", i + 1, choice.label())?;
            }
        }
        Ok(())
    }

    fn change_image(&mut self) -> io::Result<()> {
        let path = self.prompter.prompt_path("Image file: ")?;
        match self.session.load_image(self.loader, &path) {
            Ok(()) => {
                let m = self.session.matrix();
                writeln!(
                    self.out,
                    "Loaded {} ({}x{}). Edits were reset.",
                    path.display(),
                    m.width(),
                    m.height()
                )
            }
            Err(e) => {
                log::warn!("{}", e);
                writeln!(self.out, "Could not load image: {}", e)
            }
        }
    }

    fn display(&mut self) -> io::Result<()> {
        let grid = self.session.render();
        if grid.is_empty() {
            return writeln!(self.out, "(the current edits leave nothing to display)");
        }
        output::display(&grid, &mut self.out).map_err(io::Error::other)
    }

    fn save(&mut self) -> io::Result<()> {
        let default = self.options.output_path.clone();
        let question = format!("Save to {}? (y/n): ", default.display());
        let path = if self.prompter.prompt_yes_no(&question)? {
            default
        } else {
            self.prompter.prompt_path("File to save to: ")?
        };

        match output::save(&self.session.render(), &path) {
            Ok(()) => writeln!(self.out, "Saved to {}.", path.display()),
            Err(e) => {
                log::warn!("{}", e);
                writeln!(self.out, "Could not save: {}", e)
            }
        }
    }

    fn invert(&mut self) -> io::Result<()> {
        let on = self.session.toggle_invert();
        writeln!(self.out, "Inversion is now {}.", if on { "on" } else { "off" })
    }

    fn threshold(&mut self) -> io::Result<()> {
        let snapshot = self.session.edits().snapshot();
        {
            let e = self.session.edits();
            writeln!(
                self.out,
                "Pixels outside {}-{} are drawn as {}.",
                e.min_threshold(),
                e.max_threshold(),
                e.fill()
            )?;
        }

        let min = self
            .prompter
            .prompt_bounded_int("Minimum brightness to keep (0-255): ", 0, 255)?;
        let max = self.prompter.prompt_bounded_int(
            &format!("Maximum brightness to keep ({}-255): ", min),
            min,
            255,
        )?;
        let fill = self
            .prompter
            .prompt_bounded_int("Brightness for pixels outside the range (0-255): ", 0, 255)?;

        if let Err(e) = self.session.set_threshold(Some(min), Some(max), Some(fill)) {
            writeln!(self.out, "{}", e)?;
        }
        self.report_changes(&snapshot)
    }

    fn crop(&mut self) -> io::Result<()> {
        let snapshot = self.session.edits().snapshot();
        let back = CropSide::ALL.len() as i64 + 1;

        loop {
            let (w, h) = self.session.edits().cropped_dimensions();
            writeln!(self.out, "Cropped size: {}x{}", w, h)?;
            for (i, side) in CropSide::ALL.iter().enumerate() {
                writeln!(
                    self.out,
                    "  {}. {} ({})",
                    i + 1,
                    side,
                    self.session.edits().crop(*side)
                )?;
            }
            writeln!(self.out, "  {}. Back", back)?;

            let n = self.prompter.prompt_bounded_int("Side to crop: ", 1, back)?;
            if n == back {
                break;
            }
            let side = CropSide::ALL[(n - 1) as usize];
            let max = self.session.edits().max_crop(side) as i64;
            let amount = self
                .prompter
                .prompt_bounded_int(&format!("Pixels to remove from the {} (0-{}): ", side, max), 0, max)?;
            if let Err(e) = self.session.set_crop(side, amount) {
                writeln!(self.out, "{}", e)?;
            }
        }

        self.report_changes(&snapshot)
    }

    fn scale(&mut self) -> io::Result<()> {
        let snapshot = self.session.edits().snapshot();
        let max = self.options.max_scale_percent as i64;
        {
            let e = self.session.edits();
            writeln!(
                self.out,
                "Current scale: {}% x {}%",
                e.scale_width_percent(),
                e.scale_height_percent()
            )?;
        }

        let width = self
            .prompter
            .prompt_bounded_int(&format!("Width percent (0-{}): ", max), 0, max)?;
        let height = self
            .prompter
            .prompt_bounded_int(&format!("Height percent (0-{}): ", max), 0, max)?;
        if let Err(e) = self.session.set_scale(Some(width), Some(height)) {
            writeln!(self.out, "{}", e)?;
        }
        self.report_changes(&snapshot)
    }

    fn reset(&mut self) -> io::Result<()> {
        if self.prompter.prompt_yes_no("Reset all edits? (y/n): ")? {
            self.session.reset_edits();
            writeln!(self.out, "Edits reset.")
        } else {
            writeln!(self.out, "Edits kept.")
        }
    }

    fn report_changes(&mut self, snapshot: &EditState) -> io::Result<()> {
        if self.session.edits().has_changed_from(snapshot) {
            writeln!(self.out, "Changes saved.")
        } else {
            writeln!(self.out, "No changes made.")
        }
    }
}
