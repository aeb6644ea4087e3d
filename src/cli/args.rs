//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::CharacterSet;

/// Convert an image to ASCII art and edit it interactively
#[derive(Parser, Debug)]
#[command(name = "img-to-ascii")]
#[command(version, about = "Convert images to ASCII art", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Open an image in the interactive editor
    img-to-ascii cat.png

    # Use the block ramp and save to art.txt by default
    img-to-ascii cat.png --charset blocks --output art.txt

    # One-shot render: invert, crop 10px left, half size
    img-to-ascii render cat.png --invert --crop-left 10 --scale-width 50 --scale-height 50")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image to open (asked for when omitted)
    pub image: Option<PathBuf>,

    /// ASCII character set
    #[arg(long, global = true)]
    pub charset: Option<CharacterSet>,

    /// Custom glyph ramp, darkest first (overrides --charset)
    #[arg(long, global = true, value_name = "GLYPHS")]
    pub ramp: Option<String>,

    /// Default file for the save action
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render an image once with the given edits and exit
    Render(RenderArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Edits applied by the `render` subcommand.
///
/// Values are checked by the same rules as the interactive editor, so
/// out-of-range numbers are reported rather than clamped.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Image to render
    pub image: PathBuf,

    /// Invert brightness before thresholding
    #[arg(long)]
    pub invert: bool,

    /// Minimum brightness kept (0-255)
    #[arg(long = "min", value_name = "N", allow_negative_numbers = true)]
    pub min_threshold: Option<i64>,

    /// Maximum brightness kept (0-255)
    #[arg(long = "max", value_name = "N", allow_negative_numbers = true)]
    pub max_threshold: Option<i64>,

    /// Brightness for pixels outside the min/max window (0-255)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub fill: Option<i64>,

    /// Pixels removed from the left edge
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub crop_left: Option<i64>,

    /// Pixels removed from the right edge
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub crop_right: Option<i64>,

    /// Pixels removed from the top edge
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub crop_top: Option<i64>,

    /// Pixels removed from the bottom edge
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub crop_bottom: Option<i64>,

    /// Width scale in percent
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub scale_width: Option<i64>,

    /// Height scale in percent
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub scale_height: Option<i64>,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["img-to-ascii"]);
        assert!(args.command.is_none());
        assert!(args.image.is_none());
        assert!(args.charset.is_none());
        assert!(args.ramp.is_none());
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_image_positional() {
        let args = Args::parse_from(["img-to-ascii", "cat.png"]);
        assert_eq!(args.image, Some(PathBuf::from("cat.png")));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_args_charset_values() {
        let args = Args::parse_from(["img-to-ascii", "--charset", "standard"]);
        assert_eq!(args.charset, Some(CharacterSet::Standard));

        let args = Args::parse_from(["img-to-ascii", "--charset", "blocks"]);
        assert_eq!(args.charset, Some(CharacterSet::Blocks));

        let args = Args::parse_from(["img-to-ascii", "--charset", "minimal"]);
        assert_eq!(args.charset, Some(CharacterSet::Minimal));

        let args = Args::parse_from(["img-to-ascii", "--charset", "detailed"]);
        assert_eq!(args.charset, Some(CharacterSet::Detailed));

        assert!(Args::try_parse_from(["img-to-ascii", "--charset", "braille"]).is_err());
    }

    #[test]
    fn test_args_verbose_count() {
        let args = Args::parse_from(["img-to-ascii", "-vv"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_args_output_and_config() {
        let args = Args::parse_from([
            "img-to-ascii",
            "-o",
            "art.txt",
            "--config",
            "/tmp/config.toml",
        ]);
        assert_eq!(args.output, Some(PathBuf::from("art.txt")));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/config.toml")));
    }

    #[test]
    fn test_args_render_subcommand() {
        let args = Args::parse_from([
            "img-to-ascii",
            "render",
            "cat.png",
            "--invert",
            "--min",
            "10",
            "--max",
            "200",
            "--fill",
            "0",
            "--crop-left",
            "3",
            "--crop-bottom",
            "2",
            "--scale-width",
            "50",
            "--ramp",
            " #",
            "-v",
        ]);
        let Some(Command::Render(r)) = args.command else {
            panic!("Expected Render subcommand");
        };
        assert_eq!(r.image, PathBuf::from("cat.png"));
        assert!(r.invert);
        assert_eq!(r.min_threshold, Some(10));
        assert_eq!(r.max_threshold, Some(200));
        assert_eq!(r.fill, Some(0));
        assert_eq!(r.crop_left, Some(3));
        assert_eq!(r.crop_right, None);
        assert_eq!(r.crop_bottom, Some(2));
        assert_eq!(r.scale_width, Some(50));
        assert_eq!(r.scale_height, None);
        assert!(r.output.is_none());
        // Global flags land on the top-level struct.
        assert_eq!(args.ramp.as_deref(), Some(" #"));
        assert_eq!(args.verbose, 1);
    }

    #[test]
    fn test_args_render_accepts_negative_values() {
        let args = Args::parse_from(["img-to-ascii", "render", "cat.png", "--crop-top", "-4"]);
        let Some(Command::Render(r)) = args.command else {
            panic!("Expected Render subcommand");
        };
        assert_eq!(r.crop_top, Some(-4));
    }

    #[test]
    fn test_args_config_show_subcommand() {
        let args = Args::parse_from(["img-to-ascii", "config", "show"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Show,
            }) => (),
            _ => panic!("Expected Config Show subcommand"),
        }
    }

    #[test]
    fn test_args_config_init_subcommand() {
        let args = Args::parse_from(["img-to-ascii", "config", "init"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Init,
            }) => (),
            _ => panic!("Expected Config Init subcommand"),
        }
    }
}
