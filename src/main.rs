use clap::Parser;

use img_to_ascii::cli::{self, Args, Command, ConfigAction, Settings};
use img_to_ascii::config::Config;
use img_to_ascii::error::AppError;
use img_to_ascii::loader::FileImageLoader;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<(), AppError> {
    // `config init` may target a file that does not exist yet.
    let config = match args.command {
        Some(Command::Config {
            action: ConfigAction::Init,
        }) => Config::default(),
        _ => cli::load_config(args.config.as_deref())?,
    };
    let settings = Settings::resolve(&args, &config)?;
    let loader = FileImageLoader;

    match args.command {
        Some(Command::Render(ref render_args)) => {
            cli::run_render(render_args, &settings, &loader, std::io::stdout().lock())
        }
        Some(Command::Config { ref action }) => cli::handle_config_action(
            action.clone(),
            &settings,
            args.config.as_deref(),
            std::io::stdout().lock(),
        ),
        None => cli::run_interactive(args.image.as_deref(), &settings, &loader),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
