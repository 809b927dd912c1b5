use std::{fs::File, io, path::PathBuf};

use clap::Parser;
use ratmaze::{
    app::{self, AppError, RunOptions},
    logging,
    settings::Settings,
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "ratmaze")]
struct Args {
    #[clap(help = "Maze file, reads stdin when missing or `-`")]
    input: Option<PathBuf>,
    #[clap(short, long, help = "Settings file to use instead of the default one")]
    config: Option<PathBuf>,
    #[clap(short, long, action, help = "Don't print the maze after every move")]
    quiet: bool,
    #[clap(long, action, help = "Color the printed mazes")]
    color: bool,
    #[clap(long, help = "Log level: off, error, warn, info, debug or trace")]
    log_level: Option<String>,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, may be repeated")]
    verbose: u8,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config in debug format and quit")]
    debug_config: bool,
}

fn verbosity(base: log::LevelFilter, verbose: u8) -> log::LevelFilter {
    let levels = log::LevelFilter::iter().collect::<Vec<_>>();
    let idx = levels.iter().position(|&l| l == base).unwrap_or(0);
    levels[(idx + verbose as usize).min(levels.len() - 1)]
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.show_config_path {
        println!("{}", settings_path.display());
        return Ok(());
    }

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    better_panic::install();
    logging::init(log::LevelFilter::Warn);

    let settings = Settings::load(&settings_path)?;
    if args.debug_config {
        println!("{:#?}", settings);
        return Ok(());
    }

    let settings = match args.log_level {
        Some(level) => settings.set_log_level(level),
        None => settings,
    };
    let level = settings.get_log_level();
    logging::init(verbosity(level, args.verbose));

    let color = args.color || settings.get_color();
    if color {
        colored::control::set_override(true);
    }

    let opts = RunOptions {
        quiet: args.quiet || !settings.get_trace(),
        colors: color.then(|| settings.get_color_scheme()),
        check_level: settings.get_check_level(),
    };

    let stdout = io::stdout().lock();
    let result = match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => File::open(path)
            .map_err(AppError::from)
            .and_then(|file| app::run(file, stdout, &opts)),
        _ => app::run(io::stdin().lock(), stdout, &opts),
    };

    match result {
        Ok(outcome) => {
            log::debug!("{:?}", outcome);
            Ok(())
        }
        Err(err) => {
            log::error!("{}", err);
            Err(err)
        }
    }
}
