// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::ui::notifications::Category;
use iced_toast::ui::theming::ThemeMode;
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
iced_toast: single-slot animated toast playground

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --message TEXT      Toast to show at startup
  --category NAME     info, success, warning or error
  --duration MS       Display time of the startup toast, 0 keeps it
  --config PATH       Settings file to use instead of the platform default
  --theme MODE        light, dark or system
  --top-inset PX      Space kept free above the toast
  --log-level LEVEL   off, error, warn, info, debug or trace
  -h, --help          Print this help
";

struct Cli {
    flags: Flags,
    level: LevelFilter,
    unexpected: Vec<std::ffi::OsString>,
}

fn parse_args() -> Result<Cli, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let level = args
        .opt_value_from_str("--log-level")?
        .unwrap_or(LevelFilter::Info);
    let flags = Flags {
        message: args.opt_value_from_str("--message")?,
        category: args.opt_value_from_fn("--category", str::parse::<Category>)?,
        duration_ms: args.opt_value_from_str("--duration")?,
        config_path: args.opt_value_from_os_str("--config", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
        top_inset: args.opt_value_from_str("--top-inset")?,
    };

    Ok(Cli {
        flags,
        level,
        unexpected: args.finish(),
    })
}

fn main() -> ExitCode {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let cli = match parse_args() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(cli.level)
        .with_colors(true)
        .with_local_timestamps()
        .init()
    {
        eprintln!("failed to build logger instance: {err}");
    }

    if !cli.unexpected.is_empty() {
        log::warn!("ignoring unexpected arguments: {:?}", cli.unexpected);
    }

    match app::run(cli.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("application exited with an error: {err}");
            ExitCode::FAILURE
        }
    }
}
