mod app;
mod args;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::args::{Invocation, USAGE};
use crate::config::Config;
use anyhow::Context;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tuisnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args = match Invocation::from_env()? {
        Invocation::Run(args) => args,
        Invocation::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        Invocation::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };
    let config = args
        .load_config()
        .context("failed to load configuration")?;
    init_logging(&config)?;
    log::info!(
        "Starting {} {} on a {size}x{size} board",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        size = config.board_size
    );
    let terminal = ratatui::init();
    let r = crossterm::execute!(io::stdout(), EnableFocusChange)
        .and_then(|()| App::new(&config).run(terminal));
    if let Err(e) = crossterm::execute!(io::stdout(), DisableFocusChange) {
        log::warn!("Failed to disable focus change reporting: {e}");
    }
    ratatui::restore();
    r.context("terminal I/O failed")
}

/// Send log messages to the configured log file, if any
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let Some(ref path) = config.log_file else {
        return Ok(());
    };
    let file = fs_err::File::create(path).context("failed to open log file")?;
    simplelog::WriteLogger::init(config.log_level, simplelog::Config::default(), file)
        .context("failed to initialize logging")
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}
