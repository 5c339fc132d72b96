mod app;
mod args;
mod clock;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod util;
use crate::app::{CrosstermEvents, GameLoop};
use crate::args::{Arguments, CliCommand};
use crate::clock::Ticker;
use crate::config::Config;
use crate::game::Game;
use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match CliCommand::from_parser(lexopt::Parser::from_env()) {
        Ok(CliCommand::Run(args)) => args,
        Ok(CliCommand::Help) => {
            print!("{}", args::USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(CliCommand::Version) => {
            println!("torsnake {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("torsnake: {e}");
            eprintln!("Try 'torsnake --help' for more information.");
            return ExitCode::from(2);
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("torsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let config = match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::default_path().and_then(|path| Config::load(&path, true)),
    }
    .context("failed to load configuration")?;
    if let Some(path) = args.log_file.as_ref().or(config.log_file.as_ref()) {
        logging::init(path).context("failed to set up logging")?;
    }
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let game = Game::new(config.grid(), rng);
    let ticker = Ticker::new(config.ticks_per_second);
    log::info!(
        "Starting game on a {}x{} grid, one tick every {:?}",
        config.width,
        config.height,
        ticker.period()
    );
    let mut terminal = ratatui::init();
    let r = GameLoop::new(game, ticker).run(&mut CrosstermEvents, &mut terminal);
    ratatui::restore();
    r.context("game loop failed")
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}
