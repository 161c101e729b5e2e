mod app;
mod command;
mod config;
mod consts;
mod display;
mod game;
mod input;
mod logging;
mod ticker;
use crate::app::App;
use crate::config::{Config, ConfigError};
use crate::display::TerminalDisplay;
use crate::game::Grid;
use crate::input::TerminalInput;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: wrapsnake [options]

Play Snake on a field whose edges wrap around.

Steer with the arrow keys, wasd, or hjkl.  p, Space, or Esc pauses; f toggles
fast mode; q or Ctrl-C quits.

Options:
  -c, --config <FILE>     Read configuration from <FILE>
  -l, --log-file <FILE>   Write log messages to <FILE>
  -h, --help              Show this help and exit
  -V, --version           Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Mode {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

impl Mode {
    fn from_parser(mut parser: Parser) -> Result<Mode, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('l') | Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Mode::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Mode::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Mode::Run(args))
    }
}

fn main() -> ExitCode {
    match Mode::from_parser(Parser::from_env()) {
        Ok(Mode::Run(args)) => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("{e:?}");
                eprintln!("wrapsnake: {e:?}");
                ExitCode::FAILURE
            }
        },
        Ok(Mode::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Mode::Version) => {
            println!("wrapsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("wrapsnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    if let Some(path) = args.log_file.as_ref().or(config.logging.file.as_ref()) {
        logging::init(path, config.logging.level)
            .with_context(|| format!("failed to set up logging to {}", path.display()))?;
    }
    let (cols, rows) = crossterm::terminal::size().context("failed to get terminal size")?;
    let grid = Grid::new(rows, cols)?;
    let app = App::new(grid, &config.game);
    let mut input = TerminalInput::new()?;
    let terminal = ratatui::init();
    let r = app.run(&mut input, TerminalDisplay::new(terminal, grid));
    drop(input);
    ratatui::restore();
    r.map_err(Into::into)
}

/// Load the configuration file given on the command line, or else the one at
/// the default location if there is one
fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => Config::load(p, false),
        None => match Config::default_path() {
            Ok(p) => Config::load(&p, true),
            Err(ConfigError::NoPath) => Ok(Config::default()),
            Err(e) => Err(e),
        },
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe)
}
