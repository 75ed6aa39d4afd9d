mod app;
mod command;
mod config;
mod consts;
mod engine;
mod util;
mod view;
use crate::app::App;
use crate::config::Config;
use crate::engine::Engine;
use anyhow::Context;
use lexopt::{Arg, Parser};
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match Command::from_parser(Parser::from_env()) {
        Ok(Command::Run(args)) => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("gridsnake: {e:?}");
                ExitCode::from(2)
            }
        },
        Ok(Command::Help) => {
            print!("{}", Command::USAGE);
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    if let Some(path) = args.log_file {
        init_logging(path)?;
    }
    let config = match args.config {
        Some(path) => Config::load(&path, false),
        None => Config::default_path().and_then(|path| Config::load(&path, true)),
    }
    .context("failed to load configuration")?;
    let bounds = config.grid.bounds().context("invalid configuration")?;
    tracing::info!(
        width = bounds.width(),
        height = bounds.height(),
        "Starting game"
    );
    let mut engine = Engine::new(bounds);
    engine.set_show_grid(config.grid.show_lines);
    let terminal = ratatui::init();
    let r = set_focus_reporting(&mut io::stdout(), true)
        .and_then(|()| App::new(engine).run(terminal))
        .and(set_focus_reporting(&mut io::stdout(), false));
    ratatui::restore();
    match r {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        r => r.context("terminal I/O failed"),
    }
}

/// Turn the terminal's reporting of focus changes on or off.  Without it, no
/// `FocusLost` events arrive and the game cannot pause itself.
fn set_focus_reporting<W: Write>(out: &mut W, enabled: bool) -> io::Result<()> {
    if enabled {
        execute!(out, EnableFocusChange)
    } else {
        execute!(out, DisableFocusChange)
    }
}

/// Send log messages to the given file.  The terminal is occupied by the game,
/// so nothing is logged unless a file is given.
fn init_logging(path: PathBuf) -> anyhow::Result<()> {
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file.into_parts().0))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

impl Command {
    const USAGE: &'static str = "Usage: gridsnake [-c|--config <FILE>] [--log-file <FILE>]\n\
        \n\
        Play Snake on a fixed grid in the terminal\n\
        \n\
        Options:\n\
        \x20 -c, --config <FILE>   Read configuration from <FILE>\n\
        \x20     --log-file <FILE> Append diagnostic logs to <FILE>\n\
        \x20 -h, --help            Display this help message and exit\n\
        \x20 -V, --version         Show the program version and exit\n";

    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_iter(
            std::iter::once("gridsnake").chain(args.iter().copied()),
        ))
    }

    #[rstest]
    #[case(&[], Command::Run(Arguments::default()))]
    #[case(&["-c", "snake.toml"], Command::Run(Arguments {
        config: Some(PathBuf::from("snake.toml")),
        log_file: None,
    }))]
    #[case(&["--config=snake.toml", "--log-file", "snake.log"], Command::Run(Arguments {
        config: Some(PathBuf::from("snake.toml")),
        log_file: Some(PathBuf::from("snake.log")),
    }))]
    #[case(&["--help"], Command::Help)]
    #[case(&["-c", "snake.toml", "-h"], Command::Help)]
    #[case(&["-V"], Command::Version)]
    fn test_parse(#[case] args: &[&str], #[case] cmd: Command) {
        assert_eq!(parse(args).unwrap(), cmd);
    }

    #[rstest]
    #[case(true, "\x1B[?1004h")]
    #[case(false, "\x1B[?1004l")]
    fn test_set_focus_reporting(#[case] enabled: bool, #[case] expected: &str) {
        let mut out = Vec::new();
        set_focus_reporting(&mut out, enabled).unwrap();
        assert_eq!(out, expected.as_bytes());
    }

    #[rstest]
    #[case(&["--speed", "3"])]
    #[case(&["extra"])]
    #[case(&["--config"])]
    fn test_parse_error(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
