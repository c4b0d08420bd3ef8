use crate::config::{Config, ConfigError};
use crate::game::Pacing;
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) const USAGE: &str = concat!(
    "Usage: tuisnake [<options>]\n",
    "\n",
    "Play Snake in the terminal\n",
    "\n",
    "Options:\n",
    "  -c, --config <file>     Read configuration from the given file\n",
    "      --pacing <mode>     Step pacing: \"fixed\" or \"smooth\"\n",
    "      --board-size <n>    Number of cells along each side of the board\n",
    "      --log-file <file>   Write log messages to the given file\n",
    "  -h, --help              Display this help message and exit\n",
    "  -V, --version           Show the program version and exit\n",
);

/// What the command line asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Invocation {
    Run(Arguments),
    Help,
    Version,
}

impl Invocation {
    pub(crate) fn from_env() -> Result<Invocation, lexopt::Error> {
        Invocation::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("pacing") => args.pacing = Some(parser.value()?.parse()?),
                Arg::Long("board-size") => args.board_size = Some(parser.value()?.parse()?),
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run(args))
    }
}

/// Command-line overrides for the configuration file
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    config: Option<PathBuf>,
    pacing: Option<Pacing>,
    board_size: Option<u16>,
    log_file: Option<PathBuf>,
}

impl Arguments {
    /// Load the configuration file (either the one given on the command line
    /// or the default one, if it exists) and apply the command-line overrides
    pub(crate) fn load_config(&self) -> Result<Config, ConfigError> {
        let config = match self.config {
            Some(ref path) => Config::load(path, false)?,
            None => match Config::default_path() {
                Ok(path) => Config::load(&path, true)?,
                Err(_) => Config::default(),
            },
        };
        self.apply(config)
    }

    fn apply(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(pacing) = self.pacing {
            config.pacing = pacing;
        }
        if let Some(board_size) = self.board_size {
            config.board_size = board_size;
        }
        if let Some(ref log_file) = self.log_file {
            config.log_file = Some(log_file.clone());
        }
        config.validate()
    }
}
