use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) const USAGE: &str = "\
Usage: torsnake [<options>]

Play snake on a wrap-around grid in the terminal.

Options:
  -c, --config <PATH>   Read configuration from the given file
      --log-file <PATH> Write log messages to the given file
      --seed <N>        Seed the random number generator
  -h, --help            Display this help message and exit
  -V, --version         Show the program version and exit
";

/// What the command line asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CliCommand {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) seed: Option<u64>,
}

impl CliCommand {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<CliCommand, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(CliCommand::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CliCommand::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CliCommand::Run(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, lexopt::Error> {
        CliCommand::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).unwrap(), CliCommand::Run(Arguments::default()));
    }

    #[test]
    fn all_args() {
        assert_eq!(
            parse(&["-c", "snake.toml", "--log-file", "snake.log", "--seed", "42"]).unwrap(),
            CliCommand::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                log_file: Some(PathBuf::from("snake.log")),
                seed: Some(42),
            })
        );
    }

    #[test]
    fn long_config_with_equals() {
        assert_eq!(
            parse(&["--config=other.toml"]).unwrap(),
            CliCommand::Run(Arguments {
                config: Some(PathBuf::from("other.toml")),
                ..Arguments::default()
            })
        );
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse(&["--seed", "1", "--help"]).unwrap(), CliCommand::Help);
        assert_eq!(parse(&["-V"]).unwrap(), CliCommand::Version);
    }

    #[test]
    fn bad_seed() {
        assert!(parse(&["--seed", "snek"]).is_err());
    }

    #[test]
    fn missing_value() {
        assert!(parse(&["--config"]).is_err());
    }

    #[test]
    fn unexpected_argument() {
        assert!(parse(&["--speed", "3"]).is_err());
        assert!(parse(&["positional"]).is_err());
    }
}
