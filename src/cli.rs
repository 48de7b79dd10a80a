//! Command-line surface of the `nth_conway` binary.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::life::Seed;
use crate::render::Polarity;

pub const HELP: &str = "\
nth_conway (0.1)

USAGE:
    nth_conway {n} {width} {height} {size} [OPTIONS]

    n      -- The number of iterations to run Conway's Game of Life
    width  -- The width of the visible game board
    height -- The height of the visible game board
    size   -- The size of pixels on the game board

OPTIONS:
    --seed N         Seed the initial board (default: current time)
    --output PATH    Where to write the final board (default: conway.png)
    --invert         Draw live cells white instead of black
    --quiet          Do not print generations to the console
    -h, --help       Print this help
";

pub const DEFAULT_OUTPUT: &str = "conway.png";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("expected integer greater than 0 for '{name}', got '{value}'")]
    NotPositive { name: &'static str, value: String },
    #[error("expected non-negative integer for '{name}', got '{value}'")]
    NotCount { name: &'static str, value: String },
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// Everything a run of the binary needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Generations to advance; the console shows `generations + 1` boards.
    pub generations: usize,
    pub width: usize,
    pub height: usize,
    /// Side length in pixels of one cell in the output image.
    pub pixel_size: usize,
    pub seed: Seed,
    pub output: PathBuf,
    pub polarity: Polarity,
    /// Skip printing generations.
    pub quiet: bool,
}

impl RunConfig {
    pub fn new(generations: usize, width: usize, height: usize, pixel_size: usize) -> Self {
        Self {
            generations,
            width,
            height,
            pixel_size,
            seed: Seed::Clock,
            output: PathBuf::from(DEFAULT_OUTPUT),
            polarity: Polarity::AliveDark,
            quiet: false,
        }
    }

    pub fn seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    pub fn polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(RunConfig),
}

fn positive(value: &str, name: &'static str) -> Result<usize, CliError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::NotPositive {
            name,
            value: value.to_string(),
        }),
    }
}

fn count<T: FromStr>(value: &str, name: &'static str) -> Result<T, CliError> {
    value.parse::<T>().map_err(|_| CliError::NotCount {
        name,
        value: value.to_string(),
    })
}

/// Options that consume the following argument as their value.
const VALUE_FLAGS: [&str; 2] = ["--seed", "--output"];

/// Whether `-h`/`--help` appears anywhere other than as an option's value.
fn wants_help(args: &[&str]) -> bool {
    let mut i = 0;
    while i < args.len() {
        match args[i] {
            "-h" | "--help" => return true,
            flag if VALUE_FLAGS.contains(&flag) => i += 2,
            _ => i += 1,
        }
    }
    false
}

/// Parse arguments, excluding the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, CliError> {
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    if wants_help(&args) {
        return Ok(Command::Help);
    }

    let mut positional = Vec::with_capacity(4);
    let mut seed = None;
    let mut output = None;
    let mut invert = false;
    let mut quiet = false;

    let mut i = 0;
    while i < args.len() {
        match args[i] {
            "--seed" => {
                i += 1;
                let value = args.get(i).ok_or(CliError::MissingValue { flag: "--seed" })?;
                seed = Some(count(value, "--seed")?);
            }
            "--output" => {
                i += 1;
                let value = args.get(i).ok_or(CliError::MissingValue { flag: "--output" })?;
                output = Some(PathBuf::from(value));
            }
            "--invert" => invert = true,
            "--quiet" => quiet = true,
            other if other.starts_with("--") => {
                return Err(CliError::UnknownArgument(other.to_string()));
            }
            other => positional.push(other),
        }
        i += 1;
    }

    let [n, width, height, size] = positional[..] else {
        return Ok(Command::Help);
    };

    let mut config = RunConfig::new(
        count(n, "n")?,
        positive(width, "width")?,
        positive(height, "height")?,
        positive(size, "size")?,
    )
    .quiet(quiet);
    if let Some(seed) = seed {
        config = config.seed(Seed::Fixed(seed));
    }
    if let Some(output) = output {
        config = config.output(output);
    }
    if invert {
        config = config.polarity(Polarity::AliveLight);
    }
    Ok(Command::Run(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_config(args: &[&str]) -> RunConfig {
        match parse_args(args) {
            Ok(Command::Run(config)) => config,
            other => panic!("expected a run, got {other:?}"),
        }
    }

    #[test]
    fn positional_arguments() {
        let config = run_config(&["10", "40", "20", "3"]);
        assert_eq!(config, RunConfig::new(10, 40, 20, 3));
        assert_eq!(config.output, PathBuf::from("conway.png"));
        assert_eq!(config.seed, Seed::Clock);
        assert_eq!(config.polarity, Polarity::AliveDark);
        assert!(!config.quiet);
    }

    #[test]
    fn zero_generations_is_allowed() {
        assert_eq!(run_config(&["0", "1", "1", "1"]).generations, 0);
    }

    #[test]
    fn options_anywhere() {
        let config = run_config(&[
            "--seed", "42", "5", "8", "--quiet", "6", "2", "--output", "out.png", "--invert",
        ]);
        assert_eq!(
            config,
            RunConfig::new(5, 8, 6, 2)
                .seed(Seed::Fixed(42))
                .output("out.png")
                .polarity(Polarity::AliveLight)
                .quiet(true)
        );
    }

    #[test]
    fn help_flags_and_wrong_arity() {
        assert_eq!(parse_args(&["-h"]), Ok(Command::Help));
        assert_eq!(parse_args(&["1", "2", "--help", "3", "4"]), Ok(Command::Help));
        assert_eq!(parse_args::<&str>(&[]), Ok(Command::Help));
        assert_eq!(parse_args(&["1", "2", "3"]), Ok(Command::Help));
        assert_eq!(parse_args(&["1", "2", "3", "4", "5"]), Ok(Command::Help));
    }

    #[test]
    fn help_flag_as_option_value_is_not_help() {
        let config = run_config(&["3", "4", "4", "1", "--output", "-h"]);
        assert_eq!(config.output, PathBuf::from("-h"));
        let config = run_config(&["--output", "--help", "3", "4", "4", "1"]);
        assert_eq!(config.output, PathBuf::from("--help"));
        assert_eq!(
            parse_args(&["3", "4", "4", "1", "--output", "out.png", "-h"]),
            Ok(Command::Help)
        );
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            parse_args(&["1", "0", "2", "3"]),
            Err(CliError::NotPositive {
                name: "width",
                value: "0".into()
            })
        );
        assert_eq!(
            parse_args(&["1", "2", "-2", "3"]),
            Err(CliError::NotPositive {
                name: "height",
                value: "-2".into()
            })
        );
        assert_eq!(
            parse_args(&["1", "2", "2", "x"]),
            Err(CliError::NotPositive {
                name: "size",
                value: "x".into()
            })
        );
        assert_eq!(
            parse_args(&["-1", "2", "2", "2"]),
            Err(CliError::NotCount {
                name: "n",
                value: "-1".into()
            })
        );
    }

    #[test]
    fn option_errors() {
        assert_eq!(
            parse_args(&["1", "2", "3", "4", "--seed"]),
            Err(CliError::MissingValue { flag: "--seed" })
        );
        assert_eq!(
            parse_args(&["1", "2", "3", "4", "--fast"]),
            Err(CliError::UnknownArgument("--fast".into()))
        );
    }
}
