//! Command-line argument parsing.

use std::path::PathBuf;

/// Parsed CLI invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Run the dashboard (default)
    Run(RunOptions),
    /// Unusable arguments; carries the message to print
    Invalid(String),
}

/// Options for a dashboard run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Dataset file to load.
    pub data_path: PathBuf,
    /// Optional layout configuration file.
    pub config_path: Option<PathBuf>,
    /// Optional log destination; without it, tracing output is dropped
    /// (the terminal itself is the UI).
    pub log_file: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/leaderlist.csv"),
            config_path: None,
            log_file: None,
        }
    }
}

/// Parse command-line arguments and return the command to execute.
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1); // program name
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--data" => match args.next() {
                Some(value) => options.data_path = PathBuf::from(value),
                None => return missing_value("--data"),
            },
            "--config" => match args.next() {
                Some(value) => options.config_path = Some(PathBuf::from(value)),
                None => return missing_value("--config"),
            },
            "--log-file" => match args.next() {
                Some(value) => options.log_file = Some(PathBuf::from(value)),
                None => return missing_value("--log-file"),
            },
            other => return CliCommand::Invalid(format!("unrecognized argument `{other}`")),
        }
    }
    CliCommand::Run(options)
}

fn missing_value(flag: &str) -> CliCommand {
    CliCommand::Invalid(format!("{flag} requires a value"))
}
