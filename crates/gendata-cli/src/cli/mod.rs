mod commands;
mod helpers;

use clap::Parser;
use gendata_core::domain::GenDataError;
use std::ffi::OsString;

pub const PROGRAM_NAME: &str = "matmul-gendata";

pub fn run_from_env() -> i32 {
    let args: Vec<OsString> = std::env::args_os().collect();

    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            let diagnostic = error.as_gendata_error();
            eprintln!("{}", diagnostic.diagnostic_line());
            eprintln!("{}", diagnostic.fatal_exit_line());
            diagnostic.exit_code()
        }
    }
}

#[cfg(test)]
fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let full_args = std::iter::once(OsString::from(PROGRAM_NAME))
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<OsString>) -> Result<i32, CliError> {
    let command_line = args
        .iter()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ");
    match Cli::try_parse_from(&args) {
        Ok(cli) => commands::run_generate_command(cli.generate, &command_line),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "Generate deterministic matrix-multiply fixtures as a C header"
)]
struct Cli {
    #[command(flatten)]
    generate: commands::GenerateArgs,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Generate(GenDataError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_gendata_error(&self) -> GenDataError {
        match self {
            Self::Usage(message) => {
                GenDataError::input_validation("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Generate(error) => error.clone(),
            Self::Internal(error) => GenDataError::internal("SYS.CLI", format!("{error:#}")),
        }
    }
}
