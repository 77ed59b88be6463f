mod cli;
mod commands;
mod io;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use commands::CommandHandler;
use ulid_uuid::{error, types, UlidUuidError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let input = cli
        .input
        .as_deref()
        .ok_or_else(|| UlidUuidError::usage("Please give one Parameter to convert!"))?;

    let handler = commands::ConvertCommand {
        input: types::InputSource::parse(input),
        mode: cli.mode(),
        newline: !cli.no_newline,
        json: cli.json,
    };

    handler.execute()
}
