use std::process::ExitCode;

use bytemedia_core::ByteMediaError;
use clap::Parser;
use env_logger::Env;
use log::error;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = Result<T, ByteMediaError>;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::from(1);
        }
        Err(e) => e.exit(),
    };

    let result = match args.command {
        Commands::Audio(cmd) => cmd.run(args.chunk_size),
        Commands::Image(cmd) => cmd.run(args.chunk_size),
        Commands::Restore(cmd) => cmd.run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            exit_code_of(&e)
        }
    }
}

/// Only fatal errors fail the process, everything else has been reported already
fn exit_code_of(e: &ByteMediaError) -> ExitCode {
    if e.is_fatal() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
