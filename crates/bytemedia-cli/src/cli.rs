use bytemedia_core::reader::DEFAULT_CHUNK_SIZE;
use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct CliArgs {
    /// Bytes per buffered read of the input file
    #[arg(long = "chunk-size", global = true, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Audio(audio::AudioArgs),
    Image(image::ImageArgs),
    Restore(restore::RestoreArgs),
}
