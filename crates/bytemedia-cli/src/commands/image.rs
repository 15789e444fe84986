use std::path::PathBuf;

use clap::Args;
use log::info;

use crate::CliResult;

/// Turns the bytes of any file into a square PNG image
#[derive(Args, Debug)]
pub struct ImageArgs {
    /// File whose bytes become the pixels
    #[arg(value_name = "input file")]
    pub input: PathBuf,

    /// Target image file, defaults to the input file name plus `.png`
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub output: Option<PathBuf>,
}

impl ImageArgs {
    pub fn run(self, chunk_size: usize) -> CliResult<()> {
        let summary =
            bytemedia_core::commands::image(&self.input, self.output.as_deref(), chunk_size)?;
        info!("{summary}");

        Ok(())
    }
}
