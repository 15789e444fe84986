use std::path::PathBuf;

use bytemedia_core::media::SampleScale;
use clap::Args;

use crate::CliResult;

/// Restores the bytes behind a generated WAV or PNG file
#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// WAV or PNG file created by `audio` or `image`
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Restored data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,

    /// The audio was created with `--normalize`
    #[arg(short, long)]
    pub normalize: bool,

    /// Keep only this many bytes, cuts off the padding of images
    #[arg(short, long, value_name = "bytes")]
    pub len: Option<u64>,
}

impl RestoreArgs {
    pub fn run(self) -> CliResult<()> {
        let scale = if self.normalize {
            SampleScale::Normalized
        } else {
            SampleScale::Raw
        };

        bytemedia_core::commands::restore(&self.media, &self.output_file, scale, self.len)?;

        Ok(())
    }
}
