use std::path::PathBuf;

use bytemedia_core::media::{
    AudioFormat, AudioOptions, Channels, SampleScale, DEFAULT_VOLUME, DEFAULT_WRITE_CHUNK_SIZE,
};
use clap::Args;
use log::info;

use crate::CliResult;

/// Turns the bytes of any file into a playable sound file
#[derive(Args, Debug)]
pub struct AudioArgs {
    /// File whose bytes become the audio samples
    #[arg(value_name = "input file")]
    pub input: PathBuf,

    /// `c` for compressed Ogg Vorbis, anything else for raw float WAV
    #[arg(value_name = "format flag")]
    pub format: String,

    /// Target audio file, defaults to the input file name plus `.wav` or `.ogg`
    #[arg(short = 'o', long = "out", value_name = "output audio file")]
    pub output: Option<PathBuf>,

    /// Number of channels, 1 for mono or 2 for stereo
    #[arg(short, long, default_value_t = 2)]
    pub channels: u16,

    /// Volume from 0.0 to 1.0, values outside get clamped
    #[arg(short, long, default_value_t = DEFAULT_VOLUME, allow_negative_numbers = true)]
    pub volume: f32,

    /// Bytes per buffered write of the audio file
    #[arg(long = "write-chunk-size", default_value_t = DEFAULT_WRITE_CHUNK_SIZE)]
    pub write_chunk_size: usize,

    /// Map bytes onto -1.0..1.0 instead of using the byte value as sample
    #[arg(short, long)]
    pub normalize: bool,
}

impl AudioArgs {
    pub fn run(self, chunk_size: usize) -> CliResult<()> {
        let options = AudioOptions::default()
            .with_channels(Channels::try_from(self.channels)?)
            .with_volume(self.volume)
            .with_write_chunk_size(self.write_chunk_size)
            .with_format(AudioFormat::from_flag(&self.format))
            .with_scale(if self.normalize {
                SampleScale::Normalized
            } else {
                SampleScale::Raw
            });

        let summary = bytemedia_core::commands::audio(
            &self.input,
            self.output.as_deref(),
            options,
            chunk_size,
        )?;
        info!("{summary}");

        Ok(())
    }
}
