pub mod audio;
pub mod codec_options;
pub mod frames;
pub mod image;
mod types;

pub use codec_options::{
    AudioFormat, AudioOptions, Channels, SampleScale, DEFAULT_VOLUME, DEFAULT_WRITE_CHUNK_SIZE,
    SAMPLE_RATE,
};
pub use frames::FrameAssembler;
pub use types::*;
