use std::fmt;

use log::warn;

use crate::error::ByteMediaError;

/// Fixed sample rate of every audio output
pub const SAMPLE_RATE: u32 = 44100;

/// Default size of one buffered audio write, in bytes
pub const DEFAULT_WRITE_CHUNK_SIZE: usize = 16384;

/// Default volume factor
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Channel layout of the audio output, only mono and stereo are supported
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Channels {
    Mono,
    #[default]
    Stereo,
}

impl Channels {
    pub fn count(&self) -> u16 {
        match self {
            Channels::Mono => 1,
            Channels::Stereo => 2,
        }
    }
}

impl TryFrom<u16> for Channels {
    type Error = ByteMediaError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Channels::Mono),
            2 => Ok(Channels::Stereo),
            n => Err(ByteMediaError::UnsupportedChannels(n)),
        }
    }
}

/// Audio container of the output
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum AudioFormat {
    /// uncompressed 32-bit float PCM in a WAV container
    #[default]
    Wav,
    /// compressed Vorbis stream in an Ogg container
    Ogg,
}

impl AudioFormat {
    /// `c` selects the compressed format, everything else the raw one
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "c" => AudioFormat::Ogg,
            _ => AudioFormat::Wav,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Ogg => "ogg",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioFormat::Wav => write!(f, "WAV (float)"),
            AudioFormat::Ogg => write!(f, "Ogg Vorbis"),
        }
    }
}

/// How a byte value turns into a sample magnitude
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum SampleScale {
    /// The byte value is the sample, `0..=255`.
    /// Keeps outputs identical to files produced by earlier versions.
    #[default]
    Raw,
    /// The byte is mapped linearly onto `-1.0..=1.0`
    Normalized,
}

impl SampleScale {
    #[inline(always)]
    pub fn to_sample(&self, byte: u8) -> f32 {
        match self {
            SampleScale::Raw => byte as f32,
            SampleScale::Normalized => byte as f32 / 127.5 - 1.0,
        }
    }

    /// inverse of [`SampleScale::to_sample`] for a volume of `1.0`
    #[inline(always)]
    pub fn to_byte(&self, sample: f32) -> u8 {
        let value = match self {
            SampleScale::Raw => sample,
            SampleScale::Normalized => (sample + 1.0) * 127.5,
        };
        value.round().clamp(0.0, 255.0) as u8
    }
}

/// Options for the audio encoder
#[derive(Debug, Clone, Copy)]
pub struct AudioOptions {
    pub channels: Channels,

    /// Factor applied to every sample, valid in `0.0..=1.0`.
    /// Values outside get clamped by [`AudioOptions::effective_volume`].
    pub volume: f32,

    /// Bytes per buffered write, determines the rows per write as
    /// `write_chunk_size / (4 * channels)`, at least one row.
    pub write_chunk_size: usize,

    pub format: AudioFormat,

    pub scale: SampleScale,
}

impl Default for AudioOptions {
    fn default() -> Self {
        Self {
            channels: Channels::default(),
            volume: DEFAULT_VOLUME,
            write_chunk_size: DEFAULT_WRITE_CHUNK_SIZE,
            format: AudioFormat::default(),
            scale: SampleScale::default(),
        }
    }
}

impl AudioOptions {
    pub fn with_channels(mut self, channels: Channels) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    pub fn with_format(mut self, format: AudioFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_scale(mut self, scale: SampleScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_write_chunk_size(mut self, write_chunk_size: usize) -> Self {
        self.write_chunk_size = write_chunk_size;
        self
    }

    /// volume clamped into `0.0..=1.0`, NaN counts as silence
    pub fn effective_volume(&self) -> f32 {
        if self.volume.is_nan() {
            warn!("Volume is not a number, using 0.0");
            return 0.0;
        }
        if !(0.0..=1.0).contains(&self.volume) {
            warn!("Clamping volume {} to closest valid number.", self.volume);
        }
        self.volume.clamp(0.0, 1.0)
    }

    pub fn rows_per_chunk(&self) -> usize {
        (self.write_chunk_size / (4 * self.channels.count() as usize)).max(1)
    }
}
