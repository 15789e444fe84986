use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use super::sink::{AudioSink, SampleSink};
use crate::error::ByteMediaError;
use crate::media::codec_options::{AudioFormat, AudioOptions, Channels, SampleScale};
use crate::media::frames::FrameAssembler;
use crate::progress::{Progress, Stage};
use crate::reader::ByteReader;
use crate::result::Result;

/// Outcome of a successful audio conversion
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSummary {
    pub output: PathBuf,
    /// frames per channel
    pub frames: u64,
    pub channels: Channels,
    pub format: AudioFormat,
}

impl fmt::Display for AudioSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Saved <{}> frames of <{}> channel {} audio to <{}>.",
            self.frames,
            self.channels.count(),
            self.format,
            self.output.display()
        )
    }
}

/// Turns bytes into audio samples, one byte per sample, channels interleaved.
///
/// ## Example of usage
/// ```rust
/// use tempfile::tempdir;
/// use bytemedia_core::media::audio::AudioEncoder;
/// use bytemedia_core::media::AudioOptions;
/// use bytemedia_core::progress::NoProgress;
///
/// let temp_dir = tempdir().expect("Failed to create temporary directory");
/// let summary = AudioEncoder::new(AudioOptions::default())
///     .encode(b"Hello World!", &temp_dir.path().join("hello.wav"), &mut NoProgress)
///     .expect("Failed to encode audio");
///
/// assert_eq!(summary.frames, 6);
/// ```
#[derive(Debug, Default)]
pub struct AudioEncoder {
    options: AudioOptions,
}

impl AudioEncoder {
    pub fn new(options: AudioOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AudioOptions {
        &self.options
    }

    /// Checks in order: empty input, volume (clamped, never fails), whole frames.
    /// Returns the volume to use.
    fn validate(&self, len: u64) -> Result<f32> {
        if len == 0 {
            return Err(ByteMediaError::EmptyInput);
        }
        let volume = self.options.effective_volume();
        let channels = self.options.channels.count();
        if len % channels as u64 != 0 {
            return Err(ByteMediaError::IncompatibleChannels { len, channels });
        }

        Ok(volume)
    }

    /// Encodes bytes that are already in memory
    pub fn encode(
        &self,
        bytes: &[u8],
        output: &Path,
        progress: &mut dyn Progress,
    ) -> Result<AudioSummary> {
        let volume = self.validate(bytes.len() as u64)?;
        let mut writer = FrameWriter::create(output, &self.options, volume)?;
        progress.begin(Stage::WritingAudio, writer.frames_of(bytes.len() as u64));
        writer.write(bytes, progress)?;

        writer.finish(progress)
    }

    /// Encodes while reading, only one read chunk and one write chunk are held at a time
    pub fn encode_file<R: Read>(
        &self,
        reader: ByteReader<R>,
        output: &Path,
        progress: &mut dyn Progress,
    ) -> Result<AudioSummary> {
        let volume = self.validate(reader.len())?;
        let mut writer = FrameWriter::create(output, &self.options, volume)?;
        progress.begin(Stage::WritingAudio, writer.frames_of(reader.len()));

        let mut assembler = FrameAssembler::new(self.options.channels.count() as usize);
        let total = reader.for_each_chunk(progress, |chunk, progress| {
            assembler.push(chunk, |frames| writer.write(frames, &mut *progress))
        })?;
        if !assembler.pending().is_empty() {
            writer.discard();
            return Err(ByteMediaError::IncompatibleChannels {
                len: total,
                channels: self.options.channels.count(),
            });
        }

        writer.finish(progress)
    }
}

/// Converts whole frames to samples and hands them to the sink, chunk by chunk
struct FrameWriter {
    sink: AudioSink,
    output: PathBuf,
    channels: Channels,
    format: AudioFormat,
    scale: SampleScale,
    volume: f32,
    samples_per_chunk: usize,
    samples: Vec<f32>,
    frames: u64,
}

impl FrameWriter {
    fn create(output: &Path, options: &AudioOptions, volume: f32) -> Result<Self> {
        info!("Writing data for {}", output.display());
        let sink = AudioSink::create(output, options.format, options.channels).map_err(|e| {
            error!("Error creating audio file {}: {e}", output.display());
            e
        })?;
        let samples_per_chunk = options.rows_per_chunk() * options.channels.count() as usize;

        Ok(Self {
            sink,
            output: output.to_path_buf(),
            channels: options.channels,
            format: options.format,
            scale: options.scale,
            volume,
            samples_per_chunk,
            samples: Vec::with_capacity(samples_per_chunk),
            frames: 0,
        })
    }

    fn frames_of(&self, len: u64) -> u64 {
        len / self.channels.count() as u64
    }

    /// `bytes` must contain whole frames only
    fn write(&mut self, bytes: &[u8], progress: &mut dyn Progress) -> Result<()> {
        let (scale, volume) = (self.scale, self.volume);
        for rows in bytes.chunks(self.samples_per_chunk) {
            self.samples.clear();
            self.samples
                .extend(rows.iter().map(|b| scale.to_sample(*b) * volume));
            self.sink.write_frames(&self.samples).map_err(|e| {
                error!("Error writing audio data: {e}");
                e
            })?;

            let frames = self.frames_of(rows.len() as u64);
            self.frames += frames;
            progress.advance(Stage::WritingAudio, frames);
        }

        Ok(())
    }

    /// closes the sink and removes the half written file
    fn discard(self) {
        let Self { sink, output, .. } = self;
        drop(sink);
        if let Err(e) = fs::remove_file(&output) {
            warn!("Could not remove incomplete audio file {}: {e}", output.display());
        }
    }

    fn finish(self, progress: &mut dyn Progress) -> Result<AudioSummary> {
        self.sink.finalize().map_err(|e| {
            error!("Error finalizing audio file {}: {e}", self.output.display());
            e
        })?;
        progress.finish(Stage::WritingAudio);

        Ok(AudioSummary {
            output: self.output,
            frames: self.frames,
            channels: self.channels,
            format: self.format,
        })
    }
}
