use std::fs::File;
use std::io::{BufWriter, Write};
use std::num::{NonZeroU32, NonZeroU8};
use std::path::Path;

use enum_dispatch::enum_dispatch;
use hound::{SampleFormat, WavSpec, WavWriter};
use vorbis_rs::{VorbisEncoder, VorbisEncoderBuilder};

use crate::error::ByteMediaError;
use crate::media::codec_options::{AudioFormat, Channels, SAMPLE_RATE};
use crate::result::Result;

const VORBIS_SAMPLE_RATE: NonZeroU32 = match NonZeroU32::new(SAMPLE_RATE) {
    Some(rate) => rate,
    None => panic!("sample rate must not be zero"),
};

/// Container writer that accepts interleaved frames
#[enum_dispatch]
pub trait SampleSink {
    /// `samples` holds whole frames only, channels interleaved
    fn write_frames(&mut self, samples: &[f32]) -> Result<()>;

    /// completes the container, the file is unusable without it
    fn finalize(self) -> Result<()>;
}

#[enum_dispatch(SampleSink)]
pub enum AudioSink {
    WavSink,
    OggSink,
}

impl AudioSink {
    /// creates or truncates `output` and prepares the container of `format`
    pub fn create(output: &Path, format: AudioFormat, channels: Channels) -> Result<Self> {
        Ok(match format {
            AudioFormat::Wav => WavSink::create(output, channels)?.into(),
            AudioFormat::Ogg => OggSink::create(output, channels)?.into(),
        })
    }
}

/// 32-bit float PCM WAV, based on `WavWriter` by `hound` crate
pub struct WavSink {
    writer: WavWriter<BufWriter<File>>,
}

impl WavSink {
    pub fn spec(channels: Channels) -> WavSpec {
        WavSpec {
            channels: channels.count(),
            sample_rate: SAMPLE_RATE,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        }
    }

    pub fn create(output: &Path, channels: Channels) -> Result<Self> {
        let writer = WavWriter::create(output, Self::spec(channels))
            .map_err(ByteMediaError::WavEncodingError)?;

        Ok(Self { writer })
    }
}

impl SampleSink for WavSink {
    fn write_frames(&mut self, samples: &[f32]) -> Result<()> {
        samples.iter().try_for_each(|s| {
            self.writer
                .write_sample(*s)
                .map_err(ByteMediaError::WavEncodingError)
        })
    }

    fn finalize(self) -> Result<()> {
        self.writer
            .finalize()
            .map_err(ByteMediaError::WavEncodingError)
    }
}

/// Vorbis stream in an Ogg container, based on `VorbisEncoder` by `vorbis_rs` crate.
///
/// Vorbis takes planar blocks, so frames are split per channel before encoding.
pub struct OggSink {
    encoder: VorbisEncoder<BufWriter<File>>,
    planes: Vec<Vec<f32>>,
}

impl OggSink {
    pub fn create(output: &Path, channels: Channels) -> Result<Self> {
        let file = File::create(output).map_err(|source| ByteMediaError::WriteError { source })?;
        let channel_count = match channels {
            Channels::Mono => NonZeroU8::MIN,
            Channels::Stereo => NonZeroU8::MIN.saturating_add(1),
        };
        let encoder =
            VorbisEncoderBuilder::new(VORBIS_SAMPLE_RATE, channel_count, BufWriter::new(file))
                .map_err(ByteMediaError::OggEncodingError)?
                .build()
                .map_err(ByteMediaError::OggEncodingError)?;

        Ok(Self {
            encoder,
            planes: vec![Vec::new(); channels.count() as usize],
        })
    }
}

impl SampleSink for OggSink {
    fn write_frames(&mut self, samples: &[f32]) -> Result<()> {
        if samples.is_empty() {
            return Ok(());
        }
        self.planes.iter_mut().for_each(Vec::clear);
        for frame in samples.chunks_exact(self.planes.len()) {
            for (plane, sample) in self.planes.iter_mut().zip(frame) {
                plane.push(*sample);
            }
        }

        self.encoder
            .encode_audio_block(&self.planes)
            .map_err(ByteMediaError::OggEncodingError)
    }

    fn finalize(self) -> Result<()> {
        let mut writer = self
            .encoder
            .finish()
            .map_err(ByteMediaError::OggEncodingError)?;

        writer
            .flush()
            .map_err(|source| ByteMediaError::WriteError { source })
    }
}

#[cfg(test)]
mod tests {
    use hound::WavReader;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn should_write_a_float_wav() {
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("frames.wav");

        let mut sink = AudioSink::create(&output, AudioFormat::Wav, Channels::Stereo)
            .expect("Cannot create sink");
        sink.write_frames(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        sink.write_frames(&[5.0, 6.0]).unwrap();
        sink.finalize().expect("Cannot finalize");

        let mut reader = WavReader::open(&output).expect("Cannot open written wav");
        assert_eq!(reader.spec(), WavSink::spec(Channels::Stereo));
        assert_eq!(reader.duration(), 3);
        let samples: Vec<f32> = reader.samples().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn should_write_an_ogg_stream() {
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("frames.ogg");

        let mut sink = AudioSink::create(&output, AudioFormat::Ogg, Channels::Mono)
            .expect("Cannot create sink");
        let samples: Vec<f32> = (0..4410).map(|i| (i as f32 / 10.0).sin() * 0.5).collect();
        sink.write_frames(&samples).unwrap();
        sink.finalize().expect("Cannot finalize");

        let written = std::fs::read(&output).unwrap();
        assert!(written.starts_with(b"OggS"), "Ogg capture pattern expected");
    }

    #[test]
    fn should_fail_for_an_unwritable_target() {
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("missing-dir").join("frames.wav");

        assert!(matches!(
            AudioSink::create(&output, AudioFormat::Wav, Channels::Mono),
            Err(ByteMediaError::WavEncodingError(_))
        ));
    }
}
