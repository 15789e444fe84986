use std::path::Path;

pub use hound::{SampleFormat, WavReader, WavSpec};
pub use image::RgbImage;

use crate::error::ByteMediaError;
use crate::media::audio::wav_iter::AudioWavIter;
use crate::media::codec_options::SampleScale;
use crate::media::image::decoder::canvas_bytes;
use crate::result::Result;

pub type WavAudio = (WavSpec, Vec<f32>);

/// a media file produced by one of the encoders
#[derive(Debug)]
pub enum Media {
    Image(RgbImage),
    Audio(WavAudio),
}

impl Media {
    pub fn from_image(img: RgbImage) -> Self {
        Self::Image(img)
    }

    pub fn from_audio(audio: WavAudio) -> Self {
        Self::Audio(audio)
    }

    /// Picks the container by file extension. Only float WAV and PNG can be
    /// restored, a compressed Ogg stream does not keep the sample values.
    pub fn from_file(f: &Path) -> Result<Self> {
        let Some(ext) = f.extension() else {
            return Err(ByteMediaError::UnsupportedMedia);
        };
        match ext.to_string_lossy().to_lowercase().as_str() {
            "png" => Ok(Self::Image(
                image::open(f)
                    .map_err(ByteMediaError::InvalidImageMedia)?
                    .to_rgb8(),
            )),
            "wav" => {
                let reader = WavReader::open(f).map_err(ByteMediaError::InvalidAudioMedia)?;
                let spec = reader.spec();
                if spec.sample_format != SampleFormat::Float || spec.bits_per_sample != 32 {
                    return Err(ByteMediaError::UnsupportedMedia);
                }
                let samples = reader
                    .into_samples::<f32>()
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(ByteMediaError::InvalidAudioMedia)?;

                Ok(Self::Audio((spec, samples)))
            }
            _ => Err(ByteMediaError::UnsupportedMedia),
        }
    }

    /// The bytes the media was made of, at most `len` of them.
    /// `scale` has to match the one used for encoding audio, it is ignored for images.
    pub fn to_bytes(&self, scale: SampleScale, len: Option<u64>) -> Vec<u8> {
        match self {
            Media::Image(canvas) => canvas_bytes(canvas, len),
            Media::Audio((_spec, samples)) => {
                let limit = len
                    .and_then(|l| usize::try_from(l).ok())
                    .unwrap_or(usize::MAX);
                AudioWavIter::new(samples.iter().copied(), scale)
                    .take(limit)
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use hound::WavWriter;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn should_refuse_unknown_extensions() {
        for name in ["song.ogg", "Cargo.toml", "no-extension"] {
            assert!(
                matches!(
                    Media::from_file(Path::new(name)),
                    Err(ByteMediaError::UnsupportedMedia)
                ),
                "{name} should not be supported"
            );
        }
    }

    #[test]
    fn should_report_a_broken_png() {
        let out_dir = TempDir::new().unwrap();
        let broken = out_dir.path().join("broken.PNG");
        fs::write(&broken, b"not a png").unwrap();

        assert!(matches!(
            Media::from_file(&broken),
            Err(ByteMediaError::InvalidImageMedia(_))
        ));
    }

    #[test]
    fn should_refuse_integer_wav_files() {
        let out_dir = TempDir::new().unwrap();
        let pcm = out_dir.path().join("pcm.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&pcm, spec).unwrap();
        writer.write_sample(42i16).unwrap();
        writer.finalize().unwrap();

        assert!(matches!(
            Media::from_file(&pcm),
            Err(ByteMediaError::UnsupportedMedia)
        ));
    }

    #[test]
    fn should_restore_audio_bytes() {
        let spec = WavSpec {
            channels: 2,
            sample_rate: 44100,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let media = Media::from_audio((spec, vec![1.0, 2.0, 3.0, 4.0]));

        assert_eq!(media.to_bytes(SampleScale::Raw, None), vec![1, 2, 3, 4]);
        assert_eq!(media.to_bytes(SampleScale::Raw, Some(3)), vec![1, 2, 3]);
    }
}
