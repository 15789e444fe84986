use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::media::audio::{AudioEncoder, AudioSummary};
use crate::media::image::{ImageEncoder, ImageSummary};
use crate::media::{AudioOptions, Media, SampleScale};
use crate::progress::LogProgress;
use crate::reader::ByteReader;
use crate::{ByteMediaError, Result};

/// `<input>.<extension>`, next to the input file
pub fn default_output(input: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(extension);

    PathBuf::from(name)
}

/// Streams `input` into an audio file, by default `<input>.wav` or `<input>.ogg`
pub fn audio(
    input: &Path,
    output: Option<&Path>,
    options: AudioOptions,
    chunk_size: usize,
) -> Result<AudioSummary> {
    let reader = ByteReader::open(input, chunk_size)?;
    let output = output.map_or_else(
        || default_output(input, options.format.extension()),
        Path::to_path_buf,
    );

    AudioEncoder::new(options).encode_file(reader, &output, &mut LogProgress::default())
}

/// Streams `input` into a square PNG image, by default `<input>.png`
pub fn image(input: &Path, output: Option<&Path>, chunk_size: usize) -> Result<ImageSummary> {
    let reader = ByteReader::open(input, chunk_size)?;
    let output = output.map_or_else(|| default_output(input, "png"), Path::to_path_buf);

    ImageEncoder::new().encode_file(reader, &output, &mut LogProgress::default())
}

/// Writes the bytes behind a generated WAV or PNG file back into `destination_file`.
/// `len` limits the output, for cutting off image padding.
/// Returns the number of bytes written.
pub fn restore(
    media: &Path,
    destination_file: &Path,
    scale: SampleScale,
    len: Option<u64>,
) -> Result<u64> {
    let media = Media::from_file(media)?;
    let bytes = media.to_bytes(scale, len);

    fs::write(destination_file, &bytes).map_err(|source| ByteMediaError::WriteError { source })?;
    info!(
        "Restored <{}> bytes into <{}>",
        bytes.len(),
        destination_file.display()
    );

    Ok(bytes.len() as u64)
}
