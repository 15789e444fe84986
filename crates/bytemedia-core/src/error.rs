use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`ByteMediaError`]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ErrorKind {
    /// Wrong invocation: missing input, unsupported channel count, bad chunk size
    Usage,
    /// Input that cannot be converted, for example an empty file
    Validation,
    /// Faults while reading the source or writing the target
    Io,
}

#[derive(Error, Debug)]
pub enum ByteMediaError {
    /// Represents a missing input file
    #[error("File {} not found. Is it in your current working directory and accessible? Please note that file names are case sensitive.", .0.display())]
    InputNotFound(PathBuf),

    /// Represents an input path that is not a regular file, for example a directory
    #[error("Input {} is not a regular file", .0.display())]
    NotAFile(PathBuf),

    /// Represents a chunk size of zero
    #[error("Chunk size must be greater than zero")]
    InvalidChunkSize,

    /// Represents a channel count other than mono or stereo
    #[error("Unsupported channel count {0}, only 1 (mono) and 2 (stereo) are supported")]
    UnsupportedChannels(u16),

    /// Represents an input without any bytes
    #[error("No bytes found. Did you provide an empty file?")]
    EmptyInput,

    /// Represents an input without any bytes to draw, the image run still finishes
    #[error("No bytes found. Did you provide an empty file?")]
    EmptyCanvas,

    /// Represents an input length that does not split into whole frames
    #[error("Data ({len}) incompatible with {channels} channels.")]
    IncompatibleChannels { len: u64, channels: u16 },

    /// Represents a media file that cannot be restored, for example an Ogg file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents a broken or unreadable WAV file
    #[error("Audio media is invalid: {0}")]
    InvalidAudioMedia(#[source] hound::Error),

    /// Represents a broken or unreadable PNG file
    #[error("Image media is invalid: {0}")]
    InvalidImageMedia(#[source] image::ImageError),

    /// Represents a failure to read from input.
    #[error("Read error: {source}")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error: {source}")]
    WriteError { source: std::io::Error },

    /// Represents a failure of the WAV writer.
    #[error("Audio encoding error: {0}")]
    WavEncodingError(#[source] hound::Error),

    /// Represents a failure of the Ogg Vorbis encoder.
    #[error("Audio encoding error: {0}")]
    OggEncodingError(#[source] vorbis_rs::VorbisError),

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error: {0}")]
    ImageEncodingError(#[source] image::ImageError),

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl ByteMediaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputNotFound(_)
            | Self::NotAFile(_)
            | Self::InvalidChunkSize
            | Self::UnsupportedChannels(_)
            | Self::UnsupportedMedia => ErrorKind::Usage,
            Self::EmptyInput
            | Self::EmptyCanvas
            | Self::IncompatibleChannels { .. }
            | Self::InvalidAudioMedia(_)
            | Self::InvalidImageMedia(_) => ErrorKind::Validation,
            Self::ReadError { .. }
            | Self::WriteError { .. }
            | Self::WavEncodingError(_)
            | Self::OggEncodingError(_)
            | Self::ImageEncodingError(_)
            | Self::IoError(_) => ErrorKind::Io,
        }
    }

    /// Fatal errors end the whole run with a non-zero exit code,
    /// all others are reported and the run still counts as finished.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::ReadError { .. })
            || self.kind() == ErrorKind::Usage
    }
}
