//! # bytemedia Core API
//!
//! Turns the raw bytes of any file into media:
//! - [`AudioEncoder`][aud] writes every byte as one audio sample, into a float WAV or an Ogg Vorbis file
//! - [`ImageEncoder`][img] writes every three bytes as one RGB pixel of a square PNG image
//! - [`commands::restore`][res] reads the bytes back out of a generated WAV or PNG file
//!
//! # Usage Examples
//!
//! ## Turn a file into sound
//!
//! ```rust
//! use std::path::Path;
//! use tempfile::tempdir;
//! use bytemedia_core::media::{AudioFormat, AudioOptions};
//! use bytemedia_core::reader::DEFAULT_CHUNK_SIZE;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! let summary = bytemedia_core::commands::audio(
//!     Path::new("Cargo.toml"),
//!     Some(temp_dir.path().join("Cargo.toml.ogg").as_path()),
//!     AudioOptions::default().with_format(AudioFormat::Ogg),
//!     DEFAULT_CHUNK_SIZE,
//! );
//!
//! // stereo needs an even number of bytes
//! match summary {
//!     Ok(summary) => println!("{summary}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```
//!
//! ## Turn a file into an image
//!
//! ```rust
//! use std::path::Path;
//! use tempfile::tempdir;
//! use bytemedia_core::reader::DEFAULT_CHUNK_SIZE;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! let summary = bytemedia_core::commands::image(
//!     Path::new("Cargo.toml"),
//!     Some(temp_dir.path().join("Cargo.toml.png").as_path()),
//!     DEFAULT_CHUNK_SIZE,
//! )
//! .expect("Failed to turn Cargo.toml into an image");
//!
//! assert!(summary.side > 0);
//! ```
//!
//! [aud]: ./media/audio/struct.AudioEncoder.html
//! [img]: ./media/image/struct.ImageEncoder.html
//! [res]: ./commands/fn.restore.html

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    clippy::redundant_else,
)]

pub mod commands;
pub mod error;
pub mod media;
pub mod progress;
pub mod reader;
pub mod result;

pub use crate::error::{ByteMediaError, ErrorKind};
pub use crate::media::audio::{AudioEncoder, AudioSummary};
pub use crate::media::image::{ImageEncoder, ImageSummary};
pub use crate::media::{AudioFormat, AudioOptions, Channels, SampleScale};
pub use crate::result::Result;
