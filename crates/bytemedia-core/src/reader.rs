use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::Path;

use log::{debug, info};

use crate::error::ByteMediaError;
use crate::progress::{Progress, Stage};
use crate::result::Result;

/// Default size of one buffered read, in bytes
pub const DEFAULT_CHUNK_SIZE: usize = 16384;

/// Reads a byte source in fixed-size chunks
///
/// ## Example of usage
/// ```rust
/// use bytemedia_core::reader::ByteReader;
/// use bytemedia_core::progress::NoProgress;
///
/// let bytes = ByteReader::from_reader(&b"Hello World!"[..], 12, 5)
///     .expect("Cannot create reader")
///     .read_all(&mut NoProgress)
///     .expect("Cannot read bytes");
///
/// assert_eq!(bytes, b"Hello World!");
/// ```
#[derive(Debug)]
pub struct ByteReader<R = File> {
    source: R,
    len: u64,
    chunk_size: usize,
}

impl ByteReader<File> {
    /// opens a regular file, its size is taken from the file metadata
    pub fn open(path: impl AsRef<Path>, chunk_size: usize) -> Result<Self> {
        let path = path.as_ref();
        if chunk_size == 0 {
            return Err(ByteMediaError::InvalidChunkSize);
        }
        let metadata = fs::metadata(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ByteMediaError::InputNotFound(path.to_path_buf()),
            _ => ByteMediaError::ReadError { source },
        })?;
        if !metadata.is_file() {
            return Err(ByteMediaError::NotAFile(path.to_path_buf()));
        }
        let file = File::open(path).map_err(|source| ByteMediaError::ReadError { source })?;

        info!(
            "Read chunk size <{chunk_size}>, read file <{}> with <{}> bytes",
            path.display(),
            metadata.len()
        );

        Ok(Self {
            source: file,
            len: metadata.len(),
            chunk_size,
        })
    }
}

impl<R: Read> ByteReader<R> {
    /// wraps any `Read`, `len` is the number of bytes the source is expected to yield
    pub fn from_reader(source: R, len: u64, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(ByteMediaError::InvalidChunkSize);
        }

        Ok(Self {
            source,
            len,
            chunk_size,
        })
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Hands every chunk to `f` in source order, without keeping it.
    /// `f` gets the progress observer too, for reporting its own stage.
    /// Returns the number of bytes read in total.
    pub fn for_each_chunk<F>(mut self, progress: &mut dyn Progress, mut f: F) -> Result<u64>
    where
        F: FnMut(&[u8], &mut dyn Progress) -> Result<()>,
    {
        let mut buf = vec![0; self.chunk_size];
        let mut total = 0u64;

        progress.begin(Stage::Reading, self.len);
        loop {
            let n = match self.source.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => return Err(ByteMediaError::ReadError { source }),
            };
            f(&buf[..n], &mut *progress)?;
            total += n as u64;
            progress.advance(Stage::Reading, n as u64);
        }
        debug!("Found EOF after {total} bytes");
        progress.finish(Stage::Reading);

        Ok(total)
    }

    /// Reads the whole source into memory
    pub fn read_all(self, progress: &mut dyn Progress) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(usize::try_from(self.len).unwrap_or_default());
        self.for_each_chunk(progress, |chunk, _| {
            bytes.extend_from_slice(chunk);
            Ok(())
        })?;

        Ok(bytes)
    }
}
