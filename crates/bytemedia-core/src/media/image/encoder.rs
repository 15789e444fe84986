use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};
use log::{error, info, warn};

use crate::error::ByteMediaError;
use crate::media::frames::FrameAssembler;
use crate::progress::{Progress, Stage};
use crate::reader::ByteReader;
use crate::result::Result;

/// Pixels painted between two progress reports when encoding from memory
const PIXELS_PER_STEP: usize = 4096;

/// Size of the square canvas for a number of bytes
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CanvasGeometry {
    /// `ceil(len / 3)`, a trailing partial triple counts as a pixel
    pub pixels: u64,
    /// `ceil(sqrt(pixels))`
    pub side: u32,
}

impl CanvasGeometry {
    pub fn for_len(len: u64) -> Self {
        let pixels = len.div_ceil(3);
        let side = ceil_sqrt(pixels);

        Self {
            pixels,
            side: u32::try_from(side).unwrap_or(u32::MAX),
        }
    }

    pub fn area(&self) -> u64 {
        self.side as u64 * self.side as u64
    }

    /// false if the canvas ends with padding
    pub fn is_perfect(&self) -> bool {
        self.area() == self.pixels
    }
}

/// smallest `r` with `r * r >= n`, exact for the whole `u64` range
fn ceil_sqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= n) {
        r += 1;
    }
    if r * r == n {
        r
    } else {
        r + 1
    }
}

/// Outcome of a successful image conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSummary {
    pub output: PathBuf,
    pub side: u32,
    /// pixels that carry data, including an incomplete last one
    pub pixels: u64,
    /// pixels that got painted, an incomplete last triple is not
    pub painted: u64,
}

impl fmt::Display for ImageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Completed. Produced file <{}> with <{}> pixels as a <{}x{}> color PNG.",
            self.output.display(),
            self.pixels,
            self.side,
            self.side
        )
    }
}

/// Paints consecutive byte triples as pixels in row-major order
pub struct PixelPainter<'a> {
    canvas: &'a mut RgbImage,
    side: u64,
    next: u64,
    limit: u64,
}

impl<'a> PixelPainter<'a> {
    pub fn new(canvas: &'a mut RgbImage, geometry: CanvasGeometry) -> Self {
        Self {
            canvas,
            side: geometry.side as u64,
            next: 0,
            limit: geometry.pixels.min(geometry.area()),
        }
    }

    /// paints every complete triple of `bytes`, a trailing incomplete one is dropped.
    /// Triples beyond the canvas are ignored.
    pub fn paint(&mut self, bytes: &[u8], progress: &mut dyn Progress) {
        let before = self.next;
        for rgb in bytes.chunks_exact(3) {
            if self.next >= self.limit {
                break;
            }
            let (x, y) = (self.next % self.side, self.next / self.side);
            self.canvas
                .put_pixel(x as u32, y as u32, Rgb([rgb[0], rgb[1], rgb[2]]));
            self.next += 1;
        }
        progress.advance(Stage::DrawingPixels, self.next - before);
    }

    pub fn painted(&self) -> u64 {
        self.next
    }
}

/// Turns bytes into a square RGB image, three bytes per pixel.
///
/// ## Example of usage
/// ```rust
/// use tempfile::tempdir;
/// use bytemedia_core::media::image::ImageEncoder;
/// use bytemedia_core::progress::NoProgress;
///
/// let temp_dir = tempdir().expect("Failed to create temporary directory");
/// let summary = ImageEncoder::new()
///     .encode(b"Hello World!", &temp_dir.path().join("hello.png"), &mut NoProgress)
///     .expect("Failed to encode image");
///
/// assert_eq!(summary.side, 2);
/// assert_eq!(summary.pixels, 4);
/// ```
#[derive(Debug, Default)]
pub struct ImageEncoder;

impl ImageEncoder {
    pub fn new() -> Self {
        Self
    }

    fn prepare(&self, len: u64) -> Result<(CanvasGeometry, RgbImage)> {
        if len == 0 {
            return Err(ByteMediaError::EmptyCanvas);
        }
        let geometry = CanvasGeometry::for_len(len);
        if !geometry.is_perfect() {
            warn!(
                "Side values and image size are not equal. There will be black pixels at the end of the image."
            );
        }
        info!(
            "Creating <{0}x{0}> image with <{1}> pixels",
            geometry.side, geometry.pixels
        );

        Ok((geometry, RgbImage::new(geometry.side, geometry.side)))
    }

    /// Encodes bytes that are already in memory
    pub fn encode(
        &self,
        bytes: &[u8],
        output: &Path,
        progress: &mut dyn Progress,
    ) -> Result<ImageSummary> {
        let (geometry, mut canvas) = self.prepare(bytes.len() as u64)?;

        progress.begin(Stage::DrawingPixels, geometry.pixels);
        let painted = {
            let mut painter = PixelPainter::new(&mut canvas, geometry);
            for run in bytes.chunks(3 * PIXELS_PER_STEP) {
                painter.paint(run, progress);
            }
            painter.painted()
        };
        progress.finish(Stage::DrawingPixels);

        self.save(&canvas, output, geometry, painted)
    }

    /// Paints while reading, the source bytes are never held as a whole
    pub fn encode_file<R: Read>(
        &self,
        reader: ByteReader<R>,
        output: &Path,
        progress: &mut dyn Progress,
    ) -> Result<ImageSummary> {
        let (geometry, mut canvas) = self.prepare(reader.len())?;

        progress.begin(Stage::DrawingPixels, geometry.pixels);
        let painted = {
            let mut painter = PixelPainter::new(&mut canvas, geometry);
            let mut assembler = FrameAssembler::new(3);
            reader.for_each_chunk(progress, |chunk, progress| {
                assembler.push(chunk, |triples| {
                    painter.paint(triples, &mut *progress);
                    Ok(())
                })
            })?;
            painter.painted()
        };
        progress.finish(Stage::DrawingPixels);

        self.save(&canvas, output, geometry, painted)
    }

    fn save(
        &self,
        canvas: &RgbImage,
        output: &Path,
        geometry: CanvasGeometry,
        painted: u64,
    ) -> Result<ImageSummary> {
        canvas
            .save_with_format(output, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image {}: {e}", output.display());
                ByteMediaError::ImageEncodingError(e)
            })?;
        info!("Saved image <{}> to disk.", output.display());

        Ok(ImageSummary {
            output: output.to_path_buf(),
            side: geometry.side,
            pixels: geometry.pixels,
            painted,
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::progress::test_utils::RecordingProgress;
    use crate::progress::NoProgress;

    fn open(file: &Path) -> RgbImage {
        image::open(file)
            .expect("Output image is not readable.")
            .to_rgb8()
    }

    #[test]
    fn should_compute_the_canvas_side() {
        assert_eq!(CanvasGeometry::for_len(1).side, 1);
        assert_eq!(CanvasGeometry::for_len(3).side, 1);
        assert_eq!(CanvasGeometry::for_len(5).side, 2);
        assert_eq!(CanvasGeometry::for_len(12).side, 2);
        assert_eq!(CanvasGeometry::for_len(13).side, 3);
        assert_eq!(CanvasGeometry::for_len(27).side, 3);
        assert_eq!(CanvasGeometry::for_len(3 * 1_000_000).side, 1000);
        assert_eq!(CanvasGeometry::for_len(3 * 1_000_001).side, 1001);

        assert!(CanvasGeometry::for_len(12).is_perfect());
        assert!(!CanvasGeometry::for_len(5).is_perfect());
    }

    #[test]
    fn should_compute_exact_ceil_square_roots() {
        for n in 0..2000u64 {
            let r = ceil_sqrt(n);
            assert!(r * r >= n, "{r}^2 < {n}");
            assert!(r == 0 || (r - 1) * (r - 1) < n, "{r} is not the smallest for {n}");
        }
        assert_eq!(ceil_sqrt(u64::MAX), 1 << 32);
    }

    #[test]
    fn should_paint_triples_and_drop_the_incomplete_last_one() {
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("five.png");

        let summary = ImageEncoder::new()
            .encode(&[1, 2, 3, 4, 5], &output, &mut NoProgress)
            .expect("Cannot encode");

        assert_eq!(summary.side, 2);
        assert_eq!(summary.pixels, 2);
        assert_eq!(summary.painted, 1);
        let img = open(&output);
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(*img.get_pixel(0, 0), Rgb([1, 2, 3]));
        assert_eq!(*img.get_pixel(1, 0), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(0, 1), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(1, 1), Rgb([0, 0, 0]));
    }

    #[test]
    fn should_produce_a_black_pixel_for_a_single_byte() {
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("one.png");

        let summary = ImageEncoder::new()
            .encode(&[42], &output, &mut NoProgress)
            .expect("Cannot encode");

        assert_eq!((summary.side, summary.painted), (1, 0));
        let img = open(&output);
        assert_eq!(img.dimensions(), (1, 1));
        assert_eq!(*img.get_pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn should_place_pixels_in_row_major_order() {
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("rows.png");
        let bytes: Vec<u8> = (0..=255).cycle().take(3 * 20).collect();

        let summary = ImageEncoder::new()
            .encode(&bytes, &output, &mut NoProgress)
            .expect("Cannot encode");

        let side = summary.side as usize;
        assert_eq!(side, 5);
        let img = open(&output);
        for k in 0..20 {
            assert_eq!(
                *img.get_pixel((k % side) as u32, (k / side) as u32),
                Rgb([bytes[3 * k], bytes[3 * k + 1], bytes[3 * k + 2]]),
                "pixel {k} mismatched"
            );
        }
        for k in 20..25 {
            assert_eq!(
                *img.get_pixel((k % side) as u32, (k / side) as u32),
                Rgb([0, 0, 0]),
                "padding pixel {k} should be black"
            );
        }
    }

    #[test]
    fn should_reject_empty_input() {
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("empty.png");

        assert!(matches!(
            ImageEncoder::new().encode(&[], &output, &mut NoProgress),
            Err(ByteMediaError::EmptyCanvas)
        ));
        assert!(!output.exists());
    }

    #[test]
    fn should_report_a_failed_save() {
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("missing-dir").join("out.png");

        let result = ImageEncoder::new().encode(&[1, 2, 3], &output, &mut NoProgress);

        match result {
            Err(e @ ByteMediaError::ImageEncodingError(_)) => assert!(!e.is_fatal()),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn should_stream_the_same_image_as_in_memory() {
        let out_dir = TempDir::new().unwrap();
        let in_memory = out_dir.path().join("memory.png");
        let streamed = out_dir.path().join("streamed.png");
        let bytes: Vec<u8> = (0..=255).cycle().take(1001).collect();
        let mut progress = RecordingProgress::default();

        let expected = ImageEncoder::new()
            .encode(&bytes, &in_memory, &mut NoProgress)
            .unwrap();
        // 5 byte reads never align with triples
        let reader = ByteReader::from_reader(&bytes[..], bytes.len() as u64, 5).unwrap();
        let summary = ImageEncoder::new()
            .encode_file(reader, &streamed, &mut progress)
            .unwrap();

        assert_eq!(summary.painted, expected.painted);
        assert_eq!(summary.painted, 333);
        assert_eq!(open(&in_memory), open(&streamed));
        assert_eq!(
            progress.steps_of(Stage::DrawingPixels).iter().sum::<u64>(),
            333
        );
        assert_eq!(
            progress.finished,
            vec![Stage::Reading, Stage::DrawingPixels]
        );
    }

    #[test]
    fn should_ignore_bytes_beyond_the_announced_length() {
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("grown.png");
        // announced 3 bytes, the source delivers 9
        let reader = ByteReader::from_reader(&[9u8; 9][..], 3, 4).unwrap();

        let summary = ImageEncoder::new()
            .encode_file(reader, &output, &mut NoProgress)
            .unwrap();

        assert_eq!((summary.side, summary.painted), (1, 1));
        assert_eq!(*open(&output).get_pixel(0, 0), Rgb([9, 9, 9]));
    }
}
