use image::RgbImage;

/// The bytes behind the pixels of a canvas, row by row, three per pixel.
///
/// Padding can not be told apart from black pixels, `len` cuts the result
/// down to the size of the original input when it is known.
pub fn canvas_bytes(canvas: &RgbImage, len: Option<u64>) -> Vec<u8> {
    let raw = canvas.as_raw();
    let end = len
        .and_then(|l| usize::try_from(l).ok())
        .map_or(raw.len(), |l| l.min(raw.len()));

    raw[..end].to_vec()
}
