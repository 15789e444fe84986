use criterion::{criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

use bytemedia_core::media::image::ImageEncoder;
use bytemedia_core::progress::NoProgress;
use bytemedia_core::reader::ByteReader;

pub fn image_encoding(c: &mut Criterion) {
    let out_dir = TempDir::new().expect("Cannot create temp dir");
    let bytes: Vec<u8> = (0..=255).cycle().take(1 << 20).collect();

    c.bench_function("Image Encoding 1 MiB from memory", |b| {
        let output = out_dir.path().join("bench.png");

        b.iter(|| {
            ImageEncoder::new()
                .encode(&bytes, &output, &mut NoProgress)
                .expect("Cannot encode image")
        })
    });

    c.bench_function("Image Encoding 1 MiB streamed", |b| {
        let output = out_dir.path().join("bench-streamed.png");

        b.iter(|| {
            let reader = ByteReader::from_reader(&bytes[..], bytes.len() as u64, 16384)
                .expect("Cannot create reader");
            ImageEncoder::new()
                .encode_file(reader, &output, &mut NoProgress)
                .expect("Cannot encode image")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
