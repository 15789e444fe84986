use criterion::{criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

use bytemedia_core::media::audio::AudioEncoder;
use bytemedia_core::media::{AudioFormat, AudioOptions};
use bytemedia_core::progress::NoProgress;

pub fn audio_encoding(c: &mut Criterion) {
    let out_dir = TempDir::new().expect("Cannot create temp dir");
    let bytes: Vec<u8> = (0..=255).cycle().take(1 << 20).collect();

    c.bench_function("Audio Encoding 1 MiB to WAV", |b| {
        let output = out_dir.path().join("bench.wav");
        let encoder = AudioEncoder::new(AudioOptions::default());

        b.iter(|| {
            encoder
                .encode(&bytes, &output, &mut NoProgress)
                .expect("Cannot encode audio")
        })
    });

    c.bench_function("Audio Encoding 1 MiB to Ogg", |b| {
        let output = out_dir.path().join("bench.ogg");
        let encoder = AudioEncoder::new(AudioOptions::default().with_format(AudioFormat::Ogg));

        b.iter(|| {
            encoder
                .encode(&bytes, &output, &mut NoProgress)
                .expect("Cannot encode audio")
        })
    });
}

criterion_group!(benches, audio_encoding);
criterion_main!(benches);
