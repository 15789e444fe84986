mod encoder;
pub mod sink;
pub mod wav_iter;

pub use encoder::{AudioEncoder, AudioSummary};
pub use sink::{AudioSink, OggSink, SampleSink, WavSink};
