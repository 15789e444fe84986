use crate::media::codec_options::SampleScale;

/// Iterating the bytes behind audio samples, the inverse of the audio encoder
pub struct AudioWavIter<T> {
    samples: T,
    scale: SampleScale,
}

impl<T> AudioWavIter<T>
where
    T: Iterator<Item = f32>,
{
    pub fn new(samples: T, scale: SampleScale) -> Self {
        Self { samples, scale }
    }
}

impl<T> Iterator for AudioWavIter<T>
where
    T: Iterator<Item = f32>,
{
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.samples.next().map(|s| self.scale.to_byte(s))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.samples.size_hint()
    }
}
