use log::{debug, info};

/// Stage of a conversion that reports progress
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Stage {
    /// unit: bytes
    Reading,
    /// unit: frames
    WritingAudio,
    /// unit: pixels
    DrawingPixels,
}

impl Stage {
    fn slot(&self) -> usize {
        match self {
            Stage::Reading => 0,
            Stage::WritingAudio => 1,
            Stage::DrawingPixels => 2,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Stage::Reading => "B",
            Stage::WritingAudio => "frames",
            Stage::DrawingPixels => "px",
        }
    }
}

/// Observer for cumulative progress, called once per processed chunk.
pub trait Progress {
    fn begin(&mut self, stage: Stage, total: u64);
    fn advance(&mut self, stage: Stage, done: u64);
    fn finish(&mut self, stage: Stage);
}

/// Discards all progress
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn begin(&mut self, _: Stage, _: u64) {}
    fn advance(&mut self, _: Stage, _: u64) {}
    fn finish(&mut self, _: Stage) {}
}

/// Reports progress through the `log` facade, per chunk on `debug` level.
/// Stages may overlap, each one is counted on its own.
#[derive(Debug, Default)]
pub struct LogProgress {
    /// (done, total) per stage
    counters: [(u64, u64); 3],
}

impl Progress for LogProgress {
    fn begin(&mut self, stage: Stage, total: u64) {
        self.counters[stage.slot()] = (0, total);
        info!("{stage:?}: {total} {}", stage.unit());
    }

    fn advance(&mut self, stage: Stage, done: u64) {
        let (so_far, total) = &mut self.counters[stage.slot()];
        *so_far += done;
        debug!("{stage:?}: {so_far}/{total} {}", stage.unit());
    }

    fn finish(&mut self, stage: Stage) {
        let (done, _) = self.counters[stage.slot()];
        info!("{stage:?}: done, {done} {}", stage.unit());
    }
}
