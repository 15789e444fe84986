use crate::result::Result;

/// Regroups arbitrary chunks into runs of whole `arity`-byte groups.
///
/// An incomplete trailing group is carried over to the next `push`.
#[derive(Debug)]
pub struct FrameAssembler {
    arity: usize,
    pending: Vec<u8>,
}

impl FrameAssembler {
    pub fn new(arity: usize) -> Self {
        assert!(arity > 0, "a frame needs at least one byte");
        Self {
            arity,
            pending: Vec::with_capacity(arity),
        }
    }

    /// Calls `f` with complete groups only, in order. The slices passed to `f`
    /// always have a length that is a multiple of `arity`.
    pub fn push<F>(&mut self, mut chunk: &[u8], mut f: F) -> Result<()>
    where
        F: FnMut(&[u8]) -> Result<()>,
    {
        if !self.pending.is_empty() {
            let take = (self.arity - self.pending.len()).min(chunk.len());
            self.pending.extend_from_slice(&chunk[..take]);
            chunk = &chunk[take..];
            if self.pending.len() < self.arity {
                return Ok(());
            }
            f(&self.pending)?;
            self.pending.clear();
        }

        let whole = chunk.len() - chunk.len() % self.arity;
        if whole > 0 {
            f(&chunk[..whole])?;
        }
        self.pending.extend_from_slice(&chunk[whole..]);

        Ok(())
    }

    /// bytes of the incomplete group waiting for more input
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }
}
