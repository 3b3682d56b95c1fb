use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use tracing::{debug, error};

/// Ordered list of capture chunks shared with the audio callback.
///
/// Chunks are kept as delivered and only joined into one contiguous buffer
/// by [`ChunkBuffer::take_concatenated`], so the callback never pays for a
/// large copy and no up-front capacity is needed.
///
/// The `accepting` flag gates the callback: chunks pushed while it is clear
/// are dropped. [`ChunkBuffer::close`] clears it before the stream is torn
/// down so a late callback cannot append after the buffer is taken.
#[derive(Debug, Clone, Default)]
pub struct ChunkBuffer {
    chunks: Arc<Mutex<Vec<Vec<f32>>>>,
    accepting: Arc<AtomicBool>,
}

impl ChunkBuffer {
    /// An empty, closed buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard any previous chunks and start accepting new ones.
    pub fn open(&self) {
        self.lock().clear();
        self.accepting.store(true, Ordering::Release);
    }

    /// Stop accepting chunks. Already-buffered chunks are kept.
    pub fn close(&self) {
        self.accepting.store(false, Ordering::Release);
    }

    /// Whether pushed chunks are currently kept.
    pub fn is_accepting(&self) -> bool {
        self.accepting.load(Ordering::Acquire)
    }

    /// Append one callback-delivered chunk. Returns `false` if the buffer is
    /// closed and the chunk was dropped.
    pub fn push(&self, chunk: &[f32]) -> bool {
        if !self.is_accepting() {
            return false;
        }
        self.lock().push(chunk.to_vec());
        true
    }

    /// Number of chunks buffered since the last open.
    pub fn chunk_count(&self) -> usize {
        self.lock().len()
    }

    /// Total number of samples across all buffered chunks.
    pub fn sample_count(&self) -> usize {
        self.lock().iter().map(Vec::len).sum()
    }

    /// Join all chunks in delivery order and empty the list.
    pub fn take_concatenated(&self) -> Vec<f32> {
        let chunks = std::mem::take(&mut *self.lock());
        let total = chunks.iter().map(Vec::len).sum();

        let mut samples = Vec::with_capacity(total);
        for chunk in &chunks {
            samples.extend_from_slice(chunk);
        }

        debug!(
            chunk_count = chunks.len(),
            sample_count = samples.len(),
            "Concatenated capture chunks"
        );

        samples
    }

    // A poisoned mutex means a previous holder panicked, but the chunk list
    // is still valid and usable.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Vec<f32>>> {
        self.chunks.lock().unwrap_or_else(|e| {
            error!("Chunk buffer lock poisoned, recovering: {}", e);
            e.into_inner()
        })
    }
}
