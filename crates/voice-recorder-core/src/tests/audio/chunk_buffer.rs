use crate::ChunkBuffer;

use std::sync::Arc;

/// WHAT: Concatenation preserves total length and delivery order
/// WHY: The stopped buffer must be exactly the chunks as delivered
#[test]
fn given_uneven_chunks_when_concatenating_then_length_and_order_preserved() {
    // Given: An open buffer receiving chunks of varying sizes
    let buffer = ChunkBuffer::new();
    buffer.open();
    let chunks: Vec<Vec<f32>> = [512usize, 3, 0, 1024, 77]
        .iter()
        .enumerate()
        .map(|(n, &len)| (0..len).map(|i| (n * 10_000 + i) as f32).collect())
        .collect();
    for chunk in &chunks {
        assert!(buffer.push(chunk));
    }

    // When: Taking the concatenated buffer
    let samples = buffer.take_concatenated();

    // Then: Length is the sum of chunk lengths and order is delivery order
    let expected: Vec<f32> = chunks.iter().flatten().copied().collect();
    assert_eq!(samples.len(), chunks.iter().map(Vec::len).sum::<usize>());
    assert_eq!(samples, expected);
}

/// WHAT: Chunks pushed after close are dropped
/// WHY: A late capture callback must not mutate a finished recording
#[test]
fn given_closed_buffer_when_pushing_then_chunk_dropped() {
    // Given: A buffer that accepted one chunk and was then closed
    let buffer = ChunkBuffer::new();
    buffer.open();
    buffer.push(&[0.25; 8]);
    buffer.close();

    // When: The callback fires again
    let accepted = buffer.push(&[0.75; 8]);

    // Then: The late chunk is rejected and the original kept
    assert!(!accepted);
    assert_eq!(buffer.chunk_count(), 1);
    assert_eq!(buffer.take_concatenated(), vec![0.25; 8]);
}

/// WHAT: Reopening discards chunks from the previous take
/// WHY: Every recording starts from an empty buffer
#[test]
fn given_leftover_chunks_when_reopening_then_buffer_empty() {
    // Given: A buffer with chunks that were never taken
    let buffer = ChunkBuffer::new();
    buffer.open();
    buffer.push(&[1.0; 16]);
    buffer.close();

    // When: Opening for a new recording
    buffer.open();

    // Then: Nothing from the old take remains
    assert_eq!(buffer.sample_count(), 0);
    assert!(buffer.is_accepting());
}

/// WHAT: Concurrent pushes from clones all land in the shared list
/// WHY: The callback thread pushes through a clone of the buffer
#[test]
#[allow(clippy::unwrap_used)]
fn given_concurrent_writers_when_pushing_then_no_chunk_lost() {
    // Given: A shared open buffer
    let buffer = Arc::new(ChunkBuffer::new());
    buffer.open();

    // When: 4 threads push 250 chunks of 48 samples each
    let handles: Vec<_> = (0..4u8)
        .map(|t| {
            let buffer = buffer.clone();
            std::thread::spawn(move || {
                for _ in 0..250 {
                    buffer.push(&[f32::from(t); 48]);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    // Then: Every sample is present
    assert_eq!(buffer.chunk_count(), 1000);
    assert_eq!(buffer.take_concatenated().len(), 4 * 250 * 48);
}
