use crate::audio::AudioFormat;

use std::{ops::Range, sync::Arc};

/// Waveform of a finished recording with its view window and cursor.
///
/// Built once when a recording stops and replaced, never edited in place,
/// on the next stop. Only the x-range and cursor move during playback.
#[derive(Debug, Clone)]
pub struct WaveformPlot {
    samples: Arc<[f32]>,
    format: AudioFormat,
    frames: usize,
    lookahead: usize,
    x_range: Range<usize>,
    cursor: Option<usize>,
}

/// Lowest and highest sample inside one pixel column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnEnvelope {
    /// Lowest sample.
    pub min: f32,
    /// Highest sample.
    pub max: f32,
}

impl WaveformPlot {
    /// Plot every channel over the full buffer. `lookahead` is the number of
    /// frames the cursor may travel before the view starts scrolling.
    pub fn new(samples: Arc<[f32]>, format: AudioFormat, lookahead: usize) -> Self {
        let frames = format.frames(samples.len());
        Self {
            samples,
            format,
            frames,
            lookahead,
            x_range: 0..frames,
            cursor: None,
        }
    }

    /// Frames in the buffer.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Channel count; one series each.
    pub fn channels(&self) -> u16 {
        self.format.channels
    }

    /// Visible frame range.
    pub fn x_range(&self) -> Range<usize> {
        self.x_range.clone()
    }

    /// Cursor frame while playing.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// One channel's series, de-interleaved.
    pub fn channel(&self, channel: u16) -> impl Iterator<Item = f32> + '_ {
        let stride = usize::from(self.format.channels.max(1));
        self.samples
            .iter()
            .skip(usize::from(channel))
            .step_by(stride)
            .take(self.frames)
            .copied()
    }

    /// Place the cursor at the start and narrow the view to the first
    /// scroll window.
    pub fn begin_playback(&mut self) {
        self.cursor = Some(0);
        self.x_range = 0..self.window().min(self.frames);
    }

    /// Move the cursor. Once it passes the lookahead the view follows it,
    /// keeping it centred until the end of the buffer is in view.
    pub fn set_cursor(&mut self, frame: usize) {
        let frame = frame.min(self.frames);
        self.cursor = Some(frame);

        if frame > self.lookahead {
            let width = self.window().min(self.frames);
            let end = (frame + self.lookahead).min(self.frames);
            self.x_range = end.saturating_sub(width)..end;
        }
    }

    /// Drop the cursor and show the whole buffer again.
    pub fn reset_view(&mut self) {
        self.cursor = None;
        self.x_range = 0..self.frames;
    }

    /// Min/max of `channel` for each of `columns` equal slices of the
    /// visible range. Empty columns (more columns than frames) are flat.
    pub fn envelope(&self, channel: u16, columns: usize) -> Vec<ColumnEnvelope> {
        let stride = usize::from(self.format.channels.max(1));
        let channel = usize::from(channel);
        let Range { start, end } = self.x_range.clone();
        let span = end.saturating_sub(start);

        (0..columns)
            .map(|col| {
                let from = start + span * col / columns.max(1);
                let to = (start + span * (col + 1) / columns.max(1)).max(from);

                let mut env: Option<ColumnEnvelope> = None;
                for frame in from..to {
                    let Some(&s) = self.samples.get(frame * stride + channel) else {
                        break;
                    };
                    let e = env.get_or_insert(ColumnEnvelope { min: s, max: s });
                    e.min = e.min.min(s);
                    e.max = e.max.max(s);
                }
                env.unwrap_or(ColumnEnvelope { min: 0.0, max: 0.0 })
            })
            .collect()
    }

    fn window(&self) -> usize {
        self.lookahead.saturating_mul(2)
    }
}
