use crate::{AudioFormat, WaveformPlot, tests::fakes::stereo_ramp};

use std::sync::Arc;

/// Small format so windows stay readable: 10 frames per second.
const FORMAT: AudioFormat = AudioFormat {
    sample_rate: 10,
    channels: 2,
};

fn plot(frames: usize, lookahead: usize) -> WaveformPlot {
    WaveformPlot::new(Arc::from(stereo_ramp(frames)), FORMAT, lookahead)
}

/// WHAT: A new plot shows the full buffer with no cursor
/// WHY: No initial zoom after a recording stops
#[test]
fn given_new_plot_then_full_range_visible() {
    let plot = plot(100, 20);

    assert_eq!(plot.frames(), 100);
    assert_eq!(plot.x_range(), 0..100);
    assert_eq!(plot.cursor(), None);
}

/// WHAT: Channels are de-interleaved into separate series
/// WHY: Each channel is drawn as its own line
#[test]
fn given_stereo_buffer_when_reading_channels_then_deinterleaved() {
    let plot = plot(4, 2);

    let left: Vec<f32> = plot.channel(0).collect();
    let right: Vec<f32> = plot.channel(1).collect();

    assert_eq!(left, vec![0.0, 0.25, 0.5, 0.75]);
    assert_eq!(right, vec![0.0, -0.25, -0.5, -0.75]);
}

/// WHAT: View stays put until the cursor passes the lookahead
/// WHY: Scrolling only starts after the lookahead window
#[test]
fn given_cursor_inside_lookahead_when_moving_then_view_not_scrolled() {
    // Given: 100 frames, lookahead 20, playback begun
    let mut plot = plot(100, 20);
    plot.begin_playback();
    assert_eq!(plot.x_range(), 0..40);

    // When: Cursor moves up to the lookahead
    plot.set_cursor(20);

    // Then: First window unchanged
    assert_eq!(plot.cursor(), Some(20));
    assert_eq!(plot.x_range(), 0..40);
}

/// WHAT: Past the lookahead the cursor is centred
/// WHY: The view follows the cursor during playback
#[test]
fn given_cursor_past_lookahead_when_moving_then_view_centred_on_cursor() {
    let mut plot = plot(100, 20);
    plot.begin_playback();

    plot.set_cursor(50);

    assert_eq!(plot.x_range(), 30..70);
}

/// WHAT: Near the end the window is pinned to the buffer end
/// WHY: The view never extends past the last frame
#[test]
fn given_cursor_near_end_when_moving_then_window_clamped() {
    let mut plot = plot(100, 20);
    plot.begin_playback();

    plot.set_cursor(95);
    assert_eq!(plot.x_range(), 60..100);

    plot.set_cursor(500);
    assert_eq!(plot.cursor(), Some(100));
    assert_eq!(plot.x_range(), 60..100);
}

/// WHAT: Buffers shorter than the window show everything
/// WHY: Short recordings must not be cropped
#[test]
fn given_short_buffer_when_playing_then_full_range_kept() {
    let mut plot = plot(15, 20);
    plot.begin_playback();
    assert_eq!(plot.x_range(), 0..15);

    plot.set_cursor(12);
    assert_eq!(plot.x_range(), 0..15);
}

/// WHAT: Reset drops the cursor and restores the full range
/// WHY: Playback end returns the plot to its post-stop view
#[test]
fn given_playing_plot_when_reset_then_full_range_and_no_cursor() {
    let mut plot = plot(100, 20);
    plot.begin_playback();
    plot.set_cursor(70);

    plot.reset_view();

    assert_eq!(plot.cursor(), None);
    assert_eq!(plot.x_range(), 0..100);
}

/// WHAT: Envelope gives per-column min/max of the visible range
/// WHY: The rasterizer draws one vertical span per column
#[test]
fn given_ramp_when_computing_envelope_then_columns_cover_visible_frames() {
    // Given: 8 frames, left channel 0/8..7/8
    let plot = plot(8, 4);

    // When: Two columns over the full range
    let env = plot.envelope(0, 2);

    // Then: Column 0 spans frames 0..4, column 1 frames 4..8
    assert_eq!(env.len(), 2);
    assert_eq!(env[0].min, 0.0);
    assert_eq!(env[0].max, 0.375);
    assert_eq!(env[1].min, 0.5);
    assert_eq!(env[1].max, 0.875);

    // Right channel mirrors it
    let right = plot.envelope(1, 2);
    assert_eq!(right[1].min, -0.875);
    assert_eq!(right[1].max, -0.5);
}

/// WHAT: More columns than frames yields flat padding columns
/// WHY: Tiny recordings still rasterize without indexing errors
#[test]
fn given_more_columns_than_frames_when_computing_envelope_then_no_panic() {
    let plot = plot(3, 1);

    let env = plot.envelope(0, 8);

    assert_eq!(env.len(), 8);
    assert!(env.iter().all(|c| c.min <= c.max));
}
