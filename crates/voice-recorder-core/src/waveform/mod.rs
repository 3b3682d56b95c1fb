mod clock;
mod plot;

pub use {
    clock::{CursorSource, DeviceClock, PlaybackClock, WallClock, cursor_index},
    plot::{ColumnEnvelope, WaveformPlot},
};

use std::time::Duration;

/// How far the cursor travels before the plot starts scrolling.
pub const DEFAULT_LOOKAHEAD: Duration = Duration::from_secs(2);
