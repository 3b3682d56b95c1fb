//! Tray icon rasterization.
//!
//! The tray icon doubles as the waveform display: while a finished
//! recording exists the icon shows its per-channel envelope and the
//! playback cursor, otherwise a dot coloured by session state.

use image::{Rgba, RgbaImage};
use voice_recorder_core::{SessionState, WaveformPlot};

/// Edge length of rendered tray icons, in pixels.
pub const ICON_SIZE: u32 = 32;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const BACKGROUND: Rgba<u8> = Rgba([28, 28, 30, 255]);
const CURSOR: Rgba<u8> = Rgba([230, 40, 40, 255]);
const CHANNEL_COLOURS: [Rgba<u8>; 2] = [Rgba([64, 196, 208, 255]), Rgba([240, 160, 48, 255])];

/// Raw RGBA pixels ready for `tray_icon::Icon::from_rgba`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    /// Row-major RGBA bytes.
    pub rgba: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

#[cfg(test)]
impl IconImage {
    /// RGBA of the pixel at (`x`, `y`), or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        let px = self.rgba.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

impl From<RgbaImage> for IconImage {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            rgba: img.into_raw(),
            width,
            height,
        }
    }
}

/// Colour of the state dot.
pub fn state_colour(state: SessionState) -> Rgba<u8> {
    match state {
        SessionState::Idle => Rgba([140, 140, 140, 255]),
        SessionState::Recording => Rgba([220, 30, 30, 255]),
        SessionState::Ready => Rgba([50, 170, 80, 255]),
        SessionState::Playing => Rgba([40, 120, 220, 255]),
    }
}

/// Filled circle on a transparent square.
pub fn state_icon(state: SessionState, size: u32) -> IconImage {
    let colour = state_colour(state);
    let centre = (size as f32 - 1.0) / 2.0;
    let radius = size as f32 * 0.4;

    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 - centre;
        let dy = y as f32 - centre;
        if dx * dx + dy * dy <= radius * radius {
            colour
        } else {
            TRANSPARENT
        }
    })
    .into()
}

/// Envelope of each channel stacked top to bottom, with the cursor drawn
/// as a full-height line when it falls inside the visible range.
pub fn plot_icon(plot: &WaveformPlot, size: u32) -> IconImage {
    let mut img = RgbaImage::from_pixel(size, size, BACKGROUND);
    let channels = u32::from(plot.channels().max(1));
    let band = (size / channels).max(1);

    for channel in 0..plot.channels() {
        let top = u32::from(channel) * band;
        let colour = CHANNEL_COLOURS[usize::from(channel) % CHANNEL_COLOURS.len()];

        for (x, env) in (0..size).zip(plot.envelope(channel, size as usize)) {
            let upper = sample_row(env.max, top, band);
            let lower = sample_row(env.min, top, band);
            for y in upper..=lower {
                if y < size {
                    img.put_pixel(x, y, colour);
                }
            }
        }
    }

    if let Some(x) = cursor_column(plot, size) {
        for y in 0..size {
            img.put_pixel(x, y, CURSOR);
        }
    }

    img.into()
}

/// Pixel column of the cursor, if it is inside the visible range.
pub fn cursor_column(plot: &WaveformPlot, size: u32) -> Option<u32> {
    let cursor = plot.cursor()?;
    let range = plot.x_range();
    if !range.contains(&cursor) {
        return None;
    }
    let span = (range.end - range.start).max(1) as u64;
    let column = (cursor - range.start) as u64 * u64::from(size) / span;
    u32::try_from(column).ok().map(|c| c.min(size.saturating_sub(1)))
}

// +1.0 maps to the top row of the band, -1.0 to the bottom.
fn sample_row(sample: f32, top: u32, band: u32) -> u32 {
    let v = if sample.is_nan() {
        0.0
    } else {
        sample.clamp(-1.0, 1.0)
    };
    let span = band.saturating_sub(1) as f32;
    top + ((1.0 - v) / 2.0 * span).round() as u32
}
