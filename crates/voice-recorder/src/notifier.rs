use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use notify_rust::Notification;
use tracing::{debug, instrument};
use voice_recorder_core::{Notice, NoticeLevel};

const APP_NAME: &str = "Voice Recorder";

/// Freedesktop icon name for a notice level.
pub fn icon_name(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "dialog-information",
        NoticeLevel::Warning => "dialog-warning",
        NoticeLevel::Error => "dialog-error",
    }
}

/// Show `notice` as a desktop notification.
///
/// Must run on the main thread; macOS delivers notifications from there only.
#[track_caller]
#[instrument]
pub fn show(notice: &Notice) -> AppResult<()> {
    Notification::new()
        .appname(APP_NAME)
        .summary(&notice.title)
        .body(&notice.message)
        .icon(icon_name(notice.level))
        .show()
        .map_err(|e| AppError::NotificationFailed {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    debug!(level = ?notice.level, "Notification shown");

    Ok(())
}
