//! System tray icon with a recorder menu.
//!
//! The menu carries a read-only status line followed by Start, Stop, Save,
//! Play and Exit. Items are enabled from the recorder's legal command set.

use crate::{
    AppCommand, AppError, AppResult, IconImage,
    icon_renderer::{ICON_SIZE, state_icon},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{info, instrument};
use tray_icon::menu::{Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};
use voice_recorder_core::{Command, CommandSet, SessionState};

const TOOLTIP_PREFIX: &str = "Voice Recorder";

/// Menu item ids, shared with the runtime thread to decode menu events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuIds {
    pub start: MenuId,
    pub stop: MenuId,
    pub save: MenuId,
    pub play: MenuId,
    pub exit: MenuId,
}

impl Default for MenuIds {
    fn default() -> Self {
        Self {
            start: MenuId::new("start"),
            stop: MenuId::new("stop"),
            save: MenuId::new("save"),
            play: MenuId::new("play"),
            exit: MenuId::new("exit"),
        }
    }
}

impl MenuIds {
    /// The command a click on `id` stands for.
    pub fn command_for(&self, id: &MenuId) -> Option<AppCommand> {
        if *id == self.start {
            Some(AppCommand::Recorder(Command::Start))
        } else if *id == self.stop {
            Some(AppCommand::Recorder(Command::Stop))
        } else if *id == self.save {
            Some(AppCommand::Recorder(Command::Save))
        } else if *id == self.play {
            Some(AppCommand::Recorder(Command::Play))
        } else if *id == self.exit {
            Some(AppCommand::Shutdown)
        } else {
            None
        }
    }
}

/// System tray icon manager. Lives on the main thread.
pub struct TrayManager {
    tray_icon: TrayIcon,
    status_item: MenuItem,
    start_item: MenuItem,
    stop_item: MenuItem,
    save_item: MenuItem,
    play_item: MenuItem,
    ids: MenuIds,
}

impl TrayManager {
    /// Create the tray icon with every recorder command disabled.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let ids = MenuIds::default();
        let menu = Menu::new();

        let status_item = MenuItem::new("Starting...", false, None);
        let start_item = MenuItem::with_id(ids.start.clone(), "Start", false, None);
        let stop_item = MenuItem::with_id(ids.stop.clone(), "Stop", false, None);
        let save_item = MenuItem::with_id(ids.save.clone(), "Save", false, None);
        let play_item = MenuItem::with_id(ids.play.clone(), "Play", false, None);
        let exit_item = MenuItem::with_id(ids.exit.clone(), "Exit", true, None);

        menu.append_items(&[
            &status_item,
            &PredefinedMenuItem::separator(),
            &start_item,
            &stop_item,
            &save_item,
            &play_item,
            &PredefinedMenuItem::separator(),
            &exit_item,
        ])
        .map_err(|e| AppError::TrayError {
            reason: format!("Failed to build tray menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let icon = Self::to_icon(state_icon(SessionState::Idle, ICON_SIZE))?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(TOOLTIP_PREFIX)
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            status_item,
            start_item,
            stop_item,
            save_item,
            play_item,
            ids,
        })
    }

    /// Update the status line and tooltip.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn set_status(&mut self, status: &str) -> AppResult<()> {
        self.status_item.set_text(status);

        self.tray_icon
            .set_tooltip(Some(format!("{} - {}", TOOLTIP_PREFIX, status)))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Enable exactly the commands in `commands`.
    pub fn set_commands(&mut self, commands: CommandSet) {
        self.start_item.set_enabled(commands.start);
        self.stop_item.set_enabled(commands.stop);
        self.save_item.set_enabled(commands.save);
        self.play_item.set_enabled(commands.play);
    }

    /// Replace the tray icon.
    #[track_caller]
    pub fn set_icon(&mut self, image: IconImage) -> AppResult<()> {
        let icon = Self::to_icon(image)?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Get the menu item IDs.
    pub fn ids(&self) -> &MenuIds {
        &self.ids
    }

    #[track_caller]
    fn to_icon(image: IconImage) -> AppResult<Icon> {
        Icon::from_rgba(image.rgba, image.width, image.height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
