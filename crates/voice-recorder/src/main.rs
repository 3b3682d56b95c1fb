//! Voice Recorder: record, save and play back microphone audio from the tray.

mod app;
mod app_command;
mod config;
mod error;
mod hotkey_handler;
mod icon_renderer;
mod notifier;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_manager;
mod tray_view;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    hotkey_handler::HotkeyHandler,
    icon_renderer::IconImage,
    tray_command::{TrayCommand, TrayCommandSink},
    tray_manager::{MenuIds, TrayManager},
    tray_view::TrayView,
};

use crate::config::Config;

use global_hotkey::GlobalHotKeyManager;
use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::{mpsc, watch};
use tracing::error;
use voice_recorder_core::{AudioCapturer, AudioPlayer, Notice, Recorder};

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("voice_recorder=debug,voice_recorder_core=debug")
        .init();

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new() {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    // Dropping it unregisters the hotkey.
    let mut hotkey_manager: Option<GlobalHotKeyManager> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => {
                match cmd {
                    TrayCommand::SetStatus(status) => {
                        if let Err(e) = tray_manager.set_status(&status) {
                            error!(error = ?e, "Failed to update tray status");
                        }
                    }
                    TrayCommand::SetCommands(commands) => {
                        tray_manager.set_commands(commands);
                    }
                    TrayCommand::SetIcon(icon) => {
                        if let Err(e) = tray_manager.set_icon(icon) {
                            error!(error = ?e, "Failed to update tray icon");
                        }
                    }
                    TrayCommand::Notify(notice) => {
                        if let Err(e) = notifier::show(&notice) {
                            error!(error = ?e, "Failed to show notification");
                        }
                    }
                    TrayCommand::Shutdown => {
                        *control_flow = ControlFlow::ExitWithCode(0);
                    }
                }
                return;
            }
            Event::NewEvents(tao::event::StartCause::Init) => {
                let loaded = Config::load().and_then(|loaded| Ok((loaded, Config::config_path()?)));
                let (config, config_path) = match loaded {
                    Ok(((config, problem), path)) => {
                        if let Some(e) = problem {
                            notify(
                                &tray_proxy,
                                Notice::warning(format!(
                                    "Settings could not be loaded, using defaults. {}",
                                    e
                                )),
                            );
                        }
                        (config, path)
                    }
                    Err(e) => {
                        error!("Failed to load config: {:?}", e);
                        shut_down_with(&tray_proxy, Notice::error(e.to_string()));
                        return;
                    }
                };

                let saver = match config.saver() {
                    Ok(s) => s,
                    Err(e) => {
                        error!("Failed to create RecordingSaver: {:?}", e);
                        shut_down_with(&tray_proxy, Notice::error(e.to_string()));
                        return;
                    }
                };

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let (command_tx, command_rx) = mpsc::channel(32);
                let (shutdown_tx, shutdown_rx) = watch::channel(false);

                // Register hotkey on the main thread. tao's event loop pumps
                // the Windows messages needed for WM_HOTKEY delivery.
                // Without it the tray menu still drives everything.
                let hotkey_id = match HotkeyHandler::register_hotkey() {
                    Ok((manager, id)) => {
                        hotkey_manager = Some(manager);
                        Some(id)
                    }
                    Err(e) => {
                        error!("Failed to register hotkey: {:?}", e);
                        notify(
                            &tray_proxy,
                            Notice::warning(
                                "Ctrl+Shift+R is unavailable. Use the tray menu to record.",
                            ),
                        );
                        None
                    }
                };

                let tray_proxy = tray_proxy.clone();
                let menu_ids = tray_manager.ids().clone();

                // cpal streams are !Send on some hosts, so the devices and the
                // recorder are created on the runtime thread and never leave it.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let devices = AudioCapturer::new()
                            .and_then(|capture| Ok((capture, AudioPlayer::new()?)));
                        let (capture, playback) = match devices {
                            Ok(pair) => pair,
                            Err(e) => {
                                error!("Failed to open audio devices: {:?}", e);
                                shut_down_with(&tray_proxy, Notice::error(e.to_string()));
                                return;
                            }
                        };

                        let (events_tx, events_rx) = mpsc::channel(64);
                        let mut recorder = Recorder::new(
                            capture,
                            playback,
                            TrayView::new(tray_proxy),
                            saver,
                            config.recorder_settings(),
                            events_tx,
                        );
                        recorder.set_filename_base(config.recording.filename_base.clone());

                        let hotkey_handler =
                            hotkey_id.map(|id| HotkeyHandler::new(id, command_tx));

                        let app = App {
                            recorder,
                            events_rx,
                            command_rx,
                            shutdown_tx,
                            menu_ids,
                            config_path,
                        };

                        tokio::join!(
                            async {
                                let Some(handler) = hotkey_handler else {
                                    return;
                                };
                                if let Err(e) = handler.run(shutdown_rx).await {
                                    error!(error = ?e, "Hotkey handler error");
                                }
                            },
                            async {
                                if let Err(e) = app.run().await {
                                    error!(error = ?e, "App error");
                                }
                            }
                        );
                    });
                });
            }
            _ => {}
        }

        // Keep hotkey_manager alive in the closure for the app's lifetime.
        let _ = &hotkey_manager;
    });
}

/// Queue a desktop notification on the UI thread.
fn notify(tray: &impl TrayCommandSink, notice: Notice) {
    if let Err(e) = tray.send_tray(TrayCommand::Notify(notice)) {
        error!(error = ?e, "Failed to queue notification");
    }
}

/// Tell the user why the app cannot run, then exit once the notice is shown.
fn shut_down_with(tray: &impl TrayCommandSink, notice: Notice) {
    notify(tray, notice);
    if let Err(e) = tray.send_tray(TrayCommand::Shutdown) {
        error!(error = ?e, "Failed to queue shutdown");
    }
}
