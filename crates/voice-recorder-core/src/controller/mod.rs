mod command;
mod event;
mod recorder;
mod view;

pub use {
    command::{Command, CommandSet},
    event::RecorderEvent,
    recorder::{Recorder, RecorderSettings},
    view::{Notice, NoticeLevel, RecorderView},
};
