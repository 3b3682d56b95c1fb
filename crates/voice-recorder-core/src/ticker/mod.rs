mod cursor;
mod elapsed;
mod handle;

pub use {
    cursor::{CURSOR_TICK, spawn_cursor_ticker},
    elapsed::{ELAPSED_TICK, spawn_elapsed_ticker},
    handle::TickerHandle,
};
