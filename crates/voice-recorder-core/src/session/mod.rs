#[allow(clippy::module_inception)]
mod session;
mod session_state;

pub use {session::Session, session_state::SessionState};
