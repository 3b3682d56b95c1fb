mod controller;
mod session;
mod ticker;
mod waveform;
