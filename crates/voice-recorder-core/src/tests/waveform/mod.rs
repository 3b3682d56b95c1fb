mod clock;
mod plot;
