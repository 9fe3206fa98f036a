//! foxcalc: a two-screen terminal calculator with a hidden surprise.

pub mod engine;
pub mod key;
pub mod tui;
