//! Kitchen Rush: a timed ingredient-matching mini game.
//!
//! The player clicks spawned ingredient icons matching the active recipe
//! before the countdown runs out. Game rules live in [`model`] as a pure
//! reducer so they run under native `cargo test`; [`components`] is the Yew
//! layer wiring tickers, timers, and the DOM to it.

pub mod components;
pub mod model;
pub mod state;
pub mod util;
