pub mod color_utils;
pub mod config;
pub mod logging;
pub mod model;
pub mod share;
pub mod starfield;

#[cfg(feature = "tui")]
pub mod tui;
