//! Pull-up diagnostic console
//!
//! A bounded in-memory message log with a drag-to-resize panel that displays
//! it over a running application.
//!
//! The library follows a Pure Core / Impure Shell split: `model`, `state`,
//! `geometry` and `observer` hold the data and rules with no I/O, while
//! `console`, `logging` and `view` connect them to threads, files and the
//! terminal.

pub mod config;
pub mod console;
pub mod geometry;
pub mod logging;
pub mod model;
pub mod observer;
pub mod state;
pub mod view;
