//! Human-readable rendering of charts.

mod console;

pub use console::*;
