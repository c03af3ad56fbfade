//! Chart records and the facts derived from them.
//!
//! - `Chart`, `ChartBuilder` - the record the query engine filters over
//! - `Difficulty`, `SranLevel`, `Folder` - categorical fields
//! - `bpm` - BPM display analysis (bugged tempos, tempo changes)
//! - `ChartContext` - catalog-wide facts such as the hardest chart of a song

pub mod bpm;
mod context;
mod difficulty;
mod folder;
mod record;
mod sran_level;

pub use context::*;
pub use difficulty::*;
pub use folder::*;
pub use record::*;
pub use sran_level::*;
