//! Engine constants.
//!
//! Grouped by concern the same way callers refer to them, e.g.
//! `config::level::MAX` or `config::query::DEFAULT_EXCLUDED_FLAGS`.

/// Chart level bounds.
pub mod level {
    /// Lowest level a chart can have.
    pub const MIN: u8 = 1;

    /// Highest level a chart can have.
    pub const MAX: u8 = 50;
}

/// Rating comparison configuration.
pub mod rating {
    /// Decimal places kept when ratings are compared as text.
    pub const TEXT_PRECISION: usize = 6;

    /// Ratings at or below this value fall in the "e" bucket.
    pub const EASY_BUCKET_MAX: f64 = -0.5;

    /// Ratings at or above this value fall in the "h" bucket.
    pub const HARD_BUCKET_MIN: f64 = 0.5;
}

/// BPM display analysis.
pub mod bpm {
    /// A tempo is "bugged" when this value divides evenly by it.
    pub const BUGGED_DIVIDEND: u32 = 3600;
}

/// Folder vocabulary.
pub mod folder {
    /// Newest numbered version folder.
    pub const LATEST_VERSION: u8 = 28;
}

/// Filter-string handling.
pub mod query {
    use crate::query::Flag;

    /// Separator between clauses of a filter string.
    pub const CLAUSE_SEPARATOR: char = ',';

    /// Flags excluded from every query unless the query mentions them.
    pub const DEFAULT_EXCLUDED_FLAGS: [Flag; 2] = [Flag::Omnimix, Flag::Lively];
}
