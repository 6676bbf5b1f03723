use std::path::PathBuf;

/// Errors raised while reading the menu definition or the player state.
///
/// None of these are fatal: callers log them and continue with an empty menu
/// or an empty collection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The menu definition file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The expanded path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A player property did not have the expected shape.
    #[error("failed to decode property `{name}`: {source}")]
    Property {
        /// The property name.
        name: &'static str,
        /// The underlying decoding error.
        source: serde_json::Error,
    },
}
