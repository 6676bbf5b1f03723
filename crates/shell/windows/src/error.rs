/// Errors that can occur while building or showing a native menu.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    /// `CreatePopupMenu` failed.
    #[error("failed to create popup menu: {0}")]
    CreateMenu(String),
    /// `InsertMenuItemW` failed.
    #[error("failed to insert menu item {id}: {message}")]
    InsertItem {
        /// Identifier of the item being inserted.
        id: u32,
        /// Windows API error.
        message: String,
    },
    /// The provided window handle is invalid.
    #[error("invalid window handle")]
    InvalidWindow,
    /// Native menus are not supported on this platform.
    #[error("native menus are not supported on this platform")]
    NotSupported,
}
