//! Stub implementations for non-Windows platforms.
//!
//! These provide the same API as the Windows implementations but return errors
//! or no-ops, allowing the crate to compile on all platforms.

use std::ffi::c_void;
use std::ptr::NonNull;

use mpv_menu_core::{MenuTree, Point, Rectangle, Surface};

use crate::MenuError;

/// Stub native menu for non-Windows platforms.
#[derive(Debug)]
pub struct NativeMenu {
    _private: (),
}

impl NativeMenu {
    /// Build a native menu (stub - always returns NotSupported).
    ///
    /// # Errors
    ///
    /// Always returns `MenuError::NotSupported` on non-Windows platforms.
    pub fn build(_tree: &MenuTree) -> Result<Self, MenuError> {
        Err(MenuError::NotSupported)
    }
}

/// Stub window surface for non-Windows platforms.
///
/// Its client area is empty, so no menu is ever shown on it.
#[derive(Debug)]
pub struct Win32Surface {
    _private: (),
}

impl Win32Surface {
    /// Create a surface (stub - always returns NotSupported).
    ///
    /// # Errors
    ///
    /// Always returns `MenuError::NotSupported` on non-Windows platforms.
    pub fn new(_hwnd: NonNull<c_void>) -> Result<Self, MenuError> {
        Err(MenuError::NotSupported)
    }
}

impl Surface for Win32Surface {
    fn client_rect(&self) -> Rectangle {
        Rectangle::default()
    }

    fn screen_to_client(&self, point: Point) -> Point {
        point
    }

    fn client_to_screen(&self, point: Point) -> Point {
        point
    }

    fn popup(&mut self, _tree: &MenuTree, _point: Point) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stubs_are_not_supported() {
        let mut value = 0_u8;
        let hwnd = NonNull::from(&mut value).cast::<c_void>();

        assert_eq!(Win32Surface::new(hwnd).unwrap_err(), MenuError::NotSupported);
        assert_eq!(
            NativeMenu::build(&MenuTree::new()).unwrap_err(),
            MenuError::NotSupported
        );
    }
}
