use std::ffi::c_void;
use std::ptr::NonNull;

use mpv_menu_core::{MenuTree, Point, Rectangle, Surface};
use windows::Win32::Foundation::{HWND, POINT, RECT};
use windows::Win32::Graphics::Gdi::{ClientToScreen, ScreenToClient};
use windows::Win32::UI::WindowsAndMessaging::{
    GetClientRect, IsWindow, TPM_LEFTALIGN, TPM_LEFTBUTTON, TrackPopupMenuEx,
};

use crate::{MenuError, NativeMenu};

/// The player window, as a [`Surface`] for popup menus.
///
/// The chosen item is delivered to the window procedure of the window as
/// `WM_COMMAND`, with the item identifier in the low word of `wParam`.
#[derive(Debug)]
pub struct Win32Surface {
    hwnd: HWND,
    // Kept alive until the next popup so late WM_COMMANDs still match
    menu: Option<NativeMenu>,
}

impl Win32Surface {
    /// Creates a surface for the given window.
    ///
    /// # Arguments
    ///
    /// * `hwnd` - A pointer to the HWND (obtained from the player's `window-id`)
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidWindow`] if `hwnd` is not a window.
    pub fn new(hwnd: NonNull<c_void>) -> Result<Self, MenuError> {
        let hwnd = HWND(hwnd.as_ptr());

        #[allow(unsafe_code)]
        let valid = unsafe { IsWindow(hwnd) }.as_bool();

        if !valid {
            return Err(MenuError::InvalidWindow);
        }

        Ok(Self { hwnd, menu: None })
    }
}

impl Surface for Win32Surface {
    fn client_rect(&self) -> Rectangle {
        let mut rect = RECT::default();

        #[allow(unsafe_code)]
        let result = unsafe { GetClientRect(self.hwnd, &mut rect) };

        if let Err(error) = result {
            log::warn!("GetClientRect failed: {error}");
        }

        Rectangle {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        }
    }

    fn screen_to_client(&self, point: Point) -> Point {
        let mut point = POINT {
            x: point.x,
            y: point.y,
        };

        #[allow(unsafe_code)]
        let _ = unsafe { ScreenToClient(self.hwnd, &mut point) };

        Point::new(point.x, point.y)
    }

    fn client_to_screen(&self, point: Point) -> Point {
        let mut point = POINT {
            x: point.x,
            y: point.y,
        };

        #[allow(unsafe_code)]
        let _ = unsafe { ClientToScreen(self.hwnd, &mut point) };

        Point::new(point.x, point.y)
    }

    fn popup(&mut self, tree: &MenuTree, point: Point) {
        self.menu = None;

        let menu = match NativeMenu::build(tree) {
            Ok(menu) => menu,
            Err(error) => {
                log::warn!("{error}");
                return;
            }
        };

        #[allow(unsafe_code)]
        let _ = unsafe {
            TrackPopupMenuEx(
                menu.handle(),
                (TPM_LEFTALIGN | TPM_LEFTBUTTON).0,
                point.x,
                point.y,
                self.hwnd,
                None,
            )
        };

        self.menu = Some(menu);
    }
}
