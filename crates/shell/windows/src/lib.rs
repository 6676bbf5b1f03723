//! Windows platform integration for mpv_menu.
//!
//! This crate realises a [`MenuTree`] as a native Win32 popup menu and
//! provides the [`Surface`] the menu is shown on:
//!
//! - **Native menus**: [`NativeMenu`] mirrors the tree as an `HMENU` hierarchy,
//!   using each item's [`MenuId`] as its command identifier.
//! - **Window surface**: [`Win32Surface`] wraps the player window and shows the
//!   menu with `TrackPopupMenuEx`. The chosen item arrives at the window
//!   procedure as `WM_COMMAND`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mpv_menu_windows::Win32Surface;
//!
//! // Window handles are not `Send`: pass the address, build the surface
//! // on the worker thread.
//! let window = hwnd.as_ptr() as usize;
//! let (dispatcher, _) = mpv_menu_runtime::spawn(move || {
//!     let hwnd = NonNull::new(window as *mut c_void).expect("window handle");
//!     (client, Win32Surface::new(hwnd).expect("player window"))
//! })?;
//! ```
//!
//! # Platform Support
//!
//! This crate only compiles on Windows. On other platforms, the types exist but
//! all operations are no-ops or return errors.
//!
//! [`MenuTree`]: mpv_menu_core::MenuTree
//! [`MenuId`]: mpv_menu_core::MenuId
//! [`Surface`]: mpv_menu_core::Surface

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;

pub use error::MenuError;

#[cfg(target_os = "windows")]
mod menu;
#[cfg(target_os = "windows")]
mod surface;

#[cfg(target_os = "windows")]
pub use menu::NativeMenu;
#[cfg(target_os = "windows")]
pub use surface::Win32Surface;

// Provide stub implementations for non-Windows platforms
#[cfg(not(target_os = "windows"))]
mod stubs;

#[cfg(not(target_os = "windows"))]
pub use stubs::{NativeMenu, Win32Surface};
