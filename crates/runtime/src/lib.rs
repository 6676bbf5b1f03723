//! The plugin worker of mpv_menu.
//!
//! Every interaction with the menu (showing it, choosing an item, reloading
//! the configuration) is posted as a [`Request`] through a [`Dispatcher`] and
//! handled, strictly in order, by a single [`Worker`] thread. The worker owns
//! the [`ContextMenu`], so no locking is needed anywhere else.
//!
//! ```rust,ignore
//! let window = hwnd.as_ptr() as usize;
//! let (dispatcher, handle) = mpv_menu_runtime::spawn(move || {
//!     let hwnd = NonNull::new(window as *mut c_void).expect("window handle");
//!     (client, Win32Surface::new(hwnd).expect("player window"))
//! })?;
//!
//! // From the window procedure:
//! dispatcher.show(Point::new(x, y))?;
//! dispatcher.select(MenuId(id))?;
//! ```
//!
//! [`ContextMenu`]: mpv_menu_core::ContextMenu
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use mpv_menu_core as core;

mod dispatcher;
mod worker;

pub use dispatcher::{Dispatcher, Error, Request};
pub use worker::{Worker, spawn};
