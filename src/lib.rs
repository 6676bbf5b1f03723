//! mpv_menu is a native context menu for the mpv media player.
//!
//! The menu is declared in `input.conf`, next to the key bindings it
//! mirrors. Appending a `#menu:` directive to a binding adds it to the menu;
//! `>` nests it in submenus:
//!
//! ```text
//! Ctrl+a  show-text foobar    #menu: Foo > Bar
//! _       ignore              #menu: -
//! _       ignore              #menu: Tracks > Audio #@tracks/audio
//! ```
//!
//! A submenu tagged with `#@keyword` is refilled from the player every time
//! the menu is shown. The known keywords are listed by [`Keyword`].
//!
//! # Crates
//! - [`core`](crate::core): the menu model, the `input.conf` compiler and the dynamic menus.
//! - [`runtime`](crate::runtime): the worker thread serializing show and select requests.
//! - `windows`: native Win32 popup menus (with the `windows` feature).
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use mpv_menu_core as core;
pub use mpv_menu_runtime as runtime;

#[cfg(feature = "windows")]
pub use mpv_menu_windows as windows;

pub use crate::core::{
    ContextMenu, Error, Keyword, MenuId, MenuTree, Options, Player, PlayerState, Point, Surface,
};
pub use crate::runtime::{Dispatcher, Request, Worker, spawn};

#[cfg(feature = "windows")]
pub use crate::windows::{MenuError, Win32Surface};
