//! The essential ideas of mpv_menu.
//!
//! This crate compiles the `#menu:` directives of an mpv `input.conf` into a
//! platform-agnostic [`MenuTree`], keeps its dynamic submenus (tracks,
//! chapters, editions and audio devices) in sync with the player, and
//! dispatches the command of the chosen item.
//!
//! It never talks to mpv or to a window system directly. The host provides a
//! [`Player`] and a [`Surface`]; the `mpv_menu_windows` crate implements the
//! latter on top of Win32 popup menus.
//!
//! ```text
//! Ctrl+a  show-text foobar    #menu: Foo > Bar
//! _       ignore              #menu: -
//! _       ignore              #menu: Tracks > Audio #@tracks/audio
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod builder;
pub mod dynamic;
pub mod menu;
pub mod options;
pub mod parser;
pub mod player;
pub mod shell;
pub mod state;
pub mod text;

mod error;
mod presenter;
mod provider;

pub use builder::Builder;
pub use dynamic::{DynamicEntry, DynamicMenus, Keyword};
pub use error::Error;
pub use menu::{Item, ItemKind, Menu, MenuHandle, MenuId, MenuTree, State};
pub use options::Options;
pub use parser::Line;
pub use player::Player;
pub use presenter::ContextMenu;
pub use shell::{Point, Rectangle, Surface};
pub use state::PlayerState;
