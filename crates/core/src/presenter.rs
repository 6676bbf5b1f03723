//! Loading, showing and dispatching the context menu.
use std::path::Path;

use crate::Error;
use crate::builder::Builder;
use crate::dynamic::DynamicMenus;
use crate::menu::{Item, MenuId, MenuTree};
use crate::options::{self, Options};
use crate::parser;
use crate::player::Player;
use crate::shell::{Point, Surface};
use crate::state::PlayerState;

/// The compiled context menu: the static tree plus its dynamic submenus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextMenu {
    tree: MenuTree,
    dynamic: DynamicMenus,
}

impl ContextMenu {
    /// Creates an empty menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles the menu lines of a configuration file.
    #[must_use]
    pub fn parse(data: &str, options: &Options) -> Self {
        let mut tree = MenuTree::new();
        let mut dynamic = DynamicMenus::new();
        let mut builder = Builder::new(&mut tree, &mut dynamic, options.uosc);

        for line in parser::parse(data, options.uosc) {
            builder.add(&line);
        }

        Self { tree, dynamic }
    }

    /// Reads and compiles a configuration file.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so a stray byte only
    /// affects the line it appears on.
    pub fn read(path: impl AsRef<Path>, options: &Options) -> Result<Self, Error> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::parse(&String::from_utf8_lossy(&data), options))
    }

    /// Loads the menu from the file named by the player's `input-conf`.
    ///
    /// A missing or unreadable file yields an empty menu.
    pub fn load(player: &impl Player) -> Self {
        let options = Options::query(player);
        let path = player.expand_path(&options::input_conf_path(player));

        match Self::read(&path, &options) {
            Ok(menu) => {
                log::debug!(
                    "Loaded menu from {path}: {} top-level items, {} dynamic menus",
                    menu.tree.root().len(),
                    menu.dynamic.entries().len()
                );
                menu
            }
            Err(error) => {
                log::warn!("{error}");
                Self::new()
            }
        }
    }

    /// Returns the menu tree.
    #[must_use]
    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// Returns the dynamic submenu registry.
    #[must_use]
    pub fn dynamic(&self) -> &DynamicMenus {
        &self.dynamic
    }

    /// Rebuilds every dynamic submenu from `state`.
    pub fn refresh(&mut self, state: &PlayerState) {
        self.dynamic.refresh(&mut self.tree, state);
    }

    /// Shows the menu at `point`, given in screen coordinates.
    ///
    /// Points outside the client area of `surface` are ignored. Returns
    /// `true` if the menu was shown.
    pub fn show(
        &mut self,
        player: &impl Player,
        surface: &mut impl Surface,
        point: Point,
    ) -> bool {
        let client = surface.screen_to_client(point);

        if !surface.client_rect().contains(client) {
            log::trace!("Ignoring menu request outside the client area: {point:?}");
            return false;
        }

        if !self.dynamic.entries().is_empty() {
            self.refresh(&PlayerState::query(player));
        }

        surface.popup(&self.tree, surface.client_to_screen(client));
        true
    }

    /// Dispatches the command of the chosen item.
    ///
    /// Returns `false` if the item does not exist or has no command.
    pub fn select(&self, player: &impl Player, id: MenuId) -> bool {
        let Some(command) = self.tree.item(id).and_then(Item::payload) else {
            return false;
        };

        log::debug!("Dispatching menu command: {command}");
        player.command_async(command);
        true
    }
}
