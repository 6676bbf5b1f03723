//! Menus whose contents follow the player state.
//!
//! A leaf path segment tagged with `#@<keyword>` becomes a submenu that is
//! registered here. Every time the menu is shown, [`DynamicMenus::refresh`]
//! empties each registered submenu and repopulates it from a fresh
//! [`PlayerState`].
use crate::menu::{MenuHandle, MenuId, MenuTree};
use crate::provider;
use crate::state::{PlayerState, TrackType};

/// Marker introducing a dynamic keyword in a path segment comment.
pub const DYNAMIC_PREFIX: &str = "#@";

/// The player collections a dynamic menu can list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `tracks/video`
    VideoTracks,
    /// `tracks/audio`
    AudioTracks,
    /// `tracks/sub`
    SubTracks,
    /// `tracks/sub-secondary`
    SecondarySubTracks,
    /// `chapters`
    Chapters,
    /// `editions`
    Editions,
    /// `audio-devices`
    AudioDevices,
}

impl Keyword {
    /// Every keyword, in lookup order.
    pub const ALL: [Self; 7] = [
        Self::VideoTracks,
        Self::AudioTracks,
        Self::SubTracks,
        Self::SecondarySubTracks,
        Self::Chapters,
        Self::Editions,
        Self::AudioDevices,
    ];

    /// Returns the keyword as written in the configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VideoTracks => "tracks/video",
            Self::AudioTracks => "tracks/audio",
            Self::SubTracks => "tracks/sub",
            Self::SecondarySubTracks => "tracks/sub-secondary",
            Self::Chapters => "chapters",
            Self::Editions => "editions",
            Self::AudioDevices => "audio-devices",
        }
    }

    /// Looks up a keyword by its exact configuration spelling.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.as_str() == keyword)
    }

    /// Repopulates the (already emptied) `menu` from `state`.
    pub fn update(self, state: &PlayerState, tree: &mut MenuTree, menu: MenuHandle) {
        match self {
            Self::VideoTracks => {
                provider::tracks(state, tree, menu, TrackType::Video, "vid", state.vid);
            }
            Self::AudioTracks => {
                provider::tracks(state, tree, menu, TrackType::Audio, "aid", state.aid);
            }
            Self::SubTracks => {
                provider::tracks(state, tree, menu, TrackType::Sub, "sid", state.sid);
            }
            Self::SecondarySubTracks => provider::tracks(
                state,
                tree,
                menu,
                TrackType::Sub,
                "secondary-sid",
                state.secondary_sid,
            ),
            Self::Chapters => provider::chapters(state, tree, menu),
            Self::Editions => provider::editions(state, tree, menu),
            Self::AudioDevices => provider::audio_devices(state, tree, menu),
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submenu bound to a [`Keyword`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicEntry {
    /// The collection listed by the submenu.
    pub keyword: Keyword,
    /// The submenu being repopulated.
    pub menu: MenuHandle,
    /// The item owning the submenu in its parent menu.
    pub id: MenuId,
}

/// The registry of dynamic submenus of one [`MenuTree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicMenus {
    entries: Vec<DynamicEntry>,
}

impl DynamicMenus {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `menu` to the provider named `keyword`.
    ///
    /// Returns `false`, registering nothing, if the keyword is unknown.
    pub fn register(&mut self, keyword: &str, menu: MenuHandle, id: MenuId) -> bool {
        let Some(keyword) = Keyword::from_keyword(keyword) else {
            log::debug!("Unknown dynamic menu keyword: {keyword:?}");
            return false;
        };

        log::debug!("Registered dynamic menu {keyword} (item {})", id.as_u32());
        self.entries.push(DynamicEntry { keyword, menu, id });
        true
    }

    /// Returns the registered entries, in registration order.
    #[must_use]
    pub fn entries(&self) -> &[DynamicEntry] {
        &self.entries
    }

    /// Rebuilds every registered submenu from `state`.
    ///
    /// The item owning each submenu is enabled if the submenu ends up with
    /// items and grayed out otherwise.
    pub fn refresh(&self, tree: &mut MenuTree, state: &PlayerState) {
        for entry in &self.entries {
            tree.clear(entry.menu);
            entry.keyword.update(state, tree, entry.menu);

            let count = tree.menu(entry.menu).len();
            let _ = tree.set_enabled(entry.id, count > 0);

            log::debug!("Refreshed dynamic menu {}: {count} items", entry.keyword);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{ItemKind, State};
    use crate::state::Edition;

    #[test]
    fn test_keyword_lookup() {
        for keyword in Keyword::ALL {
            assert_eq!(Keyword::from_keyword(keyword.as_str()), Some(keyword));
        }

        assert_eq!(Keyword::from_keyword("tracks"), None);
        assert_eq!(Keyword::from_keyword("Chapters"), None);
        assert_eq!(Keyword::from_keyword("chapters "), None);
    }

    #[test]
    fn test_register_unknown_keyword() {
        let mut tree = MenuTree::new();
        let (id, menu) = tree.append_submenu(MenuHandle::ROOT, "Playlist");
        let mut dynamic = DynamicMenus::new();

        assert!(!dynamic.register("playlist", menu, id));
        assert!(dynamic.entries().is_empty());
    }

    #[test]
    fn test_refresh_toggles_parent() {
        let mut tree = MenuTree::new();
        let (id, menu) = tree.append_submenu(MenuHandle::ROOT, "Editions");
        let mut dynamic = DynamicMenus::new();
        assert!(dynamic.register("editions", menu, id));

        dynamic.refresh(&mut tree, &PlayerState::default());
        assert!(tree.menu(menu).is_empty());
        assert!(!tree.root().items()[0].state.enabled);

        let state = PlayerState {
            editions: vec![Edition {
                id: 0,
                title: Some("Director's Cut".into()),
            }],
            edition: 0,
            ..PlayerState::default()
        };
        dynamic.refresh(&mut tree, &state);
        assert_eq!(tree.menu(menu).len(), 1);
        assert!(tree.root().items()[0].state.enabled);
    }

    #[test]
    fn test_refresh_discards_stale_items() {
        let mut tree = MenuTree::new();
        let (id, menu) = tree.append_submenu(MenuHandle::ROOT, "Chapters");
        let _ = tree.append(menu, "stale", State::NORMAL, ItemKind::Command(None));
        let mut dynamic = DynamicMenus::new();
        assert!(dynamic.register("chapters", menu, id));

        dynamic.refresh(&mut tree, &PlayerState::default());

        assert!(tree.menu(menu).is_empty());
    }
}
