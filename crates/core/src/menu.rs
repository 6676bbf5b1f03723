//! Context menu model.
//!
//! This module defines the in-memory representation of the plugin's context
//! menu. The tree is an arena of [`Menu`]s addressed by [`MenuHandle`]; the
//! root menu is always handle `0`. Backends realise it as a native popup menu
//! (e.g. a Win32 `HMENU` hierarchy) every time it is shown.
//!
//! Each [`Item`] carries a [`MenuId`] that is unique across the whole tree, a
//! display title, a [`State`], and either a command payload, a submenu or
//! nothing at all (separators).

/// First identifier handed out to menu items (`WM_USER + 100`).
pub const FIRST_ID: u32 = 0x0400 + 100;

/// The character the native toolkit interprets as a mnemonic marker.
pub const MNEMONIC: char = '&';

/// Identifier of a menu item, reported back when the item is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuId(pub u32);

impl MenuId {
    /// Returns the raw identifier.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// Handle to a [`Menu`] owned by a [`MenuTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuHandle(usize);

impl MenuHandle {
    /// The root menu of every [`MenuTree`].
    pub const ROOT: Self = Self(0);
}

/// Display state of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    /// Whether the item can be chosen.
    pub enabled: bool,
    /// Whether the item shows a check mark.
    pub checked: bool,
    /// Whether the check mark is drawn as a radio bullet.
    pub radio: bool,
}

impl State {
    /// An enabled, unchecked item.
    pub const NORMAL: Self = Self {
        enabled: true,
        checked: false,
        radio: false,
    };

    /// A grayed out, unchecked item.
    pub const DISABLED: Self = Self {
        enabled: false,
        checked: false,
        radio: false,
    };

    /// An enabled item with a check mark.
    pub const CHECKED: Self = Self {
        enabled: true,
        checked: true,
        radio: false,
    };
}

impl Default for State {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// The concrete type of an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// A separator line.
    Separator,
    /// A leaf item, optionally carrying the command it dispatches.
    Command(Option<String>),
    /// An item opening a nested menu.
    Submenu(MenuHandle),
}

/// One entry of a [`Menu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Identifier reported when the item is chosen.
    pub id: MenuId,
    /// Escaped display title. Empty for separators.
    pub title: String,
    /// Display state.
    pub state: State,
    /// Item contents.
    pub kind: ItemKind,
}

impl Item {
    /// Returns the command this item dispatches, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Command(payload) => payload.as_deref(),
            ItemKind::Separator | ItemKind::Submenu(_) => None,
        }
    }

    /// Returns the nested menu of this item, if any.
    #[must_use]
    pub fn submenu(&self) -> Option<MenuHandle> {
        match self.kind {
            ItemKind::Submenu(handle) => Some(handle),
            ItemKind::Separator | ItemKind::Command(_) => None,
        }
    }

    /// Returns `true` if this item is a separator.
    #[must_use]
    pub fn is_separator(&self) -> bool {
        matches!(self.kind, ItemKind::Separator)
    }
}

/// An ordered list of items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    items: Vec<Item>,
}

impl Menu {
    /// Returns the items of this menu.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the menu has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// An arena holding the root menu and all of its submenus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    menus: Vec<Menu>,
    next_id: u32,
    released: Vec<MenuId>,
}

impl Default for MenuTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuTree {
    /// Creates a tree containing an empty root menu.
    #[must_use]
    pub fn new() -> Self {
        Self {
            menus: vec![Menu::default()],
            next_id: FIRST_ID,
            released: Vec::new(),
        }
    }

    /// Returns the root menu.
    #[must_use]
    pub fn root(&self) -> &Menu {
        &self.menus[MenuHandle::ROOT.0]
    }

    /// Returns the menu behind `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not created by this tree.
    #[must_use]
    pub fn menu(&self, handle: MenuHandle) -> &Menu {
        &self.menus[handle.0]
    }

    /// Creates a new, detached, empty menu.
    pub fn create_menu(&mut self) -> MenuHandle {
        self.menus.push(Menu::default());
        MenuHandle(self.menus.len() - 1)
    }

    fn allocate_id(&mut self) -> MenuId {
        if let Some(id) = self.released.pop() {
            return id;
        }

        let id = MenuId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends an item to `menu` and returns its identifier.
    pub fn append(
        &mut self,
        menu: MenuHandle,
        title: impl Into<String>,
        state: State,
        kind: ItemKind,
    ) -> MenuId {
        let id = self.allocate_id();

        self.menus[menu.0].items.push(Item {
            id,
            title: title.into(),
            state,
            kind,
        });

        id
    }

    /// Appends a separator to `menu`.
    pub fn append_separator(&mut self, menu: MenuHandle) -> MenuId {
        self.append(menu, String::new(), State::NORMAL, ItemKind::Separator)
    }

    /// Finds the submenu of `menu` with the given (escaped) title.
    ///
    /// Items without a submenu never match, even if their title does.
    #[must_use]
    pub fn find_submenu(&self, menu: MenuHandle, title: &str) -> Option<(MenuId, MenuHandle)> {
        self.menus[menu.0].items.iter().find_map(|item| {
            let handle = item.submenu()?;
            (item.title == title).then_some((item.id, handle))
        })
    }

    /// Returns the submenu of `menu` titled `title`, creating it if needed.
    pub fn append_submenu(&mut self, menu: MenuHandle, title: &str) -> (MenuId, MenuHandle) {
        if let Some(found) = self.find_submenu(menu, title) {
            return found;
        }

        let submenu = self.create_menu();
        let id = self.append(menu, title, State::NORMAL, ItemKind::Submenu(submenu));
        (id, submenu)
    }

    /// Removes every item of `menu`, releasing their identifiers for reuse.
    pub fn clear(&mut self, menu: MenuHandle) {
        let items = std::mem::take(&mut self.menus[menu.0].items);
        self.released.extend(items.into_iter().map(|item| item.id));
    }

    /// Finds an item anywhere in the tree.
    #[must_use]
    pub fn item(&self, id: MenuId) -> Option<&Item> {
        self.menus
            .iter()
            .flat_map(|menu| menu.items.iter())
            .find(|item| item.id == id)
    }

    fn item_mut(&mut self, id: MenuId) -> Option<&mut Item> {
        self.menus
            .iter_mut()
            .flat_map(|menu| menu.items.iter_mut())
            .find(|item| item.id == id)
    }

    /// Enables or grays out an item anywhere in the tree.
    ///
    /// Returns `false` if no item has the given identifier.
    pub fn set_enabled(&mut self, id: MenuId, enabled: bool) -> bool {
        match self.item_mut(id) {
            Some(item) => {
                item.state.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Makes the item at `position` the sole radio selection among the items
    /// in `first..=last` of `menu`.
    ///
    /// The other items in the range are unchecked and lose their radio style.
    /// Returns `false`, leaving the menu untouched, if `position` does not
    /// name an item in the range.
    pub fn check_radio(
        &mut self,
        menu: MenuHandle,
        first: usize,
        last: usize,
        position: usize,
    ) -> bool {
        let items = &mut self.menus[menu.0].items;

        if position < first || position > last || position >= items.len() {
            return false;
        }

        let end = last.min(items.len() - 1);

        for (index, item) in items.iter_mut().enumerate().take(end + 1).skip(first) {
            let selected = index == position;
            item.state.checked = selected;
            item.state.radio = selected;
        }

        true
    }
}

/// Escapes every [`MNEMONIC`] in `title` so it is displayed literally.
///
/// # Examples
/// - `"Rock & Roll"` → `"Rock && Roll"`
/// - `"&&"` → `"&&&&"`
pub fn escape_title(title: &str) -> String {
    title.replace(MNEMONIC, "&&")
}

/// Formats an item title as `name\tkey` and escapes it.
///
/// The key is omitted when empty or when it is the `_` placeholder.
pub fn format_title(name: &str, key: &str) -> String {
    if key.is_empty() || key == "_" {
        return escape_title(name);
    }

    escape_title(&format!("{name}\t{key}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_title() {
        assert_eq!(escape_title("Rock & Roll"), "Rock && Roll");
        assert_eq!(escape_title("&a&b&"), "&&a&&b&&");
        assert_eq!(escape_title("plain"), "plain");
    }

    #[test]
    fn test_format_title() {
        assert_eq!(format_title("Bar", "Ctrl+a"), "Bar\tCtrl+a");
        assert_eq!(format_title("Bar", "_"), "Bar");
        assert_eq!(format_title("Bar", ""), "Bar");
        assert_eq!(format_title("A&B", "Ctrl+&"), "A&&B\tCtrl+&&");
    }

    #[test]
    fn test_ids_start_after_wm_user() {
        let mut tree = MenuTree::new();
        let first = tree.append_separator(MenuHandle::ROOT);
        let second = tree.append_separator(MenuHandle::ROOT);

        assert_eq!(first, MenuId(FIRST_ID));
        assert_eq!(second, MenuId(FIRST_ID + 1));
    }

    #[test]
    fn test_append_submenu_reuses_existing() {
        let mut tree = MenuTree::new();
        let (id, first) = tree.append_submenu(MenuHandle::ROOT, "Foo");
        let (again_id, again) = tree.append_submenu(MenuHandle::ROOT, "Foo");

        assert_eq!(first, again);
        assert_eq!(id, again_id);
        assert_eq!(tree.root().len(), 1);
    }

    #[test]
    fn test_find_submenu_ignores_leaf_items() {
        let mut tree = MenuTree::new();
        let _ = tree.append(
            MenuHandle::ROOT,
            "Foo",
            State::NORMAL,
            ItemKind::Command(Some("quit".into())),
        );

        assert!(tree.find_submenu(MenuHandle::ROOT, "Foo").is_none());

        let (_, submenu) = tree.append_submenu(MenuHandle::ROOT, "Foo");
        assert_eq!(tree.root().len(), 2);
        assert_eq!(
            tree.find_submenu(MenuHandle::ROOT, "Foo").map(|(_, h)| h),
            Some(submenu)
        );
    }

    #[test]
    fn test_clear_recycles_ids() {
        let mut tree = MenuTree::new();
        let submenu = tree.create_menu();
        let a = tree.append_separator(submenu);
        let b = tree.append_separator(submenu);

        tree.clear(submenu);
        assert!(tree.menu(submenu).is_empty());

        let c = tree.append_separator(submenu);
        let d = tree.append_separator(submenu);
        let mut reused = [c, d];
        reused.sort();
        assert_eq!(reused, [a, b]);

        let e = tree.append_separator(submenu);
        assert_eq!(e, MenuId(FIRST_ID + 2));
    }

    #[test]
    fn test_set_enabled_searches_submenus() {
        let mut tree = MenuTree::new();
        let (_, submenu) = tree.append_submenu(MenuHandle::ROOT, "Foo");
        let (id, _) = tree.append_submenu(submenu, "Bar");

        assert!(tree.set_enabled(id, false));
        assert_eq!(tree.item(id).map(|item| item.state.enabled), Some(false));
        assert!(!tree.set_enabled(MenuId(1), false));
    }

    #[test]
    fn test_check_radio() {
        let mut tree = MenuTree::new();
        let menu = tree.create_menu();
        for title in ["a", "b", "c"] {
            let _ = tree.append(menu, title, State::CHECKED, ItemKind::Command(None));
        }

        assert!(tree.check_radio(menu, 0, 3, 1));

        let states: Vec<_> = tree
            .menu(menu)
            .items()
            .iter()
            .map(|item| (item.state.checked, item.state.radio))
            .collect();
        assert_eq!(states, [(false, false), (true, true), (false, false)]);
    }

    #[test]
    fn test_check_radio_out_of_range() {
        let mut tree = MenuTree::new();
        let menu = tree.create_menu();
        let _ = tree.append(menu, "a", State::CHECKED, ItemKind::Command(None));

        assert!(!tree.check_radio(menu, 0, 1, 1));
        assert!(tree.menu(menu).items()[0].state.checked);
    }
}
