//! Native `HMENU` realisation of a [`MenuTree`].
//!
//! The native hierarchy is rebuilt from the model every time the menu is
//! shown, so it never has to track incremental changes to dynamic submenus.

use mpv_menu_core::{Item, MenuHandle, MenuTree, State};
use windows::Win32::UI::WindowsAndMessaging::{
    CreatePopupMenu, DestroyMenu, HMENU, InsertMenuItemW, MENU_ITEM_STATE, MENUITEMINFOW,
    MFS_CHECKED, MFS_DISABLED, MFS_ENABLED, MFT_RADIOCHECK, MFT_SEPARATOR, MFT_STRING,
    MIIM_FTYPE, MIIM_ID, MIIM_STATE, MIIM_STRING, MIIM_SUBMENU,
};
use windows::core::PWSTR;

use crate::MenuError;

/// A native popup menu mirroring a [`MenuTree`].
///
/// The whole hierarchy is destroyed when this value is dropped.
#[derive(Debug)]
pub struct NativeMenu {
    root: HMENU,
}

impl NativeMenu {
    /// Builds the native menu hierarchy of `tree`.
    ///
    /// # Errors
    ///
    /// Returns an error if a menu cannot be created or an item cannot be
    /// inserted. Nothing is leaked in that case.
    pub fn build(tree: &MenuTree) -> Result<Self, MenuError> {
        let root = build_menu(tree, MenuHandle::ROOT)?;

        Ok(Self { root })
    }

    /// Returns the native handle of the root menu.
    pub fn handle(&self) -> HMENU {
        self.root
    }
}

impl Drop for NativeMenu {
    fn drop(&mut self) {
        destroy(self.root);
    }
}

fn build_menu(tree: &MenuTree, handle: MenuHandle) -> Result<HMENU, MenuError> {
    #[allow(unsafe_code)]
    let hmenu = unsafe { CreatePopupMenu() }.map_err(|e| MenuError::CreateMenu(e.to_string()))?;

    if let Err(error) = populate(tree, handle, hmenu) {
        destroy(hmenu);
        return Err(error);
    }

    Ok(hmenu)
}

fn populate(tree: &MenuTree, handle: MenuHandle, hmenu: HMENU) -> Result<(), MenuError> {
    for (position, item) in tree.menu(handle).items().iter().enumerate() {
        let submenu = item
            .submenu()
            .map(|submenu| build_menu(tree, submenu))
            .transpose()?;

        // A submenu is only owned by its parent once inserted
        if let Err(error) = insert(hmenu, position, item, submenu) {
            if let Some(submenu) = submenu {
                destroy(submenu);
            }
            return Err(error);
        }
    }

    Ok(())
}

fn insert(
    hmenu: HMENU,
    position: usize,
    item: &Item,
    submenu: Option<HMENU>,
) -> Result<(), MenuError> {
    let mut title: Vec<u16> = item.title.encode_utf16().chain(std::iter::once(0)).collect();

    let mut info = MENUITEMINFOW {
        cbSize: size_of::<MENUITEMINFOW>() as u32,
        fMask: MIIM_ID | MIIM_FTYPE | MIIM_STATE,
        wID: item.id.as_u32(),
        ..Default::default()
    };

    if item.is_separator() {
        info.fType = MFT_SEPARATOR;
    } else {
        info.fMask |= MIIM_STRING;
        info.fType = if item.state.radio {
            MFT_RADIOCHECK
        } else {
            MFT_STRING
        };
        info.fState = state_flags(item.state);
        info.dwTypeData = PWSTR(title.as_mut_ptr());
        info.cch = (title.len() - 1) as u32;
    }

    if let Some(submenu) = submenu {
        info.fMask |= MIIM_SUBMENU;
        info.hSubMenu = submenu;
    }

    let position = u32::try_from(position).unwrap_or(u32::MAX);

    #[allow(unsafe_code)]
    let result = unsafe { InsertMenuItemW(hmenu, position, true, &info) };

    result.map_err(|e| MenuError::InsertItem {
        id: item.id.as_u32(),
        message: e.to_string(),
    })
}

fn state_flags(state: State) -> MENU_ITEM_STATE {
    let mut flags = MFS_ENABLED;

    if !state.enabled {
        flags |= MFS_DISABLED;
    }
    if state.checked {
        flags |= MFS_CHECKED;
    }

    flags
}

fn destroy(hmenu: HMENU) {
    // Destroys attached submenus as well
    #[allow(unsafe_code)]
    let result = unsafe { DestroyMenu(hmenu) };

    if let Err(error) = result {
        log::warn!("DestroyMenu failed: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpv_menu_core::ItemKind;

    #[test]
    fn test_state_flags() {
        assert_eq!(state_flags(State::NORMAL), MFS_ENABLED);
        assert_eq!(state_flags(State::DISABLED), MFS_DISABLED);
        assert_eq!(state_flags(State::CHECKED), MFS_CHECKED);
    }

    #[test]
    fn test_build_nested_menu() {
        let mut tree = MenuTree::new();
        let (_, submenu) = tree.append_submenu(MenuHandle::ROOT, "Tracks");
        let _ = tree.append_separator(MenuHandle::ROOT);
        let _ = tree.append(
            submenu,
            "Off",
            State::CHECKED,
            ItemKind::Command(Some("set aid no".into())),
        );

        let menu = NativeMenu::build(&tree).unwrap();

        assert!(!menu.handle().is_invalid());
    }
}
