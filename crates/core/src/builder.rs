//! Compiles menu directives into a [`MenuTree`].
//!
//! A directive is a `>`-separated path. Every segment but the last names a
//! submenu, created on first use and shared by all later lines naming the
//! same title at the same level. The last segment is one of:
//!
//! - `-` (or `---...` in uosc mode): a separator,
//! - `Title #@keyword`: a submenu kept in sync with the player, see
//!   [`dynamic`](crate::dynamic),
//! - `Title`: an item dispatching the line's command.
//!
//! A `#comment` on an intermediate segment stops the path there: the submenu
//! is created but nothing is added below it.
use crate::dynamic::{DYNAMIC_PREFIX, DynamicMenus};
use crate::menu::{ItemKind, MenuHandle, MenuTree, State, escape_title, format_title};
use crate::parser::Line;
use crate::text;

/// Adds parsed configuration lines to a menu tree.
#[derive(Debug)]
pub struct Builder<'a> {
    tree: &'a mut MenuTree,
    dynamic: &'a mut DynamicMenus,
    uosc: bool,
}

impl<'a> Builder<'a> {
    /// Creates a builder appending to the root of `tree`.
    pub fn new(tree: &'a mut MenuTree, dynamic: &'a mut DynamicMenus, uosc: bool) -> Self {
        Self {
            tree,
            dynamic,
            uosc,
        }
    }

    /// Adds the item described by `line`.
    pub fn add(&mut self, line: &Line<'_>) {
        self.add_path(MenuHandle::ROOT, line, line.directive);
    }

    fn add_path(&mut self, menu: MenuHandle, line: &Line<'_>, path: &str) {
        let (name, rest) = text::split(path, &['>']);
        let (name, comment) = text::split(name, &['#']);
        let name = text::strip(name);

        if name.is_empty() {
            log::debug!("Ignoring empty menu path segment in {:?}", line.directive);
            return;
        }

        if !rest.is_empty() {
            let (_, submenu) = self.tree.append_submenu(menu, &escape_title(name));

            if comment.is_empty() {
                self.add_path(submenu, line, rest);
            }
            return;
        }

        if is_separator(name, self.uosc) {
            let _ = self.tree.append_separator(menu);
        } else if let Some(keyword) = text::eat_start(comment, DYNAMIC_PREFIX) {
            let (id, submenu) = self.tree.append_submenu(menu, &escape_title(name));

            if !keyword.is_empty() {
                let (keyword, _) = text::split(keyword, &['#']);
                let _ = self.dynamic.register(text::rstrip(keyword), submenu, id);
            }
        } else {
            let (state, payload) = if line.is_inert() {
                (State::DISABLED, None)
            } else {
                (State::NORMAL, Some(line.command.to_owned()))
            };

            let _ = self.tree.append(
                menu,
                format_title(name, line.key),
                state,
                ItemKind::Command(payload),
            );
        }
    }
}

fn is_separator(name: &str, uosc: bool) -> bool {
    name == "-" || (uosc && name.starts_with("---"))
}
