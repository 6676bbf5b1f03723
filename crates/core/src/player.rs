//! The host player, as seen by the menu.

/// A connection to the host player.
///
/// The menu only ever reads properties, expands paths and posts commands;
/// implementations wrap the player's client API.
pub trait Player {
    /// Returns the string form of a property, or `None` if it is unavailable.
    ///
    /// Node-valued properties (lists, maps) are returned as JSON.
    fn property(&self, name: &str) -> Option<String>;

    /// Expands player-specific path prefixes such as `~~/`.
    fn expand_path(&self, path: &str) -> String;

    /// Posts a command without waiting for its result.
    fn command_async(&self, command: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::Player;

    /// An in-memory player recording the commands it receives.
    #[derive(Debug, Default)]
    pub(crate) struct FakePlayer {
        pub(crate) properties: HashMap<String, String>,
        pub(crate) config_dir: String,
        pub(crate) commands: RefCell<Vec<String>>,
    }

    impl FakePlayer {
        pub(crate) fn set(&mut self, name: &str, value: &str) {
            let _ = self.properties.insert(name.to_owned(), value.to_owned());
        }

        pub(crate) fn commands(&self) -> Vec<String> {
            self.commands.borrow().clone()
        }
    }

    impl Player for FakePlayer {
        fn property(&self, name: &str) -> Option<String> {
            self.properties.get(name).cloned()
        }

        fn expand_path(&self, path: &str) -> String {
            match path.strip_prefix("~~/") {
                Some(rest) => format!("{}/{rest}", self.config_dir),
                None => path.to_owned(),
            }
        }

        fn command_async(&self, command: &str) {
            self.commands.borrow_mut().push(command.to_owned());
        }
    }
}
