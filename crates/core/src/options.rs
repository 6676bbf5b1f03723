//! Plugin options.
//!
//! Options are taken from mpv's `script-opts` key-value list, using the
//! `menu-` prefix (e.g. `--script-opts=menu-uosc=yes`).
use serde::Deserialize;

use crate::player::Player;

/// Menu definition file used when the `input-conf` property is empty.
pub const DEFAULT_INPUT_CONF: &str = "~~/input.conf";

/// Prefix of the plugin's keys inside `script-opts`.
pub const SCRIPT_OPTS_PREFIX: &str = "menu-";

/// Options controlling how the menu definition is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Enables the alternate (uosc) syntax: `#!` directives, `---` separators
    /// and key-less comment lines.
    pub uosc: bool,
}

impl Options {
    /// Parses the plugin options out of a `script-opts` value.
    ///
    /// Unknown keys and malformed values are ignored.
    #[must_use]
    pub fn from_script_opts(value: &str) -> Self {
        let mut options = Self::default();

        for pair in value.split(',') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let Some(key) = key.trim().strip_prefix(SCRIPT_OPTS_PREFIX) else {
                continue;
            };

            match key {
                "uosc" => match parse_flag(value.trim()) {
                    Some(flag) => options.uosc = flag,
                    None => log::warn!("Ignoring invalid value for menu-uosc: {value:?}"),
                },
                _ => log::debug!("Ignoring unknown option: {key}"),
            }
        }

        options
    }

    /// Reads the plugin options from the player.
    pub fn query(player: &impl Player) -> Self {
        player
            .property("script-opts")
            .map(|value| Self::from_script_opts(&value))
            .unwrap_or_default()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "yes" | "true" | "1" => Some(true),
        "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Returns the menu definition path configured in the player.
pub fn input_conf_path(player: &impl Player) -> String {
    player
        .property("input-conf")
        .filter(|path| !path.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_INPUT_CONF.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::testing::FakePlayer;

    #[test]
    fn test_from_script_opts() {
        assert!(Options::from_script_opts("menu-uosc=yes").uosc);
        assert!(Options::from_script_opts("osc-layout=box,menu-uosc=true").uosc);
        assert!(!Options::from_script_opts("menu-uosc=no").uosc);
    }

    #[test]
    fn test_from_script_opts_ignores_noise() {
        assert_eq!(Options::from_script_opts(""), Options::default());
        assert_eq!(Options::from_script_opts("uosc=yes"), Options::default());
        assert_eq!(Options::from_script_opts("menu-uosc=maybe"), Options::default());
        assert_eq!(Options::from_script_opts("menu-uosc"), Options::default());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let options: Options = serde_json::from_str("{}").unwrap();
        assert!(!options.uosc);

        let options: Options = serde_json::from_str(r#"{"uosc": true}"#).unwrap();
        assert!(options.uosc);
    }

    #[test]
    fn test_input_conf_path() {
        let mut player = FakePlayer::default();
        assert_eq!(input_conf_path(&player), DEFAULT_INPUT_CONF);

        player.set("input-conf", "");
        assert_eq!(input_conf_path(&player), DEFAULT_INPUT_CONF);

        player.set("input-conf", "~~/menu.conf");
        assert_eq!(input_conf_path(&player), "~~/menu.conf");
    }
}
