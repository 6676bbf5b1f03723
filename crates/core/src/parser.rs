//! Tokenizer for menu lines of `input.conf`.
//!
//! A menu line has the shape
//!
//! ```text
//! <key> <command> #menu: <path>
//! ```
//!
//! where `<path>` is handed on to the [`builder`](crate::builder). Lines that
//! do not carry a directive are ordinary key bindings and are skipped.
use crate::text::{self, WHITESPACE};

/// Marker introducing a menu directive.
pub const MENU_PREFIX: &str = "#menu:";

/// Alternate marker accepted in uosc mode.
pub const MENU_PREFIX_UOSC: &str = "#!";

/// A configuration line carrying a menu directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The key binding, empty for key-less uosc comment lines.
    pub key: &'a str,
    /// The command text before the directive marker.
    pub command: &'a str,
    /// The menu path after the directive marker.
    pub directive: &'a str,
}

impl Line<'_> {
    /// Returns `true` if the command is empty or only a comment.
    ///
    /// Items created for such lines are grayed out.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.command.is_empty() || self.command.starts_with('#')
    }
}

/// Parses a single configuration line.
///
/// Returns `None` for blank lines, plain key bindings and comments, and for
/// directives with an empty path.
pub fn parse_line(line: &str, uosc: bool) -> Option<Line<'_>> {
    let line = text::lstrip(line);
    if line.is_empty() {
        return None;
    }

    let (key, rest) = match text::eat_start(line, "#") {
        Some(_) if !uosc => return None,
        Some(rest) => ("", text::strip(rest)),
        None => {
            let (key, rest) = text::split(line, WHITESPACE);
            (key, text::strip(rest))
        }
    };

    let (command, directive) = split_directive(rest, uosc)?;

    Some(Line {
        key,
        command,
        directive,
    })
}

/// Parses every menu line of a configuration file, in file order.
pub fn parse(data: &str, uosc: bool) -> impl Iterator<Item = Line<'_>> {
    data.lines().filter_map(move |line| {
        let parsed = parse_line(line, uosc);
        if parsed.is_none() && !line.trim().is_empty() {
            log::trace!("Skipping line without menu directive: {line:?}");
        }
        parsed
    })
}

fn split_directive(text: &str, uosc: bool) -> Option<(&str, &str)> {
    if text.is_empty() {
        return None;
    }

    let (command, directive) = text.split_once(MENU_PREFIX).or_else(|| {
        if uosc {
            text.split_once(MENU_PREFIX_UOSC)
        } else {
            None
        }
    })?;

    let directive = text::strip(directive);
    if directive.is_empty() {
        return None;
    }

    Some((text::strip(command), directive))
}
