//! Populators for the dynamic submenus.
//!
//! Each function appends to an empty menu. The payload of every generated item
//! is the player command that selects the listed element.
use crate::menu::{ItemKind, MenuHandle, MenuTree, State, escape_title, format_title};
use crate::state::{PlayerState, TrackType};

/// Lists the tracks of type `kind`, followed by an `Off` item.
///
/// `property` is the player property selecting this kind of track and
/// `current` its value. A subtitle selected through the other subtitle
/// property is shown checked but disabled.
pub(crate) fn tracks(
    state: &PlayerState,
    tree: &mut MenuTree,
    menu: MenuHandle,
    kind: TrackType,
    property: &str,
    current: i64,
) {
    let mut count = 0;

    for track in state.tracks.iter().filter(|track| track.kind == kind) {
        let mut item_state = if track.selected {
            State::CHECKED
        } else {
            State::NORMAL
        };
        if kind == TrackType::Sub && track.selected && track.id != current {
            item_state.enabled = false;
        }

        let title = format_title(&track.display_name(), track.lang.as_deref().unwrap_or(""));
        let payload = format!("set {property} {}", track.id);

        let _ = tree.append(menu, title, item_state, ItemKind::Command(Some(payload)));
        count += 1;
    }

    if count > 0 {
        let item_state = if current < 0 {
            State::CHECKED
        } else {
            State::NORMAL
        };
        let payload = format!("set {property} no");

        let _ = tree.append(
            menu,
            escape_title("Off"),
            item_state,
            ItemKind::Command(Some(payload)),
        );
    }
}

/// Lists the chapters as `title\t[hh:mm:ss]`, radio-selecting the current one.
pub(crate) fn chapters(state: &PlayerState, tree: &mut MenuTree, menu: MenuHandle) {
    if state.chapters.is_empty() {
        return;
    }

    for (index, chapter) in state.chapters.iter().enumerate() {
        let name = match chapter.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_owned(),
            _ => format!("Chapter {}", index + 1),
        };
        let title = format_title(&name, &timestamp(chapter.time));
        let payload = format!("seek {:.6} absolute", chapter.time);

        let _ = tree.append(menu, title, State::NORMAL, ItemKind::Command(Some(payload)));
    }

    if let Ok(current) = usize::try_from(state.chapter) {
        let _ = tree.check_radio(menu, 0, state.chapters.len(), current);
    }
}

/// Lists the editions, radio-selecting the current one.
pub(crate) fn editions(state: &PlayerState, tree: &mut MenuTree, menu: MenuHandle) {
    let mut current = None;

    for (index, edition) in state.editions.iter().enumerate() {
        if edition.id == state.edition {
            current = Some(index);
        }

        let payload = format!("set edition {}", edition.id);

        let _ = tree.append(
            menu,
            escape_title(&edition.display_name()),
            State::NORMAL,
            ItemKind::Command(Some(payload)),
        );
    }

    if let Some(current) = current {
        let _ = tree.check_radio(menu, 0, state.editions.len(), current);
    }
}

/// Lists the audio output devices, radio-selecting the current one.
pub(crate) fn audio_devices(state: &PlayerState, tree: &mut MenuTree, menu: MenuHandle) {
    let mut current = None;

    for (index, device) in state.audio_devices.iter().enumerate() {
        if device.name == state.audio_device {
            current = Some(index);
        }

        let payload = format!("set audio-device {}", device.name);

        let _ = tree.append(
            menu,
            escape_title(device.display_name()),
            State::NORMAL,
            ItemKind::Command(Some(payload)),
        );
    }

    if let Some(current) = current {
        let _ = tree.check_radio(menu, 0, state.audio_devices.len(), current);
    }
}

/// Formats a chapter start as `[hh:mm:ss]`, truncating fractional seconds.
fn timestamp(time: f64) -> String {
    let seconds = time.max(0.0) as i64;

    format!(
        "[{:02}:{:02}:{:02}]",
        seconds / 3600,
        seconds / 60 % 60,
        seconds % 60
    )
}
