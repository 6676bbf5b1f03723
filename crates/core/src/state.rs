//! Read-only snapshot of the player state shown by dynamic menus.
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::Error;
use crate::player::Player;

/// The kind of a [`Track`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    /// A video track.
    Video,
    /// An audio track.
    Audio,
    /// A subtitle track.
    Sub,
    /// Any track type this plugin does not list.
    #[serde(other)]
    Other,
}

/// An entry of the `track-list` property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    /// Track id, unique per track type.
    pub id: i64,
    /// Track type.
    #[serde(rename = "type")]
    pub kind: TrackType,
    /// Track title.
    #[serde(default)]
    pub title: Option<String>,
    /// Track language.
    #[serde(default)]
    pub lang: Option<String>,
    /// Whether the track is selected, as primary or secondary track.
    #[serde(default)]
    pub selected: bool,
}

impl Track {
    /// Returns the title, or `Track <id>` if the track has none.
    #[must_use]
    pub fn display_name(&self) -> String {
        non_empty(self.title.as_deref())
            .map_or_else(|| format!("Track {}", self.id), str::to_owned)
    }
}

/// An entry of the `chapter-list` property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Chapter {
    /// Chapter title.
    #[serde(default)]
    pub title: Option<String>,
    /// Chapter start, in seconds.
    pub time: f64,
}

/// An entry of the `edition-list` property.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Edition {
    /// Edition id.
    pub id: i64,
    /// Edition title.
    #[serde(default)]
    pub title: Option<String>,
}

impl Edition {
    /// Returns the title, or `Edition <id>` if the edition has none.
    #[must_use]
    pub fn display_name(&self) -> String {
        non_empty(self.title.as_deref())
            .map_or_else(|| format!("Edition {}", self.id), str::to_owned)
    }
}

/// An entry of the `audio-device-list` property.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AudioDevice {
    /// Device name, as accepted by `audio-device`.
    pub name: String,
    /// Human readable description.
    #[serde(default)]
    pub description: Option<String>,
}

impl AudioDevice {
    /// Returns the description, or the raw name if there is none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or(self.name.as_str())
    }
}

/// Snapshot of the player collections and current selections.
///
/// Selections that are unknown or turned off are `-1`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// All tracks of every type, in player order.
    pub tracks: Vec<Track>,
    /// Selected video track id.
    pub vid: i64,
    /// Selected audio track id.
    pub aid: i64,
    /// Selected primary subtitle track id.
    pub sid: i64,
    /// Selected secondary subtitle track id.
    pub secondary_sid: i64,
    /// Chapters, in player order.
    pub chapters: Vec<Chapter>,
    /// Index of the current chapter.
    pub chapter: i64,
    /// Editions, in player order.
    pub editions: Vec<Edition>,
    /// Id of the current edition.
    pub edition: i64,
    /// Available audio output devices.
    pub audio_devices: Vec<AudioDevice>,
    /// Name of the current audio output device.
    pub audio_device: String,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            tracks: Vec::new(),
            vid: -1,
            aid: -1,
            sid: -1,
            secondary_sid: -1,
            chapters: Vec::new(),
            chapter: -1,
            editions: Vec::new(),
            edition: -1,
            audio_devices: Vec::new(),
            audio_device: String::new(),
        }
    }
}

impl PlayerState {
    /// Reads a snapshot from the player.
    ///
    /// Unavailable or undecodable properties yield empty collections.
    pub fn query(player: &impl Player) -> Self {
        Self {
            tracks: list(player, "track-list"),
            vid: selection(player, "vid"),
            aid: selection(player, "aid"),
            sid: selection(player, "sid"),
            secondary_sid: selection(player, "secondary-sid"),
            chapters: list(player, "chapter-list"),
            chapter: selection(player, "chapter"),
            editions: list(player, "edition-list"),
            edition: selection(player, "current-edition"),
            audio_devices: list(player, "audio-device-list"),
            audio_device: player.property("audio-device").unwrap_or_default(),
        }
    }
}

/// Decodes the JSON form of a list property.
pub fn decode<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<Vec<T>, Error> {
    serde_json::from_str::<Option<Vec<T>>>(json)
        .map(Option::unwrap_or_default)
        .map_err(|source| Error::Property { name, source })
}

fn list<T: DeserializeOwned>(player: &impl Player, name: &'static str) -> Vec<T> {
    let Some(json) = player.property(name) else {
        return Vec::new();
    };

    decode(name, &json).unwrap_or_else(|error| {
        log::warn!("{error}");
        Vec::new()
    })
}

fn selection(player: &impl Player, name: &str) -> i64 {
    player
        .property(name)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(-1)
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::testing::FakePlayer;

    #[test]
    fn test_decode_track_list() {
        let tracks: Vec<Track> = decode(
            "track-list",
            r#"[
                {"id": 1, "type": "video", "selected": true, "codec": "h264"},
                {"id": 1, "type": "audio", "title": "Commentary", "lang": "eng"},
                {"id": 2, "type": "sub", "external": true},
                {"id": 3, "type": "attachment"}
            ]"#,
        )
        .unwrap();

        assert_eq!(tracks.len(), 4);
        assert_eq!(tracks[0].kind, TrackType::Video);
        assert!(tracks[0].selected);
        assert_eq!(tracks[1].title.as_deref(), Some("Commentary"));
        assert_eq!(tracks[1].lang.as_deref(), Some("eng"));
        assert!(!tracks[2].selected);
        assert_eq!(tracks[3].kind, TrackType::Other);
    }

    #[test]
    fn test_decode_null_is_empty() {
        let chapters: Vec<Chapter> = decode("chapter-list", "null").unwrap();
        assert!(chapters.is_empty());
    }

    #[test]
    fn test_decode_error() {
        let error = decode::<Edition>("edition-list", "{").unwrap_err();
        assert!(error.to_string().contains("edition-list"));
    }

    #[test]
    fn test_display_names() {
        let track = Track {
            id: 4,
            kind: TrackType::Sub,
            title: Some(String::new()),
            lang: None,
            selected: false,
        };
        assert_eq!(track.display_name(), "Track 4");

        let edition = Edition { id: 0, title: None };
        assert_eq!(edition.display_name(), "Edition 0");

        let device = AudioDevice {
            name: "wasapi/{abc}".into(),
            description: None,
        };
        assert_eq!(device.display_name(), "wasapi/{abc}");
    }

    #[test]
    fn test_query() {
        let mut player = FakePlayer::default();
        player.set("track-list", r#"[{"id": 1, "type": "audio", "selected": true}]"#);
        player.set("aid", "1");
        player.set("vid", "no");
        player.set("sid", "auto");
        player.set("chapter-list", "not json");
        player.set("chapter", "2");
        player.set("audio-device", "auto");

        let state = PlayerState::query(&player);

        assert_eq!(state.tracks.len(), 1);
        assert_eq!(state.aid, 1);
        assert_eq!(state.vid, -1);
        assert_eq!(state.sid, -1);
        assert_eq!(state.secondary_sid, -1);
        assert!(state.chapters.is_empty());
        assert_eq!(state.chapter, 2);
        assert_eq!(state.edition, -1);
        assert_eq!(state.audio_device, "auto");
    }
}
