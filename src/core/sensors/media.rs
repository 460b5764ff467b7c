//! Now-playing metadata from MPRIS players on the session bus.

use std::collections::HashMap;

use zbus::blocking::fdo::DBusProxy;
use zbus::blocking::{Connection, Proxy};
use zbus::zvariant::{OwnedValue, Value};

use super::format::{clip_chars, fragment, ICON_MEDIA};
use crate::error::Result;

pub const MPRIS_PREFIX: &str = "org.mpris.MediaPlayer2.";
const MPRIS_PATH: &str = "/org/mpris/MediaPlayer2";
const MPRIS_PLAYER_INTERFACE: &str = "org.mpris.MediaPlayer2.Player";

pub const NO_MEDIA_PLAYING: &str = "No media playing";
pub const NO_PLAYER_DETECTED: &str = "No media player detected";
const UNKNOWN_TITLE: &str = "Unknown Title";
const UNKNOWN_ARTIST: &str = "Unknown Artist";

const MAX_TITLE_CHARS: usize = 25;
const MAX_ARTIST_CHARS: usize = 15;

/// Title and artists as reported by a player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackInfo {
    pub title: Option<String>,
    pub artists: Vec<String>,
}

impl TrackInfo {
    /// `title - artist`, clipped to fit a chatbox line
    pub fn display(&self) -> String {
        let title = self.title.as_deref().unwrap_or(UNKNOWN_TITLE);
        let artist = self
            .artists
            .first()
            .map(String::as_str)
            .unwrap_or(UNKNOWN_ARTIST);

        format!(
            "{} - {}",
            clip_chars(title, MAX_TITLE_CHARS),
            clip_chars(artist, MAX_ARTIST_CHARS)
        )
    }
}

/// Minimal view of a media-player bus
pub trait MediaBus {
    /// Bus names of all registered players
    fn player_names(&self) -> Result<Vec<String>>;

    /// Current track of one player
    fn track_info(&self, player: &str) -> Result<TrackInfo>;
}

/// D-Bus session bus connection
pub struct SessionMediaBus {
    connection: Connection,
}

impl SessionMediaBus {
    pub fn connect() -> Result<Self> {
        Ok(Self {
            connection: Connection::session()?,
        })
    }
}

impl MediaBus for SessionMediaBus {
    fn player_names(&self) -> Result<Vec<String>> {
        let dbus = DBusProxy::new(&self.connection)?;
        let names = dbus.list_names()?;

        Ok(names
            .iter()
            .map(|name| name.as_str().to_string())
            .filter(|name| name.starts_with(MPRIS_PREFIX))
            .collect())
    }

    fn track_info(&self, player: &str) -> Result<TrackInfo> {
        let proxy = Proxy::new(&self.connection, player, MPRIS_PATH, MPRIS_PLAYER_INTERFACE)?;
        let mut metadata: HashMap<String, OwnedValue> = proxy.get_property("Metadata")?;

        let title = metadata
            .remove("xesam:title")
            .and_then(|v| String::try_from(Value::from(v)).ok());

        let artists = metadata
            .remove("xesam:artist")
            .and_then(|v| Vec::<String>::try_from(Value::from(v)).ok())
            .unwrap_or_default();

        Ok(TrackInfo { title, artists })
    }
}

/// Describe the first player that answers.
pub fn read_media_from(bus: &dyn MediaBus) -> String {
    let players = match bus.player_names() {
        Ok(players) => players,
        Err(e) => {
            log::warn!("DBus error: {}", e);
            return fragment(ICON_MEDIA, NO_PLAYER_DETECTED);
        }
    };

    for player in &players {
        match bus.track_info(player) {
            Ok(track) => return fragment(ICON_MEDIA, &track.display()),
            Err(e) => {
                log::debug!("Skipping player {}: {}", player, e);
            }
        }
    }

    fragment(ICON_MEDIA, NO_MEDIA_PLAYING)
}

/// Media fragment from the live session bus.
pub fn read_media() -> String {
    match SessionMediaBus::connect() {
        Ok(bus) => read_media_from(&bus),
        Err(e) => {
            log::warn!("DBus error: {}", e);
            fragment(ICON_MEDIA, NO_PLAYER_DETECTED)
        }
    }
}
