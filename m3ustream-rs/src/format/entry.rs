use std::collections::HashMap;

use smol_str::SmolStr;

/// Recognized field keys of a [`PlaylistEntry`].
pub mod fields {
    /// Media reference, present on every emitted entry
    pub const URI: &str = "uri";
    /// Free-text title or description taken from a directive line
    pub const METADATA: &str = "playlist_metadata";
    /// 1-based sequential index, assigned at emission time
    pub const TRACK: &str = "track";
}

/// One playlist record: a media reference plus optional metadata and a track
/// index. Fields that were never set are absent from the map, not empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    fields: HashMap<SmolStr, SmolStr>,
}

impl PlaylistEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<SmolStr>, value: impl Into<SmolStr>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(|x| x.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Media reference of this entry
    pub fn uri(&self) -> Option<&str> {
        self.get(fields::URI)
    }

    /// Title/description carried over from the preceding directive line
    pub fn metadata(&self) -> Option<&str> {
        self.get(fields::METADATA)
    }

    /// Track index in decimal string form
    pub fn track(&self) -> Option<&str> {
        self.get(fields::TRACK)
    }
}
