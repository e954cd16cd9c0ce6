mod entry;
mod playlist;

pub use entry::*;
pub use playlist::*;

pub mod directives {
    /// Header marker opening an extended m3u playlist
    pub const EXTM3U: &str = "#EXTM3U";
    /// Extended info directive carrying metadata for the next media reference
    pub const EXTINF: &str = "#EXTINF";
}
