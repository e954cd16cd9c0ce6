//! # m3ustream-rs
//! A library for scanning m3u playlist streams into playlist entries
//!
//! # Example
//! ```rust
//! use m3ustream_rs::{M3uParser, PlaylistParser};
//! use m3ustream_rs::format::Playlist;
//!
//! let data = "#EXTM3U
//! #EXTINF:123,Artist - Title
//! http://example.com/stream.mp3";
//!
//! let mut playlist = Playlist::new();
//! let mut parser = M3uParser::new();
//! parser
//!     .parse("http://example.com/list.m3u", &mut data.as_bytes(), &mut playlist, 0)
//!     .unwrap();
//!
//! let entry = &playlist.entries()[0];
//! assert_eq!(entry.metadata(), Some("Artist - Title"));
//! assert_eq!(entry.uri(), Some("http://example.com/stream.mp3"));
//! assert_eq!(entry.track(), Some("1"));
//! ```

mod classifier;
pub mod format;
mod parser;
mod scanner;

pub use classifier::*;
pub use parser::*;
pub use scanner::*;
