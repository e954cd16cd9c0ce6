use std::io::{BufReader, Read};

use log::debug;

use crate::format::Playlist;
use crate::scanner::{AppendResolver, EntryResolver, PlaylistScanner, ScanError};

/// File extension conventionally carried by playlists in this format.
pub const EXTENSION: &str = ".m3u";

const SUPPORTED_TYPES: &[&str] = &["audio/x-mpegurl"];

/// Uniform parser contract consumed by a playlist-parsing framework that
/// dispatches on detected media type.
pub trait PlaylistParser {
    /// MIME types this parser accepts.
    fn supported_types(&self) -> &'static [&'static str];

    /// Parses `stream` and appends the finalized entries to `playlist`.
    /// `uri` identifies the source for diagnostics only. `read_timeout_ms`
    /// bounds the scan wall-clock time, 0 meaning no limit.
    fn parse(
        &mut self,
        uri: &str,
        stream: &mut dyn Read,
        playlist: &mut Playlist,
        read_timeout_ms: u64,
    ) -> Result<(), ScanError>;
}

/// M3U playlist parser. Every [`PlaylistParser::parse`] call runs a fresh
/// scan: track numbering restarts at 1 and no state carries between calls.
pub struct M3uParser<R = AppendResolver> {
    resolver: R,
}

impl M3uParser {
    /// Parser whose entries land on the playlist as-is.
    pub fn new() -> Self {
        Self {
            resolver: AppendResolver,
        }
    }
}

impl Default for M3uParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: EntryResolver> M3uParser<R> {
    /// Parser that hands every finalized entry to `resolver`, which may
    /// perform further processing such as resolving nested playlists.
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }
}

impl<R: EntryResolver> PlaylistParser for M3uParser<R> {
    fn supported_types(&self) -> &'static [&'static str] {
        SUPPORTED_TYPES
    }

    fn parse(
        &mut self,
        uri: &str,
        stream: &mut dyn Read,
        playlist: &mut Playlist,
        read_timeout_ms: u64,
    ) -> Result<(), ScanError> {
        debug!("parsing m3u playlist from {}", uri);
        let mut reader = BufReader::new(stream);
        PlaylistScanner::new().scan(&mut reader, playlist, read_timeout_ms, &mut self.resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PlaylistEntry;

    #[test]
    fn test_extended_playlist() {
        let data =
            "#EXTM3U\n#EXTINF:123,Artist - Title\nhttp://host/stream.mp3\nhttp://host/other.mp3\n";
        let mut playlist = Playlist::new();
        let mut parser = M3uParser::new();
        parser
            .parse("http://host/list.m3u", &mut data.as_bytes(), &mut playlist, 0)
            .unwrap();

        let entries = playlist.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].metadata(), Some("Artist - Title"));
        assert_eq!(entries[0].uri(), Some("http://host/stream.mp3"));
        assert_eq!(entries[0].track(), Some("1"));
        assert!(entries[1].metadata().is_none());
        assert_eq!(entries[1].uri(), Some("http://host/other.mp3"));
        assert_eq!(entries[1].track(), Some("2"));
    }

    #[test]
    fn test_track_numbering_restarts_per_parse() {
        let mut parser = M3uParser::new();

        let mut first = Playlist::new();
        parser
            .parse("a.m3u", &mut "a.mp3\nb.mp3\n".as_bytes(), &mut first, 0)
            .unwrap();
        let mut second = Playlist::new();
        parser
            .parse("b.m3u", &mut "c.mp3\n".as_bytes(), &mut second, 0)
            .unwrap();

        assert_eq!(first.entries()[1].track(), Some("2"));
        assert_eq!(second.entries()[0].track(), Some("1"));
    }

    #[test]
    fn test_custom_resolver_is_injected() {
        let resolver = |mut entry: PlaylistEntry,
                        playlist: &mut Playlist,
                        _read_timeout_ms: u64|
         -> Result<(), ScanError> {
            entry.set("resolved", "true");
            playlist.add(entry);
            Ok(())
        };

        let mut playlist = Playlist::new();
        let mut parser = M3uParser::with_resolver(resolver);
        parser
            .parse("list.m3u", &mut "a.mp3\n".as_bytes(), &mut playlist, 0)
            .unwrap();

        assert_eq!(playlist.entries()[0].get("resolved"), Some("true"));
    }

    #[test]
    fn test_supported_types() {
        let parser = M3uParser::new();
        assert_eq!(parser.supported_types(), &["audio/x-mpegurl"]);
        assert_eq!(EXTENSION, ".m3u");
    }
}
