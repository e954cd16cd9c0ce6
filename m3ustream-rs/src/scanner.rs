use std::{
    error::Error,
    io::{self, BufRead},
    mem,
    time::{Duration, Instant},
};

use log::{debug, trace};

use crate::classifier::{LineKind, classify};
use crate::format::{Playlist, PlaylistEntry, fields};

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The wall-clock read budget was exceeded. Kept distinct from
    /// [`ScanError::Io`] so callers can tell a slow source from a broken one.
    #[error("read timed out")]
    ReadTimeout,

    #[error(transparent)]
    Io(#[from] io::Error),

    /// The injected entry resolver failed; not caught by the scan loop.
    #[error("entry resolution failed")]
    Resolve(#[source] Box<dyn Error + Send + Sync>),
}

/// Capability invoked once per finalized entry. Implementations may append
/// the entry as-is, resolve nested playlists, or anything else the host
/// framework requires; errors abort the scan and reach the caller unchanged.
pub trait EntryResolver {
    fn resolve(
        &mut self,
        entry: PlaylistEntry,
        playlist: &mut Playlist,
        read_timeout_ms: u64,
    ) -> Result<(), ScanError>;
}

impl<F> EntryResolver for F
where
    F: FnMut(PlaylistEntry, &mut Playlist, u64) -> Result<(), ScanError>,
{
    fn resolve(
        &mut self,
        entry: PlaylistEntry,
        playlist: &mut Playlist,
        read_timeout_ms: u64,
    ) -> Result<(), ScanError> {
        self(entry, playlist, read_timeout_ms)
    }
}

/// The default resolver: appends every finalized entry to the playlist.
pub struct AppendResolver;

impl EntryResolver for AppendResolver {
    fn resolve(
        &mut self,
        entry: PlaylistEntry,
        playlist: &mut Playlist,
        _read_timeout_ms: u64,
    ) -> Result<(), ScanError> {
        playlist.add(entry);
        Ok(())
    }
}

enum ScanState {
    Idle,
    /// A directive line opened an entry that awaits its media reference.
    AwaitingReference(PlaylistEntry),
}

/// Finalizes entries and assigns 1-based track numbers. The counter is local
/// to the builder, so numbering restarts with every scanner.
struct EntryBuilder {
    count: u32,
}

impl EntryBuilder {
    fn new() -> Self {
        Self { count: 0 }
    }

    fn finish(&mut self, mut entry: PlaylistEntry, uri: &str) -> PlaylistEntry {
        self.count += 1;
        entry.set(fields::URI, uri);
        entry.set(fields::TRACK, self.count.to_string());
        entry
    }
}

/// Single-pass line scanner over an m3u stream. One scanner per parse:
/// pending-entry state and track numbering do not carry across inputs.
pub struct PlaylistScanner {
    state: ScanState,
    builder: EntryBuilder,
}

impl PlaylistScanner {
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
            builder: EntryBuilder::new(),
        }
    }

    /// Reads the source line by line, emitting one entry per media reference
    /// and handing each to `resolve`. A `read_timeout_ms` of 0 disables the
    /// deadline; otherwise the budget is checked once per line, after the
    /// blocking read and before the line is processed.
    pub fn scan<R: BufRead>(
        &mut self,
        reader: &mut R,
        playlist: &mut Playlist,
        read_timeout_ms: u64,
        resolve: &mut dyn EntryResolver,
    ) -> Result<(), ScanError> {
        let start = Instant::now();
        let deadline = match read_timeout_ms {
            0 => None,
            ms => Some(start + Duration::from_millis(ms)),
        };

        let mut buffer = String::new();
        loop {
            buffer.clear();
            if reader.read_line(&mut buffer)? == 0 {
                return Ok(());
            }
            if let Some(deadline) = deadline {
                if Instant::now() > deadline {
                    return Err(ScanError::ReadTimeout);
                }
            }

            // Strip the end-of-line delimiter only; other surrounding
            // whitespace takes part in classification.
            let line = buffer.trim_end_matches(['\r', '\n']);
            self.step(line, playlist, read_timeout_ms, resolve)?;
        }
    }

    /// Applies one classified line to the state machine.
    fn step(
        &mut self,
        line: &str,
        playlist: &mut Playlist,
        read_timeout_ms: u64,
        resolve: &mut dyn EntryResolver,
    ) -> Result<(), ScanError> {
        match classify(line) {
            LineKind::Header | LineKind::Blank => {}
            LineKind::Directive => {
                if matches!(self.state, ScanState::AwaitingReference(_)) {
                    debug!("discarding directive that never reached a media reference");
                }
                let mut entry = PlaylistEntry::new();
                entry.set(fields::METADATA, strip_through_comma(line));
                self.state = ScanState::AwaitingReference(entry);
            }
            LineKind::Reference => {
                let pending = match mem::replace(&mut self.state, ScanState::Idle) {
                    ScanState::AwaitingReference(entry) => entry,
                    ScanState::Idle => PlaylistEntry::new(),
                };
                let entry = self.builder.finish(pending, line.trim());
                trace!("emitting track {:?} -> {:?}", entry.track(), entry.uri());
                resolve.resolve(entry, playlist, read_timeout_ms)?;
            }
        }

        Ok(())
    }
}

impl Default for PlaylistScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata of a directive line: everything up to and including the first
/// comma removed, or the line unchanged when no comma is present.
fn strip_through_comma(line: &str) -> &str {
    match line.split_once(',') {
        Some((_, rest)) => rest,
        None => line,
    }
}
