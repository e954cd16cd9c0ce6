use lazy_static::lazy_static;
use regex::Regex;

use crate::format::directives;

lazy_static! {
    /// Leading `#` followed by the EXTINF token, each letter in either case
    static ref DIRECTIVE_REGEX: Regex =
        Regex::new("^#[Ee][Xx][Tt][Ii][Nn][Ff]").expect("Regular expression error");
}

/// Classification of one raw playlist line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The literal `#EXTM3U` marker, compared case-insensitively without trimming
    Header,
    /// Empty or whitespace-only
    Blank,
    /// An `#EXTINF`-style extended info line
    Directive,
    /// Anything else: a media URI or file path
    Reference,
}

/// Classifies a raw line (trailing whitespace included) into exactly one
/// [`LineKind`]. Checks run in the order the scan loop applies them: header,
/// blank, directive, then reference as the default case.
pub fn classify(line: &str) -> LineKind {
    if line.eq_ignore_ascii_case(directives::EXTM3U) {
        LineKind::Header
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else if DIRECTIVE_REGEX.is_match(line) {
        LineKind::Directive
    } else {
        LineKind::Reference
    }
}
