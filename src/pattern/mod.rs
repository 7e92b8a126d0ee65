//! Component A: the Pattern Library.
//!
//! Every expression here is a process-wide, read-only singleton (spec §5):
//! compiled once behind [`once_cell::sync::Lazy`], shared freely across
//! concurrent parses, never mutated. Each pattern anchors at the start of
//! the remaining token stream and is written to consume at least one
//! character on success, so the token engine in [`crate::engine`] always
//! makes progress.
//!
//! Patterns are grouped the way spec §4.1 groups them: header/main-body
//! patterns in [`main`], remarks-section patterns in [`remarks`], and
//! TAF change-group patterns in [`taf`].

pub mod main;
pub mod remarks;
pub mod taf;

/// Matches one non-whitespace token and any whitespace that follows it.
///
/// This is the `UNPARSED` catch-all named throughout spec §4.1/§4.2/§4.3:
/// it is always the last entry in every registry and guarantees totality
/// — no well-formed-enough-to-tokenize input can get stuck, because this
/// pattern matches *anything* non-empty.
pub(crate) fn unparsed_pattern() -> &'static regex::Regex {
    use once_cell::sync::Lazy;
    static RE: Lazy<regex::Regex> = Lazy::new(|| regex::Regex::new(r"^(\S+)\s*").unwrap());
    &RE
}
