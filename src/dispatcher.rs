//! Report-type dispatch (spec §6).
//!
//! A [`Dispatcher`] holds an ordered list of [`ReportParser`]s and either
//! runs a caller-chosen one directly or tries each in turn against raw
//! text, handing the report to the first one that claims it. Order matters
//! here the same way it matters in a handler registry: a bare TAF header
//! (`KXYZ 151740Z 1518/1624 ...`, no leading `TAF` keyword) is also a
//! syntactically valid METAR header up to the point where the validity
//! group appears, so [`Dispatcher::default`] always tries the TAF parser
//! first.

use chrono::NaiveDateTime;

use crate::assemble::{metar, taf};
use crate::error::ParseFailure;
use crate::model::{Report, ReportType};

/// The stable per-report-kind parser contract (spec §6): `can_parse`,
/// `source_type`, `parse`. [`Dispatcher`] composes these; a caller that
/// already knows its feed only ever carries one report kind can use
/// [`MetarParser`]/[`TafParser`] directly instead.
pub trait ReportParser {
    /// Cheap lookahead: could this raw text plausibly be this parser's
    /// report type? Never itself fails; a `false` here just means "try the
    /// next parser."
    fn can_parse(&self, raw: &str) -> bool;

    /// The report type this parser produces.
    fn source_type(&self) -> ReportType;

    /// Runs the full parse. Only called after `can_parse` returned `true`.
    fn parse(&self, raw: &str, reference: Option<NaiveDateTime>) -> Result<Report, ParseFailure>;
}

/// [`ReportParser`] for METAR/SPECI surface observations.
pub struct MetarParser;

impl ReportParser for MetarParser {
    fn can_parse(&self, raw: &str) -> bool {
        metar::looks_like_metar(raw)
    }

    fn source_type(&self) -> ReportType {
        ReportType::Metar
    }

    fn parse(&self, raw: &str, reference: Option<NaiveDateTime>) -> Result<Report, ParseFailure> {
        metar::parse(raw, reference)
    }
}

/// [`ReportParser`] for TAF terminal aerodrome forecasts.
pub struct TafParser;

impl ReportParser for TafParser {
    fn can_parse(&self, raw: &str) -> bool {
        taf::looks_like_taf(raw)
    }

    fn source_type(&self) -> ReportType {
        ReportType::Taf
    }

    fn parse(&self, raw: &str, reference: Option<NaiveDateTime>) -> Result<Report, ParseFailure> {
        taf::parse(raw, reference)
    }
}

/// Entry point for decoding raw report text into a [`Report`].
///
/// Holds no per-parse state of its own — every [`ReportParser`] it owns is
/// stateless, and the mutable bookkeeping for a single parse lives entirely
/// in [`crate::builder`] and [`crate::context::ParseContext`], scoped to
/// that one call (spec §9).
pub struct Dispatcher {
    parsers: Vec<Box<dyn ReportParser + Send + Sync>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self {
            parsers: vec![Box::new(TafParser), Box::new(MetarParser)],
        }
    }
}

impl Dispatcher {
    /// A dispatcher with the two built-in parsers, TAF checked before
    /// METAR.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `raw` as the given report type, skipping the `can_parse`
    /// lookahead entirely — useful when the caller already knows the
    /// report type from an out-of-band source (e.g. a feed that separates
    /// METAR and TAF bulletins).
    pub fn parse(
        &self,
        raw: &str,
        source: ReportType,
        reference: Option<NaiveDateTime>,
    ) -> Result<Report, ParseFailure> {
        match source {
            ReportType::Metar | ReportType::Speci => metar::parse(raw, reference),
            ReportType::Taf => taf::parse(raw, reference),
        }
    }

    /// Tries each registered parser in order, returning the first one
    /// whose `can_parse` lookahead succeeds. Returns
    /// [`ParseFailure::input_rejected`] if none of them recognize `raw`.
    pub fn parse_auto(&self, raw: &str, reference: Option<NaiveDateTime>) -> Result<Report, ParseFailure> {
        for parser in &self.parsers {
            if parser.can_parse(raw) {
                return parser.parse(raw, reference);
            }
        }
        Err(ParseFailure::input_rejected(raw))
    }
}
