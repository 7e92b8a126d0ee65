use std::fmt;

use annotate_snippets::{Level, Renderer, Snippet};

/// A failure returned across the parser boundary.
///
/// This corresponds to the `InputRejected` and `StructuralMissing` error
/// kinds: both are fatal to the report being parsed and are the only
/// failures a caller ever sees. Everything else (a bad remark digit, a
/// leftover token) is recovered locally and folded into the successful
/// [`crate::Report`] instead.
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct ParseFailure {
    message: String,
    /// The raw report text being parsed, kept so the failure can be
    /// rendered with source context.
    raw: String,
    /// Byte offset into `raw` where the failure was detected.
    span: std::ops::Range<usize>,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ParseFailure {
    /// The input did not begin with a recognised report prefix.
    pub fn input_rejected(raw: &str) -> Self {
        Self {
            message: "input does not begin with a recognized METAR/TAF prefix".to_owned(),
            raw: raw.to_owned(),
            span: 0..raw.len().min(1).max(0),
            cause: None,
        }
    }

    /// A required header element (station id, TAF validity, ...) was
    /// absent after the header was parsed.
    pub fn structural_missing(raw: &str, what: &str, span: std::ops::Range<usize>) -> Self {
        Self {
            message: format!("missing required element: {what}"),
            raw: raw.to_owned(),
            span,
            cause: None,
        }
    }

    /// Attach an underlying cause (e.g. an integer parse error) to this
    /// failure.
    #[must_use]
    pub fn with_cause(
        mut self,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Render this failure as a source-annotated snippet, in the manner of
    /// a compiler diagnostic: the raw report text with a caret under the
    /// span that triggered the failure.
    #[must_use]
    pub fn render(&self) -> String {
        let span = self.span.start.min(self.raw.len())..self.span.end.min(self.raw.len());
        let message = Level::Error.title(&self.message).snippet(
            Snippet::source(&self.raw)
                .origin("report")
                .fold(true)
                .annotation(Level::Error.span(span).label("here")),
        );
        Renderer::styled().render(message).to_string()
    }
}

impl fmt::Display for RenderedParseFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.render())
    }
}

/// Wrapper used only to opt into a `Display` impl that prints the
/// annotated-snippet rendering instead of the bare message.
pub struct RenderedParseFailure<'a>(pub &'a ParseFailure);

/// The outcome of a single element decoder's attempt to convert a regex
/// match into a typed value.
///
/// Decoders never return [`Result::Err`] across the handler boundary (see
/// spec §4.6 / §9): a failed conversion is represented as `Skipped` and
/// logged, not propagated. The matched prefix is still consumed by the
/// token engine either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecodeOutcome {
    /// The builder was mutated with a successfully decoded value.
    Applied,
    /// The regex matched but the captured groups didn't convert to a
    /// valid domain value; nothing was mutated.
    Skipped,
}

/// Logs an `ElementDecodeSoft` failure: the pattern matched but the
/// handler could not make sense of what it captured.
pub(crate) fn log_soft_fail(handler: &str, token: &str, reason: impl fmt::Display) {
    log::warn!("decoder {handler} could not decode {token:?}: {reason}");
}

/// Logs a `ResidualUnparsed` token: nothing in the registry claimed it, so
/// the catch-all pattern consumed it as free text.
pub(crate) fn log_unparsed(token: &str) {
    log::debug!("unparsed token retained as free text: {token:?}");
}
