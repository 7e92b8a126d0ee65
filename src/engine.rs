//! Component C: the token-consuming dispatch engine.
//!
//! One algorithm drives all three registries (spec §4.3): scan the active
//! registry top to bottom, run the first handler whose pattern matches at
//! the front of what's left, consume what it matched, and start the scan
//! over from the top. A handler marked `repeats` re-applies itself against
//! the new front of the residue until it stops matching before the scan
//! restarts from the top — this is how a TAF's chain of `BECMG`/`TEMPO`
//! groups, or a chain of sky-condition layers, gets consumed without a
//! distinct pattern per repetition.
//!
//! Three guarantees fall out of this shape (spec §4.3, §8 properties
//! 1-3): **totality**, because every registry ends in an `UNPARSED` entry
//! that matches any non-empty residue; **termination**, because every
//! match is required to consume at least one character; and
//! **determinism**, because registry order is fixed data, not something
//! resolved at runtime.

use regex::Captures;

use crate::context::ParseContext;
use crate::error::{log_soft_fail, DecodeOutcome};

/// One pattern/handler pair in a registry.
///
/// `pattern` is a function pointer rather than a bare `&'static Regex` so
/// that registries can reference a [`once_cell::sync::Lazy`] defined in
/// another module without forcing its initialization before first use.
pub(crate) struct PatternHandler<B> {
    pub name: &'static str,
    pub pattern: fn() -> &'static regex::Regex,
    /// If `true`, re-apply this same handler against the new front of the
    /// residue until it stops matching, before returning to the top of the
    /// registry.
    pub repeats: bool,
    pub handle: fn(&Captures<'_>, &mut B, &mut ParseContext) -> DecodeOutcome,
}

/// Anything the engine can deposit leftover, unrecognized tokens into.
pub(crate) trait ResidueSink {
    fn push_unparsed(&mut self, token: String);
}

/// Builds the synthetic `UNPARSED` entry every registry ends with: it
/// matches one non-whitespace token and retains it as free text instead of
/// discarding it (spec §4.3/§7, the `ResidualUnparsed` outcome).
pub(crate) fn unparsed_entry<B: ResidueSink>() -> PatternHandler<B> {
    PatternHandler {
        name: "UNPARSED",
        pattern: crate::pattern::unparsed_pattern,
        repeats: false,
        handle: |caps, builder, _ctx| {
            let token = caps
                .get(0)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            if !token.is_empty() {
                crate::error::log_unparsed(&token);
                builder.push_unparsed(token);
            }
            DecodeOutcome::Applied
        },
    }
}

/// Runs `registry` against `residue` until it's fully consumed.
///
/// Every registry built via [`crate::registry`] ends in [`unparsed_entry`],
/// which matches any non-empty input, so this loop always terminates.
pub(crate) fn run<B>(
    residue: &str,
    registry: &[PatternHandler<B>],
    builder: &mut B,
    ctx: &mut ParseContext,
) {
    let mut residue = residue.trim_start();
    'outer: while !residue.is_empty() {
        for entry in registry {
            let re = (entry.pattern)();
            let Some(caps) = re.captures(residue) else {
                continue;
            };
            residue = apply(entry, &caps, residue, builder, ctx);
            if entry.repeats {
                while let Some(caps) = (entry.pattern)().captures(residue) {
                    residue = apply(entry, &caps, residue, builder, ctx);
                }
            }
            continue 'outer;
        }
        // Unreachable as long as every registry passed in ends with
        // `unparsed_entry()`, which matches any non-empty string.
        break;
    }
}

fn apply<'r, B>(
    entry: &PatternHandler<B>,
    caps: &Captures<'_>,
    residue: &'r str,
    builder: &mut B,
    ctx: &mut ParseContext,
) -> &'r str {
    let matched = caps.get(0).expect("group 0 always matches");
    let consumed = matched.end().max(1);
    let token = residue[..consumed].trim_end();
    let outcome = (entry.handle)(caps, builder, ctx);
    if outcome == DecodeOutcome::Skipped {
        log_soft_fail(entry.name, token, "matched pattern but could not decode captures");
    }
    residue[consumed..].trim_start()
}
