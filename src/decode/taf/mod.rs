//! Element decoders for the `TAF_GROUPS` registry (spec §4.4/§4.5).
//!
//! TAF change groups reuse the same wind/visibility/sky/weather decoders a
//! METAR body uses ([`crate::decode::main`]) — spec §9's "shared
//! functions, not base-class inheritance" note. Since the token engine in
//! [`crate::engine`] is generic over one builder type per registry, these
//! thin adapters forward into the period currently being built.

pub(crate) mod becmg_tempo_prob;
pub(crate) mod fm;
pub(crate) mod temp_extreme;
pub(crate) mod validity;

use regex::Captures;

use crate::builder::TafBuilder;
use crate::context::ParseContext;
use crate::decode::main;
use crate::error::DecodeOutcome;

pub(crate) fn wind(caps: &Captures<'_>, b: &mut TafBuilder, ctx: &mut ParseContext) -> DecodeOutcome {
    main::wind(caps, &mut b.current.conditions, ctx)
}

pub(crate) fn visibility_cavok(caps: &Captures<'_>, b: &mut TafBuilder, ctx: &mut ParseContext) -> DecodeOutcome {
    main::visibility_cavok(caps, &mut b.current.conditions, ctx)
}

pub(crate) fn visibility_sm_mixed(caps: &Captures<'_>, b: &mut TafBuilder, ctx: &mut ParseContext) -> DecodeOutcome {
    main::visibility_sm_mixed(caps, &mut b.current.conditions, ctx)
}

pub(crate) fn visibility_sm_fraction(caps: &Captures<'_>, b: &mut TafBuilder, ctx: &mut ParseContext) -> DecodeOutcome {
    main::visibility_sm_fraction(caps, &mut b.current.conditions, ctx)
}

pub(crate) fn visibility_sm_whole(caps: &Captures<'_>, b: &mut TafBuilder, ctx: &mut ParseContext) -> DecodeOutcome {
    main::visibility_sm_whole(caps, &mut b.current.conditions, ctx)
}

pub(crate) fn visibility_meters(caps: &Captures<'_>, b: &mut TafBuilder, ctx: &mut ParseContext) -> DecodeOutcome {
    main::visibility_meters(caps, &mut b.current.conditions, ctx)
}

pub(crate) fn present_weather(caps: &Captures<'_>, b: &mut TafBuilder, ctx: &mut ParseContext) -> DecodeOutcome {
    main::present_weather(caps, &mut b.current.conditions, ctx)
}

pub(crate) fn sky_condition(caps: &Captures<'_>, b: &mut TafBuilder, ctx: &mut ParseContext) -> DecodeOutcome {
    main::sky_condition(caps, &mut b.current.conditions, ctx)
}

/// A TAF body can still carry an RVR group in the wild; spec §9 says to
/// log and drop it rather than extend `ForecastPeriod` to carry it.
pub(crate) fn runway_visual_range(caps: &Captures<'_>, b: &mut TafBuilder, ctx: &mut ParseContext) -> DecodeOutcome {
    let outcome = main::runway_visual_range(caps, &mut b.current.conditions, ctx);
    b.current.conditions.log_and_drop_rvr();
    outcome
}
