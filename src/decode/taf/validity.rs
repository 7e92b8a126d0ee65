use regex::Captures;

use crate::builder::TafBuilder;
use crate::context::ParseContext;
use crate::error::DecodeOutcome;

use DecodeOutcome::{Applied, Skipped};

/// A bare `DDHH/DDHH` validity re-issue, occasionally seen after an `AMD`
/// or `COR` modifier has already consumed the header line.
pub(crate) fn validity_period(caps: &Captures<'_>, b: &mut TafBuilder, ctx: &mut ParseContext) -> DecodeOutcome {
    let (Ok(vfrom_day), Ok(vfrom_hour), Ok(vto_day), Ok(vto_hour)) = (
        caps["vfrom_day"].parse(),
        caps["vfrom_hour"].parse(),
        caps["vto_day"].parse(),
        caps["vto_hour"].parse(),
    ) else {
        return Skipped;
    };
    let (Some(from), Some(to)) = (
        ctx.resolve_day_hour(vfrom_day, vfrom_hour),
        ctx.resolve_day_hour(vto_day, vto_hour),
    ) else {
        return Skipped;
    };
    b.validity = (from, to);
    Applied
}
