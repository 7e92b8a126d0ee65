use regex::Captures;

use crate::builder::{PeriodInProgress, TafBuilder};
use crate::context::ParseContext;
use crate::error::DecodeOutcome;
use crate::model::ChangeIndicator;

use DecodeOutcome::{Applied, Skipped};

pub(crate) fn group_fm(caps: &Captures<'_>, b: &mut TafBuilder, ctx: &mut ParseContext) -> DecodeOutcome {
    let (Ok(day), Ok(hour), Ok(minute)) = (
        caps["day"].parse(),
        caps["hour"].parse(),
        caps["minute"].parse(),
    ) else {
        return Skipped;
    };
    let Some(from_time) = ctx.resolve_fm_time(day, hour, minute, b.validity.0, b.validity.1) else {
        return Skipped;
    };
    b.start_period(PeriodInProgress::new(ChangeIndicator::From, Some(from_time), None, None));
    Applied
}
