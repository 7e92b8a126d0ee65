use regex::Captures;

use crate::builder::{PeriodInProgress, TafBuilder};
use crate::context::ParseContext;
use crate::error::DecodeOutcome;
use crate::model::ChangeIndicator;

use DecodeOutcome::{Applied, Skipped};

pub(crate) fn group_becmg_tempo_prob(caps: &Captures<'_>, b: &mut TafBuilder, ctx: &mut ParseContext) -> DecodeOutcome {
    let (Ok(from_day), Ok(from_hour), Ok(to_day), Ok(to_hour)) = (
        caps["from_day"].parse(),
        caps["from_hour"].parse(),
        caps["to_day"].parse(),
        caps["to_hour"].parse(),
    ) else {
        return Skipped;
    };
    let (Some(from), Some(to)) = (
        ctx.resolve_day_hour(from_day, from_hour),
        ctx.resolve_day_hour(to_day, to_hour),
    ) else {
        return Skipped;
    };

    let (change, probability) = if let Some(prob) = caps.name("prob") {
        let Ok(prob) = prob.as_str().parse() else {
            return Skipped;
        };
        (ChangeIndicator::Prob, Some(prob))
    } else {
        match &caps["kind"] {
            "BECMG" => (ChangeIndicator::Becmg, None),
            "TEMPO" => (ChangeIndicator::Tempo, None),
            _ => return Skipped,
        }
    };

    b.start_period(PeriodInProgress::new(change, None, Some((from, to)), probability));
    Applied
}
