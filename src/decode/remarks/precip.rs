use regex::Captures;

use crate::builder::RemarksBuilder;
use crate::context::ParseContext;
use crate::error::DecodeOutcome;
use crate::model::PrecipAmount;

use DecodeOutcome::{Applied, Skipped};

fn parse_amount(raw: &str) -> Option<PrecipAmount> {
    if raw.chars().all(|c| c == '/') {
        return Some(PrecipAmount::Trace);
    }
    raw.parse::<f64>().ok().map(|hundredths| PrecipAmount::Measured(hundredths / 100.0))
}

pub(crate) fn precip_1hr(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let Some(amount) = parse_amount(&caps["amt"]) else {
        return Skipped;
    };
    b.precip_1hr_in = Some(amount);
    Applied
}

/// Leading digit `6` is a 6-hour amount, `7` is a 24-hour amount (see
/// `PRECIP_3HR_24HR`'s doc comment in `pattern::remarks`).
pub(crate) fn precip_6hr_or_24hr(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let Some(amount) = parse_amount(&caps["amt"]) else {
        return Skipped;
    };
    match &caps["period"] {
        "6" => b.precip_6hr_in = Some(amount),
        "7" => b.precip_24hr_in = Some(amount),
        _ => return Skipped,
    }
    Applied
}

pub(crate) fn hail_size(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let num: f64 = match caps["num"].parse() {
        Ok(n) => n,
        Err(_) => return Skipped,
    };
    let fraction = match caps.name("den") {
        Some(den) => match den.as_str().parse::<f64>() {
            Ok(d) if d != 0.0 => num / d,
            _ => return Skipped,
        },
        None => num,
    };
    let whole: f64 = caps
        .name("whole")
        .map(|m| m.as_str().parse().unwrap_or(0.0))
        .unwrap_or(0.0);
    b.hail_size_in = Some(whole + fraction);
    Applied
}
