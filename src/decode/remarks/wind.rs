use regex::Captures;

use crate::builder::RemarksBuilder;
use crate::context::ParseContext;
use crate::error::DecodeOutcome;
use crate::model::{PeakWind, WindShift};

use DecodeOutcome::{Applied, Skipped};

pub(crate) fn peak_wind(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let (Ok(direction), Ok(speed), Ok(minute)) = (
        caps["dir"].parse(),
        caps["speed"].parse(),
        caps["minute"].parse(),
    ) else {
        return Skipped;
    };
    let hour = caps.name("hour").and_then(|m| m.as_str().parse().ok());
    b.peak_wind = Some(PeakWind {
        direction,
        speed,
        hour,
        minute,
    });
    Applied
}

pub(crate) fn wind_shift(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let Ok(minute) = caps["minute"].parse() else {
        return Skipped;
    };
    let hour = caps.name("hour").and_then(|m| m.as_str().parse().ok());
    b.wind_shift = Some(WindShift {
        hour,
        minute,
        frontal_passage: caps.name("fropa").is_some(),
    });
    Applied
}
