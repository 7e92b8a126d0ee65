use regex::Captures;

use crate::builder::TafBuilder;
use crate::context::ParseContext;
use crate::error::DecodeOutcome;
use crate::model::TemperatureForecast;

use DecodeOutcome::{Applied, Skipped};

pub(crate) fn temp_extreme(caps: &Captures<'_>, b: &mut TafBuilder, ctx: &mut ParseContext) -> DecodeOutcome {
    let Ok(val) = caps["val"].parse::<i32>() else {
        return Skipped;
    };
    let temp_c = if caps.name("sign").is_some() { -val } else { val };
    let (Ok(day), Ok(hour)) = (caps["day"].parse(), caps["hour"].parse()) else {
        return Skipped;
    };
    let Some(at) = ctx.resolve_day_hour(day, hour) else {
        return Skipped;
    };

    let forecast = TemperatureForecast { temp_c, at };
    match &caps["kind"] {
        "X" => b.max_temperature = Some(forecast),
        "N" => b.min_temperature = Some(forecast),
        _ => return Skipped,
    }
    Applied
}
