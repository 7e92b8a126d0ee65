use regex::Captures;

use crate::builder::RemarksBuilder;
use crate::context::ParseContext;
use crate::error::DecodeOutcome;

use DecodeOutcome::{Applied, Skipped};

/// Sign digit + 3-digit tenths reading used by `TEMP_1HR`, `TEMP_6HR_MAX_MIN`
/// and `TEMP_24HR`. `0` is positive, `1` is negative (spec §8's sign
/// property: `T1xxx` is negative, `T0xxx` is positive).
fn signed_tenths(sign: &str, digits: &str) -> Option<f64> {
    let magnitude: f64 = digits.parse::<f64>().ok()? / 10.0;
    match sign {
        "0" => Some(magnitude),
        "1" => Some(-magnitude),
        _ => None,
    }
}

pub(crate) fn temp_1hr(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let Some(temp) = signed_tenths(&caps["tsign"], &caps["temp"]) else {
        return Skipped;
    };
    b.precise_temperature_c = Some(temp);
    if let (Some(dsign), Some(dew)) = (caps.name("dsign"), caps.name("dew")) {
        match signed_tenths(dsign.as_str(), dew.as_str()) {
            Some(d) => b.precise_dewpoint_c = Some(d),
            None => return Skipped,
        }
    }
    Applied
}

pub(crate) fn temp_6hr_max_min(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let Some(value) = signed_tenths(&caps["sign"], &caps["val"]) else {
        return Skipped;
    };
    match &caps["which"] {
        "1" => b.max_temp_6hr_c = Some(value),
        "2" => b.min_temp_6hr_c = Some(value),
        _ => return Skipped,
    }
    Applied
}

pub(crate) fn temp_24hr(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let (Some(max), Some(min)) = (
        signed_tenths(&caps["maxsign"], &caps["maxval"]),
        signed_tenths(&caps["minsign"], &caps["minval"]),
    ) else {
        return Skipped;
    };
    b.max_temp_24hr_c = Some(max);
    b.min_temp_24hr_c = Some(min);
    Applied
}
