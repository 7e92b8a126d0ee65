use regex::Captures;

use crate::builder::RemarksBuilder;
use crate::context::ParseContext;
use crate::error::DecodeOutcome;
use crate::model::{PressureChangeRapidly, PressureTendency, PressureTendencyCode};

use DecodeOutcome::{Applied, Skipped};

/// `SLPppp` sea-level pressure, spec §8's boundary property: a 3-digit
/// value of 500 or more is read as hundreds of hPa over 900.0; below 500
/// it's read as hundreds of hPa over 1000.0 (`SLP500` → 950.0hPa,
/// `SLP499` → 1049.9hPa, `SLP000` → 1000.0hPa).
pub(crate) fn sea_level_pressure(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let raw = &caps["val"];
    if raw == "NO" {
        b.sea_level_pressure_hpa = None;
        return Applied;
    }
    let Ok(val) = raw.parse::<f64>() else {
        return Skipped;
    };
    b.sea_level_pressure_hpa = Some(if val >= 500.0 {
        900.0 + val / 10.0
    } else {
        1000.0 + val / 10.0
    });
    Applied
}

pub(crate) fn pressure_tendency(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let (Ok(code), Ok(change)) = (caps["code"].parse(), caps["change"].parse()) else {
        return Skipped;
    };
    b.pressure_tendency = Some(PressureTendency {
        code: PressureTendencyCode(code),
        change_tenths_hpa: change,
    });
    Applied
}

pub(crate) fn pressure_change_rapidly(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    b.pressure_change_rapidly = Some(match &caps["dir"] {
        "FR" => PressureChangeRapidly::Falling,
        "RR" => PressureChangeRapidly::Rising,
        _ => return Skipped,
    });
    Applied
}

/// A redundant QNH echoed in remarks. Logged, not retained — `Remarks`
/// has no dedicated slot for it since it never disagrees with the body's
/// altimeter group in practice.
pub(crate) fn redundant_qnh(caps: &Captures<'_>, _b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    log::debug!("remarks QNH echo Q{} not retained", &caps["value"]);
    Applied
}
