use regex::Captures;

use crate::builder::RemarksBuilder;
use crate::context::ParseContext;
use crate::error::DecodeOutcome;
use crate::model::{CloudOktaObservation, ObscurationLayer, ThunderstormCloudLocation};

use DecodeOutcome::{Applied, Skipped};

pub(crate) fn obscuration(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let Ok(height_hundreds_ft) = caps["height"].parse() else {
        return Skipped;
    };
    b.obscurations.push(ObscurationLayer {
        phenomenon: caps["phenom"].to_string(),
        amount: caps["amount"].to_string(),
        height_hundreds_ft,
    });
    Applied
}

pub(crate) fn ts_cld_loc(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let directions = caps["dirs"].split('-').map(str::to_string).collect();
    b.thunderstorm_cloud_locations.push(ThunderstormCloudLocation {
        is_thunderstorm: &caps["kind"] == "TS",
        directions,
        moving_toward: caps.name("mov").map(|m| m.as_str().to_string()),
    });
    Applied
}

/// `8/` followed by 3 or 4 digits: low cloud type, low oktas, mid cloud
/// type, and (if present) high cloud type.
pub(crate) fn cloud_okta(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let digits = &caps["digits"];
    let mut chars = digits.chars();
    let Some(low_type) = chars.next().and_then(|c| c.to_digit(10)) else {
        return Skipped;
    };
    let Some(low_oktas) = chars.next().and_then(|c| c.to_digit(10)) else {
        return Skipped;
    };
    let Some(mid_type) = chars.next().and_then(|c| c.to_digit(10)) else {
        return Skipped;
    };
    let high_type = chars.next().and_then(|c| c.to_digit(10)).unwrap_or(0);

    b.cloud_okta_observations.push(CloudOktaObservation {
        low_type: low_type as u8,
        low_oktas: low_oktas as u8,
        mid_type: mid_type as u8,
        high_type: high_type as u8,
    });
    Applied
}

pub(crate) fn lightning(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    b.lightning = Some(caps.get(0).unwrap().as_str().trim().to_string());
    Applied
}
