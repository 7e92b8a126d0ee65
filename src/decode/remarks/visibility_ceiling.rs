use regex::Captures;

use crate::builder::RemarksBuilder;
use crate::context::ParseContext;
use crate::error::DecodeOutcome;
use crate::model::{SecondSiteCeiling, SectorVisibility, VariableCeiling, VariableVisibility};

use super::parse_sm;

use DecodeOutcome::{Applied, Skipped};

pub(crate) fn variable_visibility(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let (Some(min_sm), Some(max_sm)) = (parse_sm(&caps["min"]), parse_sm(&caps["max"])) else {
        return Skipped;
    };
    b.variable_visibility = Some(VariableVisibility {
        min_sm,
        max_sm,
        // This remark's grammar, as matched here, doesn't carry a
        // direction qualifier — see `DESIGN.md`.
        direction: None,
    });
    Applied
}

pub(crate) fn sector_visibility(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let num = &caps["num"];
    let visibility_sm = match caps.name("den") {
        Some(den) => match parse_sm(&format!("{num}/{}", den.as_str())) {
            Some(v) => v,
            None => return Skipped,
        },
        None => match parse_sm(num) {
            Some(v) => v,
            None => return Skipped,
        },
    };
    b.sector_visibility.push(SectorVisibility {
        is_tower: &caps["kind"] == "TWR",
        visibility_sm,
    });
    Applied
}

pub(crate) fn variable_ceiling(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let (Ok(min_hundreds_ft), Ok(max_hundreds_ft)) = (caps["min"].parse(), caps["max"].parse()) else {
        return Skipped;
    };
    b.variable_ceiling = Some(VariableCeiling {
        min_hundreds_ft,
        max_hundreds_ft,
    });
    Applied
}

pub(crate) fn ceiling_second_site(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let Ok(height_hundreds_ft) = caps["height"].parse() else {
        return Skipped;
    };
    let runway = caps["rwy"].trim_start_matches("RWY").to_string();
    b.second_site_ceiling = Some(SecondSiteCeiling {
        height_hundreds_ft,
        runway,
    });
    Applied
}
