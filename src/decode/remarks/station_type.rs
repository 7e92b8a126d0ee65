use regex::Captures;

use crate::builder::RemarksBuilder;
use crate::context::ParseContext;
use crate::error::DecodeOutcome;
use crate::model::{AutomatedStationType, MaintenanceIndicator};

use DecodeOutcome::{Applied, Skipped};

pub(crate) fn auto(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    b.automated_station_type = Some(match &caps["n"] {
        "1" => AutomatedStationType::Ao1,
        "2" => AutomatedStationType::Ao2,
        _ => return Skipped,
    });
    Applied
}

pub(crate) fn maintenance_simple(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let indicator = match &caps["token"] {
        "RVRNO" => MaintenanceIndicator::RvrNotAvailable,
        "PWINO" => MaintenanceIndicator::PresentWeatherNotAvailable,
        "PNO" => MaintenanceIndicator::PrecipNotAvailable,
        "FZRANO" => MaintenanceIndicator::FreezingRainNotAvailable,
        "TSNO" => MaintenanceIndicator::ThunderstormNotAvailable,
        "$" => {
            b.maintenance_required = true;
            MaintenanceIndicator::MaintenanceRequired
        }
        _ => return Skipped,
    };
    b.maintenance_indicators.push(indicator);
    Applied
}

pub(crate) fn maintenance_located(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let loc = caps.name("loc").map(|m| m.as_str().to_string());
    let indicator = match &caps["kind"] {
        "VISNO" => MaintenanceIndicator::VisibilityNotAvailable(loc),
        "CHINO" => MaintenanceIndicator::CeilingNotAvailable(loc),
        _ => return Skipped,
    };
    b.maintenance_indicators.push(indicator);
    Applied
}
