//! Component B: the Handler Registry.
//!
//! Each registry is process-wide, read-only data (spec §5): a fixed,
//! ordered list of `(pattern, handler)` pairs built once behind a
//! [`once_cell::sync::Lazy`] and never mutated after first use. Order is
//! itself a behavioral contract (spec §4.2, §8 property 4) — two pairs
//! call this out explicitly below, and both have a dedicated ordering
//! test in `tests/registry_order.rs`.

use once_cell::sync::Lazy;

use crate::builder::{ConditionsBuilder, RemarksBuilder, TafBuilder};
use crate::decode;
use crate::engine::{unparsed_entry, PatternHandler};
use crate::pattern;

pub(crate) static MAIN_REGISTRY: Lazy<Vec<PatternHandler<ConditionsBuilder>>> = Lazy::new(|| {
    vec![
        PatternHandler {
            name: "WIND",
            pattern: || &*pattern::main::WIND,
            repeats: false,
            handle: decode::main::wind,
        },
        PatternHandler {
            name: "VISIBILITY_CAVOK",
            pattern: || &*pattern::main::VISIBILITY_CAVOK,
            repeats: false,
            handle: decode::main::visibility_cavok,
        },
        PatternHandler {
            name: "VISIBILITY_MISSING",
            pattern: || &*pattern::main::VISIBILITY_MISSING,
            repeats: false,
            handle: decode::main::visibility_missing,
        },
        PatternHandler {
            name: "VISIBILITY_SM_MIXED",
            pattern: || &*pattern::main::VISIBILITY_SM_MIXED,
            repeats: false,
            handle: decode::main::visibility_sm_mixed,
        },
        PatternHandler {
            name: "VISIBILITY_SM_FRACTION",
            pattern: || &*pattern::main::VISIBILITY_SM_FRACTION,
            repeats: false,
            handle: decode::main::visibility_sm_fraction,
        },
        PatternHandler {
            name: "VISIBILITY_SM_WHOLE",
            pattern: || &*pattern::main::VISIBILITY_SM_WHOLE,
            repeats: false,
            handle: decode::main::visibility_sm_whole,
        },
        PatternHandler {
            name: "VISIBILITY_METERS",
            // `VISIBILITY_METERS_BODY`, not the plain `VISIBILITY_METERS`
            // TAF uses: this registry also carries `ALTIMETER`'s
            // end-anchored bare-4-digit `heur` branch, so a bare visibility
            // group here must require trailing content to leave the
            // genuinely-last bare group for `ALTIMETER` to claim. See both
            // patterns' doc comments in `src/pattern/main.rs`.
            pattern: || &*pattern::main::VISIBILITY_METERS_BODY,
            repeats: false,
            handle: decode::main::visibility_meters,
        },
        PatternHandler {
            name: "RUNWAY",
            pattern: || &*pattern::main::RUNWAY,
            repeats: true,
            handle: decode::main::runway_visual_range,
        },
        PatternHandler {
            name: "PRESENT_WEATHER",
            pattern: || &*pattern::main::PRESENT_WEATHER,
            repeats: true,
            handle: decode::main::present_weather,
        },
        PatternHandler {
            name: "SKY_CONDITION",
            pattern: || &*pattern::main::SKY_CONDITION,
            repeats: true,
            handle: decode::main::sky_condition,
        },
        PatternHandler {
            name: "TEMP_DEWPOINT",
            pattern: || &*pattern::main::TEMP_DEWPOINT,
            repeats: false,
            handle: decode::main::temperature_dewpoint,
        },
        PatternHandler {
            name: "ALTIMETER",
            pattern: || &*pattern::main::ALTIMETER,
            repeats: false,
            handle: decode::main::altimeter,
        },
        PatternHandler {
            name: "NO_SIG_CHANGE",
            pattern: || &*pattern::main::NO_SIG_CHANGE,
            repeats: false,
            handle: decode::main::nosig,
        },
        unparsed_entry(),
    ]
});

pub(crate) static REMARKS_REGISTRY: Lazy<Vec<PatternHandler<RemarksBuilder>>> = Lazy::new(|| {
    vec![
        PatternHandler {
            name: "AUTO",
            pattern: || &*pattern::remarks::AUTO,
            repeats: false,
            handle: decode::remarks::station_type::auto,
        },
        PatternHandler {
            name: "SEALVL_PRESS",
            pattern: || &*pattern::remarks::SEALVL_PRESS,
            repeats: false,
            handle: decode::remarks::pressure::sea_level_pressure,
        },
        PatternHandler {
            name: "PEAK_WIND",
            pattern: || &*pattern::remarks::PEAK_WIND,
            repeats: false,
            handle: decode::remarks::wind::peak_wind,
        },
        PatternHandler {
            name: "WIND_SHIFT",
            pattern: || &*pattern::remarks::WIND_SHIFT,
            repeats: false,
            handle: decode::remarks::wind::wind_shift,
        },
        PatternHandler {
            name: "VPV_SV_VSL",
            pattern: || &*pattern::remarks::VPV_SV_VSL,
            repeats: false,
            handle: decode::remarks::visibility_ceiling::variable_visibility,
        },
        PatternHandler {
            name: "SECTOR_VISIBILITY",
            pattern: || &*pattern::remarks::SECTOR_VISIBILITY,
            repeats: false,
            handle: decode::remarks::visibility_ceiling::sector_visibility,
        },
        PatternHandler {
            name: "VARIABLE_CEILING",
            pattern: || &*pattern::remarks::VARIABLE_CEILING,
            repeats: false,
            handle: decode::remarks::visibility_ceiling::variable_ceiling,
        },
        // Must follow VARIABLE_CEILING: both start with `CIG`, and the
        // registry's top-to-bottom scan is what tells `CIG 005V010` apart
        // from `CIG 002 RWY11` (spec §4.2, ordering property test).
        PatternHandler {
            name: "CEILING_SECOND_SITE",
            pattern: || &*pattern::remarks::CEILING_SECOND_SITE,
            repeats: false,
            handle: decode::remarks::visibility_ceiling::ceiling_second_site,
        },
        PatternHandler {
            name: "OBSCURATION",
            pattern: || &*pattern::remarks::OBSCURATION,
            repeats: true,
            handle: decode::remarks::sky::obscuration,
        },
        PatternHandler {
            name: "TS_CLD_LOC",
            pattern: || &*pattern::remarks::TS_CLD_LOC,
            repeats: true,
            handle: decode::remarks::sky::ts_cld_loc,
        },
        PatternHandler {
            name: "CLOUD_OKTA",
            pattern: || &*pattern::remarks::CLOUD_OKTA,
            repeats: true,
            handle: decode::remarks::sky::cloud_okta,
        },
        PatternHandler {
            name: "LIGHTNING",
            pattern: || &*pattern::remarks::LIGHTNING,
            repeats: false,
            handle: decode::remarks::sky::lightning,
        },
        PatternHandler {
            name: "PRES_RF_RAPIDLY",
            pattern: || &*pattern::remarks::PRES_RF_RAPIDLY,
            repeats: false,
            handle: decode::remarks::pressure::pressure_change_rapidly,
        },
        PatternHandler {
            name: "TEMP_1HR",
            pattern: || &*pattern::remarks::TEMP_1HR,
            repeats: false,
            handle: decode::remarks::temperature::temp_1hr,
        },
        PatternHandler {
            name: "PRECIP_1HR",
            pattern: || &*pattern::remarks::PRECIP_1HR,
            repeats: false,
            handle: decode::remarks::precip::precip_1hr,
        },
        PatternHandler {
            name: "TEMP_6HR_MAX_MIN",
            pattern: || &*pattern::remarks::TEMP_6HR_MAX_MIN,
            repeats: true,
            handle: decode::remarks::temperature::temp_6hr_max_min,
        },
        PatternHandler {
            name: "TEMP_24HR",
            pattern: || &*pattern::remarks::TEMP_24HR,
            repeats: false,
            handle: decode::remarks::temperature::temp_24hr,
        },
        PatternHandler {
            name: "PRESS_3HR",
            pattern: || &*pattern::remarks::PRESS_3HR,
            repeats: false,
            handle: decode::remarks::pressure::pressure_tendency,
        },
        PatternHandler {
            name: "PRECIP_3HR_24HR",
            pattern: || &*pattern::remarks::PRECIP_3HR_24HR,
            repeats: false,
            handle: decode::remarks::precip::precip_6hr_or_24hr,
        },
        PatternHandler {
            name: "PRESS_Q",
            pattern: || &*pattern::remarks::PRESS_Q,
            repeats: false,
            handle: decode::remarks::pressure::redundant_qnh,
        },
        PatternHandler {
            name: "AUTOMATED_MAINTENANCE_SIMPLE",
            pattern: || &*pattern::remarks::AUTOMATED_MAINTENANCE_SIMPLE,
            repeats: true,
            handle: decode::remarks::station_type::maintenance_simple,
        },
        PatternHandler {
            name: "AUTOMATED_MAINTENANCE_LOCATED",
            pattern: || &*pattern::remarks::AUTOMATED_MAINTENANCE_LOCATED,
            repeats: true,
            handle: decode::remarks::station_type::maintenance_located,
        },
        PatternHandler {
            name: "HAIL_SIZE",
            pattern: || &*pattern::remarks::HAIL_SIZE,
            repeats: false,
            handle: decode::remarks::precip::hail_size,
        },
        PatternHandler {
            name: "BEGIN_END_WEATHER",
            pattern: || &*pattern::remarks::BEGIN_END_WEATHER,
            repeats: true,
            handle: decode::remarks::weather_event::begin_end_weather,
        },
        unparsed_entry(),
    ]
});

pub(crate) static TAF_GROUP_REGISTRY: Lazy<Vec<PatternHandler<TafBuilder>>> = Lazy::new(|| {
    vec![
        PatternHandler {
            name: "GROUP_BECMG_TEMPO_PROB",
            pattern: || &*pattern::taf::GROUP_BECMG_TEMPO_PROB,
            repeats: false,
            handle: decode::taf::becmg_tempo_prob::group_becmg_tempo_prob,
        },
        // Must follow GROUP_BECMG_TEMPO_PROB / precede nothing else that
        // starts with `FM` — the legacy decoder this traces back to had a
        // `GROUP_FM_PATTERN` bug here (see `pattern::taf::GROUP_FM`'s doc
        // comment and `DESIGN.md`).
        PatternHandler {
            name: "GROUP_FM",
            pattern: || &*pattern::taf::GROUP_FM,
            repeats: false,
            handle: decode::taf::fm::group_fm,
        },
        PatternHandler {
            name: "VALIDITY_PERIOD",
            pattern: || &*pattern::taf::VALIDITY_PERIOD,
            repeats: false,
            handle: decode::taf::validity::validity_period,
        },
        PatternHandler {
            name: "TEMP_EXTREME",
            pattern: || &*pattern::taf::TEMP_EXTREME,
            repeats: true,
            handle: decode::taf::temp_extreme::temp_extreme,
        },
        PatternHandler {
            name: "WIND",
            pattern: || &*pattern::main::WIND,
            repeats: false,
            handle: decode::taf::wind,
        },
        PatternHandler {
            name: "VISIBILITY_CAVOK",
            pattern: || &*pattern::main::VISIBILITY_CAVOK,
            repeats: false,
            handle: decode::taf::visibility_cavok,
        },
        PatternHandler {
            name: "VISIBILITY_SM_MIXED",
            pattern: || &*pattern::main::VISIBILITY_SM_MIXED,
            repeats: false,
            handle: decode::taf::visibility_sm_mixed,
        },
        PatternHandler {
            name: "VISIBILITY_SM_FRACTION",
            pattern: || &*pattern::main::VISIBILITY_SM_FRACTION,
            repeats: false,
            handle: decode::taf::visibility_sm_fraction,
        },
        PatternHandler {
            name: "VISIBILITY_SM_WHOLE",
            pattern: || &*pattern::main::VISIBILITY_SM_WHOLE,
            repeats: false,
            handle: decode::taf::visibility_sm_whole,
        },
        PatternHandler {
            name: "VISIBILITY_METERS",
            pattern: || &*pattern::main::VISIBILITY_METERS,
            repeats: false,
            handle: decode::taf::visibility_meters,
        },
        PatternHandler {
            name: "RUNWAY",
            pattern: || &*pattern::main::RUNWAY,
            repeats: true,
            handle: decode::taf::runway_visual_range,
        },
        PatternHandler {
            name: "PRESENT_WEATHER",
            pattern: || &*pattern::main::PRESENT_WEATHER,
            repeats: true,
            handle: decode::taf::present_weather,
        },
        PatternHandler {
            name: "SKY_CONDITION",
            pattern: || &*pattern::main::SKY_CONDITION,
            repeats: true,
            handle: decode::taf::sky_condition,
        },
        unparsed_entry(),
    ]
});
