//! Element decoders for the `MAIN` registry: the METAR body / TAF period
//! elements (spec §4.4). Every function here has the same shape — take the
//! regex captures for one matched token, mutate the in-progress
//! [`ConditionsBuilder`], and report whether the conversion actually
//! worked. A `Skipped` return is an `ElementDecodeSoft` failure (spec
//! §4.6): the token is still consumed, but nothing is appended to the
//! builder, and [`crate::engine::run`] logs it for us.

use regex::Captures;

use crate::builder::ConditionsBuilder;
use crate::context::ParseContext;
use crate::error::DecodeOutcome;
use crate::model::{
    Coverage, Descriptor, Distance, DistanceUnit, Inequality, Intensity, Obscuration,
    OtherPhenomenon, PrecipCode, PresentWeather, Pressure, PressureUnit, RunwayVisualRange,
    RvrTrend, RvrValue, SkyCondition, Temperature, Visibility, VisibilityModifier, Wind,
    WindUnit,
};

use DecodeOutcome::{Applied, Skipped};

fn parse_maybe_p(s: &str) -> Option<u32> {
    s.trim_start_matches('P').parse().ok()
}

pub(crate) fn wind(caps: &Captures<'_>, b: &mut ConditionsBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let dir = &caps["dir"];
    let speed_raw = &caps["speed"];
    // spec §4.4: unit defaults to KT when the group carries no suffix.
    let unit = match caps.name("unit").map(|m| m.as_str()) {
        Some("KT") | None => WindUnit::Knots,
        Some("MPS") => WindUnit::MetresPerSecond,
        Some("KMH") => WindUnit::KilometresPerHour,
        _ => return Skipped,
    };
    if dir == "///" || speed_raw == "//" {
        return Skipped;
    }

    if let (Some(from), Some(to)) = (caps.name("vrb_from"), caps.name("vrb_to")) {
        log::debug!(
            "wind direction varying {}-{} is not retained on the decoded value",
            from.as_str(),
            to.as_str()
        );
    }

    let Some(speed) = parse_maybe_p(speed_raw) else {
        return Skipped;
    };
    let gust = caps.name("gust").and_then(|m| parse_maybe_p(m.as_str()));

    b.wind = Some(if dir == "000" && speed == 0 && gust.is_none() {
        Wind::Calm
    } else if dir == "VRB" {
        Wind::Variable { speed, gust, unit }
    } else {
        let Ok(direction) = dir.parse::<u32>() else {
            return Skipped;
        };
        Wind::Directed {
            direction,
            speed,
            gust,
            unit,
        }
    });
    Applied
}

pub(crate) fn visibility_cavok(_caps: &Captures<'_>, b: &mut ConditionsBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    b.visibility = Some(Visibility {
        distance: None,
        unit: DistanceUnit::Metres,
        less_than: false,
        greater_than: false,
        modifier: Some(VisibilityModifier::Cavok),
    });
    Applied
}

pub(crate) fn visibility_missing(_caps: &Captures<'_>, b: &mut ConditionsBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    b.visibility = Some(Visibility {
        distance: None,
        unit: DistanceUnit::Metres,
        less_than: false,
        greater_than: false,
        modifier: None,
    });
    Applied
}

fn ineq_flags(caps: &Captures<'_>) -> (bool, bool) {
    match caps.name("ineq").map(|m| m.as_str()) {
        Some("M") => (true, false),
        Some("P") => (false, true),
        _ => (false, false),
    }
}

pub(crate) fn visibility_sm_mixed(caps: &Captures<'_>, b: &mut ConditionsBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let (Ok(whole), Ok(num), Ok(den)) = (
        caps["whole"].parse(),
        caps["num"].parse(),
        caps["den"].parse(),
    ) else {
        return Skipped;
    };
    let (less_than, greater_than) = ineq_flags(caps);
    b.visibility = Some(Visibility {
        distance: Some(Distance::Mixed(whole, num, den)),
        unit: DistanceUnit::StatuteMiles,
        less_than,
        greater_than,
        modifier: None,
    });
    Applied
}

pub(crate) fn visibility_sm_fraction(caps: &Captures<'_>, b: &mut ConditionsBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let (Ok(num), Ok(den)) = (caps["num"].parse(), caps["den"].parse()) else {
        return Skipped;
    };
    let (less_than, greater_than) = ineq_flags(caps);
    b.visibility = Some(Visibility {
        distance: Some(Distance::Fraction(num, den)),
        unit: DistanceUnit::StatuteMiles,
        less_than,
        greater_than,
        modifier: None,
    });
    Applied
}

pub(crate) fn visibility_sm_whole(caps: &Captures<'_>, b: &mut ConditionsBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let Ok(whole) = caps["whole"].parse() else {
        return Skipped;
    };
    let (less_than, greater_than) = ineq_flags(caps);
    b.visibility = Some(Visibility {
        distance: Some(Distance::Whole(whole)),
        unit: DistanceUnit::StatuteMiles,
        less_than,
        greater_than,
        modifier: None,
    });
    Applied
}

pub(crate) fn visibility_meters(caps: &Captures<'_>, b: &mut ConditionsBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let Ok(value) = caps["value"].parse() else {
        return Skipped;
    };
    let (less_than, greater_than) = ineq_flags(caps);
    b.visibility = Some(Visibility {
        distance: Some(Distance::Whole(value)),
        unit: DistanceUnit::Metres,
        less_than,
        greater_than,
        modifier: caps.name("ndv").map(|_| VisibilityModifier::Ndv),
    });
    Applied
}

pub(crate) fn runway_visual_range(caps: &Captures<'_>, b: &mut ConditionsBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let runway = caps["runway"].to_string();
    let trend = match caps.name("trend").map(|m| m.as_str()) {
        Some("N") => Some(RvrTrend::NoChange),
        Some("U") => Some(RvrTrend::Upward),
        Some("D") => Some(RvrTrend::Downward),
        _ => None,
    };

    let value = if caps.name("rvrno").is_some() {
        RvrValue::NotAvailable
    } else if caps.name("clrd").is_some() {
        RvrValue::Cleared
    } else {
        let Some(low) = caps.name("low").and_then(|m| m.as_str().parse().ok()) else {
            return Skipped;
        };
        if let Some(high) = caps.name("high").and_then(|m| m.as_str().parse().ok()) {
            RvrValue::Variable { low, high }
        } else {
            let inequality = match caps.name("ineq1").map(|m| m.as_str()) {
                Some("M") => Some(Inequality::LessThan),
                Some("P") => Some(Inequality::GreaterThan),
                _ => None,
            };
            RvrValue::Single {
                feet: low,
                inequality,
            }
        }
    };

    b.rvr.push(RunwayVisualRange {
        runway,
        value,
        trend,
    });
    Applied
}

pub(crate) fn present_weather(caps: &Captures<'_>, b: &mut ConditionsBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let intensity = match (caps.name("intensity").map(|m| m.as_str()), caps.name("vicinity")) {
        (Some("-"), _) => Intensity::Light,
        (Some("+"), _) => Intensity::Heavy,
        (_, Some(_)) => Intensity::Vicinity,
        _ => Intensity::Moderate,
    };
    let descriptor = caps.name("descriptor").and_then(|m| match m.as_str() {
        "MI" => Some(Descriptor::Shallow),
        "PR" => Some(Descriptor::Partial),
        "BC" => Some(Descriptor::Patches),
        "DR" => Some(Descriptor::LowDrifting),
        "BL" => Some(Descriptor::Blowing),
        "SH" => Some(Descriptor::Showers),
        "TS" => Some(Descriptor::Thunderstorm),
        "FZ" => Some(Descriptor::Freezing),
        _ => None,
    });

    let phenomena = &caps["phenomena"];
    let mut precipitation = Vec::new();
    let mut obscuration = None;
    let mut other = None;
    for atom in split_phenomena(phenomena) {
        if let Some(p) = PrecipCode::from_code(atom) {
            precipitation.push(p);
        } else if let Some(o) = Obscuration::from_code(atom) {
            obscuration = Some(o);
        } else if let Some(o) = OtherPhenomenon::from_code(atom) {
            other = Some(o);
        } else {
            return Skipped;
        }
    }

    b.present_weather.push(PresentWeather {
        intensity,
        descriptor,
        precipitation,
        obscuration,
        other,
    });
    Applied
}

/// Splits a run of concatenated 2-letter phenomena codes, e.g. `RASN` into
/// `["RA", "SN"]`.
fn split_phenomena(s: &str) -> Vec<&str> {
    let bytes = s.as_bytes();
    (0..bytes.len()).step_by(2).map(|i| &s[i..i + 2]).collect()
}

pub(crate) fn sky_condition(caps: &Captures<'_>, b: &mut ConditionsBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let Some(coverage) = Coverage::from_code(&caps["coverage"]) else {
        return Skipped;
    };
    let height_raw = caps.name("height").map(|m| m.as_str());
    let height_ft = match height_raw {
        Some(h) if h != "///" => match h.parse::<u32>() {
            Ok(n) => Some(n * 100),
            Err(_) => return Skipped,
        },
        _ => None,
    };

    if coverage == Coverage::VerticalVisibility && height_ft.is_none() {
        // A `VV` group always carries a height in a well-formed report;
        // one that doesn't is an ElementDecodeSoft failure, not a
        // structural one — the rest of the report still decodes.
        return Skipped;
    }
    if coverage.is_no_cloud_sentinel() && height_ft.is_some() {
        return Skipped;
    }

    let cloud_type = caps
        .name("type")
        .map(|m| m.as_str())
        .filter(|t| *t != "///")
        .map(str::to_string);

    b.sky.push(SkyCondition {
        coverage,
        height_ft,
        cloud_type,
    });
    Applied
}

fn parse_temp_field(raw: &str) -> Option<Option<i32>> {
    match raw {
        "//" | "XX" | "MM" => Some(None),
        s => {
            let (neg, digits) = match s.strip_prefix('M') {
                Some(rest) => (true, rest),
                None => (false, s),
            };
            let v: i32 = digits.parse().ok()?;
            Some(Some(if neg { -v } else { v }))
        }
    }
}

pub(crate) fn temperature_dewpoint(caps: &Captures<'_>, b: &mut ConditionsBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let Some(temp_opt) = parse_temp_field(&caps["temp"]) else {
        return Skipped;
    };
    let Some(temp_c) = temp_opt else {
        return Skipped;
    };
    let dewpoint_c = match caps.name("dew") {
        Some(m) => match parse_temp_field(m.as_str()) {
            Some(d) => d,
            None => return Skipped,
        },
        None => None,
    };
    b.temperature = Some(Temperature { temp_c, dewpoint_c });
    Applied
}

pub(crate) fn altimeter(caps: &Captures<'_>, b: &mut ConditionsBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    if let Some(prefix) = caps.name("prefix") {
        let raw = &caps["value"];
        if raw.contains('/') {
            return Skipped;
        }
        let digits = raw.replace('O', "0");
        let Ok(n) = digits.parse::<f64>() else {
            return Skipped;
        };
        let pressure = match prefix.as_str() {
            "A" | "AA" => Pressure {
                value: n / 100.0,
                unit: PressureUnit::InchesOfMercury,
            },
            "Q" | "QNH" => Pressure {
                value: n,
                unit: PressureUnit::Hectopascals,
            },
            _ => return Skipped,
        };
        b.pressure = Some(pressure);
        Applied
    } else if let Some(bare) = caps.name("bare") {
        let digits = bare.as_str().replace('O', "0");
        let Ok(n) = digits.parse::<f64>() else {
            return Skipped;
        };
        b.pressure = Some(Pressure {
            value: n / 100.0,
            unit: PressureUnit::InchesOfMercury,
        });
        Applied
    } else if let Some(heur) = caps.name("heur") {
        let digits = heur.as_str().replace('O', "0");
        let Ok(raw) = digits.parse::<u32>() else {
            return Skipped;
        };
        // spec §4.4: no prefix, no INS suffix -> range heuristic.
        b.pressure = Some(if (2000..=3999).contains(&raw) {
            Pressure {
                value: f64::from(raw) / 100.0,
                unit: PressureUnit::InchesOfMercury,
            }
        } else {
            Pressure {
                value: f64::from(raw),
                unit: PressureUnit::Hectopascals,
            }
        });
        Applied
    } else {
        Skipped
    }
}

pub(crate) fn nosig(_caps: &Captures<'_>, b: &mut ConditionsBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    b.nosig = true;
    Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::main as pat;
    use chrono::NaiveDate;

    fn ctx() -> ParseContext {
        ParseContext::new(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap())
    }

    #[test]
    fn test_wind_calm_is_not_directed_zero() {
        let caps = pat::WIND.captures("00000KT ").unwrap();
        let mut b = ConditionsBuilder::default();
        assert_eq!(wind(&caps, &mut b, &mut ctx()), Applied);
        assert_eq!(b.wind, Some(Wind::Calm));
    }

    #[test]
    fn test_wind_gust_and_variable_direction() {
        let caps = pat::WIND.captures("28016G24KT 250V310 ").unwrap();
        let mut b = ConditionsBuilder::default();
        assert_eq!(wind(&caps, &mut b, &mut ctx()), Applied);
        assert_eq!(
            b.wind,
            Some(Wind::Directed { direction: 280, speed: 16, gust: Some(24), unit: WindUnit::Knots })
        );
    }

    #[test]
    fn test_wind_defaults_to_knots_when_unit_absent() {
        let caps = pat::WIND.captures("28016G24 ").unwrap();
        let mut b = ConditionsBuilder::default();
        assert_eq!(wind(&caps, &mut b, &mut ctx()), Applied);
        assert_eq!(
            b.wind,
            Some(Wind::Directed { direction: 280, speed: 16, gust: Some(24), unit: WindUnit::Knots })
        );
    }

    #[test]
    fn test_visibility_sm_fraction() {
        let caps = pat::VISIBILITY_SM_FRACTION.captures("1/4SM ").unwrap();
        let mut b = ConditionsBuilder::default();
        assert_eq!(visibility_sm_fraction(&caps, &mut b, &mut ctx()), Applied);
        assert_eq!(b.visibility.unwrap().distance, Some(Distance::Fraction(1, 4)));
    }

    #[test]
    fn test_runway_visual_range_variable() {
        let caps = pat::RUNWAY.captures("R04R/M0600V1200N ").unwrap();
        let mut b = ConditionsBuilder::default();
        assert_eq!(runway_visual_range(&caps, &mut b, &mut ctx()), Applied);
        assert_eq!(b.rvr[0].runway, "04R");
        assert_eq!(b.rvr[0].value, RvrValue::Variable { low: 600, high: 1200 });
        assert_eq!(b.rvr[0].trend, Some(RvrTrend::NoChange));
    }

    #[test]
    fn test_present_weather_splits_chained_phenomena() {
        let caps = pat::PRESENT_WEATHER.captures("+TSRA ").unwrap();
        let mut b = ConditionsBuilder::default();
        assert_eq!(present_weather(&caps, &mut b, &mut ctx()), Applied);
        assert_eq!(b.present_weather[0].intensity, Intensity::Heavy);
        assert_eq!(b.present_weather[0].descriptor, Some(Descriptor::Thunderstorm));
        assert_eq!(b.present_weather[0].precipitation, vec![PrecipCode::Rain]);
    }

    #[test]
    fn test_altimeter_inches_vs_hectopascals() {
        let caps = pat::ALTIMETER.captures("A3012 ").unwrap();
        let mut b = ConditionsBuilder::default();
        assert_eq!(altimeter(&caps, &mut b, &mut ctx()), Applied);
        assert_eq!(b.pressure.unwrap().unit, PressureUnit::InchesOfMercury);

        let caps = pat::ALTIMETER.captures("Q1013 ").unwrap();
        let mut b = ConditionsBuilder::default();
        assert_eq!(altimeter(&caps, &mut b, &mut ctx()), Applied);
        let pressure = b.pressure.unwrap();
        assert_eq!(pressure.unit, PressureUnit::Hectopascals);
        assert!((pressure.value - 1013.0).abs() < 1e-9);
    }

    #[test]
    fn test_altimeter_bare_value_uses_range_heuristic() {
        let caps = pat::ALTIMETER.captures("3012 ").unwrap();
        let mut b = ConditionsBuilder::default();
        assert_eq!(altimeter(&caps, &mut b, &mut ctx()), Applied);
        let pressure = b.pressure.unwrap();
        assert_eq!(pressure.unit, PressureUnit::InchesOfMercury);
        assert!((pressure.value - 30.12).abs() < 1e-9);

        let caps = pat::ALTIMETER.captures("1013 ").unwrap();
        let mut b = ConditionsBuilder::default();
        assert_eq!(altimeter(&caps, &mut b, &mut ctx()), Applied);
        let pressure = b.pressure.unwrap();
        assert_eq!(pressure.unit, PressureUnit::Hectopascals);
        assert!((pressure.value - 1013.0).abs() < 1e-9);
    }

    #[test]
    fn test_sky_condition_vertical_visibility_requires_height() {
        let caps = pat::SKY_CONDITION.captures("VV002 ").unwrap();
        let mut b = ConditionsBuilder::default();
        assert_eq!(sky_condition(&caps, &mut b, &mut ctx()), Applied);
        assert_eq!(b.sky[0].coverage, Coverage::VerticalVisibility);
        assert_eq!(b.sky[0].height_ft, Some(200));
    }
}
