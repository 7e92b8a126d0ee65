use chrono::NaiveDateTime;

use super::{Conditions, ForecastPeriod, Remarks, RunwayVisualRange, TemperatureForecast};

/// A fully decoded report: either a METAR/SPECI surface observation or a
/// TAF terminal forecast (spec §3).
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Report {
    /// A METAR or SPECI surface observation.
    Metar(MetarReport),
    /// A TAF terminal aerodrome forecast.
    Taf(TafReport),
}

impl Report {
    /// The station this report was issued for, regardless of variant.
    #[must_use]
    pub fn station(&self) -> &str {
        match self {
            Report::Metar(m) => &m.station,
            Report::Taf(t) => &t.station,
        }
    }

    /// The raw text this report was decoded from.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        match self {
            Report::Metar(m) => &m.raw_text,
            Report::Taf(t) => &t.raw_text,
        }
    }
}

/// A decoded METAR/SPECI surface observation.
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetarReport {
    /// 4-character ICAO station identifier.
    pub station: String,
    /// Observation time, UTC.
    pub observation_time: NaiveDateTime,
    /// `METAR` or `SPECI`.
    pub report_type: ReportType,
    /// Report modifier (`AUTO`, `COR`, ...), if any.
    pub modifier: Option<Modifier>,
    /// The raw report text, as received.
    pub raw_text: String,
    /// Main-body meteorological elements.
    pub conditions: Conditions,
    /// Decoded remarks section, if the report had one.
    pub remarks: Option<Remarks>,
    /// `true` if `NOSIG` (no significant change expected) was present.
    pub nosig: bool,
    /// Runway visual range entries, in the order they appeared.
    pub rvr: Vec<RunwayVisualRange>,
}

/// A decoded TAF terminal aerodrome forecast.
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TafReport {
    /// 4-character ICAO station identifier.
    pub station: String,
    /// Issue time, UTC.
    pub issue_time: NaiveDateTime,
    /// Validity window, `[from, to]`, UTC.
    pub validity: (NaiveDateTime, NaiveDateTime),
    /// Always `ReportType::Taf`.
    pub report_type: ReportType,
    /// Report modifier (`AMD`, `COR`, ...), if any.
    pub modifier: Option<Modifier>,
    /// The raw report text, as received.
    pub raw_text: String,
    /// Forecast periods, first element always `ChangeIndicator::Base`.
    pub periods: Vec<ForecastPeriod>,
    /// `TX`: forecast maximum temperature.
    pub max_temperature: Option<TemperatureForecast>,
    /// `TN`: forecast minimum temperature.
    pub min_temperature: Option<TemperatureForecast>,
    /// Whatever text the TAF engine could not match to any pattern.
    pub unparsed: String,
}

/// The two report kinds this decoder recognizes (spec §6's
/// `source_type()` discriminator, expressed as a type instead of a
/// string).
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReportType {
    /// Routine surface observation.
    Metar,
    /// Special (unscheduled) surface observation.
    Speci,
    /// Terminal aerodrome forecast.
    Taf,
}

/// Report modifier, shared between METAR and TAF headers.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modifier {
    /// Amended forecast (TAF).
    Amended,
    /// Automated observation, no human oversight (METAR).
    Auto,
    /// Corrected report. `CCA`-`CCG` are folded into this variant; which
    /// letter was used is not retained (spec doesn't ask for it).
    Corrected,
    /// Routine delayed observation.
    Retarded,
    /// Test message.
    Test,
    /// No observation available.
    Nil,
    /// Observation unavailable ("FINO" in the legacy coding).
    Fino,
}

impl Modifier {
    pub(crate) fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "AMD" => Modifier::Amended,
            "AUTO" => Modifier::Auto,
            "COR" | "CORR" => Modifier::Corrected,
            c if c.len() == 3 && c.starts_with("CC") => Modifier::Corrected,
            "RTD" => Modifier::Retarded,
            "TEST" => Modifier::Test,
            "NIL" => Modifier::Nil,
            "FINO" => Modifier::Fino,
            _ => return None,
        })
    }
}
