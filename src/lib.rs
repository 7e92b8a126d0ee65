#![deny(missing_docs)]

//! # NOAA METAR/SPECI/TAF aviation weather report decoder
//!
//! Decodes raw NOAA-format surface observations (`METAR`/`SPECI`) and
//! terminal aerodrome forecasts (`TAF`) into typed Rust values.
//!
//! The decoder is built around a token-consuming regex dispatch engine: a
//! fixed, ordered list of `(pattern, handler)` pairs per report section
//! (main body, remarks, TAF change groups) is scanned top to bottom against
//! whatever text is left, consuming the first match and restarting from the
//! top, until nothing is left. Every list ends in a catch-all that retains
//! anything it doesn't recognize as free text instead of discarding it, so
//! a decode never silently drops part of a report.
//!
//! ## Quick usage
//!
//! ```rust
//! use avwx_decoder::Dispatcher;
//!
//! let raw = "KJFK 281851Z 18015G25KT 10SM FEW250 24/18 A3000 RMK AO2 SLP159";
//! let dispatcher = Dispatcher::new();
//! let report = dispatcher.parse_auto(raw, None).unwrap();
//! println!("{:#?}", report);
//! ```
//!
//! ## A note on failure
//!
//! Only two things make [`parse`](Dispatcher::parse) fail outright: input
//! that doesn't begin with a recognizable METAR/TAF prefix at all, or a
//! header missing a required element (station id, observation time, TAF
//! validity period). Everything else a real-world report can throw at the
//! decoder — an unfamiliar remark code, a malformed digit group, a station
//! type this crate has never seen — is absorbed: the offending token is
//! logged and kept verbatim as free text, and the rest of the report still
//! decodes normally.

mod assemble;
mod builder;
mod context;
mod decode;
mod dispatcher;
mod engine;
mod error;
mod model;
mod pattern;
mod registry;

pub use dispatcher::{Dispatcher, MetarParser, ReportParser, TafParser};
pub use error::{ParseFailure, RenderedParseFailure};
pub use model::{
    AutomatedStationType, ChangeIndicator, CloudOktaObservation, Conditions, Coverage,
    Descriptor, Distance, DistanceUnit, ForecastPeriod, Inequality, Intensity,
    MaintenanceIndicator, MetarReport, Modifier, Obscuration, ObscurationLayer, OtherPhenomenon,
    PeakWind, PrecipAmount, PrecipCode, PresentWeather, Pressure, PressureChangeRapidly,
    PressureTendency, PressureTendencyCode, PressureUnit, Remarks, Report, ReportType,
    RunwayVisualRange, RvrTrend, RvrValue, SecondSiteCeiling, SectorVisibility, SkyCondition,
    TafReport, Temperature, TemperatureForecast, ThunderstormCloudLocation, VariableCeiling,
    VariableVisibility, Visibility, VisibilityModifier, WeatherEvent, Wind, WindShift, WindUnit,
};

/// A report together with the ingestion metadata a feed consumer typically
/// wants alongside it: which station it came from, when it was valid, and
/// the raw text it was decoded from.
///
/// Gated behind the `serde` feature (on by default) since its only purpose
/// is to give a decoded report a stable, flat shape for serialization into
/// a downstream store or message bus — nothing in the decoder itself
/// consumes it.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct IngestionEnvelope {
    /// 4-character ICAO station identifier.
    pub station: String,
    /// Observation time, for a METAR/SPECI envelope.
    pub observation_time: Option<chrono::NaiveDateTime>,
    /// Issue time, for a TAF envelope.
    pub issue_time: Option<chrono::NaiveDateTime>,
    /// `METAR`, `SPECI`, or `TAF`.
    pub report_type: ReportType,
    /// The raw report text this envelope was built from.
    pub raw_text: String,
    /// The decoded report.
    pub parsed: Report,
}

#[cfg(feature = "serde")]
impl IngestionEnvelope {
    /// Builds an envelope from an already-decoded [`Report`].
    #[must_use]
    pub fn from_report(parsed: Report) -> Self {
        let station = parsed.station().to_string();
        let raw_text = parsed.raw_text().to_string();
        let (observation_time, issue_time, report_type) = match &parsed {
            Report::Metar(m) => (Some(m.observation_time), None, m.report_type),
            Report::Taf(t) => (None, Some(t.issue_time), t.report_type),
        };
        Self {
            station,
            observation_time,
            issue_time,
            report_type,
            raw_text,
            parsed,
        }
    }
}
