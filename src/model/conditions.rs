use super::{Pressure, PresentWeather, SkyCondition, Temperature, Visibility, Wind};

/// The meteorological elements shared by a METAR body and every TAF
/// forecast period (spec §3's `Conditions` building block, and §9's note
/// that the METAR/TAF assemblers share this set of handlers rather than
/// inheriting from a common base class).
///
/// Runway visual range is deliberately not a field here: spec §3 keeps it
/// on `Report::Metar` directly rather than on `Conditions`, and §9 notes
/// the TAF-specific RVR behavior is "just log" — the pattern can still
/// match inside a TAF period body, but the composition choice is to not
/// carry it forward into the period's `Conditions`.
#[derive(PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conditions {
    /// Surface wind, if reported for this segment.
    pub wind: Option<Wind>,
    /// Prevailing visibility, if reported.
    pub visibility: Option<Visibility>,
    /// Temperature/dewpoint. Only ever populated in a METAR body; TAF
    /// periods never carry one (the grammar has no slot for it).
    pub temperature: Option<Temperature>,
    /// Altimeter setting. Only populated in a METAR body.
    pub pressure: Option<Pressure>,
    /// Present weather groups, in the order they appeared.
    pub present_weather: Vec<PresentWeather>,
    /// Sky condition layers, in the order they appeared.
    pub sky: Vec<SkyCondition>,
}
