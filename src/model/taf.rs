use chrono::NaiveDateTime;

use super::Conditions;

/// One forecast period within a TAF: either the base forecast or a change
/// group (spec §3, §4.5).
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastPeriod {
    /// What kind of period this is.
    pub change: ChangeIndicator,
    /// Absolute time this change takes effect (`FM` only).
    pub from_time: Option<NaiveDateTime>,
    /// Period this group covers (`TEMPO`/`BECMG`/`PROB`/the base period).
    pub period: Option<(NaiveDateTime, NaiveDateTime)>,
    /// Probability, for `PROB` groups.
    pub probability: Option<u8>,
    /// The forecast conditions for this period.
    pub conditions: Conditions,
}

/// TAF change-group indicator.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChangeIndicator {
    /// The initial forecast covering the whole validity period.
    Base,
    /// `FM`: an abrupt, permanent change from the given time.
    From,
    /// `TEMPO`: a temporary fluctuation expected during the period.
    Tempo,
    /// `BECMG`: a gradual, permanent change expected during the period.
    Becmg,
    /// `PROB30`/`PROB40`: a probabilistic change.
    Prob,
}

/// A `TX`/`TN` extreme-temperature forecast, reported separately from the
/// forecast periods.
#[derive(PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureForecast {
    /// Forecast temperature, whole degrees Celsius.
    pub temp_c: i32,
    /// The instant this extreme is forecast for.
    pub at: NaiveDateTime,
}
