//! Mutable accumulators the token engine fills in during a single parse.
//!
//! Spec §9 is explicit that only this layer is mutable — the pattern
//! library, registries and decoders are all immutable, process-wide
//! singletons (see [`crate::pattern`], [`crate::registry`]). Every builder
//! here is scoped to one call into [`crate::Dispatcher`] and thrown away
//! once its `finish`/`into_*` method runs.

use chrono::NaiveDateTime;

use crate::engine::ResidueSink;
use crate::model::{
    AutomatedStationType, ChangeIndicator, CloudOktaObservation, Conditions, ForecastPeriod,
    MaintenanceIndicator, ObscurationLayer, PeakWind, PrecipAmount, PresentWeather, Pressure,
    PressureChangeRapidly, PressureTendency, Remarks, RunwayVisualRange, SecondSiteCeiling,
    SectorVisibility, SkyCondition, Temperature, TemperatureForecast, ThunderstormCloudLocation,
    VariableCeiling, VariableVisibility, Visibility, WeatherEvent, Wind, WindShift,
};

/// Accumulates the elements shared by a METAR body and a TAF period.
///
/// `rvr` and `nosig` live here rather than on [`Conditions`] itself because
/// they only ever surface on a METAR (spec §3); a TAF period built from
/// this same accumulator logs and drops them instead of carrying them
/// forward (spec §9's "just log" composition note).
#[derive(Default)]
pub(crate) struct ConditionsBuilder {
    pub wind: Option<Wind>,
    pub visibility: Option<Visibility>,
    pub temperature: Option<Temperature>,
    pub pressure: Option<Pressure>,
    pub present_weather: Vec<PresentWeather>,
    pub sky: Vec<SkyCondition>,
    pub rvr: Vec<RunwayVisualRange>,
    pub nosig: bool,
    /// Free-standing tokens the `MAIN` registry's `UNPARSED` catch-all
    /// picked up, in the order they appeared.
    pub unparsed: Vec<String>,
}

impl ConditionsBuilder {
    pub fn finish(self) -> Conditions {
        Conditions {
            wind: self.wind,
            visibility: self.visibility,
            temperature: self.temperature,
            pressure: self.pressure,
            present_weather: self.present_weather,
            sky: self.sky,
        }
    }

    /// Drops any RVR readings picked up while decoding this builder as a
    /// TAF period, after logging each one.
    pub fn log_and_drop_rvr(&mut self) {
        for rvr in self.rvr.drain(..) {
            log::debug!("RVR group {rvr} retained only on METAR reports; dropping from TAF period");
        }
    }
}

impl ResidueSink for ConditionsBuilder {
    fn push_unparsed(&mut self, token: String) {
        self.unparsed.push(token);
    }
}

/// Accumulates the remarks section of a METAR.
#[derive(Default)]
pub(crate) struct RemarksBuilder {
    pub automated_station_type: Option<AutomatedStationType>,
    pub sea_level_pressure_hpa: Option<f64>,
    pub precise_temperature_c: Option<f64>,
    pub precise_dewpoint_c: Option<f64>,
    pub max_temp_6hr_c: Option<f64>,
    pub min_temp_6hr_c: Option<f64>,
    pub max_temp_24hr_c: Option<f64>,
    pub min_temp_24hr_c: Option<f64>,
    pub peak_wind: Option<PeakWind>,
    pub wind_shift: Option<WindShift>,
    pub variable_visibility: Option<VariableVisibility>,
    pub sector_visibility: Vec<SectorVisibility>,
    pub variable_ceiling: Option<VariableCeiling>,
    pub second_site_ceiling: Option<SecondSiteCeiling>,
    pub obscurations: Vec<ObscurationLayer>,
    pub thunderstorm_cloud_locations: Vec<ThunderstormCloudLocation>,
    pub cloud_okta_observations: Vec<CloudOktaObservation>,
    pub lightning: Option<String>,
    pub pressure_change_rapidly: Option<PressureChangeRapidly>,
    pub precip_1hr_in: Option<PrecipAmount>,
    pub precip_3hr_in: Option<PrecipAmount>,
    pub precip_6hr_in: Option<PrecipAmount>,
    pub precip_24hr_in: Option<PrecipAmount>,
    pub pressure_tendency: Option<PressureTendency>,
    pub hail_size_in: Option<f64>,
    pub weather_events: Vec<WeatherEvent>,
    pub maintenance_indicators: Vec<MaintenanceIndicator>,
    pub maintenance_required: bool,
    pub unparsed: Vec<String>,
}

impl RemarksBuilder {
    pub fn finish(self) -> Remarks {
        Remarks {
            automated_station_type: self.automated_station_type,
            sea_level_pressure_hpa: self.sea_level_pressure_hpa,
            precise_temperature_c: self.precise_temperature_c,
            precise_dewpoint_c: self.precise_dewpoint_c,
            max_temp_6hr_c: self.max_temp_6hr_c,
            min_temp_6hr_c: self.min_temp_6hr_c,
            max_temp_24hr_c: self.max_temp_24hr_c,
            min_temp_24hr_c: self.min_temp_24hr_c,
            peak_wind: self.peak_wind,
            wind_shift: self.wind_shift,
            variable_visibility: self.variable_visibility,
            sector_visibility: self.sector_visibility,
            variable_ceiling: self.variable_ceiling,
            second_site_ceiling: self.second_site_ceiling,
            obscurations: self.obscurations,
            thunderstorm_cloud_locations: self.thunderstorm_cloud_locations,
            cloud_okta_observations: self.cloud_okta_observations,
            lightning: self.lightning,
            pressure_change_rapidly: self.pressure_change_rapidly,
            precip_1hr_in: self.precip_1hr_in,
            precip_3hr_in: self.precip_3hr_in,
            precip_6hr_in: self.precip_6hr_in,
            precip_24hr_in: self.precip_24hr_in,
            pressure_tendency: self.pressure_tendency,
            hail_size_in: self.hail_size_in,
            weather_events: self.weather_events,
            maintenance_indicators: self.maintenance_indicators,
            maintenance_required: self.maintenance_required,
            free_text: self.unparsed.join(" "),
        }
    }
}

impl ResidueSink for RemarksBuilder {
    fn push_unparsed(&mut self, token: String) {
        self.unparsed.push(token);
    }
}

/// One change group's worth of conditions, still being filled in.
pub(crate) struct PeriodInProgress {
    pub change: ChangeIndicator,
    pub from_time: Option<NaiveDateTime>,
    pub period: Option<(NaiveDateTime, NaiveDateTime)>,
    pub probability: Option<u8>,
    pub conditions: ConditionsBuilder,
}

impl PeriodInProgress {
    fn base(validity: (NaiveDateTime, NaiveDateTime)) -> Self {
        Self {
            change: ChangeIndicator::Base,
            from_time: None,
            period: Some(validity),
            probability: None,
            conditions: ConditionsBuilder::default(),
        }
    }

    pub fn new(
        change: ChangeIndicator,
        from_time: Option<NaiveDateTime>,
        period: Option<(NaiveDateTime, NaiveDateTime)>,
        probability: Option<u8>,
    ) -> Self {
        Self {
            change,
            from_time,
            period,
            probability,
            conditions: ConditionsBuilder::default(),
        }
    }

    fn finish(mut self) -> ForecastPeriod {
        self.conditions.log_and_drop_rvr();
        ForecastPeriod {
            change: self.change,
            from_time: self.from_time,
            period: self.period,
            probability: self.probability,
            conditions: self.conditions.finish(),
        }
    }
}

/// Accumulates a TAF's change groups as the `TAF_GROUPS` registry walks
/// the residual text, one period at a time.
pub(crate) struct TafBuilder {
    pub completed: Vec<ForecastPeriod>,
    pub current: PeriodInProgress,
    /// The header's validity window, kept around so `FM`/`BECMG`/`TEMPO`
    /// change times can be resolved against it (spec §4.4's month/year
    /// rollover rule). May be overwritten by a [`VALIDITY_PERIOD`] re-issue
    /// group later in the report.
    ///
    /// [`VALIDITY_PERIOD`]: crate::pattern::taf::VALIDITY_PERIOD
    pub validity: (NaiveDateTime, NaiveDateTime),
    pub max_temperature: Option<TemperatureForecast>,
    pub min_temperature: Option<TemperatureForecast>,
    pub unparsed: Vec<String>,
}

impl TafBuilder {
    pub fn new(validity: (NaiveDateTime, NaiveDateTime)) -> Self {
        Self {
            completed: Vec::new(),
            current: PeriodInProgress::base(validity),
            validity,
            max_temperature: None,
            min_temperature: None,
            unparsed: Vec::new(),
        }
    }

    /// Closes out the period in progress and opens a new one — called by
    /// every `BECMG`/`TEMPO`/`PROBnn`/`FM` handler before it starts filling
    /// in the new period's conditions.
    pub fn start_period(&mut self, next: PeriodInProgress) {
        let finished = std::mem::replace(&mut self.current, next);
        self.completed.push(finished.finish());
    }

    pub fn finish(mut self) -> (Vec<ForecastPeriod>, String) {
        let last = self.current.finish();
        self.completed.push(last);
        (self.completed, self.unparsed.join(" "))
    }
}

impl ResidueSink for TafBuilder {
    fn push_unparsed(&mut self, token: String) {
        self.unparsed.push(token);
    }
}
