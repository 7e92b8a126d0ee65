use std::fmt;

/// The remarks section of a METAR (spec §3's `Remarks` block, Federal
/// Meteorological Handbook No. 1 coding).
#[derive(PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Remarks {
    /// `AO1`/`AO2`: automated station without/with a precipitation
    /// discriminator.
    pub automated_station_type: Option<AutomatedStationType>,
    /// `SLPppp`: sea-level pressure in hPa. `None` for `SLPNO`.
    pub sea_level_pressure_hpa: Option<f64>,
    /// `TsnTTTsnTTT`: precise hourly temperature/dewpoint, tenths of a
    /// degree Celsius.
    pub precise_temperature_c: Option<f64>,
    /// Dewpoint half of the precise temperature group.
    pub precise_dewpoint_c: Option<f64>,
    /// `1snTTT`/`2snTTT`: 6-hour maximum temperature, °C.
    pub max_temp_6hr_c: Option<f64>,
    /// 6-hour minimum temperature, °C.
    pub min_temp_6hr_c: Option<f64>,
    /// `4snTTTsnTTT`: 24-hour maximum temperature, °C.
    pub max_temp_24hr_c: Option<f64>,
    /// 24-hour minimum temperature, °C.
    pub min_temp_24hr_c: Option<f64>,
    /// `PK WND dddff/(hh)mm`: peak wind direction/speed and time.
    pub peak_wind: Option<PeakWind>,
    /// `WSHFT (hh)mm [FROPA]`: wind-shift time and whether it was a
    /// frontal passage.
    pub wind_shift: Option<WindShift>,
    /// Variable visibility: minimum/maximum statute miles and, if
    /// reported, the direction the reduced value applies to.
    pub variable_visibility: Option<VariableVisibility>,
    /// Tower- or surface-observed visibility, when it differs from the
    /// body's automated value.
    pub sector_visibility: Vec<SectorVisibility>,
    /// `CIG nnnVnnn`: ceiling varying between two heights (hundreds of
    /// feet).
    pub variable_ceiling: Option<VariableCeiling>,
    /// `CIG nnn RWYnn`: ceiling measured at a second site (a different
    /// runway than the primary sensor).
    pub second_site_ceiling: Option<SecondSiteCeiling>,
    /// Layers of obscuration reported in the remarks (`FU SCT008` etc.).
    pub obscurations: Vec<ObscurationLayer>,
    /// Thunderstorm/cumulonimbus locations (`TS SW`, `CB N`, ...).
    pub thunderstorm_cloud_locations: Vec<ThunderstormCloudLocation>,
    /// Cloud-type/okta observations (`8/578` style WMO cloud groups).
    pub cloud_okta_observations: Vec<CloudOktaObservation>,
    /// `LTG ...`: lightning location/direction.
    pub lightning: Option<String>,
    /// `PRESFR`/`PRESRR`: pressure falling/rising rapidly.
    pub pressure_change_rapidly: Option<PressureChangeRapidly>,
    /// 1-hour precipitation amount, hundredths of an inch. `None` means
    /// not reported; trace is represented separately.
    pub precip_1hr_in: Option<PrecipAmount>,
    /// 3-hour precipitation amount.
    pub precip_3hr_in: Option<PrecipAmount>,
    /// 6-hour precipitation amount (shares the `6` leader with the 3-hour
    /// group depending on report hour; see spec §4.4).
    pub precip_6hr_in: Option<PrecipAmount>,
    /// 24-hour precipitation amount.
    pub precip_24hr_in: Option<PrecipAmount>,
    /// `5appp`: pressure tendency over the last 3 hours.
    pub pressure_tendency: Option<PressureTendency>,
    /// Hail size, in inches.
    pub hail_size_in: Option<f64>,
    /// Ordered weather begin/end events (`RAB1159E1240`, `SNB30`, ...).
    pub weather_events: Vec<WeatherEvent>,
    /// Automated-maintenance indicators (`RVRNO`, `PWINO`, `$`, ...).
    pub maintenance_indicators: Vec<MaintenanceIndicator>,
    /// `true` once a standalone `$` token has been seen; kept separate
    /// from `maintenance_indicators` because `$` both sets this flag
    /// *and* appends its own sentinel indicator (spec §4.4).
    pub maintenance_required: bool,
    /// Whatever text the remarks engine could not match to any pattern,
    /// trimmed, in original order. Never silently discarded (spec §4.4,
    /// §7 `ResidualUnparsed`).
    pub free_text: String,
}

/// `AO1`/`AO2` automated-station type.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutomatedStationType {
    /// Without precipitation discriminator.
    Ao1,
    /// With precipitation discriminator.
    Ao2,
}

/// `PK WND dddff/(hh)mm`.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakWind {
    /// Direction in whole degrees.
    pub direction: u32,
    /// Speed in knots.
    pub speed: u32,
    /// Hour the peak occurred, if given (`hh` is optional in the wire
    /// format; absent means "this hour").
    pub hour: Option<u32>,
    /// Minute the peak occurred.
    pub minute: u32,
}

/// `WSHFT (hh)mm [FROPA]`.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindShift {
    /// Hour the shift began, if given.
    pub hour: Option<u32>,
    /// Minute the shift began.
    pub minute: u32,
    /// `true` if the shift was associated with a frontal passage.
    pub frontal_passage: bool,
}

/// Variable/minimum/maximum visibility remark.
#[derive(PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableVisibility {
    /// Minimum visibility, statute miles.
    pub min_sm: f64,
    /// Maximum visibility, statute miles.
    pub max_sm: f64,
    /// Direction the minimum applies to, if given.
    pub direction: Option<u32>,
}

/// Tower or surface visibility, when reported separately in remarks.
#[derive(PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectorVisibility {
    /// `true` for tower visibility, `false` for surface visibility.
    pub is_tower: bool,
    /// Visibility, statute miles.
    pub visibility_sm: f64,
}

/// `CIG nnnVnnn` variable ceiling, in hundreds of feet.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableCeiling {
    /// Minimum ceiling, hundreds of feet.
    pub min_hundreds_ft: u32,
    /// Maximum ceiling, hundreds of feet.
    pub max_hundreds_ft: u32,
}

/// `CIG nnn RWYnn` second-site ceiling.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecondSiteCeiling {
    /// Ceiling height, hundreds of feet.
    pub height_hundreds_ft: u32,
    /// Runway (or other site) the measurement applies to.
    pub runway: String,
}

/// An obscuration layer reported in remarks (distinct from the main
/// body's sky condition groups).
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObscurationLayer {
    /// Obscuration phenomenon code, e.g. `FU`, `HZ`.
    pub phenomenon: String,
    /// Amount, e.g. `SCT`, `BKN`.
    pub amount: String,
    /// Height, hundreds of feet.
    pub height_hundreds_ft: u32,
}

/// `TS`/`CB` location remark (`TS SW MOV NE`, `CB N`, ...).
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThunderstormCloudLocation {
    /// `true` for a thunderstorm remark, `false` for a cumulonimbus/towering-
    /// cumulus cloud location remark.
    pub is_thunderstorm: bool,
    /// Compass direction(s) named.
    pub directions: Vec<String>,
    /// Movement direction, if given (`MOV NE`).
    pub moving_toward: Option<String>,
}

/// WMO cloud-type/okta observation group.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloudOktaObservation {
    /// Low cloud type code, WMO code table 0513.
    pub low_type: u8,
    /// Low cloud amount, oktas.
    pub low_oktas: u8,
    /// Mid cloud type code, WMO code table 0515.
    pub mid_type: u8,
    /// High cloud type code, WMO code table 0509.
    pub high_type: u8,
}

/// `PRESFR`/`PRESRR`.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureChangeRapidly {
    /// Pressure falling rapidly.
    Falling,
    /// Pressure rising rapidly.
    Rising,
}

/// A precipitation amount, with the trace sentinel kept distinct from
/// "zero" and from "not reported".
#[derive(PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrecipAmount {
    /// A measured amount, hundredths of an inch.
    Measured(f64),
    /// Trace amount (`////`/`/////` in the precipitation group).
    Trace,
}

/// `5aPPP` pressure tendency.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PressureTendency {
    /// WMO code table 0200 tendency code, `0..=8`.
    pub code: PressureTendencyCode,
    /// Change over the last 3 hours, tenths of hPa. Always non-negative;
    /// `code` carries the sign/shape of the change.
    pub change_tenths_hpa: u32,
}

/// WMO code table 0200 pressure-tendency characteristic, `0..=8`.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PressureTendencyCode(pub u8);

impl fmt::Display for PressureTendencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single weather begin/end event parsed out of a chained remark like
/// `FZRAB1159E1240SNB30`.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherEvent {
    /// The weather code this event applies to (e.g. `FZRA`, `SN`).
    pub code: String,
    /// When the phenomenon began, `HHMM` (hour optional in the wire
    /// format — `None` hour means "this hour").
    pub begin: Option<(Option<u32>, u32)>,
    /// When the phenomenon ended, same shape as `begin`.
    pub end: Option<(Option<u32>, u32)>,
}

/// Automated-maintenance / sensor-status indicator.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaintenanceIndicator {
    /// RVR equipment not available.
    RvrNotAvailable,
    /// Present-weather identifier sensor not available.
    PresentWeatherNotAvailable,
    /// Precipitation identifier sensor not available.
    PrecipNotAvailable,
    /// Freezing-rain sensor not available.
    FreezingRainNotAvailable,
    /// Thunderstorm sensor not available.
    ThunderstormNotAvailable,
    /// Visibility sensor not available, optionally at a named location.
    VisibilityNotAvailable(Option<String>),
    /// Ceiling sensor not available, optionally at a named location.
    CeilingNotAvailable(Option<String>),
    /// `$`: maintenance is required on the automated station.
    MaintenanceRequired,
}
