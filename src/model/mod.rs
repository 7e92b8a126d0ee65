//! The typed domain values a decoded report is made of (spec §3).
//!
//! Every value here is built once by a decoder and, once the report
//! assembler finalizes a [`crate::Report`], never mutated again — builders
//! (see [`crate::builder`]) are the only mutable half of this picture, and
//! they are scoped to a single parse call.

mod conditions;
mod pressure;
mod remarks;
mod report;
mod rvr;
mod sky;
mod taf;
mod temperature;
mod visibility;
mod weather;
mod wind;

pub use conditions::Conditions;
pub use pressure::{Pressure, PressureUnit};
pub use remarks::{
    AutomatedStationType, CloudOktaObservation, MaintenanceIndicator, ObscurationLayer,
    PeakWind, PrecipAmount, PressureChangeRapidly, PressureTendency, PressureTendencyCode,
    Remarks, SecondSiteCeiling, SectorVisibility, ThunderstormCloudLocation, VariableCeiling,
    VariableVisibility, WeatherEvent, WindShift,
};
pub use report::{Modifier, Report, ReportType};
pub use rvr::{Inequality, RvrTrend, RvrValue, RunwayVisualRange};
pub use sky::{Coverage, SkyCondition};
pub use taf::{ChangeIndicator, ForecastPeriod, TemperatureForecast};
pub use temperature::Temperature;
pub use visibility::{Distance, DistanceUnit, Visibility, VisibilityModifier};
pub use weather::{Descriptor, Intensity, Obscuration, OtherPhenomenon, PrecipCode, PresentWeather};
pub use wind::{Wind, WindUnit};
