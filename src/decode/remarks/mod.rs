//! Element decoders for the `REMARKS` registry (spec §4.4).

pub(crate) mod precip;
pub(crate) mod pressure;
pub(crate) mod sky;
pub(crate) mod station_type;
pub(crate) mod temperature;
pub(crate) mod visibility_ceiling;
pub(crate) mod weather_event;
pub(crate) mod wind;

/// Parses a statute-mile distance written as either a whole number
/// (`"2"`) or a simple `n/d` fraction (`"1/2"`).
pub(crate) fn parse_sm(s: &str) -> Option<f64> {
    match s.split_once('/') {
        Some((n, d)) => {
            let n: f64 = n.parse().ok()?;
            let d: f64 = d.parse().ok()?;
            (d != 0.0).then_some(n / d)
        }
        None => s.parse().ok(),
    }
}
