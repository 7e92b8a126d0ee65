use std::fmt;

/// Altimeter setting (QNH) from the main body.
#[derive(PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pressure {
    /// The pressure value, in `unit`.
    pub value: f64,
    /// Unit `value` is expressed in.
    pub unit: PressureUnit,
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            PressureUnit::InchesOfMercury => write!(f, "A{:04.0}", self.value * 100.0),
            PressureUnit::Hectopascals => write!(f, "Q{:04.0}", self.value),
        }
    }
}

/// Unit a [`Pressure`] is expressed in.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureUnit {
    /// Inches of mercury, US convention (`A` prefix).
    InchesOfMercury,
    /// Hectopascals, ICAO/European convention (`Q` prefix).
    Hectopascals,
}
