use std::fmt;

/// Runway Visual Range for one runway.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunwayVisualRange {
    /// Runway designator, e.g. `24L`.
    pub runway: String,
    /// The reported value, or the `RVRNO`/cleared sentinels.
    pub value: RvrValue,
    /// Trend over the last 10 minutes.
    pub trend: Option<RvrTrend>,
}

impl fmt::Display for RunwayVisualRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}/", self.runway)?;
        self.value.fmt(f)?;
        if let Some(t) = self.trend {
            t.fmt(f)?;
        }
        Ok(())
    }
}

/// A single RVR reading, in feet, with its inequality prefix, or one of
/// the two special states.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RvrValue {
    /// A single value, optionally bounded by `M`/`P`.
    Single {
        /// Distance in feet.
        feet: u32,
        /// `M` (less than) / `P` (greater than) prefix, if present.
        inequality: Option<Inequality>,
    },
    /// A variable range between two values (`NNNNVNNNN`).
    Variable {
        /// Lower bound, in feet.
        low: u32,
        /// Upper bound, in feet.
        high: u32,
    },
    /// `RVRNO`: the sensor is not available.
    NotAvailable,
    /// `CLRD`: RVR has cleared above reportable limits.
    Cleared,
}

impl fmt::Display for RvrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RvrValue::Single { feet, inequality } => {
                if let Some(i) = inequality {
                    i.fmt(f)?;
                }
                write!(f, "{feet:04}FT")
            }
            RvrValue::Variable { low, high } => write!(f, "{low:04}V{high:04}FT"),
            RvrValue::NotAvailable => f.write_str("RVRNO"),
            RvrValue::Cleared => f.write_str("CLRD"),
        }
    }
}

/// `M`/`P` inequality prefix on an RVR reading.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Inequality {
    /// `M` — less than the stated value.
    LessThan,
    /// `P` — greater than the stated value.
    GreaterThan,
}

impl fmt::Display for Inequality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Inequality::LessThan => "M",
            Inequality::GreaterThan => "P",
        })
    }
}

/// RVR trend over the last 10 minutes.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RvrTrend {
    /// `N` — no change.
    NoChange,
    /// `U` — upward (improving).
    Upward,
    /// `D` — downward (worsening).
    Downward,
}

impl fmt::Display for RvrTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RvrTrend::NoChange => "N",
            RvrTrend::Upward => "U",
            RvrTrend::Downward => "D",
        })
    }
}
