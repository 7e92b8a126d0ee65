use std::fmt;

/// Surface wind, as decoded from the main body's wind group or a TAF
/// change group.
///
/// `00000KT` decodes to [`Wind::Calm`], never `Directed(0, 0, ...)` — see
/// spec §8 property 6.
#[derive(PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Wind {
    /// Dead calm: direction and speed both zero.
    Calm,
    /// Variable direction (`VRB`), no fixed heading.
    Variable {
        /// Wind speed.
        speed: u32,
        /// Gust speed, if reported.
        gust: Option<u32>,
        /// The unit `speed`/`gust` are expressed in.
        unit: WindUnit,
    },
    /// A fixed heading with speed.
    Directed {
        /// Direction in whole degrees, `0..=360`.
        direction: u32,
        /// Wind speed.
        speed: u32,
        /// Gust speed, if reported. Should exceed `speed` but this is not
        /// enforced as a hard error (spec §4.4): a gust not exceeding the
        /// mean speed is logged, not rejected.
        gust: Option<u32>,
        /// The unit `speed`/`gust` are expressed in.
        unit: WindUnit,
    },
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wind::Calm => write!(f, "00000KT"),
            Wind::Variable { speed, gust, unit } => {
                write!(f, "VRB{speed:02}")?;
                if let Some(g) = gust {
                    write!(f, "G{g:02}")?;
                }
                write!(f, "{unit}")
            }
            Wind::Directed {
                direction,
                speed,
                gust,
                unit,
            } => {
                write!(f, "{direction:03}{speed:02}")?;
                if let Some(g) = gust {
                    write!(f, "G{g:02}")?;
                }
                write!(f, "{unit}")
            }
        }
    }
}

/// Unit the wind speed is reported in.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindUnit {
    /// Knots — the default when no unit is given.
    Knots,
    /// Metres per second.
    MetresPerSecond,
    /// Kilometres per hour.
    KilometresPerHour,
}

impl fmt::Display for WindUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WindUnit::Knots => "KT",
            WindUnit::MetresPerSecond => "MPS",
            WindUnit::KilometresPerHour => "KMH",
        })
    }
}
