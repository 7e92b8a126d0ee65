use std::fmt;

/// Prevailing horizontal visibility.
///
/// `CAVOK` implies a distance of at least 10km, no cloud below 5000ft and
/// no significant weather (spec §3); callers that need to *act* on that
/// implication should match on `modifier` rather than trusting `distance`
/// to carry it, since CAVOK carries no numeric distance at all.
#[derive(PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visibility {
    /// The visibility distance, absent for `CAVOK` and the missing-data
    /// forms (`////`, `NDV`).
    pub distance: Option<Distance>,
    /// Unit `distance` is expressed in. Meaningless when `distance` is
    /// `None`.
    pub unit: DistanceUnit,
    /// `M` prefix: visibility is less than `distance`.
    pub less_than: bool,
    /// `P` prefix: visibility is greater than `distance`.
    pub greater_than: bool,
    /// `CAVOK` / `NDV` special-case marker.
    pub modifier: Option<VisibilityModifier>,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.modifier {
            Some(VisibilityModifier::Cavok) => return f.write_str("CAVOK"),
            Some(VisibilityModifier::Ndv) => return f.write_str("NDV"),
            None => {}
        }
        if self.less_than {
            f.write_str("M")?;
        }
        if self.greater_than {
            f.write_str("P")?;
        }
        match self.distance {
            Some(Distance::Whole(n)) => write!(f, "{n}")?,
            Some(Distance::Fraction(n, d)) => write!(f, "{n}/{d}")?,
            Some(Distance::Mixed(w, n, d)) => write!(f, "{w} {n}/{d}")?,
            None => f.write_str("////")?,
        }
        if self.unit != DistanceUnit::Metres {
            write!(f, "{}", self.unit)?;
        }
        Ok(())
    }
}

/// A visibility distance, retaining the fractional statute-mile form
/// instead of collapsing it to a float, so `1/4SM` and `1/2SM` redisplay
/// the way they were written.
#[derive(PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    /// A whole number of units, e.g. `10` in `10SM`.
    Whole(u32),
    /// A bare fraction, e.g. `1/4` in `M1/4SM`.
    Fraction(u32, u32),
    /// A mixed number, e.g. the `1 1/2` in `1 1/2SM`.
    Mixed(u32, u32, u32),
}

impl Distance {
    /// The decimal value of this distance, in whatever unit it was
    /// reported in.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Distance::Whole(n) => f64::from(n),
            Distance::Fraction(n, d) => f64::from(n) / f64::from(d),
            Distance::Mixed(w, n, d) => f64::from(w) + f64::from(n) / f64::from(d),
        }
    }
}

/// Unit a [`Distance`] is expressed in.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceUnit {
    /// Statute miles, used in US/Canadian reports.
    StatuteMiles,
    /// Metres, the ICAO default for the bare 4-digit group.
    Metres,
    /// Kilometres.
    Kilometres,
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DistanceUnit::StatuteMiles => "SM",
            DistanceUnit::Metres => "",
            DistanceUnit::Kilometres => "KM",
        })
    }
}

/// Special-case visibility markers that replace a numeric distance
/// entirely.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibilityModifier {
    /// Ceiling and visibility OK.
    Cavok,
    /// No directional variation (used in some European reports instead of
    /// a minimum-visibility-direction group).
    Ndv,
}
