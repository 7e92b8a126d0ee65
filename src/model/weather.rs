use std::fmt;

/// A single present-weather phenomenon group (e.g. `+TSRA`, `-SHSN`,
/// `VCFG`, `FZRA`).
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresentWeather {
    /// Intensity/proximity qualifier.
    pub intensity: Intensity,
    /// Descriptor (shallow, patches, showers, thunderstorm, freezing, ...).
    pub descriptor: Option<Descriptor>,
    /// Precipitation type codes, in the order they appeared (a group may
    /// combine more than one, e.g. `RASN`).
    pub precipitation: Vec<PrecipCode>,
    /// Obscuration phenomenon, if this group describes one.
    pub obscuration: Option<Obscuration>,
    /// Catch-all "other" phenomenon (squall, dust/sand whirls, funnel
    /// cloud, ...).
    pub other: Option<OtherPhenomenon>,
}

impl fmt::Display for PresentWeather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.intensity.fmt(f)?;
        if let Some(d) = self.descriptor {
            d.fmt(f)?;
        }
        for p in &self.precipitation {
            p.fmt(f)?;
        }
        if let Some(o) = self.obscuration {
            o.fmt(f)?;
        }
        if let Some(o) = self.other {
            o.fmt(f)?;
        }
        Ok(())
    }
}

/// Intensity/proximity qualifier for a weather group.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intensity {
    /// `-` prefix.
    Light,
    /// No prefix.
    Moderate,
    /// `+` prefix.
    Heavy,
    /// `VC` prefix: in the vicinity of the station, not at it.
    Vicinity,
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Intensity::Light => "-",
            Intensity::Moderate => "",
            Intensity::Heavy => "+",
            Intensity::Vicinity => "VC",
        })
    }
}

/// Descriptor qualifying how precipitation/obscuration is occurring.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Descriptor {
    /// Shallow (`MI`).
    Shallow,
    /// Partial (`PR`).
    Partial,
    /// Patches (`BC`).
    Patches,
    /// Low drifting (`DR`).
    LowDrifting,
    /// Blowing (`BL`).
    Blowing,
    /// Showers (`SH`).
    Showers,
    /// Thunderstorm (`TS`).
    Thunderstorm,
    /// Freezing (`FZ`).
    Freezing,
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Descriptor::Shallow => "MI",
            Descriptor::Partial => "PR",
            Descriptor::Patches => "BC",
            Descriptor::LowDrifting => "DR",
            Descriptor::Blowing => "BL",
            Descriptor::Showers => "SH",
            Descriptor::Thunderstorm => "TS",
            Descriptor::Freezing => "FZ",
        })
    }
}

/// A precipitation type code.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrecipCode {
    /// Drizzle.
    Drizzle,
    /// Rain.
    Rain,
    /// Snow.
    Snow,
    /// Snow grains.
    SnowGrains,
    /// Ice crystals.
    IceCrystals,
    /// Ice pellets.
    IcePellets,
    /// Hail (including small hail, in the US).
    Hail,
    /// Small hail and/or snow pellets.
    SmallHail,
    /// Unknown precipitation (automated station couldn't classify it).
    Unknown,
}

impl fmt::Display for PrecipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrecipCode::Drizzle => "DZ",
            PrecipCode::Rain => "RA",
            PrecipCode::Snow => "SN",
            PrecipCode::SnowGrains => "SG",
            PrecipCode::IceCrystals => "IC",
            PrecipCode::IcePellets => "PL",
            PrecipCode::Hail => "GR",
            PrecipCode::SmallHail => "GS",
            PrecipCode::Unknown => "UP",
        })
    }
}

impl PrecipCode {
    pub(crate) fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "DZ" => PrecipCode::Drizzle,
            "RA" => PrecipCode::Rain,
            "SN" => PrecipCode::Snow,
            "SG" => PrecipCode::SnowGrains,
            "IC" => PrecipCode::IceCrystals,
            "PL" => PrecipCode::IcePellets,
            "GR" => PrecipCode::Hail,
            "GS" => PrecipCode::SmallHail,
            "UP" => PrecipCode::Unknown,
            _ => return None,
        })
    }
}

/// An obscuration phenomenon (reduces visibility without precipitation).
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Obscuration {
    /// Mist.
    Mist,
    /// Fog.
    Fog,
    /// Smoke.
    Smoke,
    /// Volcanic ash.
    VolcanicAsh,
    /// Widespread dust.
    Dust,
    /// Sand.
    Sand,
    /// Haze.
    Haze,
    /// Spray.
    Spray,
}

impl fmt::Display for Obscuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Obscuration::Mist => "BR",
            Obscuration::Fog => "FG",
            Obscuration::Smoke => "FU",
            Obscuration::VolcanicAsh => "VA",
            Obscuration::Dust => "DU",
            Obscuration::Sand => "SA",
            Obscuration::Haze => "HZ",
            Obscuration::Spray => "PY",
        })
    }
}

impl Obscuration {
    pub(crate) fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "BR" => Obscuration::Mist,
            "FG" => Obscuration::Fog,
            "FU" => Obscuration::Smoke,
            "VA" => Obscuration::VolcanicAsh,
            "DU" => Obscuration::Dust,
            "SA" => Obscuration::Sand,
            "HZ" => Obscuration::Haze,
            "PY" => Obscuration::Spray,
            _ => return None,
        })
    }
}

/// Weather phenomena that are neither precipitation nor obscuration.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OtherPhenomenon {
    /// Dust or sand whirls.
    DustSandWhirls,
    /// Squall.
    Squall,
    /// Funnel cloud (incl. tornado/waterspout).
    FunnelCloud,
    /// Sandstorm.
    Sandstorm,
    /// Duststorm.
    Duststorm,
    /// No significant weather (used to cancel a previous TEMPO/BECMG
    /// weather group in a TAF change group).
    NoSignificantWeather,
}

impl fmt::Display for OtherPhenomenon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OtherPhenomenon::DustSandWhirls => "PO",
            OtherPhenomenon::Squall => "SQ",
            OtherPhenomenon::FunnelCloud => "FC",
            OtherPhenomenon::Sandstorm => "SS",
            OtherPhenomenon::Duststorm => "DS",
            OtherPhenomenon::NoSignificantWeather => "NSW",
        })
    }
}

impl OtherPhenomenon {
    pub(crate) fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "PO" => OtherPhenomenon::DustSandWhirls,
            "SQ" => OtherPhenomenon::Squall,
            "FC" => OtherPhenomenon::FunnelCloud,
            "SS" => OtherPhenomenon::Sandstorm,
            "DS" => OtherPhenomenon::Duststorm,
            "NSW" => OtherPhenomenon::NoSignificantWeather,
            _ => return None,
        })
    }
}
