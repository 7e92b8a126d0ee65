use std::fmt;

/// A single cloud layer, or one of the no-cloud sentinels.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkyCondition {
    /// Sky coverage.
    pub coverage: Coverage,
    /// Layer height above ground, in feet, always a multiple of 100.
    /// Absent for `SKC`/`CLR`/`NSC`; required for `VV`.
    pub height_ft: Option<u32>,
    /// Convective cloud type annotation (`CB`, `TCU`, ...), when present.
    pub cloud_type: Option<String>,
}

impl fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.coverage.fmt(f)?;
        if let Some(h) = self.height_ft {
            write!(f, "{:03}", h / 100)?;
        }
        if let Some(t) = &self.cloud_type {
            write!(f, "{t}")?;
        }
        Ok(())
    }
}

/// Sky coverage, in eighths (oktas) except for the three no-cloud
/// sentinels and vertical visibility.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coverage {
    /// Sky clear (manual report).
    Skc,
    /// Clear below 12,000ft (automated station).
    Clr,
    /// No significant cloud below 5000ft / the highest MSA, whichever is
    /// greater.
    Nsc,
    /// Few clouds, 1-2 oktas.
    Few,
    /// Scattered, 3-4 oktas.
    Scattered,
    /// Broken, 5-7 oktas.
    Broken,
    /// Overcast, 8 oktas.
    Overcast,
    /// Vertical visibility (sky obscured); `height_ft` holds the reported
    /// value.
    VerticalVisibility,
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Coverage::Skc => "SKC",
            Coverage::Clr => "CLR",
            Coverage::Nsc => "NSC",
            Coverage::Few => "FEW",
            Coverage::Scattered => "SCT",
            Coverage::Broken => "BKN",
            Coverage::Overcast => "OVC",
            Coverage::VerticalVisibility => "VV",
        })
    }
}

impl Coverage {
    /// Normalizes a handful of OCR/typo variants (`0VC` → `OVC`,
    /// `SCK` → `SKC`) before matching against the real coverage codes.
    pub(crate) fn from_code(raw: &str) -> Option<Self> {
        let normalized = raw.replace('0', "O");
        Some(match normalized.as_str() {
            "SKC" | "SCK" => Coverage::Skc,
            "CLR" => Coverage::Clr,
            "NSC" => Coverage::Nsc,
            "FEW" => Coverage::Few,
            "SCT" => Coverage::Scattered,
            "BKN" => Coverage::Broken,
            "OVC" => Coverage::Overcast,
            "VV" => Coverage::VerticalVisibility,
            _ => return None,
        })
    }

    /// `true` for the three sentinels that must never carry a height.
    #[must_use]
    pub fn is_no_cloud_sentinel(self) -> bool {
        matches!(self, Coverage::Skc | Coverage::Clr | Coverage::Nsc)
    }
}
