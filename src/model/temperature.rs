use std::fmt;

/// Temperature/dewpoint as reported in the main body (whole degrees
/// Celsius). The higher-precision remark form (tenths of a degree) is
/// carried separately on [`crate::model::Remarks`].
#[derive(PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Temperature {
    /// Air temperature in whole degrees Celsius.
    pub temp_c: i32,
    /// Dewpoint in whole degrees Celsius, if reported.
    pub dewpoint_c: Option<i32>,
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_signed(f, self.temp_c)?;
        f.write_str("/")?;
        if let Some(dp) = self.dewpoint_c {
            write_signed(f, dp)?;
        }
        Ok(())
    }
}

fn write_signed(f: &mut fmt::Formatter<'_>, v: i32) -> fmt::Result {
    if v < 0 {
        write!(f, "M{:02}", -v)
    } else {
        write!(f, "{v:02}")
    }
}
