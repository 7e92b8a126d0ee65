use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Per-parse scratch space threaded through the token engine and element
/// decoders.
///
/// Spec §9 calls this out explicitly: parser instances themselves stay
/// immutable (the pattern library and registries are process-wide
/// singletons), and all per-call mutable state — here, just the reference
/// time used to resolve day/hour groups into absolute instants — is scoped
/// to a single parse.
pub struct ParseContext {
    /// The instant the header established (METAR observation time basis,
    /// or TAF issue time) used to resolve month/year wraparound for every
    /// `DDHHMM` or `DDHH` group seen later in the report.
    pub reference: NaiveDateTime,
}

impl ParseContext {
    pub fn new(reference: NaiveDateTime) -> Self {
        Self { reference }
    }

    /// Resolves a header's own `DD HH MM` group relative to `reference`
    /// (the bulletin date or an otherwise-supplied anchor), rolling the
    /// month back if `day` is greater than the reference day: the header
    /// day must be the most recent occurrence of `day` at or before
    /// `reference` (spec §4.5's "month rollback when DD > issueDay").
    /// Used for the METAR observation instant and the TAF issue instant —
    /// both read off the report's own header line, which by construction
    /// can't postdate the bulletin it was issued in.
    pub fn resolve_day_hour_minute(&self, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
        let (hour, extra_day) = if hour == 24 { (0, 1) } else { (hour, 0) };
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
        let mut date = self.date_for_day(day, self.reference.date())?;
        if extra_day == 1 {
            date = date.succ_opt()?;
        }
        Some(NaiveDateTime::new(date, time))
    }

    /// Resolves a `DD HH` group (no minutes) that describes a point at or
    /// after `reference` — a TAF validity boundary, a `BECMG`/`TEMPO`/
    /// `PROBnn` span, or a `TX`/`TN` timestamp. Spec §4.4's "Validity
    /// DDHH" rule is the mirror image of the header rule above: the month
    /// rolls *forward* when `day` is less than the reference day, since
    /// these groups describe the future relative to the issue time rather
    /// than the most recent occurrence of `day` before it.
    pub fn resolve_day_hour(&self, day: u32, hour: u32) -> Option<NaiveDateTime> {
        let (hour, extra_day) = if hour == 24 { (0, 1) } else { (hour, 0) };
        let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
        let mut date = self.date_for_day_forward(day, self.reference.date())?;
        if extra_day == 1 {
            date = date.succ_opt()?;
        }
        Some(NaiveDateTime::new(date, time))
    }

    /// Resolves a TAF `FM` change time (`DDHHMM`) so that the resulting
    /// instant falls within `[valid_from, valid_to]`, rolling forward a
    /// month at a time if the naive same-month interpretation falls
    /// outside the validity window.
    pub fn resolve_fm_time(
        &self,
        day: u32,
        hour: u32,
        minute: u32,
        valid_from: NaiveDateTime,
        valid_to: NaiveDateTime,
    ) -> Option<NaiveDateTime> {
        let (hour, extra_day) = if hour == 24 { (0, 1) } else { (hour, 0) };
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;

        for base in [valid_from.date(), valid_to.date()] {
            if let Some(mut date) = self.date_for_day(day, base) {
                if extra_day == 1 {
                    date = date.succ_opt()?;
                }
                let candidate = NaiveDateTime::new(date, time);
                if candidate >= valid_from && candidate <= valid_to {
                    return Some(candidate);
                }
            }
        }
        // Fall back to resolving relative to the validity start month so a
        // malformed-but-plausible FM group still produces *something*
        // rather than being silently dropped.
        let mut date = self.date_for_day(day, valid_from.date())?;
        if extra_day == 1 {
            date = date.succ_opt()?;
        }
        Some(NaiveDateTime::new(date, time))
    }

    /// Finds the month containing `day` that is at or before `anchor`,
    /// rolling back one month if `day` is greater than `anchor`'s day of
    /// month (spec §4.5's header rollback rule).
    fn date_for_day(&self, day: u32, anchor: NaiveDate) -> Option<NaiveDate> {
        if day > anchor.day() {
            let (year, month) = prev_month(anchor.year(), anchor.month());
            NaiveDate::from_ymd_opt(year, month, day)
        } else {
            NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), day)
        }
    }

    /// Finds the month containing `day` that is at or after `anchor`,
    /// rolling forward one month if `day` is less than `anchor`'s day of
    /// month (spec §4.4's "Validity DDHH" rule).
    fn date_for_day_forward(&self, day: u32, anchor: NaiveDate) -> Option<NaiveDate> {
        if day < anchor.day() {
            let (year, month) = next_month(anchor.year(), anchor.month());
            NaiveDate::from_ymd_opt(year, month, day)
        } else {
            NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), day)
        }
    }
}

/// Finds the month/year that is one month before `(year, month)`, wrapping
/// `year` backward at January.
fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Finds the month/year one month after `(year, month)`, wrapping `year`
/// forward at December. Used when a TAF validity end day is smaller than
/// its start day (the window crosses a month boundary).
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn header_resolution_rolls_back_when_day_exceeds_anchor() {
        let ctx = ParseContext::new(anchor(2026, 2, 5));
        let resolved = ctx.resolve_day_hour_minute(31, 18, 0).unwrap();
        assert_eq!(resolved.date(), NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
    }

    #[test]
    fn header_resolution_stays_in_month_when_day_is_at_or_before_anchor() {
        let ctx = ParseContext::new(anchor(2026, 2, 5));
        let resolved = ctx.resolve_day_hour_minute(1, 0, 0).unwrap();
        assert_eq!(resolved.date(), NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    }

    #[test]
    fn validity_resolution_rolls_forward_when_day_is_before_anchor() {
        // Issued on the 31st, validity starting on the 1st: spec's
        // "Validity DDHH" rule rolls into next month, the mirror image of
        // the header-resolution rule above.
        let ctx = ParseContext::new(anchor(2026, 1, 31));
        let resolved = ctx.resolve_day_hour(1, 0).unwrap();
        assert_eq!(resolved.date(), NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    }

    #[test]
    fn validity_resolution_stays_in_month_when_day_is_at_or_after_anchor() {
        let ctx = ParseContext::new(anchor(2026, 1, 15));
        let resolved = ctx.resolve_day_hour(16, 18).unwrap();
        assert_eq!(resolved.date(), NaiveDate::from_ymd_opt(2026, 1, 16).unwrap());
    }
}
