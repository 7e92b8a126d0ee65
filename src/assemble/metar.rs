//! Component E: the METAR/SPECI report assembler.
//!
//! Implements the state machine from spec §4.5:
//! `Start -> HeaderParsed -> BodyParsed -> (RemarksParsed)? -> Done`.
//! Only the transition into `HeaderParsed` can fail outright — everything
//! after that point runs through the token engine, which never raises a
//! fatal error on its own (spec §4.6).

use chrono::NaiveDateTime;

use crate::builder::{ConditionsBuilder, RemarksBuilder};
use crate::context::ParseContext;
use crate::engine;
use crate::error::ParseFailure;
use crate::model::{Modifier, ReportType};
use crate::model::{MetarReport, Report};
use crate::pattern::main as header_pattern;
use crate::registry::{MAIN_REGISTRY, REMARKS_REGISTRY};

/// `true` if `raw` looks enough like a METAR/SPECI to be worth a full
/// parse attempt — the `ReportParser::can_parse` check in
/// [`crate::dispatcher`].
pub(crate) fn looks_like_metar(raw: &str) -> bool {
    let trimmed = raw.trim_start();
    let after_date = header_pattern::MONTH_DAY_YEAR
        .captures(trimmed)
        .map_or(trimmed, |c| &trimmed[c.get(0).unwrap().end()..])
        .trim_start();
    let after_type = header_pattern::REPORT_TYPE
        .captures(after_date)
        .map_or(after_date, |c| &after_date[c.get(0).unwrap().end()..]);
    header_pattern::STATION_DAY_TIME.is_match(after_type.trim_start())
}

pub(crate) fn parse(raw: &str, reference: Option<NaiveDateTime>) -> Result<Report, ParseFailure> {
    let mut residue = raw.trim_start();

    // Optional `YYYY/MM/DD HH:MM` bulletin-header prefix (spec §4.1/§4.5):
    // when present it's the authoritative reference time for resolving
    // every later `DDHHMM`/`DDHH` group, taking priority over a
    // caller-supplied `reference` because it's part of the report text
    // itself rather than out-of-band metadata.
    let header_date = header_pattern::MONTH_DAY_YEAR.captures(residue).and_then(|caps| {
        let (Ok(year), Ok(month), Ok(day), Ok(hour), Ok(minute)) = (
            caps["year"].parse(),
            caps["month"].parse(),
            caps["day"].parse(),
            caps["hour"].parse(),
            caps["minute"].parse(),
        ) else {
            return None;
        };
        let end = caps.get(0).unwrap().end();
        let dt = month_day_year_to_datetime(year, month, day, hour, minute)?;
        Some((dt, end))
    });
    if let Some((_, end)) = header_date {
        residue = residue[end..].trim_start();
    }
    let header_start_offset = raw.len() - residue.len();

    let report_type = if let Some(caps) = header_pattern::REPORT_TYPE.captures(residue) {
        let kind = match &caps["kind"] {
            "SPECI" => ReportType::Speci,
            _ => ReportType::Metar,
        };
        residue = residue[caps.get(0).unwrap().end()..].trim_start();
        kind
    } else {
        ReportType::Metar
    };

    let Some(caps) = header_pattern::STATION_DAY_TIME.captures(residue) else {
        let span = header_start_offset..raw.len().min(header_start_offset + 12);
        return Err(ParseFailure::structural_missing(raw, "station identifier and observation time", span));
    };
    let station = caps["station"].to_string();
    let (Ok(day), Ok(hour), Ok(minute)) = (caps["day"].parse(), caps["hour"].parse(), caps["minute"].parse()) else {
        let span = header_start_offset..header_start_offset + caps.get(0).unwrap().end();
        return Err(ParseFailure::structural_missing(raw, "a well-formed observation day/time", span));
    };
    residue = residue[caps.get(0).unwrap().end()..].trim_start();

    let anchor = header_date
        .map(|(dt, _)| dt)
        .or(reference)
        .unwrap_or_else(default_reference);
    let ctx_seed = ParseContext::new(anchor);
    let Some(observation_time) = ctx_seed.resolve_day_hour_minute(day, hour, minute) else {
        return Err(ParseFailure::structural_missing(raw, "a valid observation day/time", 0..raw.len()));
    };
    let mut ctx = ParseContext::new(observation_time);

    let mut modifier = None;
    while let Some(caps) = header_pattern::REPORT_MODIFIER.captures(residue) {
        if let Some(m) = Modifier::from_code(&caps["modifier"]) {
            modifier = Some(m);
        }
        residue = residue[caps.get(0).unwrap().end()..].trim_start();
    }

    let (body, remarks_raw) = split_remarks(residue);

    let mut conditions = ConditionsBuilder::default();
    engine::run(body, &MAIN_REGISTRY, &mut conditions, &mut ctx);

    let remarks = remarks_raw.map(|text| {
        let mut remarks_builder = RemarksBuilder::default();
        engine::run(text, &REMARKS_REGISTRY, &mut remarks_builder, &mut ctx);
        remarks_builder.finish()
    });

    let rvr = std::mem::take(&mut conditions.rvr);
    let nosig = conditions.nosig;

    Ok(Report::Metar(MetarReport {
        station,
        observation_time,
        report_type,
        modifier,
        raw_text: raw.to_string(),
        conditions: conditions.finish(),
        remarks,
        nosig,
        rvr,
    }))
}

/// Splits the residual text on a standalone `RMK` token. Everything before
/// it is the METAR body; everything after is the remarks section.
fn split_remarks(residue: &str) -> (&str, Option<&str>) {
    let bytes = residue.as_bytes();
    let mut idx = 0;
    while let Some(found) = residue[idx..].find("RMK") {
        let at = idx + found;
        let before_ok = at == 0 || bytes[at - 1].is_ascii_whitespace();
        let after = at + 3;
        let after_ok = after == residue.len() || bytes[after].is_ascii_whitespace();
        if before_ok && after_ok {
            return (residue[..at].trim(), Some(residue[after..].trim()));
        }
        idx = at + 3;
    }
    (residue, None)
}

/// Converts a `YYYY/MM/DD HH:MM` bulletin-header prefix into an instant.
fn month_day_year_to_datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    use chrono::{NaiveDate, NaiveTime};
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(NaiveDateTime::new(date, time))
}

/// Used only when a caller doesn't supply an explicit reference time
/// (spec §9: callers decide how to anchor a report with no out-of-band
/// bulletin timestamp). Not `Utc::now()` — that would make parsing
/// impure — this picks a fixed point far enough in the past that every
/// relative-day resolution in a test or a replayed feed still lands on a
/// sensible calendar date. The anchor day is pinned to the last day a
/// month can have so `resolve_day_hour_minute`'s header rollback rule
/// (month back when `DD > issueDay`) never fires against it — any report
/// day 1-31 resolves into this same month.
fn default_reference() -> NaiveDateTime {
    use chrono::NaiveDate;
    NaiveDate::from_ymd_opt(2000, 1, 31)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}
