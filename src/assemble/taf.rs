//! Component E: the TAF report assembler.
//!
//! Implements the state machine from spec §4.5:
//! `Start -> HeaderParsed -> BaseParsed -> (ChangeParsed)* -> (TempsParsed)?
//! -> Done`. The `(ChangeParsed)*`/`(TempsParsed)?` transitions are exactly
//! what [`crate::engine::run`] does against `TAF_GROUP_REGISTRY` — each
//! `BECMG`/`TEMPO`/`PROBnn`/`FM` match opens a new period, and `TX`/`TN`
//! matches populate the two temperature-extreme slots without opening one.

use chrono::NaiveDateTime;

use crate::builder::TafBuilder;
use crate::context::ParseContext;
use crate::engine;
use crate::error::ParseFailure;
use crate::model::{Modifier, Report, ReportType, TafReport};
use crate::pattern::main as header_pattern;
use crate::pattern::taf as taf_pattern;
use crate::registry::TAF_GROUP_REGISTRY;

/// `true` if `raw` looks enough like a TAF to be worth a full parse
/// attempt — the `ReportParser::can_parse` check in [`crate::dispatcher`].
pub(crate) fn looks_like_taf(raw: &str) -> bool {
    let trimmed = raw.trim_start();
    let after_date = header_pattern::MONTH_DAY_YEAR
        .captures(trimmed)
        .map_or(trimmed, |c| &trimmed[c.get(0).unwrap().end()..])
        .trim_start();
    if let Some(caps) = header_pattern::REPORT_TYPE.captures(after_date) {
        if &caps["kind"] == "TAF" {
            return true;
        }
    }
    let after_type = header_pattern::REPORT_TYPE
        .captures(after_date)
        .map_or(after_date, |c| &after_date[c.get(0).unwrap().end()..]);
    taf_pattern::STATION_DAY_TIME_VALIDITY.is_match(after_type.trim_start())
}

pub(crate) fn parse(raw: &str, reference: Option<NaiveDateTime>) -> Result<Report, ParseFailure> {
    let mut residue = raw.trim_start();

    // Optional `YYYY/MM/DD HH:MM` bulletin-header prefix (spec §4.1/§4.5),
    // same priority rule as the METAR assembler: present in the text, it
    // outranks a caller-supplied `reference`.
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

    if let Some(caps) = header_pattern::REPORT_TYPE.captures(residue) {
        residue = residue[caps.get(0).unwrap().end()..].trim_start();
    }
    let header_start_offset = raw.len() - residue.len();

    let mut modifier = None;
    while let Some(caps) = header_pattern::REPORT_MODIFIER.captures(residue) {
        if let Some(m) = Modifier::from_code(&caps["modifier"]) {
            modifier = Some(m);
        }
        residue = residue[caps.get(0).unwrap().end()..].trim_start();
    }

    let Some(caps) = taf_pattern::STATION_DAY_TIME_VALIDITY.captures(residue) else {
        let span = header_start_offset..raw.len().min(header_start_offset + 16);
        return Err(ParseFailure::structural_missing(raw, "station identifier and validity period", span));
    };
    let station = caps["station"].to_string();
    let (Ok(day), Ok(hour), Ok(minute)) = (caps["day"].parse(), caps["hour"].parse(), caps["minute"].parse()) else {
        let span = header_start_offset..header_start_offset + caps.get(0).unwrap().end();
        return Err(ParseFailure::structural_missing(raw, "a well-formed issue day/time", span));
    };
    let (Ok(vfrom_day), Ok(vfrom_hour), Ok(vto_day), Ok(vto_hour)) = (
        caps["vfrom_day"].parse(),
        caps["vfrom_hour"].parse(),
        caps["vto_day"].parse(),
        caps["vto_hour"].parse(),
    ) else {
        let span = header_start_offset..header_start_offset + caps.get(0).unwrap().end();
        return Err(ParseFailure::structural_missing(raw, "a well-formed validity period", span));
    };
    residue = residue[caps.get(0).unwrap().end()..].trim_start();

    let anchor = header_date
        .map(|(dt, _)| dt)
        .or(reference)
        .unwrap_or_else(default_reference);
    let ctx_seed = ParseContext::new(anchor);
    let Some(issue_time) = ctx_seed.resolve_day_hour_minute(day, hour, minute) else {
        return Err(ParseFailure::structural_missing(raw, "a valid issue day/time", 0..raw.len()));
    };
    let mut ctx = ParseContext::new(issue_time);

    let Some(valid_from) = ctx.resolve_day_hour(vfrom_day, vfrom_hour) else {
        return Err(ParseFailure::structural_missing(raw, "a valid validity start", 0..raw.len()));
    };
    let Some(mut valid_to) = ctx.resolve_day_hour(vto_day, vto_hour) else {
        return Err(ParseFailure::structural_missing(raw, "a valid validity end", 0..raw.len()));
    };
    if valid_to <= valid_from {
        // The end day rolled past the end of the month relative to the
        // start day (e.g. `3018/0106`); walk the end date forward a month.
        use chrono::{Datelike, NaiveDate, NaiveTime};
        let (year, month) = crate::context::next_month(valid_from.year(), valid_from.month());
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, vto_day) {
            let time = NaiveTime::from_hms_opt(vto_hour % 24, 0, 0).unwrap_or(valid_to.time());
            valid_to = NaiveDateTime::new(date, time);
        }
    }

    let mut builder = TafBuilder::new((valid_from, valid_to));
    engine::run(residue, &TAF_GROUP_REGISTRY, &mut builder, &mut ctx);
    let max_temperature = builder.max_temperature;
    let min_temperature = builder.min_temperature;
    let validity = builder.validity;
    let (periods, unparsed) = builder.finish();

    Ok(Report::Taf(TafReport {
        station,
        issue_time,
        validity,
        report_type: ReportType::Taf,
        modifier,
        raw_text: raw.to_string(),
        periods,
        max_temperature,
        min_temperature,
        unparsed,
    }))
}

/// Converts a `YYYY/MM/DD HH:MM` bulletin-header prefix into an instant.
fn month_day_year_to_datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    use chrono::{NaiveDate, NaiveTime};
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(NaiveDateTime::new(date, time))
}

/// Same fallback anchor as the METAR assembler's `default_reference`, and
/// for the same reason: day 31 so the header rollback rule in
/// `resolve_day_hour_minute` never fires against it.
fn default_reference() -> NaiveDateTime {
    use chrono::NaiveDate;
    NaiveDate::from_ymd_opt(2000, 1, 31)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}
