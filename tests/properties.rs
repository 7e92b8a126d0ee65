//! The testable properties from spec §8 that hold across any well-formed
//! input, exercised with representative cases rather than full
//! property-based generation.

use avwx_decoder::{Dispatcher, PrecipAmount, Report, Wind};

fn parse(raw: &str) -> Report {
    Dispatcher::new().parse_auto(raw, None).unwrap()
}

/// Property 1 (termination) and the engine's totality guarantee: a report
/// stuffed with tokens nothing in any registry recognizes still returns
/// `Ok` rather than hanging or failing.
#[test]
fn unrecognized_tokens_still_terminate_and_succeed() {
    let raw = "METAR KAAA 010000Z 00000KT 10SM CLR 20/20 A3000 RMK ZZZZZ QQQQ1 FOOBAR ???";
    let report = parse(raw);
    let Report::Metar(m) = report else { panic!("expected METAR") };
    let remarks = m.remarks.expect("remarks section present");
    assert_eq!(remarks.free_text, "ZZZZZ QQQQ1 FOOBAR ???");
}

/// Property 2 (no silent loss), narrowed to the remarks catch-all: a
/// token none of the registries' patterns recognize is retained verbatim
/// rather than discarded.
#[test]
fn unparsed_remark_is_retained_verbatim() {
    let raw = "METAR KAAA 010000Z 00000KT 10SM CLR 20/20 A3000 RMK BLORP";
    let Report::Metar(m) = parse(raw) else { panic!("expected METAR") };
    assert_eq!(m.remarks.unwrap().free_text, "BLORP");
}

/// Property 3 (idempotent re-parse): re-parsing a report's own `raw_text`
/// produces an identical decoded value.
#[test]
fn reparsing_raw_text_reproduces_the_same_report() {
    let inputs = [
        "METAR KJFK 142252Z 19005KT 10SM FEW100 FEW250 16/M03 A3012 RMK AO2 SLP214 T01611028",
        "SPECI KORD 151712Z 28016G24KT 250V310 2SM +TSRA BKN050CB OVC080 22/18 A2992 RMK AO2 PK WND 29033/1705 WSHFT 1710 FROPA TSB07 SLP132 P0012 T02220178",
        "TAF KLAX 151130Z 1512/1618 25008KT P6SM FEW020 FM151800 27012KT P6SM SKC TEMPO 1520/1524 BKN012 PROB30 1600/1604 1SM BR",
    ];
    for raw in inputs {
        let first = parse(raw);
        let raw_text = first.raw_text().to_string();
        let second = parse(&raw_text);
        assert_eq!(first, second, "re-parsing raw_text of {raw:?} diverged");
    }
}

/// Property 5 (soft-fail locality): corrupting one remark token changes
/// only that remark's field, not the rest of the decoded report.
#[test]
fn malformed_remark_token_only_affects_its_own_field() {
    let good = "METAR KAAA 010000Z 18010KT 10SM CLR 20/15 A3001 RMK AO2 SLP214 T01611028";
    let corrupted = "METAR KAAA 010000Z 18010KT 10SM CLR 20/15 A3001 RMK AO2 SLPXXX T01611028";

    let Report::Metar(good) = parse(good) else { panic!("expected METAR") };
    let Report::Metar(corrupted) = parse(corrupted) else { panic!("expected METAR") };

    assert_eq!(good.conditions, corrupted.conditions);
    let good_remarks = good.remarks.unwrap();
    let corrupted_remarks = corrupted.remarks.unwrap();
    assert_eq!(good_remarks.automated_station_type, corrupted_remarks.automated_station_type);
    assert_eq!(good_remarks.precise_temperature_c, corrupted_remarks.precise_temperature_c);
    assert_eq!(good_remarks.precise_dewpoint_c, corrupted_remarks.precise_dewpoint_c);
    let slp = good_remarks.sea_level_pressure_hpa.expect("SLP decoded");
    assert!((slp - 1021.4).abs() < 1e-9, "expected 1021.4, got {slp}");
    assert!(corrupted_remarks.sea_level_pressure_hpa.is_none());
    assert_eq!(corrupted_remarks.free_text, "SLPXXX");
}

/// Property 6 (wind calmness): `00000KT` always decodes to `Wind::Calm`,
/// never `Directed { direction: 0, speed: 0, .. }`.
#[test]
fn calm_wind_never_decodes_as_directed_zero() {
    for raw in [
        "METAR KAAA 010000Z 00000KT 10SM CLR 20/20 A3000",
        "TAF KAAA 010000Z 0100/0206 00000KT P6SM SKC",
    ] {
        let wind = match parse(raw) {
            Report::Metar(m) => m.conditions.wind,
            Report::Taf(t) => t.periods[0].conditions.wind,
        };
        assert_eq!(wind, Some(Wind::Calm));
    }
}

/// Property 7 (sign correctness): the `T` precise-temperature group's
/// leading sign digit is `1` for negative, `0` for non-negative.
#[test]
fn precise_temperature_sign_digit_is_honored() {
    let negative = "METAR KAAA 010000Z 00000KT 10SM CLR 20/20 A3000 RMK T10051005";
    let positive = "METAR KAAA 010000Z 00000KT 10SM CLR 20/20 A3000 RMK T00051005";

    let Report::Metar(negative) = parse(negative) else { panic!("expected METAR") };
    let Report::Metar(positive) = parse(positive) else { panic!("expected METAR") };

    let neg = negative.remarks.unwrap().precise_temperature_c.expect("precise temp decoded");
    let pos = positive.remarks.unwrap().precise_temperature_c.expect("precise temp decoded");
    assert!((neg - -0.5).abs() < 1e-9, "expected -0.5, got {neg}");
    assert!((pos - 0.5).abs() < 1e-9, "expected 0.5, got {pos}");
}

/// Property 8 (SLP boundary): the 3-digit sea-level-pressure group reads
/// as hundreds of hPa over 900 at or above 500, and over 1000 below it.
#[test]
fn sea_level_pressure_boundary_is_exact() {
    let cases = [("SLP500", 950.0), ("SLP499", 1049.9), ("SLP000", 1000.0)];
    for (remark, expected) in cases {
        let raw = format!("METAR KAAA 010000Z 00000KT 10SM CLR 20/20 A3000 RMK {remark}");
        let Report::Metar(m) = parse(&raw) else { panic!("expected METAR") };
        let hpa = m.remarks.unwrap().sea_level_pressure_hpa.unwrap();
        assert!((hpa - expected).abs() < 1e-9, "{remark} decoded to {hpa}, expected {expected}");
    }
}

/// Sanity check on [`PrecipAmount`]'s trace sentinel, used by the 1-hour
/// precipitation group exercised in the SPECI scenario test.
#[test]
fn precip_trace_is_distinct_from_measured_zero() {
    let raw = "METAR KAAA 010000Z 00000KT 10SM CLR 20/20 A3000 RMK P0000";
    let Report::Metar(zero) = parse(raw) else { panic!("expected METAR") };
    assert!(matches!(zero.remarks.unwrap().precip_1hr_in, Some(PrecipAmount::Measured(v)) if v == 0.0));

    let raw = "METAR KAAA 010000Z 00000KT 10SM CLR 20/20 A3000 RMK P////";
    let Report::Metar(trace) = parse(raw) else { panic!("expected METAR") };
    assert!(matches!(trace.remarks.unwrap().precip_1hr_in, Some(PrecipAmount::Trace)));
}
