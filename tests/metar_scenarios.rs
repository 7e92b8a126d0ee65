//! End-to-end METAR/SPECI decode scenarios, each a real-world-shaped
//! report exercising a different cross-section of the decoder.

use chrono::NaiveDate;

use avwx_decoder::{
    AutomatedStationType, Coverage, Descriptor, Dispatcher, Distance, DistanceUnit, Intensity,
    MaintenanceIndicator, Modifier, Obscuration, PeakWind, PrecipCode, PresentWeather, Pressure,
    PressureUnit, Report, ReportType, RvrTrend, RvrValue, SkyCondition, Temperature, Visibility,
    Wind, WindShift, WindUnit,
};

fn metar(raw: &str) -> avwx_decoder::MetarReport {
    match Dispatcher::new().parse_auto(raw, None).unwrap() {
        Report::Metar(m) => m,
        Report::Taf(_) => panic!("expected a METAR/SPECI report"),
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

#[test]
fn s1_basic_metar_with_precise_remarks() {
    let raw = "METAR KJFK 142252Z 19005KT 10SM FEW100 FEW250 16/M03 A3012 RMK AO2 SLP214 T01611028";
    let r = metar(raw);

    assert_eq!(r.station, "KJFK");
    assert_eq!(r.report_type, ReportType::Metar);
    assert_eq!(
        r.observation_time,
        NaiveDate::from_ymd_opt(2000, 1, 14).unwrap().and_hms_opt(22, 52, 0).unwrap()
    );
    assert_eq!(
        r.conditions.wind,
        Some(Wind::Directed { direction: 190, speed: 5, gust: None, unit: WindUnit::Knots })
    );
    assert_eq!(
        r.conditions.visibility,
        Some(Visibility {
            distance: Some(Distance::Whole(10)),
            unit: DistanceUnit::StatuteMiles,
            less_than: false,
            greater_than: false,
            modifier: None,
        })
    );
    assert_eq!(
        r.conditions.sky,
        vec![
            SkyCondition { coverage: Coverage::Few, height_ft: Some(10_000), cloud_type: None },
            SkyCondition { coverage: Coverage::Few, height_ft: Some(25_000), cloud_type: None },
        ]
    );
    assert_eq!(r.conditions.temperature, Some(Temperature { temp_c: 16, dewpoint_c: Some(-3) }));
    let pressure = r.conditions.pressure.expect("altimeter present");
    assert_close(pressure.value, 30.12);
    assert_eq!(pressure.unit, PressureUnit::InchesOfMercury);

    let remarks = r.remarks.expect("remarks section present");
    assert_eq!(remarks.automated_station_type, Some(AutomatedStationType::Ao2));
    assert_close(remarks.sea_level_pressure_hpa.expect("SLP decoded"), 1021.4);
    assert_close(remarks.precise_temperature_c.expect("precise temp decoded"), 16.1);
    assert_close(remarks.precise_dewpoint_c.expect("precise dewpoint decoded"), -2.8);
    assert!(remarks.free_text.is_empty());
}

#[test]
fn s2_calm_wind_variable_rvr_and_negative_precise_temps() {
    let raw = "METAR KBOS 151753Z 00000KT 1/4SM R04R/M0600V1200N FG VV002 M02/M02 A2998 RMK AO2 SLP156 FZRAB1159E1240SNB30 58032 T10171017";
    let r = metar(raw);

    assert_eq!(r.station, "KBOS");
    assert_eq!(r.conditions.wind, Some(Wind::Calm));
    assert_eq!(
        r.conditions.visibility,
        Some(Visibility {
            distance: Some(Distance::Fraction(1, 4)),
            unit: DistanceUnit::StatuteMiles,
            less_than: false,
            greater_than: false,
            modifier: None,
        })
    );

    assert_eq!(r.rvr.len(), 1);
    assert_eq!(r.rvr[0].runway, "04R");
    assert_eq!(r.rvr[0].value, RvrValue::Variable { low: 600, high: 1200 });
    assert_eq!(r.rvr[0].trend, Some(RvrTrend::NoChange));

    assert_eq!(
        r.conditions.present_weather,
        vec![PresentWeather {
            intensity: Intensity::Moderate,
            descriptor: None,
            precipitation: vec![],
            obscuration: Some(Obscuration::Fog),
            other: None,
        }]
    );
    assert_eq!(
        r.conditions.sky,
        vec![SkyCondition { coverage: Coverage::VerticalVisibility, height_ft: Some(200), cloud_type: None }]
    );
    assert_eq!(r.conditions.temperature, Some(Temperature { temp_c: -2, dewpoint_c: Some(-2) }));

    let remarks = r.remarks.expect("remarks section present");
    assert_close(remarks.sea_level_pressure_hpa.expect("SLP decoded"), 1015.6);
    assert_close(remarks.precise_temperature_c.expect("precise temp decoded"), -1.7);
    assert_close(remarks.precise_dewpoint_c.expect("precise dewpoint decoded"), -1.7);
    assert_eq!(remarks.weather_events.len(), 2);
    assert_eq!(remarks.weather_events[0].code, "FZRA");
    assert_eq!(remarks.weather_events[0].begin, Some((Some(11), 59)));
    assert_eq!(remarks.weather_events[0].end, Some((Some(12), 40)));
    assert_eq!(remarks.weather_events[1].code, "SN");
    assert_eq!(remarks.weather_events[1].begin, Some((None, 30)));
    assert_eq!(remarks.weather_events[1].end, None);
    let tendency = remarks.pressure_tendency.expect("pressure tendency present");
    assert_eq!(tendency.code.0, 8);
    assert_eq!(tendency.change_tenths_hpa, 32);
}

#[test]
fn s3_speci_with_peak_wind_and_wind_shift() {
    let raw = "SPECI KORD 151712Z 28016G24KT 250V310 2SM +TSRA BKN050CB OVC080 22/18 A2992 RMK AO2 PK WND 29033/1705 WSHFT 1710 FROPA TSB07 SLP132 P0012 T02220178";
    let r = metar(raw);

    assert_eq!(r.report_type, ReportType::Speci);
    assert_eq!(
        r.conditions.wind,
        Some(Wind::Directed { direction: 280, speed: 16, gust: Some(24), unit: WindUnit::Knots })
    );
    assert_eq!(
        r.conditions.visibility,
        Some(Visibility {
            distance: Some(Distance::Whole(2)),
            unit: DistanceUnit::StatuteMiles,
            less_than: false,
            greater_than: false,
            modifier: None,
        })
    );
    assert_eq!(
        r.conditions.present_weather,
        vec![PresentWeather {
            intensity: Intensity::Heavy,
            descriptor: Some(Descriptor::Thunderstorm),
            precipitation: vec![PrecipCode::Rain],
            obscuration: None,
            other: None,
        }]
    );
    assert_eq!(
        r.conditions.sky,
        vec![
            SkyCondition { coverage: Coverage::Broken, height_ft: Some(5_000), cloud_type: Some("CB".to_string()) },
            SkyCondition { coverage: Coverage::Overcast, height_ft: Some(8_000), cloud_type: None },
        ]
    );

    let remarks = r.remarks.expect("remarks section present");
    assert_eq!(
        remarks.peak_wind,
        Some(PeakWind { direction: 290, speed: 33, hour: Some(17), minute: 5 })
    );
    assert_eq!(
        remarks.wind_shift,
        Some(WindShift { hour: Some(17), minute: 10, frontal_passage: true })
    );
    assert_eq!(remarks.weather_events.len(), 1);
    assert_eq!(remarks.weather_events[0].code, "TS");
    assert_eq!(remarks.weather_events[0].begin, Some((None, 7)));
    assert_close(remarks.sea_level_pressure_hpa.expect("SLP decoded"), 1013.2);
    match remarks.precip_1hr_in {
        Some(avwx_decoder::PrecipAmount::Measured(v)) => assert_close(v, 0.12),
        other => panic!("expected a measured 1-hour precipitation amount, got {other:?}"),
    }
    assert_close(remarks.precise_temperature_c.expect("precise temp decoded"), 22.2);
    assert_close(remarks.precise_dewpoint_c.expect("precise dewpoint decoded"), 17.8);
}

#[test]
fn s5_auto_station_with_both_ceiling_kinds() {
    let raw = "METAR KXYZ 151753Z AUTO 18010KT 10SM CLR 20/15 A3001 RMK AO1 $ VISNO RWY06 CIG 005V010 CIG 002 RWY11";
    let r = metar(raw);

    assert_eq!(r.modifier, Some(Modifier::Auto));
    assert_eq!(
        r.conditions.wind,
        Some(Wind::Directed { direction: 180, speed: 10, gust: None, unit: WindUnit::Knots })
    );
    assert_eq!(r.conditions.sky, vec![SkyCondition { coverage: Coverage::Clr, height_ft: None, cloud_type: None }]);

    let remarks = r.remarks.expect("remarks section present");
    assert_eq!(remarks.automated_station_type, Some(AutomatedStationType::Ao1));
    assert!(remarks.maintenance_required);
    assert!(remarks.maintenance_indicators.contains(&MaintenanceIndicator::MaintenanceRequired));
    assert!(remarks
        .maintenance_indicators
        .iter()
        .any(|i| matches!(i, MaintenanceIndicator::VisibilityNotAvailable(Some(loc)) if loc == "RWY06")));

    let ceiling = remarks.variable_ceiling.expect("variable ceiling present");
    assert_eq!(ceiling.min_hundreds_ft, 5);
    assert_eq!(ceiling.max_hundreds_ft, 10);

    let second_site = remarks.second_site_ceiling.expect("second-site ceiling present");
    assert_eq!(second_site.height_hundreds_ft, 2);
    assert_eq!(second_site.runway, "11");
}

#[test]
fn s6_unrecognized_remark_token_is_retained_verbatim() {
    let raw = "METAR KZZZ 010000Z 00000KT 10SM CLR 20/20 A3000 RMK AO2 BLORP";
    let r = metar(raw);

    assert_eq!(r.conditions.wind, Some(Wind::Calm));
    assert_eq!(r.conditions.temperature, Some(Temperature { temp_c: 20, dewpoint_c: Some(20) }));

    let remarks = r.remarks.expect("remarks section present");
    assert_eq!(remarks.automated_station_type, Some(AutomatedStationType::Ao2));
    assert_eq!(remarks.free_text, "BLORP");
}

#[test]
fn bare_altimeter_uses_value_range_heuristic() {
    // A trailing bare 4-digit group is the only one of these that could
    // be mistaken for `VISIBILITY_METERS`'s own bare form — this needs to
    // land on `conditions.pressure`, not get reinterpreted as a second,
    // overriding visibility reading of "10SM".
    let inhg = metar("METAR KZZZ 010000Z 00000KT 10SM CLR 20/20 3012 RMK AO2");
    assert_eq!(inhg.conditions.pressure, Some(Pressure { value: 30.12, unit: PressureUnit::InchesOfMercury }));
    assert_eq!(inhg.conditions.visibility.unwrap().distance, Some(Distance::Whole(10)));

    let hpa = metar("METAR KZZZ 010000Z 00000KT 10SM CLR 20/20 1013 RMK AO2");
    assert_eq!(hpa.conditions.pressure, Some(Pressure { value: 1013.0, unit: PressureUnit::Hectopascals }));
    assert_eq!(hpa.conditions.visibility.unwrap().distance, Some(Distance::Whole(10)));
}

#[test]
fn lone_descriptor_forms_a_begin_end_weather_code_without_a_precip_code() {
    // `TSB07` (spec §8 scenario S3) has no precipitation/obscuration code
    // after `TS` at all — a standalone thunderstorm observation, not a
    // qualifier on one. `BEGIN_END_WEATHER` must accept a bare descriptor
    // as a complete code, not just descriptor-plus-trailing-code forms
    // like `FZRA`.
    let raw = "METAR KAAA 010000Z 00000KT 10SM CLR 20/20 A3000 RMK TSB07";
    let r = metar(raw);
    let remarks = r.remarks.expect("remarks section present");
    assert_eq!(remarks.weather_events.len(), 1);
    assert_eq!(remarks.weather_events[0].code, "TS");
    assert_eq!(remarks.weather_events[0].begin, Some((None, 7)));
    assert_eq!(remarks.weather_events[0].end, None);
    assert!(remarks.free_text.is_empty());
}

#[test]
fn bulletin_header_date_anchors_observation_time_over_a_caller_reference() {
    // The caller passes a reference a year off; the embedded header date
    // must win, since it's part of the report text itself.
    let caller_reference = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let raw = "2026/07/15 12:00 METAR KJFK 151151Z 00000KT 10SM CLR 20/20 A3000";
    let r = match Dispatcher::new().parse_auto(raw, Some(caller_reference)).unwrap() {
        Report::Metar(m) => m,
        Report::Taf(_) => panic!("expected a METAR/SPECI report"),
    };

    assert_eq!(r.station, "KJFK");
    assert_eq!(r.observation_time, NaiveDate::from_ymd_opt(2026, 7, 15).unwrap().and_hms_opt(11, 51, 0).unwrap());
}
