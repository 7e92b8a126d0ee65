//! End-to-end TAF decode scenario: a base forecast followed by a chain of
//! `FM`/`TEMPO`/`PROB30` change groups.

use chrono::NaiveDate;

use avwx_decoder::{ChangeIndicator, Coverage, Dispatcher, Distance, Obscuration, Report, SkyCondition, Wind, WindUnit};

#[test]
fn s4_taf_base_plus_fm_tempo_prob_chain() {
    let raw = "TAF KLAX 151130Z 1512/1618 25008KT P6SM FEW020 FM151800 27012KT P6SM SKC TEMPO 1520/1524 BKN012 PROB30 1600/1604 1SM BR";
    let r = match Dispatcher::new().parse_auto(raw, None).unwrap() {
        Report::Taf(t) => t,
        Report::Metar(_) => panic!("expected a TAF report"),
    };

    assert_eq!(r.station, "KLAX");
    let d15 = NaiveDate::from_ymd_opt(2000, 1, 15).unwrap();
    let d16 = NaiveDate::from_ymd_opt(2000, 1, 16).unwrap();
    assert_eq!(r.validity.0, d15.and_hms_opt(12, 0, 0).unwrap());
    assert_eq!(r.validity.1, d16.and_hms_opt(18, 0, 0).unwrap());

    assert_eq!(r.periods.len(), 4);

    let base = &r.periods[0];
    assert_eq!(base.change, ChangeIndicator::Base);
    assert_eq!(base.period, Some(r.validity));
    assert_eq!(
        base.conditions.wind,
        Some(Wind::Directed { direction: 250, speed: 8, gust: None, unit: WindUnit::Knots })
    );
    assert_eq!(base.conditions.visibility.unwrap().greater_than, true);
    assert_eq!(base.conditions.visibility.unwrap().distance, Some(Distance::Whole(6)));
    assert_eq!(base.conditions.sky, vec![SkyCondition { coverage: Coverage::Few, height_ft: Some(2_000), cloud_type: None }]);

    let from = &r.periods[1];
    assert_eq!(from.change, ChangeIndicator::From);
    assert_eq!(from.from_time, Some(d15.and_hms_opt(18, 0, 0).unwrap()));
    assert_eq!(
        from.conditions.wind,
        Some(Wind::Directed { direction: 270, speed: 12, gust: None, unit: WindUnit::Knots })
    );
    assert_eq!(from.conditions.sky, vec![SkyCondition { coverage: Coverage::Skc, height_ft: None, cloud_type: None }]);

    let tempo = &r.periods[2];
    assert_eq!(tempo.change, ChangeIndicator::Tempo);
    assert_eq!(tempo.period, Some((d15.and_hms_opt(20, 0, 0).unwrap(), d16.and_hms_opt(0, 0, 0).unwrap())));
    assert_eq!(tempo.conditions.sky, vec![SkyCondition { coverage: Coverage::Broken, height_ft: Some(1_200), cloud_type: None }]);

    let prob = &r.periods[3];
    assert_eq!(prob.change, ChangeIndicator::Prob);
    assert_eq!(prob.probability, Some(30));
    assert_eq!(prob.period, Some((d16.and_hms_opt(0, 0, 0).unwrap(), d16.and_hms_opt(4, 0, 0).unwrap())));
    assert_eq!(prob.conditions.visibility.unwrap().distance, Some(Distance::Whole(1)));
    assert_eq!(prob.conditions.present_weather[0].obscuration, Some(Obscuration::Mist));

    assert!(r.max_temperature.is_none());
    assert!(r.min_temperature.is_none());
    assert!(r.unparsed.is_empty());
}

#[test]
fn validity_starting_day_before_issue_day_rolls_into_next_month() {
    // Issued on the last day of the month; validity opens on day 1, which
    // must resolve into the following month rather than rolling back into
    // the issue month (spec §4.4's "Validity DDHH: day < issue-time day
    // => next month").
    let raw = "TAF KAAA 312350Z 0100/0206 09005KT P6SM FEW020";
    let r = match Dispatcher::new().parse_auto(raw, None).unwrap() {
        Report::Taf(t) => t,
        Report::Metar(_) => panic!("expected a TAF report"),
    };

    let jan31 = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap();
    let feb1 = NaiveDate::from_ymd_opt(2000, 2, 1).unwrap();
    let feb2 = NaiveDate::from_ymd_opt(2000, 2, 2).unwrap();
    assert_eq!(r.issue_time, jan31.and_hms_opt(23, 50, 0).unwrap());
    assert_eq!(r.validity.0, feb1.and_hms_opt(1, 0, 0).unwrap());
    assert_eq!(r.validity.1, feb2.and_hms_opt(6, 0, 0).unwrap());

    let base = &r.periods[0];
    assert_eq!(base.change, ChangeIndicator::Base);
    assert_eq!(base.period, Some(r.validity));
}

#[test]
fn bulletin_header_date_anchors_taf_issue_time() {
    let raw = "2026/07/15 11:30 TAF KLAX 151130Z 1512/1618 25008KT P6SM FEW020";
    let r = match Dispatcher::new().parse_auto(raw, None).unwrap() {
        Report::Taf(t) => t,
        Report::Metar(_) => panic!("expected a TAF report"),
    };

    assert_eq!(r.station, "KLAX");
    let d15 = NaiveDate::from_ymd_opt(2026, 7, 15).unwrap();
    let d16 = NaiveDate::from_ymd_opt(2026, 7, 16).unwrap();
    assert_eq!(r.issue_time, d15.and_hms_opt(11, 30, 0).unwrap());
    assert_eq!(r.validity.0, d15.and_hms_opt(12, 0, 0).unwrap());
    assert_eq!(r.validity.1, d16.and_hms_opt(18, 0, 0).unwrap());
}
