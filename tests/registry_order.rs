//! Registry-ordering tests (spec §4.2/§8 property 4, §9's explicit list):
//! two entries sharing a prefix are only disambiguated because the
//! registry is scanned top to bottom in a fixed order. Swapping either
//! pair here would change the decoded result for at least the cases
//! below.

use avwx_decoder::{AutomatedStationType, ChangeIndicator, Dispatcher, Report};

fn metar_remarks(body: &str) -> avwx_decoder::Remarks {
    let raw = format!("METAR KAAA 010000Z 00000KT 10SM CLR 20/20 A3000 RMK {body}");
    match Dispatcher::new().parse_auto(&raw, None).unwrap() {
        Report::Metar(m) => m.remarks.expect("remarks section present"),
        Report::Taf(_) => unreachable!(),
    }
}

#[test]
fn variable_ceiling_takes_priority_over_second_site_ceiling() {
    let remarks = metar_remarks("CIG 005V010 CIG 002 RWY11");

    let ceiling = remarks.variable_ceiling.expect("CIG nnnVnnn decoded as a variable ceiling");
    assert_eq!((ceiling.min_hundreds_ft, ceiling.max_hundreds_ft), (5, 10));

    let second_site = remarks.second_site_ceiling.expect("CIG nnn RWYnn decoded as a second-site ceiling");
    assert_eq!(second_site.height_hundreds_ft, 2);
    assert_eq!(second_site.runway, "11");

    // Both populated independently, not merged into one field.
    assert_ne!(ceiling.min_hundreds_ft, second_site.height_hundreds_ft);
}

#[test]
fn peak_wind_and_wind_shift_both_decode_from_adjacent_remarks() {
    let remarks = metar_remarks("PK WND 29033/1705 WSHFT 1710 FROPA");

    let peak = remarks.peak_wind.expect("PK WND decoded");
    assert_eq!((peak.direction, peak.speed, peak.hour, peak.minute), (290, 33, Some(17), 5));

    let shift = remarks.wind_shift.expect("WSHFT decoded");
    assert_eq!((shift.hour, shift.minute, shift.frontal_passage), (Some(17), 10, true));
}

#[test]
fn auto_station_type_is_decoded_not_dumped_as_unparsed() {
    let remarks = metar_remarks("AO2");
    assert_eq!(remarks.automated_station_type, Some(AutomatedStationType::Ao2));
    assert!(remarks.free_text.is_empty());
}

#[test]
fn fm_group_opens_a_new_period_distinct_from_becmg_tempo_prob() {
    let raw = "TAF KAAA 010000Z 0100/0206 18010KT FM011200 27015KT TEMPO 0103/0106 3SM BR";
    let r = match Dispatcher::new().parse_auto(raw, None).unwrap() {
        Report::Taf(t) => t,
        Report::Metar(_) => unreachable!(),
    };

    assert_eq!(r.periods.len(), 3);
    assert_eq!(r.periods[0].change, ChangeIndicator::Base);
    assert_eq!(r.periods[1].change, ChangeIndicator::From);
    assert!(r.periods[1].from_time.is_some());
    assert_eq!(r.periods[2].change, ChangeIndicator::Tempo);
    assert!(r.periods[2].period.is_some());
}
