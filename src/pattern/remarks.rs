//! Remarks-section patterns: `REMARKS` registry, spec §4.1/§4.2.

use once_cell::sync::Lazy;
use regex::Regex;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        pub(crate) static $name: Lazy<Regex> = Lazy::new(|| Regex::new($re).unwrap());
    };
}

/// OCR-tolerant `AO1`/`AO2`: a scanned `O` is sometimes misread as `0`.
pattern!(AUTO, r"^A[O0](?P<n>1|2)(?:\s+|$)");

pattern!(SEALVL_PRESS, r"^SLP(?P<val>\d{3}|NO)(?:\s+|$)");

pattern!(
    PEAK_WIND,
    r"^PK\s+WND\s+(?P<dir>\d{3})(?P<speed>\d{2,3})/(?:(?P<hour>\d{2}))?(?P<minute>\d{2})(?:\s+|$)"
);

pattern!(
    WIND_SHIFT,
    r"^WSHFT\s+(?:(?P<hour>\d{2}))?(?P<minute>\d{2})(?:\s+(?P<fropa>FROPA))?(?:\s+|$)"
);

/// Variable visibility: `VIS MINVMAX`, both sides optionally a simple
/// fraction. Mixed numbers (`1 1/2`) are not supported in this remark —
/// narrower than the body visibility grammar, same kind of deliberate
/// narrowing the lightning grammar takes (see spec §9 open questions).
pattern!(
    VPV_SV_VSL,
    r"^VIS\s+(?P<min>\d{1,2}(?:/\d{1,2})?)V(?P<max>\d{1,2}(?:/\d{1,2})?)(?:\s+|$)"
);

pattern!(
    SECTOR_VISIBILITY,
    r"^(?P<kind>SFC|TWR)\s+VIS\s+(?P<num>\d{1,2})(?:/(?P<den>\d{1,2}))?(?:\s+|$)"
);

pattern!(VARIABLE_CEILING, r"^CIG\s+(?P<min>\d{3})V(?P<max>\d{3})(?:\s+|$)");

/// Must be tried only after [`VARIABLE_CEILING`] has had a chance to match
/// — both start with `CIG`, and registry order is what disambiguates
/// `CIG 005V010` (variable) from `CIG 002 RWY11` (second site). See spec
/// §4.4 and the dedicated ordering test in `tests/registry_order.rs`.
pattern!(
    CEILING_SECOND_SITE,
    r"^CIG\s+(?P<height>\d{3})\s+(?P<rwy>RWY\d{2}[LCR]?)(?:\s+|$)"
);

pattern!(
    OBSCURATION,
    r"^(?P<phenom>FU|HZ|DU|FG|BR|VA|SA|PY)\s+(?P<amount>FEW|SCT|BKN|OVC)(?P<height>\d{3})(?:\s+|$)"
);

pattern!(
    TS_CLD_LOC,
    r"^(?P<kind>TS|CB|TCU)\s+(?P<dirs>[NSEW]{1,2}(?:-[NSEW]{1,2})*)(?:\s+MOV\s+(?P<mov>[NSEW]{1,2}))?(?:\s+|$)"
);

/// WMO cloud-type/okta group, `8/` followed by 3 or 4 digits.
pattern!(CLOUD_OKTA, r"^8/(?P<digits>\d{3,4})(?:\s+|$)");

/// Accepts `LTG DSNT ALQDS` (all quadrants); does not accept the
/// `LTG DSNT N THRU E` form. Preserved narrow on purpose — see spec §9
/// open questions.
pattern!(
    LIGHTNING,
    r"^LTG(?:\s+(?P<freq>OCNL|FRQ|CONS))?\s+(?P<loc>DSNT|VC|OHD)(?:\s+(?P<dirs>ALQDS|[NSEW]{1,2}(?:-[NSEW]{1,2})*))?(?:\s+|$)"
);

pattern!(PRES_RF_RAPIDLY, r"^PRES(?P<dir>FR|RR)(?:\s+|$)");

/// Precise hourly temperature, `TsnTTT(snTTT)?`.
pattern!(
    TEMP_1HR,
    r"^T(?P<tsign>[01])(?P<temp>\d{3})(?:(?P<dsign>[01])(?P<dew>\d{3}))?(?:\s+|$)"
);

pattern!(PRECIP_1HR, r"^P(?P<amt>\d{4}|/{4,5})(?:\s+|$)");

/// 6-hour max (`1`) / min (`2`) temperature. Repeating: both may appear.
pattern!(
    TEMP_6HR_MAX_MIN,
    r"^(?P<which>[12])(?P<sign>[01])(?P<val>\d{3})(?:\s+|$)"
);

pattern!(
    TEMP_24HR,
    r"^4(?P<maxsign>[01])(?P<maxval>\d{3})(?P<minsign>[01])(?P<minval>\d{3})(?:\s+|$)"
);

/// `5aPPP` pressure tendency: `a` is the WMO 0200 code, `PPP` tenths hPa.
pattern!(PRESS_3HR, r"^5(?P<code>[0-8])(?P<change>\d{3})(?:\s+|$)");

/// Leading `6` = 6-hour precipitation, leading `7` = 24-hour
/// precipitation (spec §4.4: the 24-hour reading wins, there is no
/// competing 3-hour interpretation of the `7` leader in this grammar).
pattern!(
    PRECIP_3HR_24HR,
    r"^(?P<period>[67])(?P<amt>\d{4}|/{4})(?:\s+|$)"
);

/// Redundant QNH echoed in remarks, hectopascals.
pattern!(PRESS_Q, r"^Q(?P<value>\d{4})(?:\s+|$)");

pattern!(
    AUTOMATED_MAINTENANCE_SIMPLE,
    r"^(?P<token>RVRNO|PWINO|PNO|FZRANO|TSNO|\$)(?:\s+|$)"
);

pattern!(
    AUTOMATED_MAINTENANCE_LOCATED,
    r"^(?P<kind>VISNO|CHINO)(?:\s+(?P<loc>RWY\d{2}[LCR]?))?(?:\s+|$)"
);

pattern!(
    HAIL_SIZE,
    r"^GR\s+(?:(?P<whole>\d{1,2})\s)?(?P<num>\d{1,2})(?:/(?P<den>\d{1,2}))?(?:\s+|$)"
);

/// One weather-phenomenon-plus-timing atom of a chained begin/end remark
/// (`FZRAB1159E1240SNB30` is three atoms once the *repeating* flag
/// re-applies this pattern). Requires at least a `B` or `E` marker so it
/// can never match a present-weather code on its own (spec §9).
///
/// The code itself is a descriptor optionally followed by one or more
/// precipitation/obscuration/other codes, OR one or more of those codes
/// with no descriptor at all — a lone descriptor like `TS` is a valid
/// standalone phenomenon (`TSB07`, spec §8 scenario S3), so the
/// descriptor can't be required to carry a trailing code the way a
/// precip-only atom (`RAB15`) does.
pattern!(
    BEGIN_END_WEATHER,
    r"^(?P<code>(?:(?:FZ|MI|PR|BC|DR|BL|SH|TS)(?:DZ|RA|SN|SG|IC|PL|GR|GS|UP|BR|FG|FU|VA|DU|SA|HZ|PY|PO|SQ|FC|SS|DS|NSW)*)|(?:DZ|RA|SN|SG|IC|PL|GR|GS|UP|BR|FG|FU|VA|DU|SA|HZ|PY|PO|SQ|FC|SS|DS|NSW)+)(?:(?:B(?P<bhh>\d{2})?(?P<bmm>\d{2}))(?:E(?P<ehh2>\d{2})?(?P<emm2>\d{2}))?|E(?P<ehh>\d{2})?(?P<emm>\d{2}))(?:\s+|$)"
);
