//! Main-body (and header) patterns: `MAIN` registry, spec §4.1/§4.2.

use once_cell::sync::Lazy;
use regex::Regex;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        pub(crate) static $name: Lazy<Regex> = Lazy::new(|| Regex::new($re).unwrap());
    };
}

// ---- Header ----------------------------------------------------------

pattern!(
    MONTH_DAY_YEAR,
    r"^(?P<year>\d{4})/(?P<month>\d{2})/(?P<day>\d{2})\s+(?P<hour>\d{2}):(?P<minute>\d{2})(?:\s+|$)"
);

pattern!(REPORT_TYPE, r"^(?P<kind>METAR|SPECI|TAF)(?:\s+|$)");

pattern!(
    STATION_DAY_TIME,
    r"^(?P<station>[A-Z][A-Z0-9]{3})\s+(?P<day>\d{2})(?P<hour>\d{2})(?P<minute>\d{2})Z(?:\s+|$)"
);

pattern!(
    REPORT_MODIFIER,
    r"^(?P<modifier>AMD|AUTO|CORR?|RTD|CC[A-G]|NIL|FINO|TEST)(?:\s+|$)"
);

// ---- Main body ---------------------------------------------------------

pattern!(
    WIND,
    r"^(?P<dir>\d{3}|VRB|///)(?P<speed>P?\d{2,3}|//)(?:G(?P<gust>P?\d{2,3}))?(?P<unit>KT|MPS|KMH)?(?:\s+(?P<vrb_from>\d{3})V(?P<vrb_to>\d{3}))?(?:\s+|$)"
);

pattern!(VISIBILITY_CAVOK, r"^CAVOK(?:\s+|$)");
pattern!(VISIBILITY_MISSING, r"^////(?:\s+|$)");
pattern!(
    VISIBILITY_SM_MIXED,
    r"^(?P<ineq>[MP])?(?P<whole>\d{1,2})\s(?P<num>\d{1,2})/(?P<den>\d{1,2})SM(?:\s+|$)"
);
pattern!(
    VISIBILITY_SM_FRACTION,
    r"^(?P<ineq>[MP])?(?P<num>\d{1,2})/(?P<den>\d{1,2})SM(?:\s+|$)"
);
pattern!(
    VISIBILITY_SM_WHOLE,
    r"^(?P<ineq>[MP])?(?P<whole>\d{1,4})SM(?:\s+|$)"
);
pattern!(
    VISIBILITY_METERS,
    r"^(?P<ineq>[MP])?(?P<value>\d{4})(?P<ndv>NDV)?(?:\s+|$)"
);

/// Same grammar as [`VISIBILITY_METERS`], but requires at least one more
/// token to follow rather than allowing end-of-residue. Used only in
/// `MAIN_REGISTRY`, which also carries [`ALTIMETER`]'s bare-4-digit `heur`
/// branch (TAF periods have no altimeter group, so `VISIBILITY_METERS`
/// itself is unambiguous there). A METAR body's own visibility group is
/// never its last token — temperature/dewpoint and an altimeter group
/// always follow it — so requiring trailing content here is exactly what
/// lets `ALTIMETER`'s end-anchored `heur` branch claim a genuinely
/// trailing bare group instead of `VISIBILITY_METERS` claiming it first
/// by registry order.
pattern!(
    VISIBILITY_METERS_BODY,
    r"^(?P<ineq>[MP])?(?P<value>\d{4})(?P<ndv>NDV)?\s+"
);

pattern!(
    RUNWAY,
    r"^R(?P<runway>\d{2}[LCR]?)/(?:(?P<rvrno>RVRNO)|(?P<clrd>CLRD)|(?P<ineq1>[MP])?(?P<low>\d{4})(?:V(?P<ineq2>[MP])?(?P<high>\d{4}))?(?P<ft>FT)?)(?P<trend>[NUD])?(?:\s+|$)"
);

pattern!(
    PRESENT_WEATHER,
    r"^(?P<intensity>[-+])?(?P<vicinity>VC)?(?P<descriptor>MI|PR|BC|DR|BL|SH|TS|FZ)?(?P<phenomena>(?:DZ|RA|SN|SG|IC|PL|GR|GS|UP|BR|FG|FU|VA|DU|SA|HZ|PY|PO|SQ|FC|SS|DS){1,4})(?:\s+|$)"
);

pattern!(
    SKY_CONDITION,
    r"^(?P<coverage>FEW|SCT|BKN|OVC|VV|SKC|CLR|NSC|NCD|0VC|SCK)(?P<height>\d{3}|///)?(?P<type>CB|TCU|ACC|///)?(?:\s+|$)"
);

pattern!(
    TEMP_DEWPOINT,
    r"^(?P<temp>M?\d{2}|//|XX|MM)/(?P<dew>M?\d{2}|//|XX|MM)?(?:\s+|$)"
);

// The third alternative (`heur`) is the bare 4-digit form with neither a
// unit prefix nor an `INS` suffix: spec §4.4's value-range heuristic
// ([2000,3999] => inHg, [1000,1999] or <=999 => hPa) is the only thing
// that tells its unit apart. It's anchored on end-of-residue rather than
// the `\s+|$` every other branch (and `VISIBILITY_METERS`) accepts,
// because a bare 4-digit group earlier in the body is visibility, not an
// altimeter — only one with nothing left after it (the METAR body's last
// element before `RMK`/end) can be the bare-altimeter form. See
// `VISIBILITY_METERS_BODY`'s doc comment for the matching half of this.
pattern!(
    ALTIMETER,
    r"^(?:(?P<prefix>AA|A|QNH|Q)(?P<value>[0-9O]{4}|/{4})(?:\s+|$)|(?P<bare>[0-9O]{4})(?P<ins>INS)(?:\s+|$)|(?P<heur>[0-9O]{4})\s*$)"
);

pattern!(NO_SIG_CHANGE, r"^NOSIG(?:\s+|$)");
