//! TAF change-group patterns: `TAF_GROUPS` registry, spec §4.1/§4.2.

use once_cell::sync::Lazy;
use regex::Regex;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        pub(crate) static $name: Lazy<Regex> = Lazy::new(|| Regex::new($re).unwrap());
    };
}

pattern!(
    STATION_DAY_TIME_VALIDITY,
    r"^(?P<station>[A-Z][A-Z0-9]{3})\s+(?P<day>\d{2})(?P<hour>\d{2})(?P<minute>\d{2})Z\s+(?P<vfrom_day>\d{2})(?P<vfrom_hour>\d{2})/(?P<vto_day>\d{2})(?P<vto_hour>\d{2})(?:\s+|$)"
);

/// A bare validity-period group that can appear after an `AMD`/`COR`
/// modifier has already consumed the header's first line, e.g. a
/// re-issued validity window `0100/0206`.
pattern!(
    VALIDITY_PERIOD,
    r"^(?P<vfrom_day>\d{2})(?P<vfrom_hour>\d{2})/(?P<vto_day>\d{2})(?P<vto_hour>\d{2})(?:\s+|$)"
);

/// `BECMG`/`TEMPO`/`PROBnn` change-group header, each introducing its own
/// `Conditions` segment.
pattern!(
    GROUP_BECMG_TEMPO_PROB,
    r"^(?:PROB(?P<prob>30|40)|(?P<kind>BECMG|TEMPO))\s+(?P<from_day>\d{2})(?P<from_hour>\d{2})/(?P<to_day>\d{2})(?P<to_hour>\d{2})(?:\s+|$)"
);

/// `FMDDHHMM` — a "from" change group, replacing rather than amending the
/// prior conditions.
///
/// The legacy decoder this spec traces back to carried a
/// `GROUP_FM_PATTERN` whose source had a doubled backslash escape
/// (`\\\\d` instead of `\\d`) in this exact spot, which meant the group
/// could never match at runtime. `original_source/` did not retain the
/// file that bug lived in, so there is nothing concrete here to
/// byte-for-byte reproduce; this pattern is written correctly. See
/// `DESIGN.md`'s Open Questions section for the reasoning.
pattern!(
    GROUP_FM,
    r"^FM(?P<day>\d{2})(?P<hour>\d{2})(?P<minute>\d{2})(?:\s+|$)"
);

/// Forecast temperature extreme: `TX` (max) or `TN` (min).
pattern!(
    TEMP_EXTREME,
    r"^T(?P<kind>X|N)(?P<sign>M)?(?P<val>\d{2})/(?P<day>\d{2})(?P<hour>\d{2})Z(?:\s+|$)"
);
