use regex::Captures;

use crate::builder::RemarksBuilder;
use crate::context::ParseContext;
use crate::error::DecodeOutcome;
use crate::model::WeatherEvent;

use DecodeOutcome::Applied;

fn pair(hour: Option<regex::Match<'_>>, minute: Option<regex::Match<'_>>) -> Option<(Option<u32>, u32)> {
    let minute: u32 = minute?.as_str().parse().ok()?;
    let hour = hour.and_then(|m| m.as_str().parse().ok());
    Some((hour, minute))
}

/// One atom of a chained begin/end weather remark
/// (`FZRAB1159E1240SNB30` decodes as two calls into this function, thanks
/// to [`crate::pattern::remarks::BEGIN_END_WEATHER`]'s `repeats` flag).
pub(crate) fn begin_end_weather(caps: &Captures<'_>, b: &mut RemarksBuilder, _ctx: &mut ParseContext) -> DecodeOutcome {
    let begin = pair(caps.name("bhh"), caps.name("bmm"));
    let end = pair(caps.name("ehh"), caps.name("emm"))
        .or_else(|| pair(caps.name("ehh2"), caps.name("emm2")));

    b.weather_events.push(WeatherEvent {
        code: caps["code"].to_string(),
        begin,
        end,
    });
    Applied
}
