//! Per-provider "add event" URL builders.
//!
//! Field values go into the URLs exactly as stored in the record (already
//! HTML-escaped) and are not URL-encoded unless [`LinkOptions::url_encode`]
//! is set.
//!
//! # Example
//!
//! ```
//! use addcal_core::event::{EventData, EventRecord};
//! use addcal_core::links::{build_link, LinkOptions};
//! use addcal_core::provider::Provider;
//!
//! let record = EventRecord::from_data(
//!     EventData::new("Standup", "2025-02-05T10:00:00").with_duration(15),
//! );
//! let url = build_link(Provider::Google, &record, None, &LinkOptions::default()).unwrap();
//! assert!(url.contains("&dates=20250205T100000/20250205T101500"));
//! ```

use std::borrow::Cow;

use tracing::trace;

use crate::error::LinkResult;
use crate::event::EventRecord;
use crate::provider::Provider;
use crate::time::{calculate_duration, calculate_end_time, format_time, yahoo_duration};

const GOOGLE_BASE: &str = "https://www.google.com/calendar/render?action=TEMPLATE";
const LIVE_BASE: &str = "https://bay02.calendar.live.com/calendar/calendar.aspx?rru=addevent";
const YAHOO_BASE: &str = "http://calendar.yahoo.com/?v=60&view=d&type=20";

/// Prefix of inline ICS links.
pub const ICS_DATA_PREFIX: &str = "data:text/calendar;charset=utf8,";

/// Encoded newline separating the lines of an inline calendar.
pub const ICS_LINE_BREAK: &str = "%0A";

const ICS_PRODID: &str = "-//clusterdev.com/addToCalendar v1.0//EN";

/// Options for link building.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOptions {
    /// Percent-encode field values placed in query strings.
    pub url_encode: bool,
}

impl LinkOptions {
    /// Returns options with percent-encoding switched on.
    pub fn encoded() -> Self {
        Self { url_encode: true }
    }

    fn value<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.url_encode {
            urlencoding::encode(raw)
        } else {
            Cow::Borrowed(raw)
        }
    }
}

/// Builds the link for `provider`.
///
/// `generator_url` only affects ICS providers: when set and non-empty the
/// link points at that endpoint instead of carrying an inline calendar.
///
/// # Errors
///
/// Returns [`LinkError::InvalidTimeFormat`](crate::error::LinkError) if the
/// start or end of the record cannot be parsed.
pub fn build_link(
    provider: Provider,
    record: &EventRecord,
    generator_url: Option<&str>,
    options: &LinkOptions,
) -> LinkResult<String> {
    let url = match provider {
        Provider::Google => google(record, options)?,
        Provider::Yahoo => yahoo(record, options)?,
        Provider::Live => live(record, options)?,
        Provider::Ical | Provider::Outlook | Provider::Other => {
            ics(record, generator_url, options)?
        }
    };
    trace!(%provider, %url, "built calendar link");
    Ok(url)
}

/// Google Calendar template link.
pub fn google(record: &EventRecord, options: &LinkOptions) -> LinkResult<String> {
    let start = format_time(&record.start)?;
    let end = calculate_end_time(record)?;

    Ok(format!(
        "{GOOGLE_BASE}&text={}&dates={start}/{end}&details={}&location={}&sprop=&sprop=name:",
        options.value(&record.summary),
        options.value(&record.description),
        options.value(&record.location),
    ))
}

/// Outlook.com (Live) calendar link.
pub fn live(record: &EventRecord, options: &LinkOptions) -> LinkResult<String> {
    let start = format_time(&record.start)?;
    let end = calculate_end_time(record)?;

    Ok(format!(
        "{LIVE_BASE}&dtstart={start}&dtend={end}&summary={}&location={}&description={}",
        options.value(&record.summary),
        options.value(&record.location),
        options.value(&record.description),
    ))
}

/// Yahoo Calendar link; Yahoo takes a start and an `HHMM` duration.
pub fn yahoo(record: &EventRecord, options: &LinkOptions) -> LinkResult<String> {
    let start = format_time(&record.start)?;
    let duration = yahoo_duration(calculate_duration(record)?);

    Ok(format!(
        "{YAHOO_BASE}&title={}&st={start}&dur={duration}&desc={}&in_loc={}",
        options.value(&record.summary),
        options.value(&record.description),
        options.value(&record.location),
    ))
}

/// ICS link shared by iCal, Outlook and other calendar clients.
///
/// Without a generator URL the calendar is inlined as a `data:` URI with
/// lines joined by [`ICS_LINE_BREAK`]. With one, the event fields are passed
/// to the generator as query parameters.
pub fn ics(
    record: &EventRecord,
    generator_url: Option<&str>,
    options: &LinkOptions,
) -> LinkResult<String> {
    let start = format_time(&record.start)?;
    let end = calculate_end_time(record)?;

    let summary = options.value(&record.summary);
    let description = options.value(&record.description);
    let location = options.value(&record.location);

    if let Some(base) = generator_url.filter(|url| !url.is_empty()) {
        return Ok(format!(
            "{base}?startTime={start}&endTime={end}&summary={summary}&description={description}\
             &location={location}&organizer={}&organizer_email={}",
            options.value(&record.organizer),
            options.value(&record.organizer_email),
        ));
    }

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{ICS_PRODID}"),
        "BEGIN:VEVENT".to_string(),
        format!("DTSTAMP:{start}"),
        format!("DTSTART:{start}"),
        format!("DTEND:{end}"),
    ];
    if let Some((name, email)) = record.organizer() {
        lines.push(format!(
            "ORGANIZER;CN={}:MAILTO:{}",
            options.value(name),
            options.value(email)
        ));
    }
    lines.extend([
        "STATUS:CONFIRMED".to_string(),
        format!("SUMMARY:{summary}"),
        format!("DESCRIPTION:{description}"),
        format!("LOCATION:{location}"),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ]);

    Ok(format!("{ICS_DATA_PREFIX}{}", lines.join(ICS_LINE_BREAK)))
}
