//! Event types for link generation.
//!
//! This module provides the two shapes an event takes:
//! - [`EventData`]: the loose input map, as read from a file or built in code
//! - [`EventRecord`]: the stored, HTML-escaped record the link builders read

use serde::{Deserialize, Serialize};

use crate::error::{LinkError, LinkResult};
use crate::render::html_escape;

/// Duration used when none is given or the given one is not numeric.
pub const DEFAULT_DURATION_MINUTES: i64 = 30;

/// An event duration in minutes, as a number or as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    /// A numeric duration.
    Number(f64),
    /// A textual duration; only numeric text is honoured.
    Text(String),
}

impl DurationValue {
    /// Returns the textual form stored in the record.
    ///
    /// Whole numbers lose their fractional part (`20.0` becomes `"20"`).
    pub fn to_text(&self) -> String {
        match self {
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 => format!("{}", *n as i64),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<i64> for DurationValue {
    fn from(minutes: i64) -> Self {
        Self::Number(minutes as f64)
    }
}

impl From<i32> for DurationValue {
    fn from(minutes: i32) -> Self {
        Self::Number(f64::from(minutes))
    }
}

impl From<&str> for DurationValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DurationValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Raw event fields as supplied by the caller.
///
/// Every key is optional. Unknown keys are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventData {
    /// Event title.
    pub summary: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Where the event takes place.
    pub location: Option<String>,
    /// Start date-time.
    pub start: Option<String>,
    /// End date-time; takes precedence over `duration`.
    pub end: Option<String>,
    /// Duration in minutes, used only when `end` is absent.
    pub duration: Option<DurationValue>,
    /// Organizer display name.
    pub organizer: Option<String>,
    /// Organizer email address.
    #[serde(alias = "organizerEmail")]
    pub organizer_email: Option<String>,
}

impl EventData {
    /// Creates event data with a summary and start time.
    pub fn new(summary: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            start: Some(start.into()),
            ..Default::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the end time.
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Sets the duration.
    pub fn with_duration(mut self, duration: impl Into<DurationValue>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Sets the organizer name and email.
    pub fn with_organizer(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.organizer = Some(name.into());
        self.organizer_email = Some(email.into());
        self
    }

    /// Overlays every field set in `other` onto `self`.
    pub fn merge(mut self, other: EventData) -> Self {
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            };
        }
        overlay!(
            summary,
            description,
            location,
            start,
            end,
            duration,
            organizer,
            organizer_email
        );
        self
    }
}

/// The stored event record.
///
/// Every field holds HTML-escaped text; absent input fields are empty strings.
/// Escaping happens once, when the record is built from [`EventData`], so
/// building a record from already escaped text escapes it again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRecord {
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start: String,
    pub end: String,
    /// Duration text as given (numbers in their textual form).
    pub duration: String,
    pub organizer: String,
    pub organizer_email: String,
}

impl EventRecord {
    /// Builds a record from input data, escaping every field.
    pub fn from_data(data: EventData) -> Self {
        let escape = |value: Option<String>| value.as_deref().map(html_escape).unwrap_or_default();

        Self {
            summary: escape(data.summary),
            description: escape(data.description),
            location: escape(data.location),
            start: escape(data.start),
            end: escape(data.end),
            duration: escape(data.duration.map(|d| d.to_text())),
            organizer: escape(data.organizer),
            organizer_email: escape(data.organizer_email),
        }
    }

    /// Checks the fields every link needs: start, summary and an end or duration.
    pub fn validate(&self) -> LinkResult<()> {
        if self.start.is_empty() {
            return Err(LinkError::MissingRequiredField { field: "start" });
        }
        if self.summary.is_empty() {
            return Err(LinkError::MissingRequiredField { field: "summary" });
        }
        if self.end.is_empty() && self.duration.is_empty() {
            return Err(LinkError::MissingRequiredField {
                field: "end or duration",
            });
        }
        Ok(())
    }

    /// Returns `true` if [`validate`](Self::validate) passes.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns `true` if an end time was given.
    pub fn has_end(&self) -> bool {
        !self.end.is_empty()
    }

    /// Returns the duration in whole minutes, or 30 when it is not numeric.
    pub fn duration_minutes(&self) -> i64 {
        self.duration
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|minutes| minutes.is_finite())
            .map(|minutes| minutes.trunc() as i64)
            .unwrap_or(DEFAULT_DURATION_MINUTES)
    }

    /// Returns the organizer name and email if both are set.
    pub fn organizer(&self) -> Option<(&str, &str)> {
        if self.organizer.is_empty() || self.organizer_email.is_empty() {
            None
        } else {
            Some((&self.organizer, &self.organizer_email))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_empty() {
        let record = EventRecord::from_data(EventData::new("Standup", "2025-02-05T10:00:00"));
        assert_eq!(record.summary, "Standup");
        assert_eq!(record.start, "2025-02-05T10:00:00");
        assert!(record.description.is_empty());
        assert!(record.end.is_empty());
        assert!(record.duration.is_empty());
        assert!(record.organizer.is_empty());
    }

    #[test]
    fn escapes_on_ingestion() {
        let data = EventData::new("Tom & Jerry's <show>", "2025-02-05T10:00:00")
            .with_description("say \"hi\"");
        let record = EventRecord::from_data(data);
        assert_eq!(record.summary, "Tom &amp; Jerry&#039;s &lt;show&gt;");
        assert_eq!(record.description, "say &quot;hi&quot;");
    }

    #[test]
    fn re_ingesting_escaped_text_double_escapes() {
        let first = EventRecord::from_data(EventData::new("R&D", "2025-02-05T10:00:00"));
        assert_eq!(first.summary, "R&amp;D");

        let second = EventRecord::from_data(EventData::new(first.summary, first.start));
        assert_eq!(second.summary, "R&amp;amp;D");
    }

    #[test]
    fn validate_reports_missing_fields() {
        let record = EventRecord::from_data(EventData::default());
        assert_eq!(
            record.validate(),
            Err(LinkError::MissingRequiredField { field: "start" })
        );

        let mut data = EventData::new("", "2025-02-05T10:00:00").with_duration(20);
        data.summary = None;
        assert_eq!(
            EventRecord::from_data(data).validate(),
            Err(LinkError::MissingRequiredField { field: "summary" })
        );

        let record = EventRecord::from_data(EventData::new("Standup", "2025-02-05T10:00:00"));
        assert_eq!(
            record.validate(),
            Err(LinkError::MissingRequiredField {
                field: "end or duration"
            })
        );
    }

    #[test]
    fn complete_with_end_or_duration() {
        let with_end = EventData::new("A", "2025-02-05T10:00:00").with_end("2025-02-05T11:00:00");
        assert!(EventRecord::from_data(with_end).is_complete());

        let with_duration = EventData::new("A", "2025-02-05T10:00:00").with_duration("45");
        assert!(EventRecord::from_data(with_duration).is_complete());
    }

    #[test]
    fn duration_minutes_coercion() {
        let minutes = |d: DurationValue| {
            EventRecord::from_data(EventData::new("A", "2025-02-05").with_duration(d))
                .duration_minutes()
        };
        assert_eq!(minutes(DurationValue::from("20")), 20);
        assert_eq!(minutes(DurationValue::from(" 45 ")), 45);
        assert_eq!(minutes(DurationValue::Number(90.0)), 90);
        assert_eq!(minutes(DurationValue::Number(20.9)), 20);
        assert_eq!(minutes(DurationValue::from("an hour")), 30);
        assert_eq!(minutes(DurationValue::from("NaN")), 30);

        let record = EventRecord::from_data(EventData::new("A", "2025-02-05"));
        assert_eq!(record.duration_minutes(), DEFAULT_DURATION_MINUTES);
    }

    #[test]
    fn numeric_duration_text() {
        assert_eq!(DurationValue::Number(20.0).to_text(), "20");
        assert_eq!(DurationValue::Number(12.5).to_text(), "12.5");
        assert_eq!(DurationValue::from("15").to_text(), "15");
    }

    #[test]
    fn organizer_requires_name_and_email() {
        let data = EventData::new("A", "2025-02-05").with_organizer("Ops", "ops@example.com");
        assert_eq!(
            EventRecord::from_data(data).organizer(),
            Some(("Ops", "ops@example.com"))
        );

        let mut data = EventData::new("A", "2025-02-05");
        data.organizer = Some("Ops".into());
        assert_eq!(EventRecord::from_data(data).organizer(), None);
    }

    #[test]
    fn deserialize_accepts_both_email_keys_and_numeric_duration() {
        let json = r#"{"summary":"A","start":"2025-02-05","duration":20,"organizerEmail":"a@b.c"}"#;
        let data: EventData = serde_json::from_str(json).unwrap();
        assert_eq!(data.duration, Some(DurationValue::Number(20.0)));
        assert_eq!(data.organizer_email.as_deref(), Some("a@b.c"));

        let json = r#"{"summary":"A","duration":"20","organizer_email":"x@y.z","color":"red"}"#;
        let data: EventData = serde_json::from_str(json).unwrap();
        assert_eq!(data.duration, Some(DurationValue::from("20")));
        assert_eq!(data.organizer_email.as_deref(), Some("x@y.z"));
    }

    #[test]
    fn merge_overlays_set_fields() {
        let base = EventData::new("Base", "2025-02-05T10:00:00").with_location("Room 1");
        let mut overrides = EventData::default();
        overrides.summary = Some("Override".into());
        overrides.end = Some("2025-02-05T11:00:00".into());

        let merged = base.merge(overrides);
        assert_eq!(merged.summary.as_deref(), Some("Override"));
        assert_eq!(merged.location.as_deref(), Some("Room 1"));
        assert_eq!(merged.end.as_deref(), Some("2025-02-05T11:00:00"));
    }
}
