//! The event link generator.
//!
//! [`EventLinkGenerator`] holds one event record and turns it into provider
//! links or a batch of HTML buttons on demand.
//!
//! # Example
//!
//! ```
//! use addcal_core::{ButtonStyle, EventData, EventLinkGenerator};
//!
//! let generator = EventLinkGenerator::new(
//!     EventData::new("Launch party", "2015-01-01T10:00:00").with_end("2015-01-01T12:00:00"),
//! );
//!
//! let html = generator
//!     .buttons(&["google", "ical"], ButtonStyle::Classes, None)
//!     .unwrap();
//! assert_eq!(html.lines().count(), 2);
//!
//! let yahoo = generator.link("yahoo", None).unwrap();
//! assert!(yahoo.contains("&dur=0200&"));
//! ```

use tracing::debug;

use crate::error::{LinkError, LinkResult};
use crate::event::{EventData, EventRecord};
use crate::links::{LinkOptions, build_link};
use crate::provider::Provider;
use crate::render::{ButtonStyle, render_button, style_sheet};
use crate::time;

/// Builds calendar links and buttons for one event.
///
/// The record is replaced wholesale by [`set_event_data`](Self::set_event_data);
/// instances are cheap, so concurrent callers should each own one.
#[derive(Debug, Clone, Default)]
pub struct EventLinkGenerator {
    record: EventRecord,
    options: LinkOptions,
}

impl EventLinkGenerator {
    /// Creates a generator holding `data`.
    pub fn new(data: EventData) -> Self {
        Self {
            record: EventRecord::from_data(data),
            options: LinkOptions::default(),
        }
    }

    /// Sets the link building options.
    #[must_use]
    pub fn with_options(mut self, options: LinkOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the stored event.
    ///
    /// Fields missing from `data` are cleared, not kept from the previous
    /// event. Text is HTML-escaped on the way in.
    pub fn set_event_data(&mut self, data: EventData) {
        self.record = EventRecord::from_data(data);
        debug!(
            summary = %self.record.summary,
            complete = self.record.is_complete(),
            "event data replaced"
        );
    }

    /// Returns the stored record.
    pub fn record(&self) -> &EventRecord {
        &self.record
    }

    /// Returns the link building options.
    pub fn options(&self) -> &LinkOptions {
        &self.options
    }

    /// Renders one button per recognised provider name, in the given order.
    ///
    /// Names are matched case-insensitively against `google`, `yahoo`, `ical`,
    /// `outlook`, `live` and `other`; anything else is skipped. Each button is
    /// followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::MissingRequiredField`] if the event lacks a
    /// summary, a start, or both end and duration, and
    /// [`LinkError::InvalidTimeFormat`] if a date-time cannot be parsed.
    pub fn buttons<S: AsRef<str>>(
        &self,
        providers: &[S],
        style: ButtonStyle,
        generator_url: Option<&str>,
    ) -> LinkResult<String> {
        self.record.validate()?;

        let mut html = String::new();
        let mut position = 0;

        for name in providers {
            let name = name.as_ref();
            let Some(provider) = Provider::from_button_name(name) else {
                debug!(name, "skipping unknown calendar provider");
                continue;
            };

            let href = build_link(provider, &self.record, generator_url, &self.options)?;
            html.push_str(&render_button(&href, provider, position, style));
            html.push('\n');
            position += 1;
        }

        Ok(html)
    }

    /// Returns the link for a single provider.
    ///
    /// `provider` must be exactly one of `google`, `yahoo`, `ical`, `outlook`
    /// or `live`. Unlike [`buttons`](Self::buttons), `other` is not accepted
    /// here.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::MissingRequiredField`] for an incomplete event,
    /// [`LinkError::UnknownProvider`] for any other name, and
    /// [`LinkError::InvalidTimeFormat`] if a date-time cannot be parsed.
    pub fn link(&self, provider: &str, generator_url: Option<&str>) -> LinkResult<String> {
        self.record.validate()?;

        let provider = Provider::from_link_name(provider)
            .ok_or_else(|| LinkError::UnknownProvider(provider.to_string()))?;

        build_link(provider, &self.record, generator_url, &self.options)
    }

    /// Returns the link for a provider given by type.
    ///
    /// # Errors
    ///
    /// Same as [`link`](Self::link), minus the unknown provider case.
    pub fn link_for(&self, provider: Provider, generator_url: Option<&str>) -> LinkResult<String> {
        self.record.validate()?;
        build_link(provider, &self.record, generator_url, &self.options)
    }

    /// Returns the stylesheet for class-styled buttons. Needs no event.
    pub fn style_sheet() -> &'static str {
        style_sheet()
    }

    /// Returns the event end as `YYYYMMDDTHHMMSS`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidTimeFormat`] if a date-time cannot be parsed.
    pub fn calculate_end_time(&self) -> LinkResult<String> {
        time::calculate_end_time(&self.record)
    }

    /// Returns the event length in whole minutes.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidTimeFormat`] if a date-time cannot be parsed.
    pub fn calculate_duration(&self) -> LinkResult<i64> {
        time::calculate_duration(&self.record)
    }
}
