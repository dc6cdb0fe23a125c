//! Core types: event record, time handling, provider links, button rendering

pub mod error;
pub mod event;
pub mod generator;
pub mod links;
pub mod logging;
pub mod provider;
pub mod render;
pub mod time;

pub use error::{LinkError, LinkResult};
pub use event::{DurationValue, EventData, EventRecord};
pub use generator::EventLinkGenerator;
pub use links::{LinkOptions, build_link};
pub use logging::{LogFormat, LoggingConfig, LoggingError, init_logging};
pub use provider::Provider;
pub use render::{ButtonStyle, html_escape, style_sheet};
pub use time::{calculate_duration, calculate_end_time, format_time, parse_datetime};
