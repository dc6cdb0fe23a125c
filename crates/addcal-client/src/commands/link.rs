//! Single link command.

use addcal_core::{EventData, EventLinkGenerator, LinkOptions};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientResult;

/// Build the link for one provider.
///
/// The generator URL and encoding fall back to the configuration.
pub fn render(
    config: &ClientConfig,
    event: EventData,
    provider: &str,
    generator_url: Option<&str>,
    url_encode: bool,
) -> ClientResult<String> {
    let generator_url = generator_url.or(config.buttons.generator_url.as_deref());
    let options = LinkOptions {
        url_encode: url_encode || config.links.url_encode,
    };
    debug!(provider, ?generator_url, url_encode = options.url_encode, "building link");

    let generator = EventLinkGenerator::new(event).with_options(options);
    Ok(generator.link(provider, generator_url)?)
}

/// Print the link for one provider.
pub fn run(
    config: &ClientConfig,
    event: EventData,
    provider: &str,
    generator_url: Option<&str>,
    url_encode: bool,
) -> ClientResult<()> {
    let url = render(config, event, provider, generator_url, url_encode)?;
    println!("{}", url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use addcal_core::LinkError;

    fn event() -> EventData {
        EventData::new("Launch party", "2015-01-01T10:00:00").with_end("2015-01-01T12:00:00")
    }

    #[test]
    fn google_link() {
        let url = render(&ClientConfig::default(), event(), "google", None, false).unwrap();
        assert!(url.starts_with("https://www.google.com/calendar/render?action=TEMPLATE&text=Launch party&"));
    }

    #[test]
    fn configured_generator_url_is_used() {
        let mut config = ClientConfig::default();
        config.buttons.generator_url = Some("https://example.com/ics".into());
        let url = render(&config, event(), "ical", None, false).unwrap();
        assert!(url.starts_with("https://example.com/ics?startTime=20150101T100000&"));

        let url = render(&config, event(), "ical", Some("https://other/ics"), false).unwrap();
        assert!(url.starts_with("https://other/ics?startTime="));
    }

    #[test]
    fn configured_encoding_is_used() {
        let mut config = ClientConfig::default();
        config.links.url_encode = true;
        let url = render(&config, event(), "live", None, false).unwrap();
        assert!(url.contains("&summary=Launch%20party&"), "{url}");
    }

    #[test]
    fn unknown_provider() {
        let err = render(&ClientConfig::default(), event(), "other", None, false).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Link(LinkError::UnknownProvider(ref name)) if name == "other"
        ));
        assert_eq!(err.to_string(), "unknown calendar provider: other");
    }

    #[test]
    fn incomplete_event() {
        let err = render(
            &ClientConfig::default(),
            EventData::default(),
            "google",
            None,
            false,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "missing required field: start");
    }
}
