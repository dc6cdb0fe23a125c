//! Button markup command.

use addcal_core::{ButtonStyle, EventData, EventLinkGenerator, LinkOptions};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientResult;

/// Command-line switches for the buttons command.
#[derive(Debug, Clone, Default)]
pub struct ButtonFlags {
    /// Use inline styles.
    pub inline_style: bool,
    /// ICS generator endpoint.
    pub generator_url: Option<String>,
    /// Percent-encode field values.
    pub url_encode: bool,
    /// Prefix a `<style>` block.
    pub with_style: bool,
}

/// Build button markup for the given providers.
///
/// An empty provider list falls back to the configured one; switches are
/// combined with the configuration.
pub fn render(
    config: &ClientConfig,
    event: EventData,
    providers: &[String],
    flags: &ButtonFlags,
) -> ClientResult<String> {
    let providers = if providers.is_empty() {
        config.buttons.providers.as_slice()
    } else {
        providers
    };
    let style = ButtonStyle::from_inline(flags.inline_style || config.buttons.inline_style);
    let generator_url = flags
        .generator_url
        .as_deref()
        .or(config.buttons.generator_url.as_deref());
    let options = LinkOptions {
        url_encode: flags.url_encode || config.links.url_encode,
    };
    debug!(?providers, ?style, ?generator_url, "building buttons");

    let generator = EventLinkGenerator::new(event).with_options(options);
    let buttons = generator.buttons(providers, style, generator_url)?;

    if flags.with_style && style == ButtonStyle::Classes {
        Ok(format!(
            "<style>{}</style>\n{}",
            EventLinkGenerator::style_sheet(),
            buttons
        ))
    } else {
        Ok(buttons)
    }
}

/// Print button markup for the given providers.
pub fn run(
    config: &ClientConfig,
    event: EventData,
    providers: &[String],
    flags: &ButtonFlags,
) -> ClientResult<()> {
    let html = render(config, event, providers, flags)?;
    print!("{}", html);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    fn event() -> EventData {
        EventData::new("Launch party", "2015-01-01T10:00:00").with_duration(20)
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_to_configured_providers() {
        let html = render(&ClientConfig::default(), event(), &[], &ButtonFlags::default()).unwrap();
        assert_eq!(html.lines().count(), 6);
        assert!(html.contains("btn-6\">Other<"));
    }

    #[test]
    fn explicit_providers_win() {
        let html = render(
            &ClientConfig::default(),
            event(),
            &names(&["yahoo", "nope"]),
            &ButtonFlags::default(),
        )
        .unwrap();
        assert_eq!(html.lines().count(), 1);
        assert!(html.contains("&dur=0020&"));
    }

    #[test]
    fn with_style_prefixes_stylesheet() {
        let flags = ButtonFlags {
            with_style: true,
            ..Default::default()
        };
        let html = render(&ClientConfig::default(), event(), &names(&["google"]), &flags).unwrap();
        assert!(html.starts_with("<style>.add-event-btn{"));
        assert!(html.contains("</style>\n<a href="));
    }

    #[test]
    fn inline_style_from_config_skips_stylesheet() {
        let mut config = ClientConfig::default();
        config.buttons.inline_style = true;
        let flags = ButtonFlags {
            with_style: true,
            ..Default::default()
        };
        let html = render(&config, event(), &names(&["google"]), &flags).unwrap();
        assert!(html.starts_with("<a href="));
        assert!(html.contains("border-top: 4px solid #059BF5"));
    }

    #[test]
    fn missing_summary() {
        let mut data = event();
        data.summary = None;
        let err = render(&ClientConfig::default(), data, &[], &ButtonFlags::default()).unwrap_err();
        assert!(matches!(err, ClientError::Link(ref e) if e.is_sentinel()));
    }
}
