//! HTML rendering for "add to calendar" buttons.
//!
//! Buttons come in two flavours:
//! - **Classes**: `add-event-btn btn-N` classes styled by [`style_sheet`]
//! - **Inline**: self-contained inline styles, usable where no stylesheet
//!   can be shipped (e.g. inside emails)

use crate::provider::Provider;

mod entities;

/// Top border colours, one per button position.
pub const PALETTE: [&str; 6] = [
    "#059BF5", "#FF7837", "#14ABA7", "#A2A2A2", "#C4C400", "#FF77BB",
];

/// Inline declaration block shared by every inline-styled button, minus the
/// top border colour.
const INLINE_BUTTON_STYLE: &str = "display: inline-block; line-height: 110%; \
    background: #F3F3F3 repeat-x; text-decoration: none; \
    font-family: Arial, Helvetica, sans-serif; font-size: 14px; font-weight: 300; \
    color: #303030; cursor: pointer; padding: 7px 15px 8px 14px; \
    border: 1px solid #E5E5E5; text-align: center; min-width: 50px; \
    margin: 0px 2px 0px 0px; -moz-border-radius: 4px; -webkit-border-radius: 4px; \
    border-top: 4px solid ";

const STYLE_SHEET: &str = ".add-event-btn{ display: inline-block; position: relative; \
    line-height: 110%; background: #F3F3F3 repeat-x; text-decoration: none;  \
    font-family: Arial, Helvetica, sans-serif; font-size: 14px; font-weight: 300;  \
    color: #303030; cursor: pointer; padding: 7px 15px 8px 14px; \
    border: 1px solid #E5E5E5;  text-align: center; min-width: 50px;  \
    margin: 0px 2px 0px 0px; -moz-border-radius: 4px; -webkit-border-radius: 4px; }  \
    .add-event-btn:hover{ background: #EBEBEB; }  \
    .btn-1{ border-top: 4px solid #059BF5; }  \
    .btn-2{ border-top: 4px solid #FF7837; }  \
    .btn-3{ border-top: 4px solid #14ABA7; }  \
    .btn-4{ border-top: 4px solid #A2A2A2; }  \
    .btn-5{ border-top: 4px solid #C4C400; } \
    .btn-6{ border-top: 4px solid #FF77BB; }";

/// How buttons are styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    /// `add-event-btn btn-N` classes; pair with [`style_sheet`].
    #[default]
    Classes,
    /// Inline `style` attributes.
    Inline,
}

impl ButtonStyle {
    /// Maps the boolean "inline style" switch onto a style.
    pub fn from_inline(inline: bool) -> Self {
        if inline { Self::Inline } else { Self::Classes }
    }
}

/// Returns the stylesheet for class-styled buttons.
///
/// Defines `.add-event-btn` and the `.btn-1` to `.btn-6` border colours.
/// Meant to be placed inside a `<style>` element.
pub fn style_sheet() -> &'static str {
    STYLE_SHEET
}

/// Returns the top border colour for a zero-based button position.
pub fn palette_color(position: usize) -> &'static str {
    PALETTE[position % PALETTE.len()]
}

/// Renders one button linking to `href`.
///
/// `position` is the zero-based index among rendered buttons. `href` is
/// inserted as given.
pub fn render_button(href: &str, provider: Provider, position: usize, style: ButtonStyle) -> String {
    let label = provider.label();
    match style {
        ButtonStyle::Inline => format!(
            "<a href=\"{href}\" target=\"_blank\"><span style=\"{INLINE_BUTTON_STYLE}{}\">{label}</span></a>",
            palette_color(position)
        ),
        ButtonStyle::Classes => format!(
            "<a href=\"{href}\" target=\"_blank\"><span class=\"add-event-btn btn-{}\">{label}</span></a>",
            position + 1
        ),
    }
}

/// Replaces characters with HTML entities.
///
/// Markup characters and both quote styles are escaped, and so is every
/// character with an HTML 4.01 named entity (`é` becomes `&eacute;`).
/// Other characters pass through.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c if c.is_ascii() => out.push(c),
            c => match entities::name_of(c) {
                Some(name) => {
                    out.push('&');
                    out.push_str(name);
                    out.push(';');
                }
                None => out.push(c),
            },
        }
    }
    out
}


#[cfg(test)]
mod tests {
    use super::*;

    mod escaping {
        use super::*;

        #[test]
        fn escapes_special_chars() {
            assert_eq!(
                html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
                "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
            );
        }

        #[test]
        fn plain_text_unchanged() {
            assert_eq!(html_escape("Team Standup 2025"), "Team Standup 2025");
        }

        #[test]
        fn named_entities_for_non_ascii() {
            assert_eq!(html_escape("Café €5"), "Caf&eacute; &euro;5");
            assert_eq!(html_escape("Ærø – “quoted” © 2015"), "&AElig;r&oslash; &ndash; &ldquo;quoted&rdquo; &copy; 2015");
            assert_eq!(html_escape("\u{a0}"), "&nbsp;");
        }

        #[test]
        fn characters_without_entity_pass_through() {
            assert_eq!(html_escape("Łódź 東京 🎉"), "Ł&oacute;dź 東京 🎉");
        }

        #[test]
        fn entity_table_is_sorted() {
            assert!(entities::NAMED.windows(2).all(|w| w[0].0 < w[1].0));
        }

        #[test]
        fn not_idempotent() {
            assert_eq!(html_escape(&html_escape("&")), "&amp;amp;");
        }
    }

    mod stylesheet {
        use super::*;

        #[test]
        fn defines_all_classes() {
            let css = style_sheet();
            assert!(css.starts_with(".add-event-btn{ display: inline-block;"));
            assert!(css.contains(".add-event-btn:hover{ background: #EBEBEB; }"));
            for (i, color) in PALETTE.iter().enumerate() {
                let rule = format!(".btn-{}{{ border-top: 4px solid {}; }}", i + 1, color);
                assert!(css.contains(&rule), "missing {rule}");
            }
        }
    }

    mod buttons {
        use super::*;

        #[test]
        fn class_button_numbers_from_one() {
            assert_eq!(
                render_button("https://x", Provider::Ical, 0, ButtonStyle::Classes),
                "<a href=\"https://x\" target=\"_blank\"><span class=\"add-event-btn btn-1\">iCal</span></a>"
            );
        }

        #[test]
        fn inline_button_uses_palette() {
            let html = render_button("https://x", Provider::Yahoo, 1, ButtonStyle::Inline);
            assert!(html.starts_with("<a href=\"https://x\" target=\"_blank\"><span style=\"display: inline-block; line-height: 110%;"));
            assert!(html.ends_with("border-top: 4px solid #FF7837\">Yahoo</span></a>"));
        }

        #[test]
        fn palette_cycles() {
            assert_eq!(palette_color(0), "#059BF5");
            assert_eq!(palette_color(5), "#FF77BB");
            assert_eq!(palette_color(6), "#059BF5");
        }

        #[test]
        fn style_from_flag() {
            assert_eq!(ButtonStyle::from_inline(true), ButtonStyle::Inline);
            assert_eq!(ButtonStyle::from_inline(false), ButtonStyle::Classes);
            assert_eq!(ButtonStyle::default(), ButtonStyle::Classes);
        }
    }
}
