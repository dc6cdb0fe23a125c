//! Calendar providers a link can be built for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LinkError;

/// A calendar provider with its own "add event" URL scheme.
///
/// `Ical`, `Outlook` and `Other` all receive the same ICS link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Yahoo,
    Ical,
    Outlook,
    Live,
    Other,
}

impl Provider {
    /// Every provider, in button order.
    pub const ALL: [Provider; 6] = [
        Self::Google,
        Self::Yahoo,
        Self::Ical,
        Self::Outlook,
        Self::Live,
        Self::Other,
    ];

    /// Returns the lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Yahoo => "yahoo",
            Self::Ical => "ical",
            Self::Outlook => "outlook",
            Self::Live => "live",
            Self::Other => "other",
        }
    }

    /// Returns the button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Yahoo => "Yahoo",
            Self::Ical => "iCal",
            Self::Outlook => "Outlook",
            Self::Live => "Live",
            Self::Other => "Other",
        }
    }

    /// Returns `true` if this provider is served an ICS link.
    pub fn uses_ics(&self) -> bool {
        matches!(self, Self::Ical | Self::Outlook | Self::Other)
    }

    /// Resolves a button name, ignoring case.
    pub fn from_button_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
    }

    /// Resolves a single-link provider name.
    ///
    /// Matching is exact and `other` is not accepted.
    pub fn from_link_name(name: &str) -> Option<Self> {
        match name {
            "google" => Some(Self::Google),
            "yahoo" => Some(Self::Yahoo),
            "ical" => Some(Self::Ical),
            "outlook" => Some(Self::Outlook),
            "live" => Some(Self::Live),
            _ => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_button_name(s).ok_or_else(|| LinkError::UnknownProvider(s.to_string()))
    }
}
