//! Loading event data from files.
//!
//! Files ending in `.json` are read as JSON, anything else as TOML. Both use
//! the keys of [`EventData`]:
//!
//! ```toml
//! summary = "Launch party"
//! start = "2015-01-01T10:00:00"
//! end = "2015-01-01T12:00:00"
//! organizer = "ClusterDev"
//! organizer_email = "info@clusterdev.com"
//! ```

use std::path::Path;

use addcal_core::EventData;
use tracing::debug;

use crate::cli::EventArgs;
use crate::error::{ClientError, ClientResult};

/// Reads event data from a TOML or JSON file.
pub fn load(path: &Path) -> ClientResult<EventData> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ClientError::Event(format!("failed to read {}: {}", path.display(), e))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let data: EventData = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        toml::from_str(&content).map_err(|e| e.to_string())
    }
    .map_err(|e| ClientError::Event(format!("failed to parse {}: {}", path.display(), e)))?;

    debug!(path = %path.display(), "loaded event file");
    Ok(data)
}

/// Builds the event from the optional file and the field flags.
pub fn resolve(args: &EventArgs) -> ClientResult<EventData> {
    let base = match args.event {
        Some(ref path) => load(path)?,
        None => EventData::default(),
    };
    Ok(base.merge(args.overrides()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use addcal_core::DurationValue;
    use std::io::Write;

    fn write_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_toml() {
        let file = write_file(
            ".toml",
            r#"
summary = "Launch party"
start = "2015-01-01T10:00:00"
duration = 20
organizer_email = "info@clusterdev.com"
"#,
        );
        let data = load(file.path()).unwrap();
        assert_eq!(data.summary.as_deref(), Some("Launch party"));
        assert_eq!(data.duration, Some(DurationValue::Number(20.0)));
        assert_eq!(data.organizer_email.as_deref(), Some("info@clusterdev.com"));
    }

    #[test]
    fn load_json() {
        let file = write_file(
            ".json",
            r#"{"summary": "Launch party", "start": "2015-01-01T10:00:00", "duration": "45", "organizerEmail": "a@b.c"}"#,
        );
        let data = load(file.path()).unwrap();
        assert_eq!(data.duration, Some(DurationValue::from("45")));
        assert_eq!(data.organizer_email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn load_malformed_file() {
        let file = write_file(".json", "{ not json");
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, ClientError::Event(_)));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn flags_override_file() {
        let file = write_file(
            ".toml",
            "summary = \"From file\"\nstart = \"2015-01-01T10:00:00\"\nlocation = \"Main hall\"\n",
        );
        let args = EventArgs {
            event: Some(file.path().to_path_buf()),
            summary: Some("From flag".into()),
            duration: Some("15".into()),
            ..Default::default()
        };
        let data = resolve(&args).unwrap();
        assert_eq!(data.summary.as_deref(), Some("From flag"));
        assert_eq!(data.location.as_deref(), Some("Main hall"));
        assert_eq!(data.duration, Some(DurationValue::from("15")));
    }

    #[test]
    fn flags_only() {
        let args = EventArgs {
            summary: Some("Standup".into()),
            start: Some("2015-01-01T10:00:00".into()),
            ..Default::default()
        };
        let data = resolve(&args).unwrap();
        assert_eq!(data, EventData::new("Standup", "2015-01-01T10:00:00"));
    }
}
