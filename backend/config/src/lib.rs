//! Environment-driven configuration.
//!
//! Loaded once at startup. Optional credential groups (AI, transport media,
//! object storage) disable their dependent feature when absent rather than
//! failing startup; only the item store settings are required.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use tracing::warn;

/// Runtime configuration for the linkdrop gateway.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    /// Item store collection URL.
    pub store_url: String,
    /// Static API key sent on every store call.
    pub store_api_key: String,
    /// AI completion credential; enrichment is skipped when absent.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    /// Transport media credentials; media saves fail fast when absent.
    pub twilio_account_sid: Option<String>,
    pub twilio_auth_token: Option<String>,
    /// Object storage credentials; media saves fail fast when absent.
    pub cloudinary_cloud_name: Option<String>,
    pub cloudinary_api_key: Option<String>,
    pub cloudinary_api_secret: Option<String>,
    pub media_folder: String,
    /// Sender number -> display name. Injected into the router, never
    /// mutated at request time.
    pub sender_names: HashMap<String, String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let config = Self {
            bind_address: std::env::var("LINKDROP_BIND").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            store_url: std::env::var("STORE_URL").context("STORE_URL is required")?,
            store_api_key: std::env::var("STORE_API_KEY").context("STORE_API_KEY is required")?,
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            twilio_account_sid: std::env::var("TWILIO_ACCOUNT_SID").ok(),
            twilio_auth_token: std::env::var("TWILIO_AUTH_TOKEN").ok(),
            cloudinary_cloud_name: std::env::var("CLOUDINARY_CLOUD_NAME").ok(),
            cloudinary_api_key: std::env::var("CLOUDINARY_API_KEY").ok(),
            cloudinary_api_secret: std::env::var("CLOUDINARY_API_SECRET").ok(),
            media_folder: std::env::var("MEDIA_FOLDER")
                .unwrap_or_else(|_| "whatsapp-screenshots".to_string()),
            sender_names: parse_sender_names(std::env::var("SENDER_NAMES").ok().as_deref())?,
        };

        if config.openai_api_key.is_none() {
            warn!("OPENAI_API_KEY not set; AI enrichment is disabled");
        }
        if config.twilio_account_sid.is_none() || config.twilio_auth_token.is_none() {
            warn!("transport media credentials not set; media saves will fail");
        }

        Ok(config)
    }
}

/// Parse the `PORT` value. Absent means the default; present but unparsable
/// is a startup error, not a silent fallback.
fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(3000),
        Some(raw) => raw
            .parse()
            .with_context(|| format!("PORT is not a valid port number: {raw:?}")),
    }
}

/// Parse the `SENDER_NAMES` value: a JSON object mapping sender numbers to
/// display names.
fn parse_sender_names(raw: Option<&str>) -> Result<HashMap<String, String>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(HashMap::new());
    };

    let value: serde_json::Value =
        serde_json::from_str(raw).context("SENDER_NAMES is not valid JSON")?;
    let serde_json::Value::Object(map) = value else {
        bail!("SENDER_NAMES must be a JSON object of number -> name");
    };

    let mut names = HashMap::new();
    for (number, name) in map {
        match name {
            serde_json::Value::String(name) => {
                names.insert(number, name);
            }
            other => bail!("SENDER_NAMES[{number}] must be a string, got {other}"),
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sender_names_is_empty_map() {
        assert!(parse_sender_names(None).unwrap().is_empty());
        assert!(parse_sender_names(Some("")).unwrap().is_empty());
        assert!(parse_sender_names(Some("  ")).unwrap().is_empty());
    }

    #[test]
    fn parses_sender_name_map() {
        let names = parse_sender_names(Some(r#"{"+15550001111": "Alice"}"#)).unwrap();
        assert_eq!(names.get("+15550001111").map(String::as_str), Some("Alice"));
    }

    #[test]
    fn rejects_non_object_json() {
        assert!(parse_sender_names(Some("[1, 2]")).is_err());
        assert!(parse_sender_names(Some("not json")).is_err());
    }

    #[test]
    fn rejects_non_string_names() {
        assert!(parse_sender_names(Some(r#"{"+1555": 42}"#)).is_err());
    }

    #[test]
    fn absent_port_defaults() {
        assert_eq!(parse_port(None).unwrap(), 3000);
        assert_eq!(parse_port(Some("")).unwrap(), 3000);
    }

    #[test]
    fn explicit_port_is_used() {
        assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    }

    #[test]
    fn unparsable_port_fails_startup() {
        let err = parse_port(Some("eighty")).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(parse_port(Some("70000")).is_err());
    }
}
