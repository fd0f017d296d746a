use serde::Deserialize;

use crate::error::Error;

/// Sender used when `FROM_EMAIL` is not configured.
pub const DEFAULT_SENDER: &str = "Billing <billing@example.com>";

/// Runtime configuration, merged from an optional TOML file and the
/// process environment (`RESEND_API_KEY`, `FROM_EMAIL`).
///
/// A missing API key is deliberately not a load error: deploys without
/// the secret still start, and each send request reports the missing
/// credential instead.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    pub resend_api_key: Option<String>,
    pub from_email: Option<String>,
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self, Error> {
        let mut settings = config::Config::default();

        if let Some(path) = path {
            settings.merge(config::File::with_name(path))?;
        }
        settings.merge(config::Environment::new())?;

        settings.try_into().map_err(Error::from)
    }

    /// Sender address with the hard-coded fallback applied.
    pub fn sender(&self) -> &str {
        self.from_email.as_deref().unwrap_or(DEFAULT_SENDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_falls_back_to_default() {
        let config = Config::default();
        assert_eq!(config.sender(), DEFAULT_SENDER);

        let config = Config {
            from_email: Some("Acme <billing@acme.test>".to_string()),
            ..Config::default()
        };
        assert_eq!(config.sender(), "Acme <billing@acme.test>");
    }
}
