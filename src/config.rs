use crate::service::client;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Configuration {
    #[serde(default = "Configuration::default_log")]
    pub log: String,
    pub client: client::Configuration,
}

impl Configuration {
    fn default_log() -> String {
        "testrail=info".into()
    }

    /// Loads the configuration file, when present, and overrides it with the
    /// environment variables, using `__` to reach nested keys (`CLIENT__URL`).
    pub fn from_path(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::Configuration;
    use std::io::Write;

    #[test]
    fn should_load_from_file() {
        let mut file = tempfile::Builder::new()
            .prefix("testrail-")
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
[client]
url = "https://example.testrail.io"
username = "alice@example.com"
password = "api-key"
"#
        )
        .unwrap();
        let config = Configuration::from_path(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.client.url, "https://example.testrail.io");
        assert_eq!(config.client.username, "alice@example.com");
        assert_eq!(config.client.password, "api-key");
        assert_eq!(config.client.timeout, 5000);
    }
}
