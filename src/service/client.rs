use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use testrail_model::ErrorBody;

const API_PATH: &str = "index.php?/api/v2/";

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Configuration {
    pub url: String,
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "Configuration::default_timeout")]
    pub timeout: u64,
}

impl Configuration {
    fn default_timeout() -> u64 {
        5000
    }

    pub fn new(url: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: String::new(),
            timeout: Self::default_timeout(),
        }
    }

    fn get_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }

    fn get_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    pub fn build(&self) -> Result<TestRail, Error> {
        tracing::debug!("building testrail client for {}", self.url);
        let base_url = if self.url.ends_with('/') {
            format!("{}{API_PATH}", self.url)
        } else {
            format!("{}/{API_PATH}", self.url)
        };
        Url::parse(&base_url).map_err(|err| {
            tracing::error!("invalid testrail url {:?}: {:?}", self.url, err);
            Error::Configuration(format!("invalid url {}: {err}", self.url))
        })?;
        let client = reqwest::Client::builder()
            .timeout(self.get_timeout())
            .default_headers(Self::get_headers())
            .build()
            .map_err(|err| {
                tracing::error!("unable to build http client: {:?}", err);
                Error::Configuration(format!("unable to build http client: {err}"))
            })?;
        Ok(TestRail {
            client,
            base_url,
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("unable to reach testrail: {0}")]
    Request(#[source] reqwest::Error),
    #[error("{status} - {message}")]
    Api { status: u16, message: String },
    #[error("unable to decode testrail response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl Error {
    fn reason(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Request(_) => "request",
            Self::Api { .. } => "api",
            Self::Decode(_) => "decode",
        }
    }

    /// Status code returned by TestRail, when the failure comes from the API.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TestRail {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl TestRail {
    pub fn templates(&self) -> super::template::Templates<'_> {
        super::template::Templates::new(self)
    }

    fn build_url(&self, endpoint: &str) -> Result<Url, Error> {
        Url::parse(&format!("{}{endpoint}", self.base_url)).map_err(|err| {
            tracing::error!("unable to build url for {}: {:?}", endpoint, err);
            Error::Configuration(format!("invalid endpoint {endpoint}: {err}"))
        })
    }

    async fn error_from_response(res: reqwest::Response) -> Error {
        let status = res.status();
        let body: ErrorBody = res.json().await.unwrap_or_else(|err| {
            tracing::debug!("unable to read error body: {:?}", err);
            ErrorBody::default()
        });
        Error::Api {
            status: status.as_u16(),
            message: body.message().to_string(),
        }
    }

    async fn execute<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, Error> {
        let url = self.build_url(endpoint)?;
        tracing::debug!("requesting {}", url);
        let res = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|err| {
                tracing::error!("unable to request {}: {:?}", endpoint, err);
                Error::Request(err)
            })?;
        let status = res.status();
        if !status.is_success() {
            let err = Self::error_from_response(res).await;
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                tracing::warn!("testrail refused access to {}: {}", endpoint, err);
            } else {
                tracing::error!("testrail answered {} to {}: {}", status, endpoint, err);
            }
            return Err(err);
        }
        res.json().await.map_err(|err| {
            tracing::error!("unable to decode response of {}: {:?}", endpoint, err);
            Error::Decode(err)
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, Error> {
        self.execute(endpoint).await.inspect_err(|err| {
            metrics::counter!("testrail_client_error", "reason" => err.reason()).increment(1);
        })
    }
}
