use alloc::string::String;

/// Body returned by TestRail along with a non successful status code.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn message(&self) -> &str {
        self.error.as_deref().unwrap_or("unknown error")
    }
}
