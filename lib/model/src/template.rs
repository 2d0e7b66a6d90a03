use alloc::string::String;
use core::fmt;

/// TestRail template, the set of fields a test case is made of.
///
/// The `id` is assigned by the server. At most one template per project is the
/// default one, which is enforced by TestRail and not checked here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Template {
    id: i64,
    is_default: bool,
    name: Option<String>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn set_default(&mut self, value: bool) {
        self.is_default = value;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn clear_name(&mut self) {
        self.name = None;
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.set_id(id);
        self
    }

    pub fn with_default(mut self, value: bool) -> Self {
        self.set_default(value);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }
}

impl Template {
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.name().unwrap_or_default())?;
        if self.is_default {
            f.write_str(" (default)")?;
        }
        Ok(())
    }
}
