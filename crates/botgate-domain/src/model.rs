/// Kind of a connected service, parsed from the manifest's raw `type` field.
///
/// Parsing trims and lowercases the raw value, so lookups by type are
/// case-insensitive. Unknown types are kept as [`ServiceType::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ServiceType {
    Endpoint,
    Nlu,
    Qa,
    Other(String),
}

impl ServiceType {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "endpoint" => ServiceType::Endpoint,
            "luis" | "nlu" => ServiceType::Nlu,
            "qna" | "qa" => ServiceType::Qa,
            _ => ServiceType::Other(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ServiceType::Endpoint => "endpoint",
            ServiceType::Nlu => "luis",
            ServiceType::Qa => "qna",
            ServiceType::Other(raw) => raw.as_str(),
        }
    }

    /// Human-facing label used in failure messages.
    pub fn label(&self) -> &str {
        match self {
            ServiceType::Endpoint => "endpoint",
            ServiceType::Nlu => "NLU",
            ServiceType::Qa => "QA",
            ServiceType::Other(raw) => raw.as_str(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectedService {
    pub service_type: ServiceType,
    pub id: Option<String>,
    /// Meaningful for endpoint services.
    pub name: String,
    /// Meaningful for NLU and QA services.
    pub subscription_key: Option<String>,
    /// URL of an endpoint service.
    pub endpoint: Option<String>,
}

impl ConnectedService {
    pub fn new(service_type: ServiceType, name: impl Into<String>) -> Self {
        Self {
            service_type,
            id: None,
            name: name.into(),
            subscription_key: None,
            endpoint: None,
        }
    }

    pub fn with_subscription_key(mut self, key: impl Into<String>) -> Self {
        self.subscription_key = Some(key.into());
        self
    }
}

/// In-memory form of a bot project descriptor (`.bot` file).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectManifest {
    pub name: String,
    pub description: String,
    pub version: Option<String>,

    /// Non-empty when sensitive values in the file are encrypted.
    pub padlock: Option<String>,

    /// Declaration order is preserved; rules treat it as unordered.
    pub services: Vec<ConnectedService>,
}

impl ProjectManifest {
    pub fn is_encrypted(&self) -> bool {
        self.padlock
            .as_deref()
            .map(|p| !p.trim().is_empty())
            .unwrap_or(false)
    }
}
