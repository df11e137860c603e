use crate::model::{ConnectedService, ProjectManifest, ServiceType};
use crate::policy::PolicyConfig;
use crate::source::{LoadError, ProjectSource};
use std::cell::Cell;
use std::collections::BTreeSet;

pub fn endpoint(name: &str) -> ConnectedService {
    let mut svc = ConnectedService::new(ServiceType::Endpoint, name);
    svc.endpoint = Some(format!("https://{name}.example.net/api/messages"));
    svc
}

pub fn nlu(key: &str) -> ConnectedService {
    ConnectedService::new(ServiceType::Nlu, "intents").with_subscription_key(key)
}

pub fn qa(key: &str) -> ConnectedService {
    ConnectedService::new(ServiceType::Qa, "faq").with_subscription_key(key)
}

pub fn manifest(services: Vec<ConnectedService>) -> ProjectManifest {
    ProjectManifest {
        name: "echo-bot".to_string(),
        description: "test bot".to_string(),
        version: Some("2.0".to_string()),
        padlock: None,
        services,
    }
}

pub fn names(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Manifest loading enabled with both key rules on; endpoint sets empty.
pub fn policy_all_manifest_rules() -> PolicyConfig {
    PolicyConfig {
        require_manifest_file: true,
        require_nlu_key: true,
        require_qa_key: true,
        ..PolicyConfig::default()
    }
}

pub enum StubManifest {
    Loaded(ProjectManifest),
    NotFound,
    Ambiguous(Vec<String>),
    Malformed(String),
}

/// In-memory [`ProjectSource`] that counts manifest loads.
pub struct StubSource {
    project_file: Option<String>,
    manifest: StubManifest,
    loads: Cell<usize>,
}

impl StubSource {
    pub fn new(project_file: Option<&str>, manifest: StubManifest) -> Self {
        Self {
            project_file: project_file.map(|s| s.to_string()),
            manifest,
            loads: Cell::new(0),
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.get()
    }
}

impl ProjectSource for StubSource {
    fn project_file_name(&self) -> Result<Option<String>, LoadError> {
        Ok(self.project_file.clone())
    }

    fn load_manifest(&self) -> Result<ProjectManifest, LoadError> {
        self.loads.set(self.loads.get() + 1);
        match &self.manifest {
            StubManifest::Loaded(m) => Ok(m.clone()),
            StubManifest::NotFound => Err(LoadError::NotFound {
                folder: "stub".to_string(),
                pattern: "*.bot".to_string(),
            }),
            StubManifest::Ambiguous(candidates) => Err(LoadError::Ambiguous {
                folder: "stub".to_string(),
                pattern: "*.bot".to_string(),
                candidates: candidates.clone(),
            }),
            StubManifest::Malformed(reason) => Err(LoadError::Malformed {
                path: "stub/echo-bot.bot".to_string(),
                reason: reason.clone(),
            }),
        }
    }
}
