//! Shared test utilities for the botgate workspace.
//!
//! Two jobs: build throwaway project folders (project file + `.bot` manifest)
//! and normalize report JSON so it can be compared against golden files.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// 1. **Root-only**: when the root object looks like a report envelope
///    (`schema`, `tool`, `verdict`, `data`), `tool.version` becomes
///    `"__VERSION__"` and `data.project_dir` becomes `"__PROJECT_DIR__"`.
///    Nested objects that merely share the shape are left alone.
///
/// 2. **Recursive**: `started_at` and `finished_at` become `"__TIMESTAMP__"`
///    at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("data");
        if is_envelope {
            if let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
                && tool_obj.contains_key("version")
            {
                tool_obj.insert(
                    "version".to_string(),
                    Value::String("__VERSION__".to_string()),
                );
            }
            if let Some(data_obj) = obj.get_mut("data").and_then(Value::as_object_mut)
                && data_obj.contains_key("project_dir")
            {
                data_obj.insert(
                    "project_dir".to_string(),
                    Value::String("__PROJECT_DIR__".to_string()),
                );
            }
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

/// A temporary bot project folder.
pub struct ProjectFixture {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl ProjectFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp path");
        Self { _dir: dir, root }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write an empty project file (e.g. `EchoBot.csproj`).
    pub fn with_project_file(self, file_name: &str) -> Self {
        self.write(file_name, "<Project Sdk=\"Microsoft.NET.Sdk.Web\" />\n")
    }

    /// Write a manifest file with the given JSON body.
    pub fn with_manifest(self, file_name: &str, body: &str) -> Self {
        self.write(file_name, body)
    }

    pub fn write(self, relative: &str, contents: &str) -> Self {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, contents).expect("write fixture file");
        self
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a `.bot` manifest body.
pub fn manifest_json(name: &str, services: &[Value]) -> String {
    let doc = json!({
        "name": name,
        "description": "",
        "services": services,
        "padlock": "",
        "version": "2.0",
    });
    serde_json::to_string_pretty(&doc).expect("serialize manifest")
}

pub fn endpoint_service(name: &str) -> Value {
    json!({
        "type": "endpoint",
        "name": name,
        "endpoint": format!("https://{name}.example.net/api/messages"),
        "appId": "",
        "appPassword": "",
        "id": name,
    })
}

pub fn nlu_service(subscription_key: &str) -> Value {
    json!({
        "type": "luis",
        "name": "intents",
        "appId": "00000000-0000-0000-0000-000000000000",
        "version": "0.1",
        "region": "westus",
        "subscriptionKey": subscription_key,
        "id": "luis",
    })
}

pub fn qa_service(subscription_key: &str) -> Value {
    json!({
        "type": "qna",
        "name": "faq",
        "kbId": "kb",
        "hostname": "https://faq.example.net/qnamaker",
        "subscriptionKey": subscription_key,
        "id": "qna",
    })
}

/// Base64 key that unlocks [`sealed_manifest_json`].
pub const SEALED_SECRET: &str = "07OTex5hk15MsGHgKKtaHiqya0ZfCXvsNBjosONZoXM=";

/// A valid 256-bit key that does not unlock [`sealed_manifest_json`].
pub const WRONG_SECRET: &str = "XKuCo+IWcidsdWzxMnrXi+S8DaMRGYiK0KBxXHoz6CI=";

/// An encrypted manifest with one NLU service whose key decrypts to
/// `nlu-subscription-key`.
pub fn sealed_manifest_json(name: &str) -> String {
    let doc = json!({
        "name": name,
        "description": "",
        "services": [{
            "type": "luis",
            "name": "intents",
            "subscriptionKey": "napOeztCpl/A1vl0uP5JbcuAATN2dsylD/yTXssHegE=!EBESExQVFhcYGRobHB0eHw==",
            "id": "luis",
        }],
        "padlock": "tcWjtqmkJC5lW+BpGDP+kJ4I2tEwIP/t5UaE+2TT4a3GoNvC+9kOPhY2+EyuD45C!AAECAwQFBgcICQoLDA0ODw==",
        "version": "2.0",
    });
    serde_json::to_string_pretty(&doc).expect("serialize manifest")
}
