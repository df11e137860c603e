use botgate_domain::{ConnectedService, ProjectManifest, ServiceType};
use serde::Deserialize;
use serde_json::Value;

/// On-disk shape of a `.bot` file. Only the fields the rules need are typed;
/// everything else (app ids, passwords, regions) is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawManifest {
    name: Option<String>,
    description: Option<String>,
    version: Option<String>,
    padlock: Option<String>,
    services: Option<Vec<RawService>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawService {
    #[serde(rename = "type")]
    service_type: String,
    id: Value,
    name: Option<String>,
    subscription_key: Option<String>,
    endpoint: Option<String>,
}

/// Parse manifest text into the domain model.
///
/// A leading UTF-8 byte order mark is tolerated. `null` for `services` is read
/// as "no services".
pub fn parse_manifest(text: &str) -> Result<ProjectManifest, serde_json::Error> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let raw: RawManifest = serde_json::from_str(text)?;

    Ok(ProjectManifest {
        name: raw.name.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        version: raw.version,
        padlock: raw.padlock,
        services: raw
            .services
            .unwrap_or_default()
            .into_iter()
            .map(into_service)
            .collect(),
    })
}

fn into_service(raw: RawService) -> ConnectedService {
    ConnectedService {
        service_type: ServiceType::parse(&raw.service_type),
        id: match raw.id {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        },
        name: raw.name.unwrap_or_default(),
        subscription_key: raw.subscription_key,
        endpoint: raw.endpoint,
    }
}
