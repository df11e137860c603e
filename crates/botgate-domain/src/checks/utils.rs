use crate::model::{ConnectedService, ProjectManifest, ServiceType};
use std::collections::BTreeSet;

/// Services of one type, in declaration order. Empty when none match.
pub fn find_services_by_type<'a>(
    manifest: &'a ProjectManifest,
    service_type: &ServiceType,
) -> Vec<&'a ConnectedService> {
    manifest
        .services
        .iter()
        .filter(|s| &s.service_type == service_type)
        .collect()
}

/// True iff the service carries a non-blank subscription key.
pub fn has_subscription_key(service: &ConnectedService) -> bool {
    service
        .subscription_key
        .as_deref()
        .map(|k| !k.trim().is_empty())
        .unwrap_or(false)
}

/// With `require_all_present`, every name must be declared by some service.
/// Without it, no name may be declared by any service.
pub fn matches_name_set(
    services: &[&ConnectedService],
    names: &BTreeSet<String>,
    require_all_present: bool,
) -> bool {
    let declared = |name: &String| services.iter().any(|s| &s.name == name);
    if require_all_present {
        names.iter().all(declared)
    } else {
        !names.iter().any(declared)
    }
}

/// Names from `names` that no service declares.
pub fn undeclared_names(services: &[&ConnectedService], names: &BTreeSet<String>) -> Vec<String> {
    names
        .iter()
        .filter(|n| !services.iter().any(|s| &s.name == *n))
        .cloned()
        .collect()
}

/// Names from `names` that some service declares.
pub fn declared_names(services: &[&ConnectedService], names: &BTreeSet<String>) -> Vec<String> {
    names
        .iter()
        .filter(|n| services.iter().any(|s| &s.name == *n))
        .cloned()
        .collect()
}
