//! Pure publish-policy evaluation (no IO).
//!
//! Input: a [`ProjectSource`] implemented elsewhere, plus a [`PolicyConfig`].
//! Output: a [`ValidationResult`] naming at most one failed rule.

#![forbid(unsafe_code)]

pub mod checks;
pub mod model;
pub mod policy;
pub mod report;
pub mod source;

mod engine;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;

pub use engine::{RULE_ORDER, evaluate};
pub use model::{ConnectedService, ProjectManifest, ServiceType};
pub use policy::PolicyConfig;
pub use report::{RuleFailure, ValidationResult};
pub use source::{LoadError, ProjectSource};
