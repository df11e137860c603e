use botgate_types::FailureKind;
use serde_json::Value;

/// The violation that stopped a run.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleFailure {
    pub rule_id: &'static str,
    pub code: &'static str,
    pub kind: FailureKind,
    pub message: String,
    pub help: Option<&'static str>,
    pub data: Value,
}

impl RuleFailure {
    pub fn new(
        rule_id: &'static str,
        code: &'static str,
        kind: FailureKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id,
            code,
            kind,
            message: message.into(),
            help: None,
            data: Value::Null,
        }
    }

    pub fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}

/// Outcome of one validation run.
///
/// `message` is empty when `passed` is true. At most one failure is reported
/// because evaluation stops at the first failing rule.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationResult {
    pub passed: bool,
    pub message: String,
    pub failure: Option<RuleFailure>,

    /// Rules that ran, in evaluation order.
    pub evaluated: Vec<&'static str>,
}

impl ValidationResult {
    pub fn pass(evaluated: Vec<&'static str>) -> Self {
        Self {
            passed: true,
            message: String::new(),
            failure: None,
            evaluated,
        }
    }

    pub fn fail(failure: RuleFailure, evaluated: Vec<&'static str>) -> Self {
        Self {
            passed: false,
            message: failure.message.clone(),
            failure: Some(failure),
            evaluated,
        }
    }

    pub fn kind(&self) -> Option<FailureKind> {
        self.failure.as_ref().map(|f| f.kind)
    }

    pub fn rule_id(&self) -> Option<&'static str> {
        self.failure.as_ref().map(|f| f.rule_id)
    }

    pub fn code(&self) -> Option<&'static str> {
        self.failure.as_ref().map(|f| f.code)
    }

    /// Rules that were disabled or never reached.
    pub fn skipped(&self) -> Vec<&'static str> {
        crate::engine::RULE_ORDER
            .iter()
            .copied()
            .filter(|id| !self.evaluated.contains(id))
            .collect()
    }
}
