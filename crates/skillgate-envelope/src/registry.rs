use std::fmt;
use std::sync::LazyLock;

use serde_json::{Map, Value};
use skillgate_schema::{Defect, FieldPath, ObjectSchema};

use crate::config::RegistryConfig;
use crate::error::{ContractError, Result};
use crate::{skills, trends};

/// The envelope families guarded by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeKind {
    /// Agent → skill invocation request.
    SkillInvocationRequest,
    /// Skill → agent invocation response.
    SkillInvocationResponse,
    /// Upstream `trend_fetch_api` tool response over MCP.
    McpTrendResponse,
    /// The `output` contract of the `skill_fetch_trends` skill.
    SkillFetchTrendsOutput,
}

impl EnvelopeKind {
    pub const ALL: [EnvelopeKind; 4] = [
        EnvelopeKind::SkillInvocationRequest,
        EnvelopeKind::SkillInvocationResponse,
        EnvelopeKind::McpTrendResponse,
        EnvelopeKind::SkillFetchTrendsOutput,
    ];

    /// Stable name used by CLIs and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::SkillInvocationRequest => "skill_invocation_request",
            Self::SkillInvocationResponse => "skill_invocation_response",
            Self::McpTrendResponse => "mcp_trend_response",
            Self::SkillFetchTrendsOutput => "skill_fetch_trends_output",
        }
    }

    /// Resolve a kind from its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for EnvelopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Post-pass over the top-level members for rules a single field spec
/// cannot express (e.g. `status` deciding between `output` and `error`).
pub(crate) type CrossCheck = fn(&Map<String, Value>, &mut Vec<Defect>);

/// A compiled envelope contract: the root object schema plus an
/// optional cross-field rule.
pub struct EnvelopeSchema {
    root: ObjectSchema,
    cross_check: Option<CrossCheck>,
}

impl EnvelopeSchema {
    pub(crate) fn new(root: ObjectSchema) -> Self {
        Self {
            root,
            cross_check: None,
        }
    }

    pub(crate) fn with_cross_check(root: ObjectSchema, cross_check: CrossCheck) -> Self {
        Self {
            root,
            cross_check: Some(cross_check),
        }
    }

    pub fn root(&self) -> &ObjectSchema {
        &self.root
    }

    /// Every defect in the candidate: the closed-object passes first,
    /// then the cross-field rule. The cross-field rule only runs when
    /// the candidate is an object at all.
    pub fn check(&self, value: &Value) -> Vec<Defect> {
        let mut defects = Vec::new();
        self.root.check(value, &FieldPath::root(), &mut defects);
        if let (Some(cross_check), Value::Object(members)) = (self.cross_check, value) {
            cross_check(members, &mut defects);
        }
        defects
    }
}

/// Kind-keyed registry of compiled envelope schemas.
///
/// Built once at process start, immutable afterwards, and shared freely
/// across threads — validation holds no mutable state.
pub struct EnvelopeRegistry {
    request: EnvelopeSchema,
    response: EnvelopeSchema,
    trend_response: EnvelopeSchema,
    trends_output: EnvelopeSchema,
    config: RegistryConfig,
}

impl EnvelopeRegistry {
    /// The built-in envelope families with default config.
    pub fn builtin() -> Self {
        Self::builtin_with_config(RegistryConfig::default())
    }

    /// The built-in envelope families with explicit config.
    pub fn builtin_with_config(config: RegistryConfig) -> Self {
        Self {
            request: skills::invocation_request(),
            response: skills::invocation_response(),
            trend_response: trends::mcp_trend_response(),
            trends_output: trends::fetch_trends_output(),
            config,
        }
    }

    /// The compiled schema for an envelope family.
    pub fn schema(&self, kind: EnvelopeKind) -> &EnvelopeSchema {
        match kind {
            EnvelopeKind::SkillInvocationRequest => &self.request,
            EnvelopeKind::SkillInvocationResponse => &self.response,
            EnvelopeKind::McpTrendResponse => &self.trend_response,
            EnvelopeKind::SkillFetchTrendsOutput => &self.trends_output,
        }
    }

    /// Validate a decoded envelope against its family contract.
    pub fn validate(&self, kind: EnvelopeKind, value: &Value) -> Result<()> {
        let defects = self.schema(kind).check(value);
        if defects.is_empty() {
            tracing::debug!(envelope = kind.name(), "envelope accepted");
            Ok(())
        } else {
            tracing::warn!(
                envelope = kind.name(),
                defects = defects.len(),
                "envelope rejected"
            );
            Err(ContractError::Violation { kind, defects })
        }
    }

    /// Validate an envelope family resolved by its stable name.
    pub fn validate_named(&self, name: &str, value: &Value) -> Result<()> {
        let kind = EnvelopeKind::from_name(name)
            .ok_or_else(|| ContractError::UnknownEnvelope(name.to_string()))?;
        self.validate(kind, value)
    }

    /// Decode a raw JSON document, then validate it.
    pub fn validate_bytes(&self, kind: EnvelopeKind, payload: &[u8]) -> Result<()> {
        if payload.len() > self.config.max_document_bytes {
            return Err(ContractError::DocumentTooLarge {
                size: payload.len(),
                limit: self.config.max_document_bytes,
            });
        }
        let value: Value = serde_json::from_slice(payload)?;
        self.validate(kind, &value)
    }

    /// All registered envelope families.
    pub fn kinds(&self) -> [EnvelopeKind; 4] {
        EnvelopeKind::ALL
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

static REGISTRY: LazyLock<EnvelopeRegistry> = LazyLock::new(EnvelopeRegistry::builtin);

/// The process-wide registry backing the free validator functions.
pub fn shared() -> &'static EnvelopeRegistry {
    &REGISTRY
}
