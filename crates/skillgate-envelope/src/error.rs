use skillgate_schema::Defect;

use crate::registry::EnvelopeKind;

/// Errors produced at the envelope validation boundary.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// The envelope violated its contract. Carries every defect found,
    /// in the order the validation pass discovered them.
    #[error("{kind} envelope rejected with {} contract defect(s): {}", .defects.len(), render(.defects))]
    Violation {
        kind: EnvelopeKind,
        defects: Vec<Defect>,
    },

    /// The payload is not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The payload exceeds the configured document size limit.
    #[error("document too large ({size} bytes, max {limit})")]
    DocumentTooLarge { size: usize, limit: usize },

    /// No envelope family is registered under the given name.
    #[error("no envelope registered under name {0:?}")]
    UnknownEnvelope(String),
}

impl ContractError {
    /// The defect list of a [`ContractError::Violation`], empty for the
    /// other variants.
    pub fn defects(&self) -> &[Defect] {
        match self {
            Self::Violation { defects, .. } => defects,
            _ => &[],
        }
    }
}

fn render(defects: &[Defect]) -> String {
    let rendered: Vec<String> = defects.iter().map(ToString::to_string).collect();
    rendered.join("; ")
}

pub type Result<T> = std::result::Result<T, ContractError>;
