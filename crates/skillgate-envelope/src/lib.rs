//! Closed envelope contracts for agent, skill, and MCP tool boundaries.
//!
//! Declares the envelope families exchanged in an agent/skill
//! architecture as immutable schema data, and exposes one validator
//! entry point per family. Every validator reports the complete defect
//! list for an envelope in a single pass — callers surface every
//! problem in one round trip.

pub mod config;
pub mod error;
pub mod registry;
pub mod skills;
pub mod trends;

pub use config::RegistryConfig;
pub use error::{ContractError, Result};
pub use registry::{shared, EnvelopeKind, EnvelopeRegistry, EnvelopeSchema};
pub use skills::{validate_skill_invocation_request, validate_skill_invocation_response};
pub use trends::{validate_mcp_trend_response, validate_skill_fetch_trends_output};
