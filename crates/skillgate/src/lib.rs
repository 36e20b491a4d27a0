//! Contract validation for agent, skill, and MCP tool envelopes.
//!
//! skillgate enforces closed, declarative contracts on the JSON
//! envelopes crossing the trust boundaries of an agent/skill
//! architecture: agent → skill requests, skill → agent responses, and
//! upstream MCP tool responses. Validation is deterministic, reports
//! every defect in one pass, and never mutates an envelope.
//!
//! # Crate Structure
//!
//! - [`schema`] — schema-as-data validation engine
//! - [`envelope`] — envelope contracts, registry, and validator entry points

/// Re-export engine types.
pub mod schema {
    pub use skillgate_schema::*;
}

/// Re-export envelope contracts.
pub mod envelope {
    pub use skillgate_envelope::*;
}
