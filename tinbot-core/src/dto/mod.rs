//! Wire payloads for the orchestrator endpoints
//!
//! Request and response bodies exchanged with the orchestrator. The
//! orchestrator mixes naming conventions on the wire (PascalCase request
//! bodies, camelCase command payloads), so each DTO pins its own casing.

pub mod heartbeat;
pub mod job;
pub mod service;
pub mod token;
