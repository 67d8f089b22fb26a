//! Core domain types
//!
//! This module contains the domain structures shared between the agent and
//! the orchestrator client: work commands, job lifecycle state codes, and
//! the robot log entry format.

pub mod command;
pub mod job;
pub mod log;
