//! Tinbot Core
//!
//! Core types for the Tinbot unattended robot agent.
//!
//! This crate contains:
//! - Domain types: commands received from the orchestrator, job/robot state
//!   codes, and robot log entries
//! - DTOs: wire payloads exchanged with the orchestrator endpoints

pub mod domain;
pub mod dto;
