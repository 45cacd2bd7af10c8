//! Syncline orchestration engine.
//!
//! The engine owns all mutable state of the service: the job registry,
//! identifier issuance, and the background progress runner spawned per
//! job. The catalog of sources, destinations, connections, and fan-outs
//! is read-only reference data resolved against at job start.
//!
//! The HTTP transport lives in `syncline-api`; this crate has no
//! knowledge of routing or wire formats beyond serde derives.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod ids;
pub mod job;
pub mod registry;
pub mod resolve;
pub mod runner;
pub mod types;
