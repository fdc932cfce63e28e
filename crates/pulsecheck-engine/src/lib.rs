//! pulsecheck-engine
//!
//! Turns raw questionnaire responses into category scores, partitioned
//! rollups, critical-first rankings, and action plans. Every function is a
//! pure recomputation over its inputs; nothing here does I/O.

pub mod action_plan;
pub mod aggregate;
pub mod error;
pub mod partition;
pub mod ranking;
pub mod recommendations;
pub mod rollup;
