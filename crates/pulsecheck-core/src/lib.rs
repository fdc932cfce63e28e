//! pulsecheck-core
//!
//! Pure domain types shared by every pulsecheck crate: survey responses,
//! severity tiers, recommendations, and the aggregate report shapes handed
//! to the rendering layer. No scoring logic lives here.

pub mod error;
pub mod models;
