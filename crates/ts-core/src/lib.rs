//! `ts-core` — foundational types for the traffic signaling planner.
//!
//! This crate is a dependency of every other `ts-*` crate.  It has no `ts-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `IntersectionId`, `StreetId`                              |
//! | [`config`]  | `ProblemHeader`, `ScheduleConfig`, `RoundingRule`         |
//! | [`error`]   | `TsError`, `TsResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ProblemHeader, RoundingRule, ScheduleConfig};
pub use error::{TsError, TsResult};
pub use ids::{IntersectionId, StreetId};
