//! `ts-schedule` — street demand and proportional green-light schedules.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`demand`]   | `UsageMap`, `aggregate`                                    |
//! | [`builder`]  | `build_schedule`, `plan`                                   |
//! | [`schedule`] | `Schedule`, `IntersectionSchedule`, `GreenPhase`, `AllocationPolicy`, `ScheduleSummary` |
//! | [`error`]    | `ScheduleError`, `ScheduleResult<T>`                       |
//!
//! # Allocation model (summary)
//!
//! For each intersection `i` with at least one incoming street:
//!
//! ```text
//! total    = Σ usage(s)                        over streets s ending at i
//! total==0 → every s gets 1                    (ZeroDemand)
//! else     → d(s) = round(usage(s) / total * F), keep s iff d(s) > 0
//! none kept→ every s gets 1                    (DegenerateRounding)
//! ```
//!
//! Phases always follow the network's incoming-street order.  Intersections
//! with no incoming street are left out of the schedule.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `serde`   | Derives `Serialize`/`Deserialize` on schedule types.     |
//! | `fx-hash` | Uses FxHash for the street usage counters.               |

pub mod builder;
pub mod demand;
pub mod error;
pub mod schedule;


pub use builder::{build_schedule, plan};
pub use demand::{UsageMap, aggregate};
pub use error::{ScheduleError, ScheduleResult};
pub use schedule::{AllocationPolicy, GreenPhase, IntersectionSchedule, Schedule, ScheduleSummary};
