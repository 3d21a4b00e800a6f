//! `ts-output` — schedule writers for the traffic signaling planner.
//!
//! | Writer                | Format                                              |
//! |-----------------------|-----------------------------------------------------|
//! | [`SubmissionWriter`]  | Hash Code submission text (`output.txt`)            |
//! | [`CsvScheduleWriter`] | `intersection,street,duration` rows                 |
//!
//! Both implement [`ScheduleWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use ts_output::{ScheduleWriter, SubmissionWriter};
//!
//! let mut writer = SubmissionWriter::create(Path::new("output.txt"))?;
//! writer.write_schedule(&schedule)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod submission;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvScheduleWriter;
pub use error::{OutputError, OutputResult};
pub use submission::{SubmissionWriter, render_submission};
pub use writer::ScheduleWriter;
