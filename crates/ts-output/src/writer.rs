//! The `ScheduleWriter` trait implemented by all output formats.

use ts_schedule::Schedule;

use crate::OutputResult;

/// Trait implemented by the submission and CSV writers.
pub trait ScheduleWriter {
    /// Write a complete schedule.
    fn write_schedule(&mut self, schedule: &Schedule) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent, safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
