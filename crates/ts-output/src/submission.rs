//! Submission text format.
//!
//! ```text
//! 3            number of scheduled intersections
//! 1            intersection id
//! 2            number of green phases
//! rue-d-athenes 2
//! rue-d-amsterdam 1
//! 0
//! 1
//! rue-de-londres 2
//! 2
//! 1
//! rue-de-moscou 1
//! ```
//!
//! Intersections appear in the schedule's ascending order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ts_schedule::Schedule;

use crate::OutputResult;
use crate::writer::ScheduleWriter;

/// Writes schedules in submission format to any `Write` sink.
pub struct SubmissionWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl SubmissionWriter<BufWriter<File>> {
    /// Create (or truncate) `path` and write to it through a buffer.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> SubmissionWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Recover the sink, e.g. a `Vec<u8>` in tests.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScheduleWriter for SubmissionWriter<W> {
    fn write_schedule(&mut self, schedule: &Schedule) -> OutputResult<()> {
        writeln!(self.out, "{}", schedule.len())?;
        for entry in schedule {
            writeln!(self.out, "{}", entry.intersection)?;
            writeln!(self.out, "{}", entry.phases.len())?;
            for phase in &entry.phases {
                writeln!(self.out, "{} {}", phase.street, phase.duration)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}

/// Render a schedule in submission format.
pub fn render_submission(schedule: &Schedule) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", schedule.len()));
    for entry in schedule {
        out.push_str(&format!("{}\n{}\n", entry.intersection, entry.phases.len()));
        for phase in &entry.phases {
            out.push_str(&format!("{} {}\n", phase.street, phase.duration));
        }
    }
    out
}
