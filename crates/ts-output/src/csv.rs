//! CSV output backend.
//!
//! One row per green phase:
//!
//! ```csv
//! intersection,street,duration,policy
//! 1,rue-d-amsterdam,500,proportional
//! 1,rue-d-athenes,500,proportional
//! ```

use std::fs::File;
use std::path::Path;

use csv::Writer;
use log::debug;

use ts_schedule::{AllocationPolicy, Schedule};

use crate::OutputResult;
use crate::writer::ScheduleWriter;

const HEADER: [&str; 4] = ["intersection", "street", "duration", "policy"];

/// Writes schedule phases to a CSV file.
pub struct CsvScheduleWriter {
    rows:     Writer<File>,
    written:  usize,
    finished: bool,
}

impl CsvScheduleWriter {
    /// Open (or create) `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let mut rows = Writer::from_path(path)?;
        rows.write_record(HEADER)?;
        Ok(Self { rows, written: 0, finished: false })
    }

    /// Phase rows written so far, excluding the header.
    pub fn rows_written(&self) -> usize {
        self.written
    }
}

impl ScheduleWriter for CsvScheduleWriter {
    fn write_schedule(&mut self, schedule: &Schedule) -> OutputResult<()> {
        for entry in schedule {
            let intersection = entry.intersection.to_string();
            let policy = policy_label(entry.policy);
            for phase in &entry.phases {
                self.rows.write_record([
                    intersection.as_str(),
                    phase.street.as_str(),
                    phase.duration.to_string().as_str(),
                    policy,
                ])?;
                self.written += 1;
            }
        }
        debug!("wrote {} CSV phase rows", self.written);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}

fn policy_label(policy: AllocationPolicy) -> &'static str {
    match policy {
        AllocationPolicy::Proportional       => "proportional",
        AllocationPolicy::ZeroDemand         => "zero_demand",
        AllocationPolicy::DegenerateRounding => "degenerate_rounding",
    }
}
