use thiserror::Error;

use ts_core::TsError;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("schedule configuration error: {0}")]
    Config(#[from] TsError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
