pub mod job;

pub use job::{Job, JobUpdate, NewJob, JOB_COLUMNS};
