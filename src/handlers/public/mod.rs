// Public handlers: no token required. Reads of job postings and service
// probes.

pub mod health;
pub mod jobs;

pub use health::{health, root};
pub use jobs::get as job_get;
pub use jobs::list as job_list;
