// Elevated handlers: mutations of job postings. Every route here sits behind
// `ensure_admin`, so an `AuthUser` with `is_admin` is always present.

pub mod jobs;

pub use jobs::create as job_create;
pub use jobs::delete as job_delete;
pub use jobs::patch as job_patch;
