/// Query keys accepted by the job listing.
pub const ALLOWED_FILTER_KEYS: [&str; 3] = ["title", "minSalary", "hasEquity"];

/// True when every key is in [`ALLOWED_FILTER_KEYS`]. An empty key set is
/// valid. Values are not inspected.
pub fn validate_filter_keys<I, K>(keys: I) -> bool
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    keys.into_iter().all(|key| ALLOWED_FILTER_KEYS.contains(&key.as_ref()))
}
