use super::types::quote_identifier;

pub struct FilterOrder;

impl FilterOrder {
    /// `ORDER BY "<column>" ASC`
    pub fn ascending(column: &str) -> String {
        format!("ORDER BY {} ASC", quote_identifier(column))
    }
}
