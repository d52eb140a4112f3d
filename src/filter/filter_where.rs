use serde_json::Value;

use super::error::FilterError;
use super::types::{FilterCriteria, FragmentBuilder, QueryFragment};

pub struct FilterWhere;

impl FilterWhere {
    /// Build the WHERE body for a job listing. The returned fragment is empty
    /// when no criterion applies.
    ///
    /// Predicates are emitted in a fixed order (salary, equity, title) so the
    /// placeholder numbering only depends on which criteria are present.
    pub fn generate(criteria: &FilterCriteria) -> Result<QueryFragment, FilterError> {
        let mut builder = FragmentBuilder::new();

        if let Some(min_salary) = criteria.min_salary {
            if min_salary < 0 {
                return Err(FilterError::NegativeLowerBound);
            }
            builder.push_bound(Value::from(min_salary), |p| format!("salary >= {}", p));
        }

        // Only an explicit true narrows; false never means "no equity".
        if criteria.has_equity == Some(true) {
            builder.push("equity > 0");
        }

        if let Some(title) = &criteria.title {
            builder.push_bound(Value::String(format!("%{}%", title)), |p| format!("title ILIKE {}", p));
        }

        Ok(builder.finish(" AND "))
    }
}

/// See [`FilterWhere::generate`].
pub fn build_filter_query(criteria: &FilterCriteria) -> Result<QueryFragment, FilterError> {
    FilterWhere::generate(criteria)
}
