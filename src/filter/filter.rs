use super::error::FilterError;
use super::filter_order::FilterOrder;
use super::filter_where::FilterWhere;
use super::types::{quote_identifier, FilterCriteria, QueryFragment};

/// Full SELECT statement for a filtered listing: projection, optional WHERE
/// from [`FilterWhere`], and an ascending ORDER BY.
pub struct Filter<'a> {
    table_name: &'a str,
    select_columns: &'a [&'a str],
    order_column: &'a str,
    criteria: FilterCriteria,
}

impl<'a> Filter<'a> {
    pub fn new(table_name: &'a str, select_columns: &'a [&'a str], order_column: &'a str) -> Self {
        Self {
            table_name,
            select_columns,
            order_column,
            criteria: FilterCriteria::default(),
        }
    }

    pub fn criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn to_where_sql(&self) -> Result<QueryFragment, FilterError> {
        FilterWhere::generate(&self.criteria)
    }

    pub fn to_sql(&self) -> Result<QueryFragment, FilterError> {
        let where_result = self.to_where_sql()?;

        let columns = self.select_columns.iter().map(|c| quote_identifier(c)).collect::<Vec<_>>().join(", ");
        let query = [
            format!("SELECT {}", columns),
            format!("FROM {}", quote_identifier(self.table_name)),
            if where_result.is_empty() { String::new() } else { format!("WHERE {}", where_result.sql) },
            FilterOrder::ascending(self.order_column),
        ].into_iter().filter(|s| !s.is_empty()).collect::<Vec<_>>().join(" ");

        Ok(QueryFragment { sql: query, params: where_result.params })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COLUMNS: [&str; 3] = ["id", "title", "salary"];

    fn jobs() -> Filter<'static> {
        Filter::new("jobs", &COLUMNS, "title")
    }

    #[test]
    fn unfiltered_listing_has_no_where() {
        let result = jobs().to_sql().unwrap();
        assert_eq!(result.sql, "SELECT \"id\", \"title\", \"salary\" FROM \"jobs\" ORDER BY \"title\" ASC");
        assert!(result.params.is_empty());
    }

    #[test]
    fn filtered_listing() {
        let result = jobs()
            .criteria(FilterCriteria {
                title: Some("dev".into()),
                min_salary: Some(1000),
                has_equity: None,
            })
            .to_sql()
            .unwrap();
        assert_eq!(
            result.sql,
            "SELECT \"id\", \"title\", \"salary\" FROM \"jobs\" WHERE salary >= $1 AND title ILIKE $2 ORDER BY \"title\" ASC"
        );
        assert_eq!(result.params, vec![json!(1000), json!("%dev%")]);
    }

    #[test]
    fn equity_only_listing_binds_nothing() {
        let result = jobs()
            .criteria(FilterCriteria { has_equity: Some(true), ..Default::default() })
            .to_sql()
            .unwrap();
        assert_eq!(
            result.sql,
            "SELECT \"id\", \"title\", \"salary\" FROM \"jobs\" WHERE equity > 0 ORDER BY \"title\" ASC"
        );
        assert!(result.params.is_empty());
    }

    #[test]
    fn negative_bound_propagates() {
        let err = jobs()
            .criteria(FilterCriteria { min_salary: Some(-1), ..Default::default() })
            .to_sql()
            .unwrap_err();
        assert_eq!(err, FilterError::NegativeLowerBound);
    }
}
