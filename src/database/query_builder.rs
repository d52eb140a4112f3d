use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Number, Value};
use sqlx::{postgres::{PgArguments, PgRow}, FromRow, PgPool, Postgres};

use crate::config;
use crate::database::manager::DatabaseError;
use crate::filter::QueryFragment;

/// Executes a [`QueryFragment`] as a typed `query_as`, binding its params in
/// placeholder order.
pub struct QueryBuilder<'q> {
    fragment: &'q QueryFragment,
}

impl<'q> QueryBuilder<'q> {
    pub fn new(fragment: &'q QueryFragment) -> Self {
        if config::config().database.enable_query_logging {
            tracing::debug!(sql = %fragment.sql, params = ?fragment.params, "executing query");
        }
        Self { fragment }
    }

    fn query_as<T>(&self) -> sqlx::query::QueryAs<'q, Postgres, T, PgArguments>
    where
        T: for<'r> FromRow<'r, PgRow>,
    {
        let fragment = self.fragment;
        let mut q = sqlx::query_as::<_, T>(&fragment.sql);
        for p in fragment.params.iter() {
            q = bind_param_query_as(q, p);
        }
        q
    }

    pub async fn fetch_all<T>(self, pool: &PgPool) -> Result<Vec<T>, DatabaseError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        Ok(self.query_as::<T>().fetch_all(pool).await?)
    }

    pub async fn fetch_optional<T>(self, pool: &PgPool) -> Result<Option<T>, DatabaseError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        Ok(self.query_as::<T>().fetch_optional(pool).await?)
    }
}

fn bind_param_query_as<'q, O>(
    q: sqlx::query::QueryAs<'q, Postgres, O, PgArguments>,
    v: &'q Value,
) -> sqlx::query::QueryAs<'q, Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, PgRow>,
{
    match v {
        // int8 NULL assignment-casts into integer, numeric and text columns alike
        Value::Null => q.bind(None::<i64>),
        Value::Bool(b) => q.bind(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => q.bind(i),
            None => match exact_decimal(n) {
                Some(d) => q.bind(d),
                None => q.bind(n.as_f64()),
            },
        },
        Value::String(s) => q.bind(s.as_str()),
        Value::Array(_) | Value::Object(_) => q.bind(sqlx::types::Json(v)),
    }
}

/// Non-integer numbers bind as `NUMERIC` so no digits are lost. Only values
/// outside `Decimal`'s range fall back to `float8`.
fn exact_decimal(n: &Number) -> Option<Decimal> {
    let text = n.to_string();
    Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text)).ok()
}
