use serde_json::Value;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::job::{Job, NewJob, JOB_COLUMNS};
use crate::database::query_builder::QueryBuilder;
use crate::filter::{compile_partial_update, Filter, FieldMap, FilterCriteria, NameTranslation, QueryFragment};

const TABLE: &str = "jobs";

/// Record access for the `jobs` table
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn returning() -> String {
        format!("RETURNING {}", JOB_COLUMNS.join(", "))
    }

    pub async fn create(&self, job: &NewJob) -> Result<Job, DatabaseError> {
        let sql = format!(
            "INSERT INTO {} (title, salary, equity, company_handle) VALUES ($1, $2, $3, $4) {}",
            TABLE,
            Self::returning()
        );
        let created = sqlx::query_as::<_, Job>(&sql)
            .bind(&job.title)
            .bind(job.salary)
            .bind(job.equity)
            .bind(&job.company_handle)
            .fetch_one(&self.pool)
            .await?;
        tracing::info!("Created job {} ({})", created.id, created.title);
        Ok(created)
    }

    /// Jobs matching `criteria`, ordered by title.
    pub async fn find_all(&self, criteria: FilterCriteria) -> Result<Vec<Job>, DatabaseError> {
        let query = Filter::new(TABLE, &JOB_COLUMNS, "title").criteria(criteria).to_sql()?;
        QueryBuilder::new(&query).fetch_all(&self.pool).await
    }

    pub async fn get(&self, id: i32) -> Result<Job, DatabaseError> {
        let query = QueryFragment {
            sql: format!("SELECT {} FROM {} WHERE id = $1", JOB_COLUMNS.join(", "), TABLE),
            params: vec![Value::from(id)],
        };
        QueryBuilder::new(&query)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Apply a partial update. `fields` must already be restricted to
    /// updatable columns.
    pub async fn update(&self, id: i32, fields: &FieldMap) -> Result<Job, DatabaseError> {
        let set = compile_partial_update(fields, &NameTranslation::new())?;
        let id_index = set.next_param_index();

        let mut params = set.params;
        params.push(Value::from(id));
        let query = QueryFragment {
            sql: format!("UPDATE {} SET {} WHERE id = ${} {}", TABLE, set.sql, id_index, Self::returning()),
            params,
        };

        QueryBuilder::new(&query)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn remove(&self, id: i32) -> Result<(), DatabaseError> {
        let deleted: Option<(i32,)> = sqlx::query_as(&format!("DELETE FROM {} WHERE id = $1 RETURNING id", TABLE))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        deleted.map(|_| ()).ok_or_else(|| not_found(id))
    }
}

fn not_found(id: i32) -> DatabaseError {
    DatabaseError::NotFound(format!("No job: {}", id))
}
