use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use sqlx::FromRow;

use crate::error::ApiError;
use crate::filter::FieldMap;

/// Columns returned for every job read.
pub const JOB_COLUMNS: [&str; 5] = ["id", "title", "salary", "equity", "company_handle"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// POST /jobs body
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewJob {
    pub title: String,
    #[serde(default)]
    pub salary: Option<i32>,
    #[serde(default, deserialize_with = "exact_decimal")]
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// PATCH /jobs/:id body. Every field distinguishes "absent" (`None`) from
/// an explicit null (`Some(None)`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobUpdate {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub salary: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present_decimal")]
    pub equity: Option<Option<Decimal>>,
}

fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Decimal read through `deserialize_any`, so a JSON number keeps every digit
/// instead of passing through `f64`.
#[derive(Deserialize)]
struct ExactDecimal(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal);

fn exact_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<ExactDecimal>::deserialize(deserializer).map(|value| value.map(|ExactDecimal(decimal)| decimal))
}

fn present_decimal<'de, D>(deserializer: D) -> Result<Option<Option<Decimal>>, D::Error>
where
    D: Deserializer<'de>,
{
    exact_decimal(deserializer).map(Some)
}

#[derive(Default)]
struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    fn title(&mut self, title: &str) {
        if title.trim().is_empty() {
            self.0.insert("title".into(), "must not be empty".into());
        }
    }

    fn salary(&mut self, salary: Option<i32>) {
        if matches!(salary, Some(s) if s < 0) {
            self.0.insert("salary".into(), "must be non-negative".into());
        }
    }

    fn equity(&mut self, equity: Option<Decimal>) {
        if matches!(equity, Some(e) if e < Decimal::ZERO || e > Decimal::ONE) {
            self.0.insert("equity".into(), "must be between 0 and 1".into());
        }
    }

    fn into_result(self, message: &str) -> Result<(), ApiError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_error(message, Some(self.0)))
        }
    }
}

impl NewJob {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::default();
        errors.title(&self.title);
        errors.salary(self.salary);
        errors.equity(self.equity);
        if self.company_handle.trim().is_empty() {
            errors.0.insert("company_handle".into(), "must not be empty".into());
        }
        errors.into_result("Invalid job data")
    }
}

impl JobUpdate {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::default();
        match &self.title {
            Some(Some(title)) => errors.title(title),
            Some(None) => {
                errors.0.insert("title".into(), "must not be null".into());
            }
            None => {}
        }
        errors.salary(self.salary.flatten());
        errors.equity(self.equity.flatten());
        errors.into_result("Invalid job update")
    }

    /// Fields to set, in column order. Absent fields are left out; explicit
    /// nulls are kept.
    pub fn into_fields(self) -> FieldMap {
        let mut fields = FieldMap::new();
        if let Some(title) = self.title {
            fields.insert("title".into(), title.map(Value::String).unwrap_or(Value::Null));
        }
        if let Some(salary) = self.salary {
            fields.insert("salary".into(), salary.map(Value::from).unwrap_or(Value::Null));
        }
        if let Some(equity) = self.equity {
            fields.insert("equity".into(), equity.map(decimal_value).unwrap_or(Value::Null));
        }
        fields
    }
}

/// Exact JSON number for a decimal. Needs serde_json's `arbitrary_precision`
/// so no digits are lost on the way to the bind.
fn decimal_value(decimal: Decimal) -> Value {
    let text = decimal.to_string();
    match text.parse::<Number>() {
        Ok(number) => Value::Number(number),
        Err(_) => Value::String(text),
    }
}
