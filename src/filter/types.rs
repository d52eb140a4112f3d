use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field name to new value, in insertion order.
pub type FieldMap = serde_json::Map<String, Value>;

/// Field name to physical column name. Missing entries use the field name.
pub type NameTranslation = HashMap<String, String>;

/// Coerced listing criteria for jobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match on title.
    pub title: Option<String>,
    /// Inclusive lower bound on salary.
    pub min_salary: Option<i64>,
    /// Only `Some(true)` narrows the result.
    pub has_equity: Option<bool>,
}

/// A parameterized SQL fragment. The Nth `$N` placeholder in `sql` binds
/// `params[N - 1]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFragment {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryFragment {
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Index the next appended parameter would receive.
    pub fn next_param_index(&self) -> usize {
        self.params.len() + 1
    }
}

/// Accumulates clause pieces and their bound values in one pass, so a
/// placeholder index is always the position its value was pushed at.
#[derive(Debug, Default)]
pub struct FragmentBuilder {
    pieces: Vec<String>,
    params: Vec<Value>,
}

impl FragmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a piece that needs no parameter.
    pub fn push(&mut self, piece: impl Into<String>) -> &mut Self {
        self.pieces.push(piece.into());
        self
    }

    /// Bind `value` and push the piece rendered around its placeholder.
    pub fn push_bound<F>(&mut self, value: Value, render: F) -> &mut Self
    where
        F: FnOnce(&str) -> String,
    {
        let placeholder = self.param(value);
        self.pieces.push(render(&placeholder));
        self
    }

    pub fn finish(self, separator: &str) -> QueryFragment {
        QueryFragment {
            sql: self.pieces.join(separator),
            params: self.params,
        }
    }

    fn param(&mut self, value: Value) -> String {
        self.params.push(value);
        format!("${}", self.params.len())
    }
}

/// Double-quote an identifier, doubling any embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
