use super::error::FilterError;
use super::types::{quote_identifier, FieldMap, FragmentBuilder, NameTranslation, QueryFragment};

pub struct FilterUpdate;

impl FilterUpdate {
    /// Compile `fields` into a `"col"=$1, "col"=$2` SET list.
    ///
    /// Columns come from `translation` when present, otherwise the field name
    /// is used verbatim. Unknown fields are not rejected here.
    pub fn generate(fields: &FieldMap, translation: &NameTranslation) -> Result<QueryFragment, FilterError> {
        if fields.is_empty() {
            return Err(FilterError::EmptyUpdate);
        }

        let mut builder = FragmentBuilder::new();
        for (field, value) in fields {
            let column = translation.get(field).map(String::as_str).unwrap_or(field);
            let quoted = quote_identifier(column);
            builder.push_bound(value.clone(), |p| format!("{}={}", quoted, p));
        }
        Ok(builder.finish(", "))
    }
}

/// See [`FilterUpdate::generate`].
pub fn compile_partial_update(fields: &FieldMap, translation: &NameTranslation) -> Result<QueryFragment, FilterError> {
    FilterUpdate::generate(fields, translation)
}
