use std::sync::Arc;

use schist_error::Result;

use super::{unsupported_shape, Category, Inspector};
use crate::record::Record;

/// A named struct field and the inspector for its type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructField {
    pub name: String,
    pub inspector: Arc<Inspector>,
}

/// Interprets an array record as a struct, one positional slot per
/// field.
///
/// Unlike lists, struct fields live directly in the outer record's
/// sub-components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructInspector {
    fields: Vec<StructField>,
}

impl StructInspector {
    pub fn new(fields: Vec<StructField>) -> Self {
        StructInspector { fields }
    }

    pub fn type_name(&self) -> String {
        format!(
            "struct<{}>",
            self.fields
                .iter()
                .map(|field| format!("{}:{}", field.name, field.inspector.type_name()))
                .collect::<Vec<_>>()
                .join(",")
        )
    }

    pub const fn category(&self) -> Category {
        Category::Struct
    }

    pub fn fields(&self) -> &[StructField] {
        &self.fields
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Get the record held in a field's slot.
    ///
    /// Missing slots are a null result, not an error.
    pub fn field_at<'a>(&self, data: Option<&'a Record>, idx: usize) -> Result<Option<&'a Record>> {
        let data = match data {
            Some(data) => data,
            None => return Ok(None),
        };

        let slots = match data {
            Record::Array(slots) => slots,
            other => return Err(unsupported_shape("struct field access", other)),
        };

        Ok(slots.get(idx).and_then(|slot| slot.as_ref()))
    }

    pub fn field_by_name<'a>(
        &self,
        data: Option<&'a Record>,
        name: &str,
    ) -> Result<Option<&'a Record>> {
        match self.field_index(name) {
            Some(idx) => self.field_at(data, idx),
            None => Ok(None),
        }
    }
}
