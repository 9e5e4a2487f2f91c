use crate::scalar::OwnedScalarValue;

/// A single decoded record as produced by an external reader.
///
/// Readers emit either a scalar or a container of positional
/// sub-components. Nulls are represented by the absence of a record
/// (`Option<Record>`), never by a variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// A single scalar value.
    Value(OwnedScalarValue),

    /// Positional sub-components, each possibly absent.
    Array(Vec<Option<Record>>),
}

impl Record {
    /// Build the two-level encoding readers use for list values.
    ///
    /// The outer record holds a single sub-component which itself carries
    /// the list's elements. List introspection is always one level removed
    /// from the outer record.
    pub fn wrapped_list(elements: Vec<Option<Record>>) -> Record {
        Record::Array(vec![Some(Record::Array(elements))])
    }

    /// Name of this record's shape, for fault messages.
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Record::Value(_) => "value",
            Record::Array(_) => "array",
        }
    }
}

impl From<OwnedScalarValue> for Record {
    fn from(value: OwnedScalarValue) -> Self {
        Record::Value(value)
    }
}
