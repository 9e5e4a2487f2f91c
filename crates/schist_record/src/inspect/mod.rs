pub mod list;
pub use list::*;
pub mod primitive;
pub use primitive::*;
pub mod struct_inspector;
pub use struct_inspector::*;

use std::fmt;
use std::sync::Arc;

use schist_error::{Result, SchistError};
use tracing::trace;

use crate::datatype::DataType;
use crate::field::Schema;
use crate::record::Record;

/// Category of values an inspector interprets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Primitive,
    List,
    Struct,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive => write!(f, "PRIMITIVE"),
            Self::List => write!(f, "LIST"),
            Self::Struct => write!(f, "STRUCT"),
        }
    }
}

/// An inspector interprets records of one data type on behalf of the
/// host.
///
/// Inspectors hold no mutable state, so a single inspector can be shared
/// across threads inspecting distinct records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Inspector {
    Primitive(PrimitiveInspector),
    List(ListInspector),
    Struct(StructInspector),
}

impl Inspector {
    /// Build the inspector tree for a data type.
    pub fn for_datatype(datatype: &DataType) -> Result<Self> {
        Ok(match datatype {
            DataType::List(meta) => {
                let element = Inspector::for_datatype(&meta.datatype)?;
                Inspector::List(ListInspector::new(element))
            }
            DataType::Struct(meta) => {
                let fields = meta
                    .fields
                    .iter()
                    .map(|(name, datatype)| {
                        Ok(StructField {
                            name: name.clone(),
                            inspector: Arc::new(Inspector::for_datatype(datatype)?),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Inspector::Struct(StructInspector::new(fields))
            }
            other => Inspector::Primitive(PrimitiveInspector::new(other.clone())?),
        })
    }

    /// Build a struct inspector covering every field of a reader's
    /// schema.
    pub fn for_schema(schema: &Schema) -> Result<StructInspector> {
        trace!(
            num_fields = schema.fields.len(),
            "building inspector tree for schema"
        );
        let fields = schema
            .fields
            .iter()
            .map(|field| {
                Ok(StructField {
                    name: field.name.clone(),
                    inspector: Arc::new(Inspector::for_datatype(&field.datatype)?),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(StructInspector::new(fields))
    }

    /// Host-facing name of the inspected type.
    pub fn type_name(&self) -> String {
        match self {
            Self::Primitive(ins) => ins.type_name().to_string(),
            Self::List(ins) => ins.type_name(),
            Self::Struct(ins) => ins.type_name(),
        }
    }

    pub const fn category(&self) -> Category {
        match self {
            Self::Primitive(ins) => ins.category(),
            Self::List(ins) => ins.category(),
            Self::Struct(ins) => ins.category(),
        }
    }
}

impl From<PrimitiveInspector> for Inspector {
    fn from(value: PrimitiveInspector) -> Self {
        Inspector::Primitive(value)
    }
}

impl From<ListInspector> for Inspector {
    fn from(value: ListInspector) -> Self {
        Inspector::List(value)
    }
}

impl From<StructInspector> for Inspector {
    fn from(value: StructInspector) -> Self {
        Inspector::Struct(value)
    }
}

/// Fault for a non-null record whose shape an operation does not
/// recognize.
///
/// Null and empty data are sentinel results, never faults. Reaching this
/// means the caller handed an operation the wrong kind of record.
pub(crate) fn unsupported_shape(op: &'static str, record: &Record) -> SchistError {
    tracing::debug!(op, shape = record.variant_name(), "rejecting record shape");
    SchistError::new(format!(
        "Cannot inspect record of shape '{}' in {op}, expected an array record",
        record.variant_name()
    ))
}
