use schist_error::{Result, SchistError};

use super::{unsupported_shape, Category};
use crate::datatype::DataType;
use crate::record::Record;
use crate::scalar::OwnedScalarValue;

/// Interprets a record as a single scalar of a fixed data type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrimitiveInspector {
    datatype: DataType,
}

impl PrimitiveInspector {
    /// Create an inspector for a non-nested data type.
    ///
    /// Nested types get their own inspectors, routing them here is a
    /// programming error.
    pub fn new(datatype: DataType) -> Result<Self> {
        if datatype.is_nested() {
            return Err(SchistError::new(format!(
                "Cannot create primitive inspector for nested type {datatype}"
            )));
        }
        Ok(PrimitiveInspector { datatype })
    }

    pub fn datatype(&self) -> &DataType {
        &self.datatype
    }

    /// Host-facing name of the inspected type.
    pub fn type_name(&self) -> &'static str {
        match self.datatype {
            DataType::Null => "void",
            DataType::Boolean => "boolean",
            DataType::Int8 => "tinyint",
            DataType::Int16 => "smallint",
            DataType::Int32 => "int",
            DataType::Int64 => "bigint",
            DataType::UInt8 => "utinyint",
            DataType::UInt16 => "usmallint",
            DataType::UInt32 => "uinteger",
            DataType::UInt64 => "ubigint",
            DataType::Float32 => "float",
            DataType::Float64 => "double",
            DataType::Utf8 => "string",
            DataType::Binary => "binary",
            DataType::Struct(_) | DataType::List(_) => unreachable!("rejected at construction"),
        }
    }

    pub const fn category(&self) -> Category {
        Category::Primitive
    }

    /// Extract the scalar carried by a record.
    pub fn value<'a>(&self, data: Option<&'a Record>) -> Result<Option<&'a OwnedScalarValue>> {
        match data {
            None => Ok(None),
            Some(Record::Value(v)) => Ok(Some(v)),
            Some(other) => Err(unsupported_shape("scalar access", other)),
        }
    }
}
