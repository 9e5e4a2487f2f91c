use std::hash::{Hash, Hasher};
use std::sync::Arc;

use schist_error::Result;

use super::{unsupported_shape, Category, Inspector};
use crate::record::Record;

/// Interprets the two-level array encoding of a record as a list value.
///
/// The outer record either has zero sub-components (no list data) or its
/// component 0 is itself an array record carrying the list's elements, so
/// element access is always one level removed from the outer record.
///
/// The inspector holds only the element inspector and never owns the
/// records or lists it is handed.
#[derive(Debug, Clone)]
pub struct ListInspector {
    /// Inspector for the list's element type.
    element: Arc<Inspector>,
}

/// State of the carrier slot of a wrapped list record.
#[derive(Debug)]
enum Carrier<'a> {
    /// The outer record has no sub-components.
    Missing,

    /// The carrier slot exists but holds no payload.
    Null,

    /// The list's elements.
    Items(&'a [Option<Record>]),
}

impl ListInspector {
    pub fn new(element: impl Into<Arc<Inspector>>) -> Self {
        ListInspector {
            element: element.into(),
        }
    }

    pub fn type_name(&self) -> String {
        format!("array<{}>", self.element.type_name())
    }

    pub const fn category(&self) -> Category {
        Category::List
    }

    pub fn element_inspector(&self) -> &Arc<Inspector> {
        &self.element
    }

    fn carrier<'a>(&self, data: &'a Record, op: &'static str) -> Result<Carrier<'a>> {
        let outer = match data {
            Record::Array(items) => items,
            other => return Err(unsupported_shape(op, other)),
        };

        if outer.is_empty() {
            return Ok(Carrier::Missing);
        }

        match outer[0].as_ref() {
            None => Ok(Carrier::Null),
            Some(Record::Array(elements)) => Ok(Carrier::Items(elements)),
            Some(other) => Err(unsupported_shape(op, other)),
        }
    }

    /// Get the element at an index.
    ///
    /// Indices outside the list's bounds are not an error, they produce
    /// None.
    pub fn element<'a>(&self, data: Option<&'a Record>, idx: i64) -> Result<Option<&'a Record>> {
        let data = match data {
            Some(data) => data,
            None => return Ok(None),
        };

        let elements = match self.carrier(data, "list element access")? {
            Carrier::Items(elements) => elements,
            Carrier::Missing | Carrier::Null => return Ok(None),
        };

        if idx < 0 || idx as usize >= elements.len() {
            return Ok(None);
        }

        Ok(elements[idx as usize].as_ref())
    }

    /// Number of elements in the list.
    ///
    /// Returns -1 if the record carries no list data at all, and 0 if the
    /// carrier slot is present but holds nothing. The host's boundary
    /// contract fixes these sentinels.
    pub fn len(&self, data: Option<&Record>) -> Result<i64> {
        let data = match data {
            Some(data) => data,
            None => return Ok(-1),
        };

        match self.carrier(data, "list length")? {
            Carrier::Missing => Ok(-1),
            Carrier::Null => Ok(0),
            Carrier::Items(elements) => Ok(elements.len() as i64),
        }
    }

    /// Materialize the full list as a read-only view over the record's
    /// own storage.
    pub fn values<'a>(&self, data: Option<&'a Record>) -> Result<Option<&'a [Option<Record>]>> {
        let data = match data {
            Some(data) => data,
            None => return Ok(None),
        };

        match self.carrier(data, "list materialization")? {
            Carrier::Missing | Carrier::Null => Ok(None),
            Carrier::Items(elements) => Ok(Some(elements)),
        }
    }

    /// Create a caller-owned mutable list with every entry null.
    pub fn create(&self, size: usize) -> Vec<Option<Record>> {
        vec![None; size]
    }

    /// Replace the element at an index.
    ///
    /// The index being in bounds is the caller's contract.
    pub fn set(&self, list: &mut Vec<Option<Record>>, idx: usize, value: Option<Record>) {
        list[idx] = value;
    }

    /// Truncate or null-pad the list to a new size.
    pub fn resize(&self, list: &mut Vec<Option<Record>>, new_size: usize) {
        list.resize(new_size, None);
    }
}

impl PartialEq for ListInspector {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.element, &other.element) || self.element == other.element
    }
}

impl Eq for ListInspector {}

impl Hash for ListInspector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.element.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;
    use crate::datatype::DataType;
    use crate::inspect::PrimitiveInspector;
    use crate::scalar::ScalarValue;

    fn int_list_inspector() -> ListInspector {
        ListInspector::new(Inspector::Primitive(
            PrimitiveInspector::new(DataType::Int32).unwrap(),
        ))
    }

    fn int_list(vals: &[Option<i32>]) -> Record {
        Record::wrapped_list(
            vals.iter()
                .map(|v| v.map(|v| Record::Value(ScalarValue::Int32(v))))
                .collect(),
        )
    }

    fn hash_of(inspector: &ListInspector) -> u64 {
        let mut hasher = DefaultHasher::new();
        inspector.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn type_name_and_category() {
        let inspector = int_list_inspector();
        assert_eq!("array<int>", inspector.type_name());
        assert_eq!(Category::List, inspector.category());
    }

    #[test]
    fn length_and_elements_for_valid_record() {
        let inspector = int_list_inspector();
        let record = int_list(&[Some(1), None, Some(3)]);

        assert_eq!(3, inspector.len(Some(&record)).unwrap());

        assert_eq!(
            Some(&Record::Value(ScalarValue::Int32(1))),
            inspector.element(Some(&record), 0).unwrap()
        );
        assert_eq!(None, inspector.element(Some(&record), 1).unwrap());
        assert_eq!(
            Some(&Record::Value(ScalarValue::Int32(3))),
            inspector.element(Some(&record), 2).unwrap()
        );

        // Out of bounds either way is a null result, not an error.
        assert_eq!(None, inspector.element(Some(&record), 3).unwrap());
        assert_eq!(None, inspector.element(Some(&record), -1).unwrap());
    }

    #[test]
    fn values_returns_view_over_record() {
        let inspector = int_list_inspector();
        let record = int_list(&[Some(7), Some(8)]);

        let values = inspector.values(Some(&record)).unwrap().unwrap();
        assert_eq!(2, values.len());
        assert_eq!(Some(Record::Value(ScalarValue::Int32(8))), values[1]);
    }

    #[test]
    fn null_record_sentinels() {
        let inspector = int_list_inspector();

        assert_eq!(-1, inspector.len(None).unwrap());
        assert_eq!(None, inspector.values(None).unwrap());
        assert_eq!(None, inspector.element(None, 0).unwrap());
    }

    #[test]
    fn empty_outer_record_sentinels() {
        let inspector = int_list_inspector();
        let record = Record::Array(Vec::new());

        assert_eq!(-1, inspector.len(Some(&record)).unwrap());
        assert_eq!(None, inspector.values(Some(&record)).unwrap());
        assert_eq!(None, inspector.element(Some(&record), 0).unwrap());
    }

    #[test]
    fn null_carrier_is_present_but_empty() {
        let inspector = int_list_inspector();
        let record = Record::Array(vec![None]);

        assert_eq!(0, inspector.len(Some(&record)).unwrap());
        assert_eq!(None, inspector.values(Some(&record)).unwrap());
        assert_eq!(None, inspector.element(Some(&record), 0).unwrap());
    }

    #[test]
    fn create_set_resize() {
        let inspector = int_list_inspector();

        let mut list = inspector.create(3);
        assert_eq!(vec![None, None, None], list);

        inspector.set(&mut list, 1, Some(Record::Value(ScalarValue::Int32(9))));
        assert_eq!(Some(Record::Value(ScalarValue::Int32(9))), list[1]);

        // Growing pads with nulls.
        inspector.resize(&mut list, 5);
        assert_eq!(5, list.len());
        assert_eq!(None, list[4]);

        // Shrinking keeps the leading entries.
        inspector.resize(&mut list, 2);
        assert_eq!(
            vec![None, Some(Record::Value(ScalarValue::Int32(9)))],
            list
        );
    }

    #[test]
    fn equality_by_element_inspector() {
        let a = int_list_inspector();
        let b = int_list_inspector();
        let c = ListInspector::new(Inspector::Primitive(
            PrimitiveInspector::new(DataType::Utf8).unwrap(),
        ));

        assert_eq!(a, b);
        assert_ne!(a, c);

        // Clones share the element inspector, hitting the pointer
        // equality short-circuit.
        let a2 = a.clone();
        assert!(Arc::ptr_eq(a.element_inspector(), a2.element_inspector()));
        assert_eq!(a, a2);

        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn never_equals_other_inspector_kinds() {
        let list = Inspector::List(int_list_inspector());
        let primitive = Inspector::Primitive(PrimitiveInspector::new(DataType::Int32).unwrap());

        assert_ne!(list, primitive);
    }

    #[test]
    fn unsupported_shape_faults() {
        let inspector = int_list_inspector();
        let record = Record::Value(ScalarValue::Int32(1));

        assert!(inspector.element(Some(&record), 0).is_err());
        assert!(inspector.len(Some(&record)).is_err());
        assert!(inspector.values(Some(&record)).is_err());

        let err = inspector.len(Some(&record)).unwrap_err();
        assert!(err.to_string().contains("'value'"), "{err}");
    }

    #[test]
    fn unsupported_carrier_shape_faults() {
        let inspector = int_list_inspector();
        // Carrier slot holds a scalar instead of the element array.
        let record = Record::Array(vec![Some(Record::Value(ScalarValue::Int32(1)))]);

        assert!(inspector.len(Some(&record)).is_err());
        assert!(inspector.element(Some(&record), 0).is_err());
        assert!(inspector.values(Some(&record)).is_err());
    }
}
