//! Null vs missing classification of a selected path

use serde_json::Value;

use crate::jsonpath::core_evaluator::Selector;
use crate::jsonpath::error::JsonPathResult;

static NULL: Value = Value::Null;

/// Outcome of selecting a path, distinguishing an explicit `null` from absence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyAccessResult<'a> {
    /// Path exists and holds a null value
    NullValue,
    /// Path exists and holds a non-null value
    Value(&'a Value),
    /// A key or index along the path does not exist
    Missing,
}

impl<'a> PropertyAccessResult<'a> {
    /// Null and non-null values are present; missing is not
    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.is_missing()
    }

    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, PropertyAccessResult::Missing)
    }

    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyAccessResult::NullValue)
    }

    /// True for null and for missing, the cases that deserialize to a zero value
    #[inline]
    #[must_use]
    pub fn is_null_or_absent(&self) -> bool {
        !matches!(self, PropertyAccessResult::Value(_))
    }

    /// The non-null value, if any
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&'a Value> {
        match *self {
            PropertyAccessResult::Value(v) => Some(v),
            PropertyAccessResult::NullValue | PropertyAccessResult::Missing => None,
        }
    }

    /// The selected value with null preserved; `None` only when missing
    #[inline]
    #[must_use]
    pub fn value_with_null(&self) -> Option<&'a Value> {
        match *self {
            PropertyAccessResult::Value(v) => Some(v),
            PropertyAccessResult::NullValue => Some(&NULL),
            PropertyAccessResult::Missing => None,
        }
    }
}

impl Selector {
    /// Classify the value at `path` as present, null or missing
    ///
    /// Absence (`KeyNotFound`, `IndexOutOfRange`) folds into
    /// [`PropertyAccessResult::Missing`] the same way [`Selector::exists`]
    /// folds it into `false`.
    ///
    /// # Errors
    ///
    /// Propagates every non-absence error from [`Selector::get`].
    pub fn classify<'a>(&self, root: &'a Value, path: &str) -> JsonPathResult<PropertyAccessResult<'a>> {
        match self.get(root, path) {
            Ok(Value::Null) => Ok(PropertyAccessResult::NullValue),
            Ok(value) => Ok(PropertyAccessResult::Value(value)),
            Err(e) if e.is_absence() => Ok(PropertyAccessResult::Missing),
            Err(e) => Err(e),
        }
    }
}
