//! Tests for null vs missing value semantics
//!
//! Covers the three predicates and the classification they share.

use dollarpath_core::jsonpath::{self, ErrorKind, PropertyAccessResult};
use serde_json::{Value, json};

use super::common::{bookstore, init_logging};

#[test]
fn test_is_null() {
    init_logging();
    let root = bookstore();

    assert!(jsonpath::is_null(&root, "$.store.null_data").unwrap());
    assert!(!jsonpath::is_null(&root, "$.store.book[0].title").unwrap());
    assert!(!jsonpath::is_null(&root, "$.store").unwrap());

    let cases = [
        ("$.notexist", ErrorKind::KeyNotFound),
        ("$.store.book[0].deep.notexist", ErrorKind::KeyNotFound),
        ("$.store.book[fail].title", ErrorKind::IndexNotNumeric),
        (".store", ErrorKind::InvalidPathPrefix),
    ];
    for (path, expected) in cases {
        assert_eq!(jsonpath::is_null(&root, path).unwrap_err().kind(), expected, "{path}");
    }
}

#[test]
fn test_exists() {
    let root = bookstore();

    assert!(!jsonpath::exists(&root, "$.notexist").unwrap());
    assert!(jsonpath::exists(&root, "$.store.book[0].title").unwrap());
    assert!(jsonpath::exists(&root, "$.store.null_data").unwrap());
    assert!(jsonpath::exists(&root, "$.store").unwrap());
    assert!(!jsonpath::exists(&root, "$.store.book[0].deep.notexist").unwrap());
    assert!(!jsonpath::exists(&root, "$.store.book[2]").unwrap());
    assert!(!jsonpath::exists(&root, "$.store.book[-1]").unwrap());

    assert_eq!(
        jsonpath::exists(&root, "$.store.book[fail].title").unwrap_err().kind(),
        ErrorKind::IndexNotNumeric
    );
    assert_eq!(
        jsonpath::exists(&root, ".store").unwrap_err().kind(),
        ErrorKind::InvalidPathPrefix
    );
    assert_eq!(
        jsonpath::exists(&root, "$.store.bicycle.color.shade").unwrap_err().kind(),
        ErrorKind::NotTraversable
    );
}

#[test]
fn test_is_null_or_absent() {
    let root = bookstore();

    assert!(jsonpath::is_null_or_absent(&root, "$.store.null_data").unwrap());
    assert!(jsonpath::is_null_or_absent(&root, "$.notexist").unwrap());
    assert!(jsonpath::is_null_or_absent(&root, "$.store.book[7]").unwrap());
    assert!(!jsonpath::is_null_or_absent(&root, "$.store.book[0].title").unwrap());
    assert!(!jsonpath::is_null_or_absent(&root, "$.store").unwrap());

    assert_eq!(
        jsonpath::is_null_or_absent(&root, "$.store.book[fail]").unwrap_err().kind(),
        ErrorKind::IndexNotNumeric
    );
    assert_eq!(
        jsonpath::is_null_or_absent(&root, "store").unwrap_err().kind(),
        ErrorKind::InvalidPathPrefix
    );
}

#[test]
fn test_explicit_null_member() {
    let root = json!({"a": null});
    assert!(jsonpath::is_null(&root, "$.a").unwrap());
    assert!(jsonpath::exists(&root, "$.a").unwrap());
    assert!(jsonpath::is_null_or_absent(&root, "$.a").unwrap());
}

#[test]
fn test_empty_object() {
    let root = json!({});
    assert_eq!(
        jsonpath::is_null(&root, "$.a").unwrap_err().kind(),
        ErrorKind::KeyNotFound
    );
    assert!(!jsonpath::exists(&root, "$.a").unwrap());
    assert!(jsonpath::is_null_or_absent(&root, "$.a").unwrap());
}

#[test]
fn test_null_array_element() {
    let root = json!([null, "value", 42]);
    assert!(jsonpath::is_null(&root, "$[0]").unwrap());
    assert!(!jsonpath::is_null(&root, "$[1]").unwrap());
    assert!(jsonpath::exists(&root, "$[0]").unwrap());
    assert!(!jsonpath::exists(&root, "$[3]").unwrap());
}

#[test]
fn test_classify() {
    let root = bookstore();

    assert_eq!(
        jsonpath::classify(&root, "$.store.null_data").unwrap(),
        PropertyAccessResult::NullValue
    );
    assert_eq!(
        jsonpath::classify(&root, "$.notexist").unwrap(),
        PropertyAccessResult::Missing
    );
    assert_eq!(
        jsonpath::classify(&root, "$.store.bicycle.color").unwrap(),
        PropertyAccessResult::Value(&json!("red"))
    );
    assert_eq!(
        jsonpath::classify(&root, "$.store.book[x]").unwrap_err().kind(),
        ErrorKind::IndexNotNumeric
    );
}

#[test]
fn test_property_access_result_accessors() {
    let value = json!("hello");

    let present = PropertyAccessResult::Value(&value);
    assert!(present.is_present());
    assert!(!present.is_missing());
    assert!(!present.is_null());
    assert!(!present.is_null_or_absent());
    assert_eq!(present.value(), Some(&value));
    assert_eq!(present.value_with_null(), Some(&value));

    let null = PropertyAccessResult::NullValue;
    assert!(null.is_present());
    assert!(null.is_null());
    assert!(null.is_null_or_absent());
    assert_eq!(null.value(), None);
    assert_eq!(null.value_with_null(), Some(&Value::Null));

    let missing = PropertyAccessResult::Missing;
    assert!(!missing.is_present());
    assert!(missing.is_missing());
    assert!(!missing.is_null());
    assert!(missing.is_null_or_absent());
    assert_eq!(missing.value(), None);
    assert_eq!(missing.value_with_null(), None);
}

#[test]
fn test_property_access_result_has_total_equality() {
    fn assert_eq_impl<T: Eq>(_: &T) {}

    let root = json!({"a": [1, null]});
    let first = jsonpath::classify(&root, "$.a[0]").unwrap();
    assert_eq_impl(&first);
    assert_eq!(first, jsonpath::classify(&root, "$['a'][0]").unwrap());
    assert_ne!(first, jsonpath::classify(&root, "$.a[1]").unwrap());
}
