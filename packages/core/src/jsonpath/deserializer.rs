//! Typed extraction of selected values

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::jsonpath::core_evaluator::Selector;
use crate::jsonpath::error::{JsonPathError, JsonPathResult};

impl Selector {
    /// Select the value at `path` and deserialize it into `T`
    ///
    /// # Errors
    ///
    /// Propagates every error from [`Selector::get`]; returns
    /// `Deserialization` if the selected value does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, root: &Value, path: &str) -> JsonPathResult<T> {
        let value = self.get(root, path)?;
        <T as serde::Deserialize>::deserialize(value).map_err(|e| {
            log::debug!("{path:?} does not deserialize into {}: {e}", std::any::type_name::<T>());
            JsonPathError::deserialization(path, std::any::type_name::<T>(), &e)
        })
    }

    /// Like [`Selector::get_as`], but `null` and absence yield `Ok(None)`
    ///
    /// # Errors
    ///
    /// Propagates non-absence selection errors and deserialization errors.
    pub fn get_opt_as<T: DeserializeOwned>(
        &self,
        root: &Value,
        path: &str,
    ) -> JsonPathResult<Option<T>> {
        if self.is_null_or_absent(root, path)? {
            return Ok(None);
        }
        self.get_as(root, path).map(Some)
    }
}
