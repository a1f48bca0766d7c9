use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// The data bound to one form: a named data class plus field values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormData {
    class_name: String,
    values: BTreeMap<String, Value>,
}

impl FormData {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Value of `field`, or `None` when the field was never set.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Set (or overwrite) the value of `field`. `None` stores an explicit null.
    pub fn set(&mut self, field: impl Into<String>, value: Option<Value>) {
        self.values.insert(field.into(), value.unwrap_or(Value::Null));
    }

    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }
}
