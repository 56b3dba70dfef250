//! WHERE clause builder
//!
//! An unstructured conjunction of condition fragments with positional
//! arguments. No validation of the fragments themselves.

use crate::types::Value;

#[derive(Debug, Clone, Default)]
pub struct Where {
    conditions: Vec<String>,
    args: Vec<Value>,
}

impl Where {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition fragment and its positional arguments
    pub fn and(
        mut self,
        condition: impl Into<String>,
        args: impl IntoIterator<Item = Value>,
    ) -> Self {
        self.conditions.push(condition.into());
        self.args.extend(args);
        self
    }

    /// Render the clause; empty string when no conditions were added
    pub fn clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
