//! A configurable schema for testing composite decoders.

use std::sync::Arc;

use parking_lot::Mutex;
use quarry_schema::{Schema, SchemaError};
use serde_json::Value;

type Verdict = dyn Fn(&Value) -> bool + Send + Sync;

/// A schema whose verdict is chosen by the test.
///
/// Accepted inputs are returned unchanged. Every input is recorded, in
/// order, whether it was accepted or not. Clones share the record.
///
/// ```rust
/// use quarry_core::array;
/// use quarry_test::{params, MockSchema};
/// use serde_json::json;
///
/// let schema = MockSchema::accept_all();
/// let bag = params! { "ids" => "1,2" };
///
/// assert_eq!(array(&bag, "ids", &schema), Some(vec![json!("1"), json!("2")]));
/// assert_eq!(schema.calls(), vec![json!("1"), json!("2")]);
/// ```
#[derive(Clone)]
pub struct MockSchema {
    verdict: Arc<Verdict>,
    calls: Arc<Mutex<Vec<Value>>>,
}

impl MockSchema {
    /// Accepts every input.
    #[must_use]
    pub fn accept_all() -> Self {
        Self::accepting(|_| true)
    }

    /// Rejects every input.
    #[must_use]
    pub fn reject_all() -> Self {
        Self::accepting(|_| false)
    }

    /// Accepts inputs for which `predicate` returns true.
    pub fn accepting<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            verdict: Arc::new(predicate),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Inputs seen so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<Value> {
        self.calls.lock().clone()
    }

    /// Number of inputs seen so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl std::fmt::Debug for MockSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSchema")
            .field("calls", &self.call_count())
            .finish_non_exhaustive()
    }
}

impl Schema for MockSchema {
    type Output = Value;

    fn parse(&self, input: &Value) -> Result<Value, SchemaError> {
        self.calls.lock().push(input.clone());
        if (self.verdict)(input) {
            Ok(input.clone())
        } else {
            Err(SchemaError::new("rejected by mock schema"))
        }
    }
}
