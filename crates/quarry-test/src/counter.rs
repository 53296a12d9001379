//! Invocation counting.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts how often wrapped closures are invoked.
///
/// Clones share the same count, so a counter can wrap several closures and
/// still be inspected afterwards.
///
/// ```rust
/// use quarry_core::{or_else, string, Decoder};
/// use quarry_test::{params, CallCounter};
///
/// let counter = CallCounter::new();
/// let decoder = or_else(string, counter.wrap_supplier(|| Some("fallback".to_string())));
///
/// decoder.decode(&params! { "q" => "x" }, "q");
/// assert_eq!(counter.count(), 0);
///
/// decoder.decode(&params! {}, "q");
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    count: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Creates a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invocations so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Returns true if nothing wrapped has been invoked.
    #[must_use]
    pub fn never_called(&self) -> bool {
        self.count() == 0
    }

    /// Resets the count to zero.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }

    /// Wraps a one-argument function, such as a `map` transform.
    pub fn wrap<X, Y, F>(&self, f: F) -> impl Fn(X) -> Y
    where
        F: Fn(X) -> Y,
    {
        let count = Arc::clone(&self.count);
        move |x| {
            count.fetch_add(1, Ordering::SeqCst);
            f(x)
        }
    }

    /// Wraps a zero-argument function, such as an `or_else` fallback.
    pub fn wrap_supplier<R, F>(&self, f: F) -> impl Fn() -> R
    where
        F: Fn() -> R,
    {
        let count = Arc::clone(&self.count);
        move || {
            count.fetch_add(1, Ordering::SeqCst);
            f()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_each_call() {
        let counter = CallCounter::new();
        let double = counter.wrap(|n: i32| n * 2);

        assert!(counter.never_called());
        assert_eq!(double(2), 4);
        assert_eq!(double(3), 6);
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_clones_share_count() {
        let counter = CallCounter::new();
        let other = counter.clone();
        let supply = other.wrap_supplier(|| 1);

        supply();
        assert_eq!(counter.count(), 1);

        counter.reset();
        assert_eq!(other.count(), 0);
    }
}
