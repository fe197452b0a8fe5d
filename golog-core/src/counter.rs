use std::sync::atomic::{AtomicU64, Ordering};

use crate::numerics::MOST_POSITIVE_EXACT_FLOAT;

const MAX_ID: u64 = (MOST_POSITIVE_EXACT_FLOAT - 1) as u64;

static VARIABLE_IDS: Counter = Counter::with_start(1);

pub struct Counter {
    next: AtomicU64,
}

impl Counter {
    /// Create a new counter starting at `start`.
    pub const fn with_start(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// Return a monotonically increasing integer ID.
    ///
    /// Wraps around at 53 bits of precision so that it can be safely
    /// coerced to an IEEE-754 double-float (f64).
    pub fn next(&self) -> u64 {
        match self
            .next
            .compare_exchange(MAX_ID, 1, Ordering::SeqCst, Ordering::SeqCst)
        {
            Ok(_) => MAX_ID,
            Err(_) => self.next.fetch_add(1, Ordering::SeqCst),
        }
    }
}

/// Fresh id for a new logic variable.
pub(crate) fn next_variable_id() -> u64 {
    VARIABLE_IDS.next()
}

#[test]
fn test_id_wrapping() {
    let counter = Counter::with_start(MAX_ID - 1);

    assert_eq!(MAX_ID - 1, counter.next());
    assert_eq!(MAX_ID, counter.next());
    assert_eq!(1, counter.next());
    assert_eq!(2, counter.next());
}

#[test]
fn test_variable_ids_are_distinct() {
    let a = next_variable_id();
    let b = next_variable_id();
    assert_ne!(a, b);
}
