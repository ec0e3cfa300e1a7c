//! Widget identifier generation.

use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

/// Length of the random suffix produced by [`RandomIds`].
const RANDOM_SUFFIX_LEN: usize = 13;

/// Produces element IDs for stateful widgets (galleries, tabs, forms, ...).
///
/// IDs must be unique within one rendered document so that several widgets of
/// the same kind do not collide.
pub trait IdGenerator: Send + Sync {
    /// Generate an ID of the form `{prefix}-{suffix}`.
    fn generate(&self, prefix: &str) -> String;
}

/// Random hexadecimal suffixes, e.g. `tabs-3f2a9c41b07de`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self, prefix: &str) -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("{prefix}-{}", &hex[..RANDOM_SUFFIX_LEN])
    }
}

/// Deterministic incrementing suffixes: `gallery-1`, `tabs-2`, ...
///
/// One counter is shared by all prefixes. Intended for tests and reproducible
/// output.
///
/// # Example
///
/// ```
/// use sc_engine::{IdGenerator, SequentialIds};
///
/// let ids = SequentialIds::new();
/// assert_eq!(ids.generate("tabs"), "tabs-1");
/// assert_eq!(ids.generate("gallery"), "gallery-2");
/// ```
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicUsize,
}

impl SequentialIds {
    /// Create a generator starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}-{n}")
    }
}
