/// Construction options for a `Queue`.
///
/// # Examples
///
/// ```
/// use ring_queue::{Queue, QueueConfig, QueueError};
///
/// let cfg = QueueConfig::new().initial_capacity(4).max_len(2);
/// let mut q = Queue::with_config(cfg);
///
/// q.insert_tail("a").unwrap();
/// q.insert_tail("b").unwrap();
/// assert_eq!(
///     Err(QueueError::CapacityExceeded { limit: 2 }),
///     q.insert_tail("c")
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueConfig {
    // Number of slots placed on the free list up front.
    pub(crate) initial_capacity: usize,
    // Upper bound on linked elements. `None` means unbounded.
    pub(crate) max_len: Option<usize>,
}

impl QueueConfig {
    /// Unbounded, with no slots preallocated.
    pub fn new() -> QueueConfig {
        QueueConfig::default()
    }

    /// Preallocate `capacity` slots on the free list.
    pub fn initial_capacity(mut self, capacity: usize) -> QueueConfig {
        self.initial_capacity = capacity;
        self
    }

    /// Refuse inserts once `max_len` elements are linked.
    pub fn max_len(mut self, max_len: usize) -> QueueConfig {
        self.max_len = Some(max_len);
        self
    }

    /// Remove any bound set with [`max_len`](#method.max_len).
    pub fn unbounded(mut self) -> QueueConfig {
        self.max_len = None;
        self
    }
}
