use crate::link::{Ring, SENTINEL};
use crate::queue::Queue;

/// An iterator over the queue starting from the front. It is
/// constructed from the [`iter_front`] method on `Queue`.
///
/// [`iter_front`]: struct.Queue.html#method.iter_front
pub struct IterFront<'l> {
    target: &'l Queue,
    next_index: usize,
}

impl<'l> IterFront<'l> {
    pub(crate) fn new(target: &'l Queue, next_index: usize) -> Self {
        Self { target, next_index }
    }
}

impl<'l> Iterator for IterFront<'l> {
    type Item = &'l str;

    fn next(&mut self) -> Option<Self::Item> {
        if SENTINEL != self.next_index {
            let ix = self.next_index;
            self.next_index = self.target.next_of(ix);
            Some(self.target.value_of(ix))
        } else {
            None
        }
    }
}

/// An iterator over the queue starting from the back. It is
/// constructed from the [`iter_back`] method on `Queue`.
///
/// [`iter_back`]: struct.Queue.html#method.iter_back
pub struct IterBack<'l> {
    target: &'l Queue,
    next_index: usize,
}

impl<'l> IterBack<'l> {
    pub(crate) fn new(target: &'l Queue, next_index: usize) -> Self {
        Self { target, next_index }
    }
}

impl<'l> Iterator for IterBack<'l> {
    type Item = &'l str;

    fn next(&mut self) -> Option<Self::Item> {
        if SENTINEL != self.next_index {
            let ix = self.next_index;
            self.next_index = self.target.prev_of(ix);
            Some(self.target.value_of(ix))
        } else {
            None
        }
    }
}

/// A draining iterator over the queue starting from the front. It is
/// constructed from the [`drain_front`] method on `Queue`.
///
/// [`drain_front`]: struct.Queue.html#method.drain_front
pub struct DrainFront<'l> {
    target: &'l mut Queue,
}

impl<'l> DrainFront<'l> {
    pub(crate) fn new(target: &'l mut Queue) -> Self {
        Self { target }
    }
}

impl<'l> Iterator for DrainFront<'l> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.target.remove_head().map(|e| e.into_value())
    }
}

/// A draining iterator over the queue starting from the back. It is
/// constructed from the [`drain_back`] method on `Queue`.
///
/// [`drain_back`]: struct.Queue.html#method.drain_back
pub struct DrainBack<'l> {
    target: &'l mut Queue,
}

impl<'l> DrainBack<'l> {
    pub(crate) fn new(target: &'l mut Queue) -> Self {
        Self { target }
    }
}

impl<'l> Iterator for DrainBack<'l> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.target.remove_tail().map(|e| e.into_value())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn filter_can_find_items() {
        let mut q = Queue::new();
        q.insert_head("10").unwrap();
        q.insert_head("11").unwrap();
        q.insert_head("12").unwrap();

        assert_eq!(Some("10"), q.iter_front().find(|i| *i == "10"));
        assert_eq!(Some("12"), q.iter_back().find(|i| i.starts_with("12")));
        assert_eq!(None, q.iter_front().find(|i| *i == "13"));
    }

    #[test]
    fn iters_find_everything() {
        let mut q = Queue::new();
        q.insert_head("10").unwrap();
        let tok = q.insert_head("11").unwrap();
        q.insert_head("12").unwrap();

        assert_eq!(vec!["12", "11", "10"], q.iter_front().collect::<Vec<_>>());
        assert_eq!(vec!["10", "11", "12"], q.iter_back().collect::<Vec<_>>());

        q.remove(&tok).unwrap().release();

        assert_eq!(vec!["12", "10"], q.iter_front().collect::<Vec<_>>());
        assert_eq!(vec!["10", "12"], q.iter_back().collect::<Vec<_>>());
    }

    #[test]
    fn empty_queue_iterates_nothing() {
        let q = Queue::new();
        assert_eq!(0, q.iter_front().count());
        assert_eq!(0, q.iter_back().count());
    }

    #[test]
    fn drains_find_everything_and_leave_slots_free() {
        let mut q: Queue = vec!["10", "11", "12"].into_iter().collect();

        assert_eq!(0, q.len_freelist());
        assert_eq!(vec!["10", "11", "12"], q.drain_front().collect::<Vec<_>>());
        assert_eq!(3, q.len_freelist());
        assert!(q.is_empty());

        let mut q: Queue = vec!["10", "11", "12"].into_iter().collect();

        assert_eq!(vec!["12", "11", "10"], q.drain_back().collect::<Vec<_>>());
        assert_eq!(3, q.len_freelist());
        assert!(q.is_empty());
    }

    #[test]
    fn partial_drain_leaves_the_rest() {
        let mut q: Queue = vec!["a", "b", "c"].into_iter().collect();

        assert_eq!(Some("a".to_string()), q.drain_front().next());
        assert_eq!(vec!["b", "c"], q.iter_front().collect::<Vec<_>>());
    }
}
