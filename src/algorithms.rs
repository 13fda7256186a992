//! Whole-list algorithms. All of them rearrange or delete existing
//! nodes using only the ring primitives; none allocates an element.

use crate::link::{Ring, SENTINEL};
use crate::queue::Queue;
use std::cmp::Ordering;

impl Queue {
    /// Delete the middle element. For `n` elements this is the one at
    /// index `(n - 1) / 2`, found with a tortoise/hare walk: for six
    /// elements the third is deleted, for five the third as well.
    /// Returns `false` (and does nothing) if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q: Queue = vec!["a", "b", "c", "d", "e", "f"].into_iter().collect();
    /// assert!(q.delete_mid());
    /// assert_eq!(vec!["a", "b", "d", "e", "f"], q.iter_front().collect::<Vec<_>>());
    /// ```
    pub fn delete_mid(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }

        let mut slow = self.next_of(SENTINEL);
        let mut fast = slow;
        loop {
            let one = self.next_of(fast);
            if SENTINEL == one {
                break;
            }
            let two = self.next_of(one);
            if SENTINEL == two {
                break;
            }
            fast = two;
            slow = self.next_of(slow);
        }

        self.delete(slow);
        tracing::debug!(len = self.len(), "deleted middle element");
        true
    }

    /// Sort the queue, then delete every element whose text occurs more
    /// than once. Only values that were unique in the original queue
    /// survive. Always returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q: Queue = vec!["c", "a", "b", "c", "a"].into_iter().collect();
    /// assert!(q.delete_dup());
    /// assert_eq!(vec!["b"], q.iter_front().collect::<Vec<_>>());
    /// ```
    pub fn delete_dup(&mut self) -> bool {
        self.delete_dup_by(|a: &str, b: &str| a.cmp(b))
    }

    /// [`delete_dup`](#method.delete_dup) with a caller supplied
    /// ordering. Two texts are duplicates when `cmp` says they are
    /// `Equal`.
    pub fn delete_dup_by<F>(&mut self, mut cmp: F) -> bool
    where
        F: FnMut(&str, &str) -> Ordering,
    {
        self.sort_by(&mut cmp);

        let mut removed = 0;
        let mut ix = self.next_of(SENTINEL);
        while SENTINEL != ix {
            // Find the first node past the run of values equal to `ix`.
            let mut end = self.next_of(ix);
            while SENTINEL != end && Ordering::Equal == cmp(self.value_of(ix), self.value_of(end))
            {
                end = self.next_of(end);
            }

            if self.next_of(ix) == end {
                ix = end;
                continue;
            }

            while ix != end {
                let next = self.next_of(ix);
                self.delete(ix);
                removed += 1;
                ix = next;
            }
        }

        tracing::debug!(removed, len = self.len(), "deleted duplicates");
        true
    }

    /// Swap every two adjacent elements: the first with the second, the
    /// third with the fourth, and so on. A final unpaired element stays
    /// where it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q: Queue = vec!["a", "b", "c", "d", "e"].into_iter().collect();
    /// q.swap_pairs();
    /// assert_eq!(vec!["b", "a", "d", "c", "e"], q.iter_front().collect::<Vec<_>>());
    /// ```
    pub fn swap_pairs(&mut self) {
        let mut node = self.next_of(SENTINEL);
        while SENTINEL != node {
            let partner = self.next_of(node);
            if SENTINEL == partner {
                break;
            }
            self.unlink(node);
            self.splice_after(node, partner);
            node = self.next_of(node);
        }
    }

    /// Reverse the order of the queue in place. Each element is moved
    /// to the front in turn, so after one pass the order is reversed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q: Queue = vec!["1", "2", "3"].into_iter().collect();
    /// q.reverse();
    /// assert_eq!(vec!["3", "2", "1"], q.iter_front().collect::<Vec<_>>());
    /// ```
    pub fn reverse(&mut self) {
        if self.is_empty() {
            return;
        }

        let mut node = self.next_of(SENTINEL);
        while SENTINEL != node {
            let next = self.next_of(node);
            self.move_to_front(node);
            node = next;
        }
    }
}
