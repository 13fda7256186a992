//! Merge sort over the ring.
//!
//! The ring is first cut open into a forward chain: the nodes' `next`
//! fields are followed from the first element until `NIL`, and the
//! `prev` fields are ignored. The chain is split with a tortoise/hare
//! walk and merged back together recursively. Finally one pass over
//! the sorted chain rebuilds the `prev` fields and closes the ring at
//! the sentinel again.

use crate::link::{Link, Ring, SENTINEL};
use crate::queue::Queue;
use std::cmp::Ordering;

// Terminates a forward chain. Distinct from `SENTINEL` so a chain can
// never be mistaken for a closed ring.
const NIL: usize = usize::MAX - 1;

impl Queue {
    /// Sort the queue in ascending lexicographic order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q: Queue = vec!["pear", "apple", "fig"].into_iter().collect();
    /// q.sort();
    /// assert_eq!(vec!["apple", "fig", "pear"], q.iter_front().collect::<Vec<_>>());
    /// ```
    pub fn sort(&mut self) {
        self.sort_by(|a: &str, b: &str| a.cmp(b))
    }

    /// Sort the queue in ascending order according to `cmp`.
    ///
    /// The sort is **not stable**. When two texts compare `Equal` the
    /// merge takes the one from the right half first, so equal runs can
    /// come out in a different order than they went in.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q: Queue = vec!["bb", "a", "ccc"].into_iter().collect();
    /// q.sort_by(|a, b| b.len().cmp(&a.len()));
    /// assert_eq!(vec!["ccc", "bb", "a"], q.iter_front().collect::<Vec<_>>());
    /// ```
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&str, &str) -> Ordering,
    {
        // Empty or a single element.
        if self.next_of(SENTINEL) == self.prev_of(SENTINEL) {
            return;
        }

        // While the ring is open, a panic in `cmp` would otherwise leave
        // the queue looking empty with its elements stranded.
        let mut guard = Relink {
            queue: self,
            armed: true,
        };

        let chain = detach(&mut *guard.queue);
        let chain = merge_sort(&mut *guard.queue, chain, &mut cmp);
        reattach(&mut *guard.queue, chain);
        guard.armed = false;

        tracing::debug!(len = guard.queue.len(), "sorted");
    }
}

// Rebuilds the ring from the slots if dropped while still armed.
struct Relink<'q> {
    queue: &'q mut Queue,
    armed: bool,
}

impl<'q> Drop for Relink<'q> {
    fn drop(&mut self) {
        if self.armed {
            relink_all(self.queue);
            tracing::warn!(len = self.queue.len(), "sort interrupted, ring rebuilt");
        }
    }
}

// Close every used slot back into the ring in slot order, ignoring
// whatever their links held before.
fn relink_all(q: &mut Queue) {
    *q.link_mut(SENTINEL) = Link::detached(SENTINEL);
    for ix in 0..q.slots.len() {
        if q.slots[ix].get_used().is_some() {
            let back = q.prev_of(SENTINEL);
            q.splice_after(ix, back);
        }
    }
}

// Open the ring into a forward chain and empty the sentinel. Returns
// the first node of the chain.
fn detach(q: &mut Queue) -> usize {
    let first = q.next_of(SENTINEL);
    let last = q.prev_of(SENTINEL);

    q.link_mut(last).next = NIL;
    *q.link_mut(SENTINEL) = Link::detached(SENTINEL);

    first
}

// Close the forward chain starting at `head` back into the ring,
// fixing every `prev` on the way.
fn reattach(q: &mut Queue, head: usize) {
    let mut prev = SENTINEL;
    let mut ix = head;
    while NIL != ix {
        q.link_mut(prev).next = ix;
        q.link_mut(ix).prev = prev;
        prev = ix;
        ix = q.next_of(ix);
    }

    q.link_mut(prev).next = SENTINEL;
    q.link_mut(SENTINEL).prev = prev;
}

fn merge_sort<F>(q: &mut Queue, head: usize, cmp: &mut F) -> usize
where
    F: FnMut(&str, &str) -> Ordering,
{
    if NIL == head || NIL == q.next_of(head) {
        return head;
    }

    let mid = split(q, head);
    let left = merge_sort(q, head, cmp);
    let right = merge_sort(q, mid, cmp);
    merge(q, left, right, cmp)
}

// Cut a chain of at least two nodes in half and return the head of the
// second half. The first half keeps `head` and gets the smaller share
// when the length is odd.
fn split(q: &mut Queue, head: usize) -> usize {
    let mut slow = head;
    let mut fast = head;
    let mut tail = head;

    while NIL != fast && NIL != q.next_of(fast) {
        fast = q.next_of(q.next_of(fast));
        tail = slow;
        slow = q.next_of(slow);
    }

    debug_assert_ne!(tail, slow);
    q.link_mut(tail).next = NIL;
    slow
}

// Merge two sorted chains. The left head is taken only when it is
// strictly less than the right head.
fn merge<F>(q: &mut Queue, mut left: usize, mut right: usize, cmp: &mut F) -> usize
where
    F: FnMut(&str, &str) -> Ordering,
{
    let mut head = NIL;
    let mut tail = NIL;

    while NIL != left && NIL != right {
        let taken = if Ordering::Less == cmp(q.value_of(left), q.value_of(right)) {
            let taken = left;
            left = q.next_of(left);
            taken
        } else {
            let taken = right;
            right = q.next_of(right);
            taken
        };

        if NIL == tail {
            head = taken;
        } else {
            q.link_mut(tail).next = taken;
        }
        tail = taken;
    }

    let rest = if NIL != left { left } else { right };
    if NIL == tail {
        rest
    } else {
        q.link_mut(tail).next = rest;
        head
    }
}
