/// Index reserved for the queue's sentinel. The sentinel is not stored
/// in the slot vector, so no real slot can ever have this index.
pub(crate) const SENTINEL: usize = usize::MAX;

/// One position on the ring: the indices of the neighbouring nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Link {
    pub(crate) next: usize,
    pub(crate) prev: usize,
}

impl Link {
    /// A link pointing at itself. This is what the sentinel of an
    /// empty queue looks like, and what `unlink` leaves behind.
    pub(crate) fn detached(ix: usize) -> Link {
        Link { next: ix, prev: ix }
    }
}

/// Anything that can resolve a node index (including `SENTINEL`) to its
/// `Link`. The splice primitives are provided on top of that, and every
/// higher level algorithm is written in terms of them.
pub(crate) trait Ring {
    fn link(&self, ix: usize) -> &Link;
    fn link_mut(&mut self, ix: usize) -> &mut Link;

    fn next_of(&self, ix: usize) -> usize {
        self.link(ix).next
    }

    fn prev_of(&self, ix: usize) -> usize {
        self.link(ix).prev
    }

    /// Splice `node` in immediately after `after`.
    fn splice_after(&mut self, node: usize, after: usize) {
        let next = self.link(after).next;
        debug_assert_eq!(after, self.link(next).prev);

        *self.link_mut(node) = Link { next, prev: after };
        self.link_mut(next).prev = node;
        self.link_mut(after).next = node;
    }

    /// Remove `node` from the ring it is on. The node's own link is
    /// reset to point at itself.
    fn unlink(&mut self, node: usize) {
        debug_assert_ne!(SENTINEL, node);
        let Link { next, prev } = *self.link(node);
        debug_assert_eq!(node, self.link(prev).next);
        debug_assert_eq!(node, self.link(next).prev);

        self.link_mut(prev).next = next;
        self.link_mut(next).prev = prev;
        *self.link_mut(node) = Link::detached(node);
    }

    /// Unlink `node` and splice it back in as the first node after the
    /// sentinel.
    fn move_to_front(&mut self, node: usize) {
        self.unlink(node);
        self.splice_after(node, SENTINEL);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // A bare ring with no payloads, enough to exercise the primitives.
    struct Bare {
        head: Link,
        nodes: Vec<Link>,
    }

    impl Bare {
        fn with_nodes(n: usize) -> Bare {
            let mut r = Bare {
                head: Link::detached(SENTINEL),
                nodes: (0..n).map(Link::detached).collect(),
            };
            for ix in 0..n {
                let last = r.prev_of(SENTINEL);
                r.splice_after(ix, last);
            }
            r
        }

        fn order(&self) -> Vec<usize> {
            let mut v = Vec::new();
            let mut ix = self.next_of(SENTINEL);
            while ix != SENTINEL {
                v.push(ix);
                ix = self.next_of(ix);
            }
            v
        }

        fn assert_consistent(&self) {
            let mut ix = SENTINEL;
            loop {
                let next = self.next_of(ix);
                assert_eq!(ix, self.prev_of(next));
                ix = next;
                if ix == SENTINEL {
                    break;
                }
            }
        }
    }

    impl Ring for Bare {
        fn link(&self, ix: usize) -> &Link {
            if ix == SENTINEL {
                &self.head
            } else {
                &self.nodes[ix]
            }
        }

        fn link_mut(&mut self, ix: usize) -> &mut Link {
            if ix == SENTINEL {
                &mut self.head
            } else {
                &mut self.nodes[ix]
            }
        }
    }

    #[test]
    fn empty_ring_points_at_itself() {
        let r = Bare::with_nodes(0);
        assert_eq!(SENTINEL, r.next_of(SENTINEL));
        assert_eq!(SENTINEL, r.prev_of(SENTINEL));
        assert!(r.order().is_empty());
    }

    #[test]
    fn splice_after_keeps_order() {
        let r = Bare::with_nodes(4);
        assert_eq!(vec![0, 1, 2, 3], r.order());
        r.assert_consistent();
    }

    #[test]
    fn unlink_detaches_node() {
        let mut r = Bare::with_nodes(3);
        r.unlink(1);

        assert_eq!(vec![0, 2], r.order());
        assert_eq!(Link::detached(1), *r.link(1));
        r.assert_consistent();

        r.unlink(0);
        r.unlink(2);
        assert!(r.order().is_empty());
        assert_eq!(Link::detached(SENTINEL), r.head);
    }

    #[test]
    fn move_to_front_works() {
        let mut r = Bare::with_nodes(3);

        r.move_to_front(2);
        assert_eq!(vec![2, 0, 1], r.order());

        // Already at the front.
        r.move_to_front(2);
        assert_eq!(vec![2, 0, 1], r.order());
        r.assert_consistent();
    }
}
