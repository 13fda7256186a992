use crate::config::QueueConfig;
use crate::element::Element;
use crate::error::{QueueError, Result};
use crate::iterators::{DrainBack, DrainFront, IterBack, IterFront};
use crate::link::{Link, Ring, SENTINEL};
use crate::slot::Slot;
use crate::token::Token;
use std::fmt;
use std::iter::FromIterator;

/// A double-ended queue of strings kept on a circular, doubly-linked
/// ring anchored at a sentinel. Elements can be inserted and removed
/// at either end in constant time, removed from the middle by token,
/// and rearranged in place by the list algorithms (sort, reverse,
/// pairwise swap, duplicate and middle deletion).
pub struct Queue {
    // The sentinel. `head.next` is the front, `head.prev` the back.
    head: Link,
    // Index of the first element on the free list. MAX when the
    // free-list is empty.
    free_list: usize,
    // The next generation number.
    next_generation: usize,
    // The number of slots currently used by entries.
    len_used: usize,
    // The number of slots currently on the free list.
    len_free: usize,
    // Refuse inserts past this many entries.
    max_len: Option<usize>,
    // The memory used to back the ring.
    pub(crate) slots: Vec<Slot>,
}

impl Default for Queue {
    fn default() -> Queue {
        Queue::new()
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter_front()).finish()
    }
}

impl Ring for Queue {
    fn link(&self, ix: usize) -> &Link {
        if SENTINEL == ix {
            &self.head
        } else {
            self.slots[ix]
                .get_used()
                .expect("self.slots[ix] is expected to be used")
                .link()
        }
    }

    fn link_mut(&mut self, ix: usize) -> &mut Link {
        if SENTINEL == ix {
            &mut self.head
        } else {
            self.slots[ix]
                .get_used_mut()
                .expect("self.slots[ix] is expected to be used")
                .link_mut()
        }
    }
}

impl Queue {
    /// Creates an empty `Queue`. No allocations are performed until
    /// values are added.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let q = Queue::new();
    /// assert!(q.is_empty());
    /// ```
    pub fn new() -> Queue {
        Queue::with_config(QueueConfig::default())
    }

    /// Create a new `Queue` instance with a freelist at least
    /// `capacity` elements deep.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let q = Queue::with_capacity(16);
    /// assert_eq!(16, q.len_freelist());
    /// ```
    pub fn with_capacity(capacity: usize) -> Queue {
        Queue::with_config(QueueConfig::new().initial_capacity(capacity))
    }

    /// Create a `Queue` from a [`QueueConfig`](struct.QueueConfig.html).
    /// If the free list cannot be preallocated, the queue starts with an
    /// empty one instead; use [`try_with_config`](#method.try_with_config)
    /// to see that failure.
    pub fn with_config(config: QueueConfig) -> Queue {
        let max_len = config.max_len;
        Queue::try_with_config(config).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "free list not preallocated");
            Queue::empty(Vec::new(), max_len)
        })
    }

    /// Create a `Queue` from a [`QueueConfig`](struct.QueueConfig.html),
    /// failing if the requested free list cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::{Queue, QueueConfig, QueueError};
    ///
    /// let q = Queue::try_with_config(QueueConfig::new().initial_capacity(4)).unwrap();
    /// assert_eq!(4, q.len_freelist());
    ///
    /// let r = Queue::try_with_config(QueueConfig::new().initial_capacity(usize::MAX));
    /// assert_eq!(
    ///     Some(QueueError::AllocationFailed { what: "queue slots" }),
    ///     r.err()
    /// );
    /// ```
    pub fn try_with_config(config: QueueConfig) -> Result<Queue> {
        let QueueConfig {
            initial_capacity,
            max_len,
        } = config;

        let mut vec = Vec::new();
        vec.try_reserve_exact(initial_capacity)
            .map_err(|_| QueueError::AllocationFailed {
                what: "queue slots",
            })?;

        let mut next = usize::MAX;
        for i in 0..initial_capacity {
            vec.push(Slot::new_free(next));
            next = i;
        }

        let mut q = Queue::empty(vec, max_len);
        q.free_list = next;
        q.len_free = initial_capacity;
        Ok(q)
    }

    fn empty(slots: Vec<Slot>, max_len: Option<usize>) -> Queue {
        Queue {
            head: Link::detached(SENTINEL),
            free_list: usize::MAX,
            next_generation: 0,
            len_used: 0,
            len_free: 0,
            max_len,
            slots,
        }
    }

    /// Release every element still in the queue, then the queue itself.
    /// Dropping a `Queue` does the same thing.
    pub fn destroy(self) {
        tracing::trace!(len = self.len_used, "queue destroyed");
    }

    /// Release every element, leaving an empty but usable queue. The
    /// released slots go onto the free list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q: Queue = vec!["a", "b"].into_iter().collect();
    /// q.clear();
    /// assert!(q.is_empty());
    /// assert_eq!(2, q.len_freelist());
    /// ```
    pub fn clear(&mut self) {
        while let Some(e) = self.remove_head() {
            e.release();
        }
    }

    /// Reserves capacity for at least `additional` more elements in
    /// the backing `Vec`. This does not add the reserved elements to
    /// the free list.
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional)
    }

    /// Returns how many items could be held without resizing the
    /// internal vector.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// The number of items in the queue, from a running count.
    pub fn len(&self) -> usize {
        self.len_used
    }

    /// True when the queue is empty.
    pub fn is_empty(&self) -> bool {
        SENTINEL == self.head.next
    }

    /// The number of entries on the queue's freelist.
    pub fn len_freelist(&self) -> usize {
        self.len_free
    }

    /// Count the elements by walking the ring once from the sentinel.
    /// Always agrees with [`len`](#method.len); this is the O(n) way to
    /// get the same answer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// assert_eq!(0, q.size());
    ///
    /// q.insert_head("x").unwrap();
    /// q.insert_tail("y").unwrap();
    /// assert_eq!(2, q.size());
    /// ```
    pub fn size(&self) -> usize {
        self.iter_front().count()
    }

    /// Copy `text` into the queue as its new front element.
    ///
    /// On failure (the allocator refused, or the configured `max_len`
    /// has been reached) the queue is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.insert_head("b").unwrap();
    /// let tok = q.insert_head("a").unwrap();
    ///
    /// assert_eq!(Some("a"), q.get(&tok));
    /// assert_eq!(vec!["a", "b"], q.iter_front().collect::<Vec<_>>());
    /// ```
    pub fn insert_head(&mut self, text: &str) -> Result<Token> {
        let e = self.duplicate(text)?;
        self.link_element(e, SENTINEL)
    }

    /// Copy `text` into the queue as its new back element. Fails the
    /// same way as [`insert_head`](#method.insert_head).
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.insert_tail("a").unwrap();
    /// q.insert_tail("b").unwrap();
    ///
    /// assert_eq!(Some("b"), q.back());
    /// ```
    pub fn insert_tail(&mut self, text: &str) -> Result<Token> {
        let e = self.duplicate(text)?;
        let back = self.head.prev;
        self.link_element(e, back)
    }

    /// Link a previously removed element back in at the front. If the
    /// queue refuses it, the element is released.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q: Queue = vec!["a", "b", "c"].into_iter().collect();
    /// let e = q.remove_tail().unwrap();
    /// q.push_front_element(e).unwrap();
    ///
    /// assert_eq!(vec!["c", "a", "b"], q.iter_front().collect::<Vec<_>>());
    /// ```
    pub fn push_front_element(&mut self, element: Element) -> Result<Token> {
        self.link_element(element, SENTINEL)
    }

    /// Link a previously removed element back in at the back. If the
    /// queue refuses it, the element is released.
    pub fn push_back_element(&mut self, element: Element) -> Result<Token> {
        let back = self.head.prev;
        self.link_element(element, back)
    }

    /// Unlink the front element and hand it to the caller. The element
    /// is not released. If the queue is empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.insert_tail("10").unwrap();
    /// q.insert_tail("20").unwrap();
    ///
    /// assert_eq!(Some("10".to_string()), q.remove_head().map(|e| e.into_value()));
    /// assert_eq!(Some("20".to_string()), q.remove_head().map(|e| e.into_value()));
    /// assert!(q.remove_head().is_none());
    /// ```
    pub fn remove_head(&mut self) -> Option<Element> {
        match self.head.next {
            SENTINEL => None,
            front => Some(self.take(front)),
        }
    }

    /// Unlink the back element and hand it to the caller. The element
    /// is not released. If the queue is empty, `None` is returned.
    pub fn remove_tail(&mut self) -> Option<Element> {
        match self.head.prev {
            SENTINEL => None,
            back => Some(self.take(back)),
        }
    }

    /// Like [`remove_head`](#method.remove_head), and also copies the
    /// removed text into `buf` as described by
    /// [`Element::copy_into`](struct.Element.html#method.copy_into).
    /// `buf` is not touched when the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.insert_tail("hedgehog").unwrap();
    ///
    /// let mut buf = [0u8; 5];
    /// let e = q.remove_head_into(&mut buf).unwrap();
    ///
    /// assert_eq!(b"hedg\0", &buf);
    /// assert_eq!("hedgehog", e.value());
    /// ```
    pub fn remove_head_into(&mut self, buf: &mut [u8]) -> Option<Element> {
        let e = self.remove_head()?;
        e.copy_into(buf);
        Some(e)
    }

    /// Like [`remove_tail`](#method.remove_tail), and also copies the
    /// removed text into `buf`.
    pub fn remove_tail_into(&mut self, buf: &mut [u8]) -> Option<Element> {
        let e = self.remove_tail()?;
        e.copy_into(buf);
        Some(e)
    }

    /// Unlink the element associated with the specified token. If the
    /// element has already been removed, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.insert_tail("a").unwrap();
    /// let tok = q.insert_tail("b").unwrap();
    /// q.insert_tail("c").unwrap();
    ///
    /// assert_eq!(Some("b".to_string()), q.remove(&tok).map(|e| e.into_value()));
    /// assert!(q.remove(&tok).is_none());
    /// assert_eq!(vec!["a", "c"], q.iter_front().collect::<Vec<_>>());
    /// ```
    pub fn remove(&mut self, token: &Token) -> Option<Element> {
        let Token { ix, generation } = token;

        self.slots
            .get(*ix)
            .and_then(|s| s.get_used())
            .and_then(|v| v.as_generation(*generation).map(|_| ix))
            .map(|ix| *ix)
            .map(|ix| self.take(ix))
    }

    /// Get the text of the front element. If the queue is empty, `None`
    /// is returned.
    pub fn front(&self) -> Option<&str> {
        match self.head.next {
            SENTINEL => None,
            front => Some(self.value_of(front)),
        }
    }

    /// Get the text of the back element. If the queue is empty, `None`
    /// is returned.
    pub fn back(&self) -> Option<&str> {
        match self.head.prev {
            SENTINEL => None,
            back => Some(self.value_of(back)),
        }
    }

    /// A token for the current front element, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q: Queue = vec!["a", "b"].into_iter().collect();
    /// let tok = q.front_token().unwrap();
    ///
    /// q.reverse();
    /// assert_eq!(Some("a"), q.get(&tok));
    /// assert_eq!(Some("a"), q.back());
    /// ```
    pub fn front_token(&self) -> Option<Token> {
        match self.head.next {
            SENTINEL => None,
            front => Some(self.token_at(front)),
        }
    }

    /// A token for the current back element, or `None` if the queue is
    /// empty.
    pub fn back_token(&self) -> Option<Token> {
        match self.head.prev {
            SENTINEL => None,
            back => Some(self.token_at(back)),
        }
    }

    /// Get the text of the element associated with `token`. If the
    /// element has been removed, then `None` will be returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// let tok = q.insert_head("10").unwrap();
    /// assert_eq!(Some("10"), q.get(&tok));
    ///
    /// q.remove_head().unwrap().release();
    /// assert_eq!(None, q.get(&tok));
    /// ```
    pub fn get(&self, token: &Token) -> Option<&str> {
        let Token { ix, generation } = token;

        self.slots
            .get(*ix)
            .and_then(|s| s.get_used())
            .and_then(|u| u.as_generation(*generation))
            .map(|u| u.value())
    }

    /// Create an iterator over the queue starting from the front.
    pub fn iter_front(&self) -> IterFront<'_> {
        IterFront::new(self, self.head.next)
    }

    /// Create an iterator over the queue starting from the back.
    pub fn iter_back(&self) -> IterBack<'_> {
        IterBack::new(self, self.head.prev)
    }

    /// A draining iterator starting from the front position. Each
    /// yielded value has been removed and its slot moved onto the free
    /// list. Values not reached stay in the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q: Queue = vec!["1", "2", "3"].into_iter().collect();
    ///
    /// let v: Vec<String> = q.drain_front().collect();
    /// assert_eq!(vec!["1", "2", "3"], v);
    /// assert_eq!(3, q.len_freelist());
    /// ```
    pub fn drain_front(&mut self) -> DrainFront<'_> {
        DrainFront::new(self)
    }

    /// A draining iterator starting from the back position.
    pub fn drain_back(&mut self) -> DrainBack<'_> {
        DrainBack::new(self)
    }

    pub(crate) fn value_of(&self, ix: usize) -> &str {
        self.slots[ix]
            .get_used()
            .expect("self.slots[ix] is expected to be used")
            .value()
    }

    fn token_at(&self, ix: usize) -> Token {
        Token {
            ix,
            generation: self.slots[ix]
                .get_used()
                .expect("self.slots[ix] is expected to be used")
                .generation(),
        }
    }

    // Unlink and release the element at `ix`.
    pub(crate) fn delete(&mut self, ix: usize) {
        self.take(ix).release();
    }

    // Unlink the element at `ix` and move it out of the arena.
    fn take(&mut self, ix: usize) -> Element {
        self.unlink(ix);
        let (_, value) = self
            .free(ix)
            .into_used()
            .expect("self.slots[ix] is expected to be used")
            .take();
        tracing::trace!(ix, len = self.len_used, "element removed");
        Element::from_value(value)
    }

    fn duplicate(&self, text: &str) -> Result<Element> {
        Element::duplicate(text).map_err(|e| {
            tracing::warn!(error = %e, "insert failed");
            e
        })
    }

    fn link_element(&mut self, element: Element, after: usize) -> Result<Token> {
        let (ix, generation) = self.allocate(element.into_value()).map_err(|e| {
            tracing::warn!(error = %e, len = self.len_used, "insert failed");
            e
        })?;
        self.splice_after(ix, after);
        tracing::trace!(ix, len = self.len_used, "element linked");

        Ok(Token { ix, generation })
    }

    // Place `value` in a slot, detached from the ring. The caller is
    // expected to splice it in.
    pub(crate) fn allocate(&mut self, value: String) -> Result<(usize, usize)> {
        if let Some(limit) = self.max_len {
            if self.len_used >= limit {
                return Err(QueueError::CapacityExceeded { limit });
            }
        }

        if usize::MAX == self.free_list {
            self.slots
                .try_reserve(1)
                .map_err(|_| QueueError::AllocationFailed { what: "queue slot" })?;
        }

        // A 64 bit generation counter will not wrap in any realistic
        // lifetime. If it ever does, a reused slot could be mistaken
        // for an element removed long ago, so fail loudly instead.
        let generation = self.next_generation;
        self.next_generation = self
            .next_generation
            .checked_add(1)
            .expect("generation counter overflowed");

        let ix = if usize::MAX == self.free_list {
            let ix = self.slots.len();
            self.slots
                .push(Slot::new_used(Link::detached(ix), generation, value));
            ix
        } else {
            let ix = self.free_list;
            self.free_list = self.slots[ix]
                .get_free()
                .expect("self.slots[self.free_list] is expected to be free")
                .next();
            self.slots[ix] = Slot::new_used(Link::detached(ix), generation, value);
            self.len_free -= 1;
            ix
        };

        self.len_used += 1;

        Ok((ix, generation))
    }

    pub(crate) fn free(&mut self, ix: usize) -> Slot {
        debug_assert!(self.slots[ix].get_used().is_some());

        self.len_used -= 1;

        let mut v = Slot::new_free(self.free_list);
        std::mem::swap(&mut v, &mut self.slots[ix]);
        self.free_list = ix;
        self.len_free += 1;
        v
    }
}

impl<'a> FromIterator<&'a str> for Queue {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_owned).collect()
    }
}

impl FromIterator<String> for Queue {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut q = Self::new();
        for s in iter {
            q.push_back_element(Element::from_value(s))
                .expect("an unbounded queue only fails to grow when out of memory");
        }
        q
    }
}
