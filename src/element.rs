use crate::error::{QueueError, Result};
use std::fmt;

/// An element that has been unlinked from a `Queue`, along with its
/// text.
///
/// Removing an element from either end (or by token) does not release
/// it; it is handed back as an `Element` and the caller decides what
/// happens next. It can be pushed back into a queue with
/// [`push_front_element`] or [`push_back_element`], released with
/// [`release`], or turned into its `String` with [`into_value`].
///
/// [`push_front_element`]: struct.Queue.html#method.push_front_element
/// [`push_back_element`]: struct.Queue.html#method.push_back_element
/// [`release`]: #method.release
/// [`into_value`]: #method.into_value
#[must_use = "a removed element must be re-linked or released"]
#[derive(PartialEq, Eq)]
pub struct Element {
    value: String,
}

impl Element {
    /// Copy `text` into freshly allocated storage. Fails instead of
    /// aborting when the allocator cannot satisfy the request.
    pub(crate) fn duplicate(text: &str) -> Result<Element> {
        let mut value = String::new();
        value
            .try_reserve_exact(text.len())
            .map_err(|_| QueueError::AllocationFailed { what: "element text" })?;
        value.push_str(text);
        Ok(Element { value })
    }

    pub(crate) fn from_value(value: String) -> Element {
        Element { value }
    }

    /// The element's text.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.insert_tail("gerbil").unwrap();
    ///
    /// let e = q.remove_head().unwrap();
    /// assert_eq!("gerbil", e.value());
    /// e.release();
    /// ```
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Take the text out of the element, consuming it.
    pub fn into_value(self) -> String {
        self.value
    }

    /// Copy the element's text into `buf` as a NUL terminated byte
    /// string. At most `buf.len() - 1` bytes of text are written, so a
    /// long value is truncated rather than overflowing. Returns the
    /// number of text bytes copied (not counting the terminator). An
    /// empty buffer is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.insert_tail("bear").unwrap();
    ///
    /// let e = q.remove_head().unwrap();
    /// let mut buf = [0xffu8; 3];
    /// assert_eq!(2, e.copy_into(&mut buf));
    /// assert_eq!(b"be\0", &buf);
    /// ```
    pub fn copy_into(&self, buf: &mut [u8]) -> usize {
        if buf.is_empty() {
            return 0;
        }

        let n = self.value.len().min(buf.len() - 1);
        buf[..n].copy_from_slice(&self.value.as_bytes()[..n]);
        buf[n] = 0;
        n
    }

    /// Release the element and its text. Equivalent to dropping it, but
    /// spelled out so the end of the element's life is visible at the
    /// call site.
    pub fn release(self) {
        tracing::trace!(len = self.value.len(), "element released");
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_tuple("Element").field(&self.value).finish()
    }
}

/// Release a detached element. Free-function form of
/// [`Element::release`].
pub fn release(element: Element) {
    element.release()
}
