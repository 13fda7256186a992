use crate::link::Link;

pub(crate) struct Free(FreeInner);
pub(crate) struct FreeInner {
    // The next free slot.
    next: usize,
}

impl Free {
    fn new(next: usize) -> Free {
        Free(FreeInner { next })
    }

    pub(crate) fn next(&self) -> usize {
        self.0.next
    }
}

pub(crate) struct Used(UsedInner);
struct UsedInner {
    // Position of this slot on the ring.
    link: Link,
    // The generation ID for this slot.
    generation: usize,
    // The owned text.
    value: String,
}

impl Used {
    fn new(link: Link, generation: usize, value: String) -> Used {
        Used(UsedInner {
            link,
            generation,
            value,
        })
    }

    pub(crate) fn link(&self) -> &Link {
        &self.0.link
    }

    pub(crate) fn link_mut(&mut self) -> &mut Link {
        &mut self.0.link
    }

    pub(crate) fn generation(&self) -> usize {
        self.0.generation
    }

    pub(crate) fn take(self) -> (Link, String) {
        let Used(UsedInner { link, value, .. }) = self;
        (link, value)
    }

    pub(crate) fn as_generation(&self, g: usize) -> Option<&Used> {
        if self.0.generation == g {
            Some(self)
        } else {
            None
        }
    }

    pub(crate) fn value(&self) -> &str {
        &self.0.value
    }
}

pub(crate) enum Slot {
    Free(Free),
    Used(Used),
}

impl Slot {
    pub(crate) fn new_free(next: usize) -> Slot {
        Slot::Free(Free::new(next))
    }

    pub(crate) fn new_used(link: Link, generation: usize, value: String) -> Slot {
        Slot::Used(Used::new(link, generation, value))
    }

    pub(crate) fn get_used(&self) -> Option<&Used> {
        if let Slot::Used(used) = self {
            Some(used)
        } else {
            None
        }
    }

    pub(crate) fn get_used_mut(&mut self) -> Option<&mut Used> {
        if let Slot::Used(used) = self {
            Some(used)
        } else {
            None
        }
    }

    pub(crate) fn get_free(&self) -> Option<&Free> {
        if let Slot::Free(free) = self {
            Some(free)
        } else {
            None
        }
    }

    pub(crate) fn into_used(self) -> Option<Used> {
        if let Slot::Used(used) = self {
            Some(used)
        } else {
            None
        }
    }
}
