use core::mem::{self, MaybeUninit};
use core::ptr::NonNull;

use crate::platform;
use crate::port;

#[cfg_attr(slist_cas, path = "slist/cas.rs")]
#[cfg_attr(arm_llsc, path = "slist/llsc.rs")]
#[cfg_attr(arm_single_core, path = "slist/single_core.rs")]
mod impl_;


/// Anchor of an interlocked singly-linked list.
///
/// The layout is opaque; size and alignment are the `platform::HEADER_*`
/// constants of the current target.
#[repr(transparent)]
pub struct ListHeader {
    inner: impl_::Header,
}

/// Intrusive link embedded in a caller-owned node.
///
/// The layout is opaque; size and alignment are the `platform::ELEMENT_*`
/// constants of the current target.
#[repr(transparent)]
pub struct ListElement {
    inner: impl_::Link,
}

const _: () = {
    assert!(mem::size_of::<ListHeader>() == platform::HEADER_SIZE, "ListHeader size mismatch");
    assert!(mem::align_of::<ListHeader>() == platform::HEADER_ALIGNMENT, "ListHeader alignment mismatch");
    assert!(mem::size_of::<ListElement>() == platform::ELEMENT_SIZE, "ListElement size mismatch");
    assert!(mem::align_of::<ListElement>() == platform::ELEMENT_ALIGNMENT, "ListElement alignment mismatch");
};

impl ListHeader {
    /// Creates an empty header. Usable in `static` items.
    pub const fn new() -> Self {
        Self {
            inner: impl_::Header::new(),
        }
    }

    /// Puts the header back in the empty state.
    ///
    /// Elements still linked are forgotten by the list, their memory is left
    /// untouched.
    pub fn initialize(&mut self) {
        impl_::initialize(&mut self.inner);
        port::on_initialize(self as *const Self as *const ());
    }

    /// Links `element` in front of the current head.
    ///
    /// # Safety
    /// - `element` must point to a valid `ListElement` which is not linked in any list
    /// - the storage behind `element` must stay allocated and readable as a
    ///   `ListElement` for as long as any thread may operate on this header,
    ///   even after the element has been popped again. Recycling a popped node
    ///   through the same list (or a pool of such nodes) is fine; giving its
    ///   memory back to the allocator is not
    /// - the element must not be written to while it is linked
    pub unsafe fn push(&self, element: NonNull<ListElement>) {
        impl_::push(&self.inner, element.cast())
    }

    /// Unlinks the current head, `None` when the list is empty.
    ///
    /// The returned element belongs exclusively to the caller. Its link content
    /// is unspecified.
    pub fn pop(&self) -> Option<NonNull<ListElement>> {
        impl_::pop(&self.inner).map(NonNull::cast)
    }

    /// Detaches the whole chain at once and leaves the header empty.
    pub fn flush(&self) {
        let detached = impl_::flush(&self.inner);
        port::on_flush(self as *const Self as *const (), detached);
    }
}

impl Default for ListHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl ListElement {
    pub const fn new() -> Self {
        Self {
            inner: impl_::Link::new(),
        }
    }
}

impl Default for ListElement {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ListHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListHeader")
            .field("strategy", &platform::STRATEGY)
            .finish_non_exhaustive()
    }
}

impl core::fmt::Debug for ListElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListElement").finish_non_exhaustive()
    }
}

/// Writes an empty header into `header` and hands it back initialized.
pub fn initialize(header: &mut MaybeUninit<ListHeader>) -> &mut ListHeader {
    let header = header.write(ListHeader::new());
    port::on_initialize(header as *const ListHeader as *const ());
    header
}

pub fn flush(header: &ListHeader) {
    header.flush()
}

/// # Safety
/// See [`ListHeader::push`].
pub unsafe fn push(header: &ListHeader, element: NonNull<ListElement>) {
    header.push(element)
}

pub fn pop(header: &ListHeader) -> Option<NonNull<ListElement>> {
    header.pop()
}

/// Recovers a pointer to the node embedding a [`ListElement`].
///
/// `$element` is a `*mut ListElement` pointing at the `$field` of a
/// `$container`. Evaluates to `*mut $container`.
#[macro_export]
macro_rules! container_of {
    ($element:expr, $container:ty, $field:ident) => {{
        let element_ptr: *mut $crate::ListElement = $element;
        element_ptr
            .cast::<u8>()
            .wrapping_sub(::core::mem::offset_of!($container, $field))
            .cast::<$container>()
    }};
}
