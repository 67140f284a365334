//! Head/tag pair swapped with a double-width compare-and-swap.
//!
//! The header packs the head address in the low word and a version tag in the
//! high word. Every successful transition bumps the tag, so a thread holding a
//! stale `(head, tag)` observation fails its exchange even when the head
//! address has been popped, recycled and pushed again in the meantime.

use core::hint;
use core::ptr::{self, NonNull};

use atomic::Ordering;
use portable_atomic as atomic;

#[cfg(target_pointer_width = "64")]
type Anchor = atomic::AtomicU128;
#[cfg(target_pointer_width = "64")]
type Word = u128;

#[cfg(target_pointer_width = "32")]
type Anchor = atomic::AtomicU64;
#[cfg(target_pointer_width = "32")]
type Word = u64;

const TAG_SHIFT: u32 = usize::BITS;
const EMPTY: Word = 0;

#[repr(transparent)]
pub struct Header {
    anchor: Anchor,
}

#[repr(transparent)]
pub struct Link {
    next: atomic::AtomicPtr<Link>,
}

impl Header {
    pub const fn new() -> Self {
        Self {
            anchor: Anchor::new(EMPTY),
        }
    }
}

impl Link {
    pub const fn new() -> Self {
        Self {
            next: atomic::AtomicPtr::new(ptr::null_mut()),
        }
    }
}

#[inline]
fn pack(head: *mut Link, tag: usize) -> Word {
    ((tag as Word) << TAG_SHIFT) | (head as usize as Word)
}

#[inline]
fn unpack(anchor: Word) -> (*mut Link, usize) {
    let head = anchor as usize as *mut Link;
    let tag = (anchor >> TAG_SHIFT) as usize;
    (head, tag)
}

pub fn initialize(header: &mut Header) {
    *header.anchor.get_mut() = EMPTY;
}

pub unsafe fn push(header: &Header, link: NonNull<Link>) {
    let mut current = header.anchor.load(Ordering::Relaxed);
    loop {
        let (head, tag) = unpack(current);
        link.as_ref().next.store(head, Ordering::Relaxed);
        let new = pack(link.as_ptr(), tag.wrapping_add(1));

        match header
            .anchor
            .compare_exchange_weak(current, new, Ordering::AcqRel, Ordering::Relaxed)
        {
            Ok(_) => return,
            Err(actual) => current = actual,
        }
        hint::spin_loop();
    }
}

pub fn pop(header: &Header) -> Option<NonNull<Link>> {
    let mut current = header.anchor.load(Ordering::Acquire);
    loop {
        let (head, tag) = unpack(current);
        let head = NonNull::new(head)?;
        // `head` may already have been popped by another thread; its storage
        // stays readable per the push contract and the exchange below fails
        // in that case since the tag has moved on.
        let next = unsafe { head.as_ref() }.next.load(Ordering::Relaxed);
        let new = pack(next, tag.wrapping_add(1));

        match header
            .anchor
            .compare_exchange_weak(current, new, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => return Some(head),
            Err(actual) => current = actual,
        }
        hint::spin_loop();
    }
}

/// Returns whether a non-empty chain was detached.
pub fn flush(header: &Header) -> bool {
    let mut current = header.anchor.load(Ordering::Acquire);
    loop {
        let (head, tag) = unpack(current);
        if head.is_null() {
            return false;
        }
        let new = pack(ptr::null_mut(), tag.wrapping_add(1));

        match header
            .anchor
            .compare_exchange_weak(current, new, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => return true,
            Err(actual) => current = actual,
        }
        hint::spin_loop();
    }
}
