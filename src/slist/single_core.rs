//! Single-word head for single-core ARM parts without compare-and-swap.
//!
//! ARMv6-M and ARMv8-M baseline only offer plain atomic loads and stores. The
//! read-modify-write of the head runs with interrupts masked, which makes it
//! indivisible on a single core; no stale head can survive across it.
//!
//! Other cores are not masked. On multi-core parts such as the RP2040 a header
//! must only be used from one core.

use core::ptr::{self, NonNull};

use atomic::Ordering;
use portable_atomic as atomic;

use crate::port::interrupt;

#[repr(transparent)]
pub struct Header {
    head: atomic::AtomicPtr<Link>,
}

#[repr(transparent)]
pub struct Link {
    next: atomic::AtomicPtr<Link>,
}

impl Header {
    pub const fn new() -> Self {
        Self {
            head: atomic::AtomicPtr::new(ptr::null_mut()),
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

pub fn initialize(header: &mut Header) {
    *header.head.get_mut() = ptr::null_mut();
}

pub unsafe fn push(header: &Header, link: NonNull<Link>) {
    interrupt::free(|_| {
        let head = header.head.load(Ordering::Relaxed);
        link.as_ref().next.store(head, Ordering::Relaxed);
        header.head.store(link.as_ptr(), Ordering::Release);
    })
}

pub fn pop(header: &Header) -> Option<NonNull<Link>> {
    interrupt::free(|_| {
        let head = NonNull::new(header.head.load(Ordering::Acquire))?;
        let next = unsafe { head.as_ref() }.next.load(Ordering::Relaxed);
        header.head.store(next, Ordering::Relaxed);
        Some(head)
    })
}

/// Returns whether a non-empty chain was detached.
pub fn flush(header: &Header) -> bool {
    interrupt::free(|_| {
        let detached = !header.head.load(Ordering::Acquire).is_null();
        header.head.store(ptr::null_mut(), Ordering::Relaxed);
        detached
    })
}
