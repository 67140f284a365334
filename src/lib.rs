//! Lock-free intrusive singly-linked list, safe against ABA.
//!
//! Callers embed a [`ListElement`] in their own nodes and link them into a
//! [`ListHeader`] from any number of threads. The list only orders links; it
//! never allocates or frees node memory.
//!
//! The algorithm backing the list is picked per target by the build script:
//!
//! - `slist_cas`: head and version tag swapped together with a double-width
//!   compare-and-swap
//! - `arm_llsc`: ARMv7-M exclusive monitor on a single word
//! - `arm_single_core`: interrupt-free head swap on ARMv6-M / ARMv8-M baseline
//!
//! `arm_single_core` is only sound when every user of a header runs on the same
//! core. Masking interrupts does not stop another core, so on multi-core
//! ARMv6-M parts (RP2040 for instance) a header must not be shared across
//! cores.
//!
//! Targets matching none of these, or whose CAS cannot cover a head and a tag
//! without a lock, fail to build.
//!
//! ```
//! use core::ptr::NonNull;
//! use interlocked_slist::{container_of, ListElement, ListHeader};
//!
//! struct Job {
//!     id: u32,
//!     link: ListElement,
//! }
//!
//! static QUEUE: ListHeader = ListHeader::new();
//!
//! let job = Job { id: 3, link: ListElement::new() };
//! unsafe { QUEUE.push(NonNull::from(&job.link)) };
//!
//! let element = QUEUE.pop().unwrap();
//! let job = unsafe { &*container_of!(element.as_ptr(), Job, link) };
//! assert_eq!(job.id, 3);
//! assert!(QUEUE.pop().is_none());
//! ```
#![cfg_attr(target_os = "none", no_std)]

pub mod platform;
mod slist;

#[cfg(not(target_os = "none"))]
mod std_lib_port;

#[cfg(not(target_os = "none"))]
use std_lib_port as port;

#[cfg(target_os = "none")]
use cortex_m_port as port;
#[cfg(target_os = "none")]
mod cortex_m_port;

pub use slist::{flush, initialize, pop, push, ListElement, ListHeader};
