//! Layout constants of the list types for the current target.
//!
//! The build script selects one list algorithm per target; each algorithm
//! packs the header and the element differently, so the sizes below follow
//! that choice. `ListHeader` and `ListElement` are checked against them at
//! compile time.

#[cfg(all(slist_cas, target_pointer_width = "64"))]
mod layout {
    pub const STRATEGY: &str = "tagged-cas-128";
    pub const HEADER_SIZE: usize = 16;
    pub const HEADER_ALIGNMENT: usize = 16;
    pub const ELEMENT_SIZE: usize = 8;
    pub const ELEMENT_ALIGNMENT: usize = 8;
}

#[cfg(all(slist_cas, target_pointer_width = "32"))]
mod layout {
    pub const STRATEGY: &str = "tagged-cas-64";
    pub const HEADER_SIZE: usize = 8;
    pub const HEADER_ALIGNMENT: usize = 8;
    pub const ELEMENT_SIZE: usize = 4;
    pub const ELEMENT_ALIGNMENT: usize = 4;
}

#[cfg(arm_llsc)]
mod layout {
    pub const STRATEGY: &str = "arm-llsc";
    pub const HEADER_SIZE: usize = 4;
    pub const HEADER_ALIGNMENT: usize = 4;
    pub const ELEMENT_SIZE: usize = 4;
    pub const ELEMENT_ALIGNMENT: usize = 4;
}

#[cfg(arm_single_core)]
mod layout {
    pub const STRATEGY: &str = "arm-interrupt-free";
    pub const HEADER_SIZE: usize = 4;
    pub const HEADER_ALIGNMENT: usize = 4;
    pub const ELEMENT_SIZE: usize = 4;
    pub const ELEMENT_ALIGNMENT: usize = 4;
}

#[cfg(not(any(
    all(slist_cas, any(target_pointer_width = "32", target_pointer_width = "64")),
    arm_llsc,
    arm_single_core
)))]
compile_error!("interlocked slist layout constants are not defined for the current platform");

pub use layout::*;
