#[cfg(arm_single_core)]
pub(crate) use cortex_m::interrupt;

// No logger on bare metal.
#[inline(always)]
pub(crate) fn on_initialize(_header: *const ()) {}

#[inline(always)]
pub(crate) fn on_flush(_header: *const (), _detached: bool) {}
