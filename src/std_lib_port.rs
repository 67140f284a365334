use tracing::trace;

use crate::platform;

#[inline]
pub(crate) fn on_initialize(header: *const ()) {
    trace!(header = ?header, strategy = platform::STRATEGY, "slist initialized");
}

#[inline]
pub(crate) fn on_flush(header: *const (), detached: bool) {
    trace!(header = ?header, detached, "slist flushed");
}
