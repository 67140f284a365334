// Shared between build.rs and the selection tests.

/// Architectures whose 128-bit compare-and-swap portable-atomic implements
/// without a lock.
const NATIVE_DOUBLE_WORD_64: [&str; 4] = ["x86_64", "aarch64", "powerpc64", "s390x"];

/// Picks the list algorithm for a target, `None` when no lock-free one exists.
pub fn select_strategy(
    target: &str,
    arch: &str,
    pointer_width: &str,
    has_atomic: &str,
) -> Option<&'static str> {
    // Cortex-M profiles, sorted by what the core offers
    if target.starts_with("thumbv7m")
        || target.starts_with("thumbv7em")
        || target.starts_with("thumbv8m.main")
    {
        return Some("arm_llsc");
    }
    if target.starts_with("thumbv6m") || target.starts_with("thumbv8m.base") {
        return Some("arm_single_core");
    }

    let has_width = |wanted: &str| has_atomic.split(',').any(|width| width.trim() == wanted);
    if !has_width("ptr") {
        return None;
    }
    // the anchor is a head and a tag side by side, so the CAS must cover both
    match pointer_width {
        "32" if has_width("64") => Some("slist_cas"),
        "64" if NATIVE_DOUBLE_WORD_64.contains(&arch) => Some("slist_cas"),
        _ => None,
    }
}
