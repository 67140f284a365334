use std::env;

#[path = "build_support/strategy.rs"]
mod strategy;

// Picks the list algorithm for the target being built. Exactly one of these
// cfgs is emitted, anything else stops the build.
const STRATEGIES: [&str; 3] = ["slist_cas", "arm_llsc", "arm_single_core"];

fn main() {
    for name in STRATEGIES {
        println!("cargo:rustc-check-cfg=cfg({name})");
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build_support/strategy.rs");

    let target = env::var("TARGET").unwrap_or_default();
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let pointer_width = env::var("CARGO_CFG_TARGET_POINTER_WIDTH").unwrap_or_default();
    let has_atomic = env::var("CARGO_CFG_TARGET_HAS_ATOMIC").unwrap_or_default();

    match strategy::select_strategy(&target, &arch, &pointer_width, &has_atomic) {
        Some(strategy) => println!("cargo:rustc-cfg={strategy}"),
        None => panic!(
            "interlocked-slist: no lock-free list implementation for target `{target}` \
             (arch {arch}, pointer width {pointer_width}, atomics [{has_atomic}])"
        ),
    }
}
