//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ssaidmod_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("ssaidmod_core version={}", ssaidmod_core::core_version());
}
