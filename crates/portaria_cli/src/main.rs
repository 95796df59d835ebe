//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `portaria_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe to validate core crate wiring independently from any
    // UI host.
    println!("portaria_core ping={}", portaria_core::ping());
    println!("portaria_core version={}", portaria_core::core_version());
}
