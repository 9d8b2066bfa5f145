//! Stack safety utilities for deep recursion.
//!
//! Expression type inference recurses once per tree level, so a
//! pathologically nested expression (`((((...))))`, long operator chains)
//! can exhaust the native stack. Wrap recursive calls with
//! [`ensure_sufficient_stack`] to grow the stack on demand.
//!
//! - **Native targets**: Uses the `stacker` crate to grow the stack.
//! - **WASM targets**: No-op passthrough.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone, additional stack space is
/// allocated before calling `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
