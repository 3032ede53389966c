//! Stack growth for recursive descent.
//!
//! Expressions like `((((((1))))))` or long unary chains recurse once per
//! nesting level. Every recursive grammar rule runs its body through
//! [`ensure_sufficient_stack`], which switches to a freshly allocated
//! segment when the current one is nearly exhausted.
//!
//! On `wasm32` the closure is called directly.

/// Grow when fewer than this many bytes remain.
const MIN_REMAINING: usize = 128 * 1024;

/// Size of each newly allocated segment.
const NEW_SEGMENT: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(MIN_REMAINING, NEW_SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
