//! The process-wide floating-point precision policy.
//!
//! Float fragments are rendered in fixed-point notation with a fixed number
//! of decimal digits. When a value carries no per-value override, the digit
//! count comes from the single process-wide setting managed here.
//!
//! The setting is read when a float fragment is *constructed*, never when a
//! container is later serialized, so changing it does not retroactively
//! affect fragments that already exist.
//!
//! The cell is an atomic with relaxed ordering: concurrent use is memory-safe
//! and last-writer-wins, which is sufficient for a configuration value that
//! is normally set once at startup.

use std::sync::atomic::{AtomicUsize, Ordering};

/// The number of decimal digits used when no other precision is in effect.
pub const DEFAULT_PRECISION: usize = 6;

static PRECISION: AtomicUsize = AtomicUsize::new(DEFAULT_PRECISION);

/// Sets the process-wide float precision.
///
/// A positive `digits` becomes the new precision. Zero or a negative value
/// resets the precision to [`DEFAULT_PRECISION`] rather than being accepted
/// literally.
///
/// # Examples
///
/// ```rust
/// jss::set_precision(3);
/// assert_eq!(jss::Value::float(123.456789).serialize(), "123.457");
///
/// jss::set_precision(0); // reset
/// assert_eq!(jss::precision(), jss::DEFAULT_PRECISION);
/// ```
pub fn set_precision(digits: i32) {
    let digits = if digits > 0 {
        digits as usize
    } else {
        DEFAULT_PRECISION
    };
    PRECISION.store(digits, Ordering::Relaxed);
}

/// Returns the current process-wide float precision.
///
/// # Examples
///
/// ```rust
/// assert_eq!(jss::precision(), 6);
/// ```
#[must_use]
pub fn precision() -> usize {
    PRECISION.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The cell is process-global, so every assertion about it lives in this
    // one test to keep the suite parallel-safe.
    #[test]
    fn setter_accepts_positive_and_resets_otherwise() {
        set_precision(3);
        assert_eq!(precision(), 3);

        set_precision(0);
        assert_eq!(precision(), DEFAULT_PRECISION);

        set_precision(12);
        assert_eq!(precision(), 12);

        set_precision(-5);
        assert_eq!(precision(), DEFAULT_PRECISION);
    }
}
