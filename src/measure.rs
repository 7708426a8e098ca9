//! Duration measurement on the monotonic clock.

use std::time::{Duration, Instant};

/// Measures the time it takes to execute the function `test_fn`, returning its result alongside.
#[inline(never)]
pub fn measure_duration<R>(test_fn: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();

    let result = test_fn();

    (result, start.elapsed())
}

/// Saturating conversion for reporting, a `u64` of nanoseconds covers centuries.
pub fn as_nanos_u64(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
