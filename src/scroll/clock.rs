#[cfg(not(target_arch = "wasm32"))]
use std::sync::OnceLock;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
use std::time::Duration;
#[cfg(target_arch = "wasm32")]
use web_sys::js_sys::Date;

/// Milliseconds on a clock that works across native and WASM.
pub type TimePoint = f64;

#[cfg(not(target_arch = "wasm32"))]
fn monotonic_anchor() -> &'static Instant {
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now)
}

pub fn now_millis() -> TimePoint {
    #[cfg(target_arch = "wasm32")]
    {
        Date::now()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        monotonic_anchor().elapsed().as_secs_f64() * 1000.0
    }
}

/// Fraction of `duration` elapsed between `started` and `now`, clamped to `0.0..=1.0`.
///
/// A zero duration is complete immediately.
pub fn progress(started: TimePoint, now: TimePoint, duration: Duration) -> f64 {
    let total = duration.as_secs_f64() * 1000.0;
    if total <= 0.0 {
        return 1.0;
    }
    ((now - started) / total).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        let duration = Duration::from_millis(800);
        assert_eq!(progress(1000.0, 900.0, duration), 0.0);
        assert_eq!(progress(1000.0, 1400.0, duration), 0.5);
        assert_eq!(progress(1000.0, 5000.0, duration), 1.0);
    }

    #[test]
    fn zero_duration_finishes_at_once() {
        assert_eq!(progress(10.0, 10.0, Duration::ZERO), 1.0);
    }

    #[test]
    fn clock_does_not_go_backwards() {
        let first = now_millis();
        let second = now_millis();
        assert!(second >= first);
    }
}
