/// Milliseconds on a monotonic-enough clock: `Date.now()` in the browser.
#[cfg(target_arch = "wasm32")]
#[inline]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the first call in this process.
#[cfg(not(target_arch = "wasm32"))]
#[inline]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Phase stopwatch for perf metrics.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    mark_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { mark_ms: now_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.mark_ms).max(0.0)
    }

    /// Milliseconds since the last lap (or start), then restart.
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let now = now_ms();
        let ms = (now - self.mark_ms).max(0.0);
        self.mark_ms = now;
        ms
    }
}
