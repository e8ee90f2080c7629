//! Monotonic stopwatch for `StepStats::step_ms`.

#[cfg(target_arch = "wasm32")]
type Mark = f64;
#[cfg(not(target_arch = "wasm32"))]
type Mark = std::time::Instant;

#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    started: Mark,
}

impl PerfTimer {
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn start() -> Self {
        PerfTimer { started: js_sys::Date::now() }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn start() -> Self {
        PerfTimer { started: std::time::Instant::now() }
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn elapsed_ms(&self) -> f64 {
        js_sys::Date::now() - self.started
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}
