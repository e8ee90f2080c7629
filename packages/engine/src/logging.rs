//! Logging - browser console on wasm32, `tracing` everywhere else
//!
//! Only lifecycle events are logged (init, reset, resize, play/pause,
//! rejected config). Nothing here runs inside the per-cell loops.

#[cfg(target_arch = "wasm32")]
pub fn info(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(message: &str) {
    tracing::info!(target: "life_engine", "{}", message);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(message: &str) {
    tracing::warn!(target: "life_engine", "{}", message);
}
