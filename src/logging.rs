//! Console Logging
//!
//! Browser console output with a bracketed scope prefix, e.g. `[APP] Loaded 15 todos`.

pub fn log(scope: &str, message: &str) {
    web_sys::console::log_1(&format!("[{}] {}", scope, message).into());
}

pub fn warn(scope: &str, message: &str) {
    web_sys::console::warn_1(&format!("[{}] {}", scope, message).into());
}

pub fn error(scope: &str, message: &str) {
    web_sys::console::error_1(&format!("[{}] {}", scope, message).into());
}
