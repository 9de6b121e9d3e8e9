//! Browser Dialogs

/// Blocking `window.confirm`. Anything but an explicit "OK" counts as declined.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
