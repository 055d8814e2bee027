//! 浏览器 API 封装模块
//!
//! 所有与 window / fetch / LocalStorage / History 打交道的代码都集中在这里，
//! 其余模块只依赖共享层的 trait。

mod http;
pub mod router;
mod storage;
mod timer;

pub use http::GlooHttpClient;
pub use storage::BrowserStorage;
pub use timer::delay;

/// `window.alert`
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("alert failed: {}", message);
        }
    }
}
