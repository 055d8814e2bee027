//! 定时器封装模块

use gloo_timers::callback::Timeout;

/// 延迟执行一次回调
///
/// 句柄交给浏览器，页面卸载后回调仍会触发。
pub fn delay<F>(millis: u32, callback: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(millis, callback).forget();
}
