//! 状态仓库
//!
//! 每个仓库都是「状态 + 可序列化 action + 纯函数 `apply`」，
//! 前端把状态放进 Leptos 信号，通过 `apply` 驱动更新。

pub mod session;
pub mod user;

pub use session::{SessionAction, SessionState, SessionStore, TokenStorage};
pub use user::{RequestState, UserAction, UserState};

#[cfg(test)]
pub(crate) use session::MemoryStorage;
