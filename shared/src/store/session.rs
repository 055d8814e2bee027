//! 会话仓库
//!
//! 持有认证 token，`is_authenticated` 始终由 `token.is_some()` 派生。
//! token 同步写入持久化存储，进程启动时同步读回。

use serde::{Deserialize, Serialize};

use crate::TOKEN_STORAGE_KEY;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

/// 持久化存储抽象（浏览器中为 LocalStorage）
pub trait TokenStorage {
    fn load(&self, key: &str) -> Option<String>;
    /// 写入失败返回 `false`
    fn save(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAction {
    Login(String),
    Logout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    token: Option<String>,
}

impl SessionState {
    pub fn with_token(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::Login(token) => self.token = Some(token),
            SessionAction::Logout => self.token = None,
        }
    }
}

/// 状态 + 持久化
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    state: SessionState,
    storage: S,
}

impl<S: TokenStorage> SessionStore<S> {
    /// 从持久化存储恢复初始状态
    pub fn restore(storage: S) -> Self {
        let token = storage
            .load(TOKEN_STORAGE_KEY)
            .filter(|token| !token.is_empty());
        if token.is_some() {
            log::debug!("session restored from storage");
        }
        Self {
            state: SessionState::with_token(token),
            storage,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn token(&self) -> Option<&str> {
        self.state.token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn login(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !self.storage.save(TOKEN_STORAGE_KEY, &token) {
            log::warn!("failed to persist session token");
        }
        self.state.apply(SessionAction::Login(token));
    }

    pub fn logout(&mut self) {
        if !self.storage.remove(TOKEN_STORAGE_KEY) {
            log::warn!("failed to remove persisted session token");
        }
        self.state.apply(SessionAction::Logout);
    }
}

// =========================================================
// 测试工具: MemoryStorage
// =========================================================

#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub(crate) struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl TokenStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.borrow_mut().remove(key);
        true
    }
}
