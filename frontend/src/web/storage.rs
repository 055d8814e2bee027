//! LocalStorage 封装模块
//!
//! 会话 token 按原样写入 `localStorage`（不做 JSON 编码），
//! 与其他直接调用 `setItem` 的代码互通。读写失败只记录日志。

use ppob_shared::store::TokenStorage;

/// 字符串键值存储，值原样存取
pub(crate) trait RawStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> bool;
    fn remove_item(&self, key: &str) -> bool;
}

impl RawStorage for web_sys::Storage {
    fn get_item(&self, key: &str) -> Option<String> {
        web_sys::Storage::get_item(self, key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> bool {
        web_sys::Storage::set_item(self, key, value).is_ok()
    }

    fn remove_item(&self, key: &str) -> bool {
        web_sys::Storage::remove_item(self, key).is_ok()
    }
}

/// 获取 LocalStorage 实例
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn load_from(storage: &impl RawStorage, key: &str) -> Option<String> {
    storage.get_item(key).filter(|value| !value.is_empty())
}

fn save_to(storage: &impl RawStorage, key: &str, value: &str) -> bool {
    let saved = storage.set_item(key, value);
    if !saved {
        log::warn!("LocalStorage set {} failed", key);
    }
    saved
}

/// 浏览器 LocalStorage 上的 [`TokenStorage`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl TokenStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        load_from(&local_storage()?, key)
    }

    fn save(&self, key: &str, value: &str) -> bool {
        match local_storage() {
            Some(storage) => save_to(&storage, key, value),
            None => {
                log::warn!("LocalStorage unavailable, {} not persisted", key);
                false
            }
        }
    }

    fn remove(&self, key: &str) -> bool {
        local_storage().is_some_and(|storage| RawStorage::remove_item(&storage, key))
    }
}
