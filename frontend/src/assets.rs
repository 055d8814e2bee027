//! 静态资源路径
//!
//! 文件位于 `frontend/assets/`，由 Trunk 复制到 `/assets/`。
//! 默认头像内联为 data URI，头像加载失败时不依赖任何网络请求。

use ppob_shared::Profile;

pub const LOGO: &str = "/assets/logo.svg";
pub const BALANCE_BACKGROUND: &str = "/assets/background-saldo.svg";
pub const LOGIN_ILLUSTRATION: &str = "/assets/illustrasi-login.svg";

/// 默认头像（灰色剪影）
pub const DEFAULT_AVATAR: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHZpZXdCb3g9IjAgMCA5NiA5NiI+PHJlY3Qgd2lkdGg9Ijk2IiBoZWlnaHQ9Ijk2IiBmaWxsPSIjZTVlN2ViIi8+PGNpcmNsZSBjeD0iNDgiIGN5PSIzOCIgcj0iMTgiIGZpbGw9IiM5Y2EzYWYiLz48cGF0aCBkPSJNMTQgOTJjNC0yMCAxOC0zMCAzNC0zMHMzMCAxMCAzNCAzMHoiIGZpbGw9IiM5Y2EzYWYiLz48L3N2Zz4K";

/// 资料中的头像地址，不可用时回退到默认头像
pub fn avatar_src(profile: &Profile) -> String {
    profile
        .avatar_url()
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string())
}

/// 头像 `on:error` 处理：换成默认头像，默认头像本身不再替换
pub fn fallback_avatar(ev: &leptos::web_sys::Event) {
    let img = leptos::prelude::event_target::<leptos::web_sys::HtmlImageElement>(ev);
    if img.src() != DEFAULT_AVATAR {
        img.set_src(DEFAULT_AVATAR);
    }
}
