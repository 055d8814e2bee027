//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、访问守卫以及进入页面时需要触发的副作用。

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::flows::Effect;

const PURCHASE_PREFIX: &str = "/purchase/";

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AppRoute {
    /// 首页 (需要认证)
    #[default]
    Home,
    Login,
    Register,
    Account,
    Transaction,
    Topup,
    /// 购买指定服务，携带服务代码
    Purchase(String),
    /// 页面未找到
    NotFound,
}

/// 路由访问级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// 仅已认证用户可访问，否则回到登录页
    Auth,
    /// 仅访客可访问，已认证用户回到首页
    Guest,
    /// 不做限制
    Open,
}

/// 守卫判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    /// 重定向，使用 replaceState 而不是 pushState
    Redirect(AppRoute),
}

/// 一次导航需要的写入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// 写入 History 的路径，`None` 时地址栏保持不变
    pub path: Option<String>,
    /// 使用 replaceState 而不是 pushState
    pub replace: bool,
    /// 新的当前路由，与当前路由相同时为 `None`，页面不会重新挂载
    pub route: Option<AppRoute>,
}

impl Gate {
    /// **核心守卫逻辑**
    pub fn check(&self, is_authenticated: bool) -> Navigation {
        match self {
            Gate::Auth if !is_authenticated => Navigation::Redirect(AppRoute::Login),
            Gate::Guest if is_authenticated => Navigation::Redirect(AppRoute::Home),
            _ => Navigation::Proceed,
        }
    }
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match trimmed {
            "" | "/" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/account" => Self::Account,
            "/transaction" => Self::Transaction,
            "/topup" => Self::Topup,
            other => match other.strip_prefix(PURCHASE_PREFIX) {
                Some(code) if !code.is_empty() && !code.contains('/') => {
                    Self::Purchase(code.to_string())
                }
                _ => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Account => "/account".to_string(),
            Self::Transaction => "/transaction".to_string(),
            Self::Topup => "/topup".to_string(),
            Self::Purchase(code) => format!("{}{}", PURCHASE_PREFIX, code),
            Self::NotFound => "/404".to_string(),
        }
    }

    pub fn gate(&self) -> Gate {
        match self {
            Self::Login | Self::Register => Gate::Guest,
            Self::NotFound => Gate::Open,
            _ => Gate::Auth,
        }
    }

    /// 在进入路由之前执行守卫
    pub fn guard(&self, is_authenticated: bool) -> Navigation {
        self.gate().check(is_authenticated)
    }

    /// 从 `current` 进入本路由时的 History 写入与路由切换
    ///
    /// 重定向一律 replace；`NotFound` 不改写地址栏，保留用户输入的路径。
    pub fn transition(
        &self,
        current: &AppRoute,
        is_authenticated: bool,
        use_push: bool,
    ) -> Transition {
        let (resolved, replace) = match self.guard(is_authenticated) {
            Navigation::Proceed => (self.clone(), !use_push),
            Navigation::Redirect(redirect) => (redirect, true),
        };
        let path = (resolved != Self::NotFound).then(|| resolved.to_path());
        let route = (resolved != *current).then_some(resolved);
        Transition {
            path,
            replace,
            route,
        }
    }

    /// 页面挂载时需要刷新的全局数据
    pub fn entry_effects(&self) -> Vec<Effect> {
        match self {
            Self::Home | Self::Transaction | Self::Topup | Self::Purchase(_) => {
                vec![Effect::FetchProfile, Effect::FetchBalance]
            }
            Self::Account => vec![Effect::FetchProfile],
            Self::Login | Self::Register | Self::NotFound => Vec::new(),
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: [&str; 6] = [
        "/",
        "/account",
        "/transaction",
        "/topup",
        "/purchase/PLN",
        "/purchase/PULSA",
    ];

    #[test]
    fn test_from_path_round_trips_known_routes() {
        for path in ["/", "/login", "/register", "/account", "/transaction", "/topup", "/purchase/PDAM"] {
            assert_eq!(AppRoute::from_path(path).to_path(), path);
        }
    }

    #[test]
    fn test_from_path_edge_cases() {
        assert_eq!(AppRoute::from_path("/topup/"), AppRoute::Topup);
        assert_eq!(AppRoute::from_path("/login?next=1"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/purchase/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/purchase/a/b"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/unknown"), AppRoute::NotFound);
        assert_eq!(
            AppRoute::from_path("/purchase/VOUCHER_GAME"),
            AppRoute::Purchase("VOUCHER_GAME".to_string())
        );
    }

    #[test]
    fn test_auth_gate_renders_only_when_authenticated() {
        for path in PROTECTED {
            let route = AppRoute::from_path(path);
            assert_eq!(route.guard(true), Navigation::Proceed, "{}", path);
            assert_eq!(
                route.guard(false),
                Navigation::Redirect(AppRoute::Login),
                "{}",
                path
            );
        }
    }

    #[test]
    fn test_guest_gate_renders_only_when_unauthenticated() {
        for route in [AppRoute::Login, AppRoute::Register] {
            assert_eq!(route.guard(false), Navigation::Proceed);
            assert_eq!(route.guard(true), Navigation::Redirect(AppRoute::Home));
        }
    }

    #[test]
    fn test_not_found_is_open() {
        assert_eq!(AppRoute::NotFound.guard(true), Navigation::Proceed);
        assert_eq!(AppRoute::NotFound.guard(false), Navigation::Proceed);
    }

    #[test]
    fn test_transition_keeps_mistyped_url() {
        let t = AppRoute::from_path("/foo").transition(&AppRoute::NotFound, true, false);
        assert_eq!(t.path, None);
        assert_eq!(t.route, None);

        let t = AppRoute::NotFound.transition(&AppRoute::Home, false, true);
        assert_eq!(t.path, None);
        assert_eq!(t.route, Some(AppRoute::NotFound));
    }

    #[test]
    fn test_transition_to_current_route_does_not_remount() {
        let t = AppRoute::Topup.transition(&AppRoute::Topup, true, true);
        assert_eq!(t.route, None);
        assert_eq!(t.path.as_deref(), Some("/topup"));
        assert!(!t.replace);
    }

    #[test]
    fn test_transition_redirect_replaces() {
        let t = AppRoute::Account.transition(&AppRoute::Login, false, true);
        assert_eq!(
            t,
            Transition {
                path: Some("/login".to_string()),
                replace: true,
                route: None,
            }
        );

        let t = AppRoute::Login.transition(&AppRoute::Topup, true, true);
        assert_eq!(t.path.as_deref(), Some("/"));
        assert!(t.replace);
        assert_eq!(t.route, Some(AppRoute::Home));
    }

    #[test]
    fn test_transition_push_between_pages() {
        let t = AppRoute::Transaction.transition(&AppRoute::Home, true, true);
        assert_eq!(t.path.as_deref(), Some("/transaction"));
        assert!(!t.replace);
        assert_eq!(t.route, Some(AppRoute::Transaction));
    }

    #[test]
    fn test_entry_effects() {
        assert_eq!(
            AppRoute::Home.entry_effects(),
            vec![Effect::FetchProfile, Effect::FetchBalance]
        );
        assert_eq!(AppRoute::Account.entry_effects(), vec![Effect::FetchProfile]);
        assert!(AppRoute::Login.entry_effects().is_empty());
    }
}
