//! 应用状态
//!
//! 会话与用户仓库都放在 App 根部的信号里，通过 Context 注入到页面。
//! 页面流程返回的 [`Effect`] 统一在这里执行。

use leptos::prelude::*;
use leptos::task::spawn_local;
use ppob_shared::client::PpobApi;
use ppob_shared::flows::Effect;
use ppob_shared::flows::auth::complete_login;
use ppob_shared::route::AppRoute;
use ppob_shared::store::user::{fetch_balance, fetch_profile};
use ppob_shared::store::{SessionStore, UserAction, UserState};

use crate::config::AppConfig;
use crate::web::router::{RouterService, use_router};
use crate::web::{BrowserStorage, GlooHttpClient, alert, delay};

pub type Api = PpobApi<GlooHttpClient>;

/// 应用上下文
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<SessionStore<BrowserStorage>>,
    pub user: RwSignal<UserState>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    /// 启动时同步读取持久化的 token
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: RwSignal::new(SessionStore::restore(BrowserStorage)),
            user: RwSignal::new(UserState::default()),
            config: StoredValue::new(config),
        }
    }

    /// 认证状态信号（注入路由服务）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.is_authenticated()))
    }

    /// 携带当前 token 的 API 客户端
    pub fn api(&self) -> Api {
        let base_url = self.config.with_value(|c| c.api_base_url.clone());
        let token = self
            .session
            .with_untracked(|s| s.token().map(str::to_string));
        PpobApi::new(base_url, GlooHttpClient).with_token(token)
    }

    pub fn dispatch(&self, action: UserAction) {
        self.user.update(|state| state.apply(action));
    }

    pub fn fetch_profile(&self) {
        let api = self.api();
        let user = self.user;
        spawn_local(async move {
            fetch_profile(&api, move |action| user.update(|state| state.apply(action))).await;
        });
    }

    pub fn fetch_balance(&self) {
        let api = self.api();
        let user = self.user;
        spawn_local(async move {
            fetch_balance(&api, move |action| user.update(|state| state.apply(action))).await;
        });
    }

    pub fn login(&self, token: String) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.session
            .update(|session| effects = complete_login(session, token));
        effects
    }

    /// 清除会话与用户数据
    pub fn logout(&self) {
        self.session.update(|session| session.logout());
        self.user.set(UserState::default());
    }

    /// 进入页面时刷新全局数据
    pub fn enter(&self, route: &AppRoute) {
        for effect in route.entry_effects() {
            match effect {
                Effect::FetchProfile => self.fetch_profile(),
                Effect::FetchBalance => self.fetch_balance(),
                other => log::warn!("unexpected entry effect {:?}", other),
            }
        }
    }

    pub fn run_effects(&self, router: RouterService, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchProfile => self.fetch_profile(),
                Effect::FetchBalance => self.fetch_balance(),
                Effect::Navigate(route) => router.navigate_to(route),
                Effect::NavigateAfter { route, delay_ms } => {
                    delay(delay_ms, move || router.navigate_to(route));
                }
                Effect::Alert(message) => alert(&message),
                Effect::Logout => self.logout(),
            }
        }
    }
}

pub fn provide_app(config: AppConfig) -> AppContext {
    let ctx = AppContext::new(config);
    provide_context(ctx);
    ctx
}

/// 从 Context 获取应用上下文
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// 返回一个执行副作用的闭包，供页面在事件与异步回调中使用
pub fn use_effects() -> impl Fn(Vec<Effect>) + Copy + 'static {
    let ctx = use_app();
    let router = use_router();
    move |effects| ctx.run_effects(router, effects)
}
