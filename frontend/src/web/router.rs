//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程为「请求 -> 守卫 -> 写入 History -> 更新信号」，
//! 守卫本身由共享层的 [`AppRoute::guard`] 决定。

use leptos::prelude::*;
use ppob_shared::route::{AppRoute, Navigation};
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 通过注入认证信号实现与会话仓库的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let (current_route, set_route) = signal(AppRoute::from_path(&current_path()));

        let router = Self {
            current_route,
            set_route,
            is_authenticated,
        };
        // 初始 URL 同样要经过守卫
        router.enter(router.current_route.get_untracked(), false);
        router
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航到路由（pushState）
    pub fn navigate_to(&self, route: AppRoute) {
        self.enter(route, true);
    }

    /// **核心方法：守卫**
    ///
    /// 写入内容由 [`AppRoute::transition`] 决定：重定向 replace，
    /// `NotFound` 保留地址栏，目标与当前路由相同时不更新信号。
    fn enter(&self, target: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();
        let current = self.current_route.get_untracked();
        let transition = target.transition(&current, is_auth, use_push);

        if let Some(path) = &transition.path {
            if transition.replace {
                replace_history_state(path);
            } else if *path != current_path() {
                push_history_state(path);
            }
        }
        if let Some(route) = transition.route {
            log::debug!("[Router] {} -> {}", current, route);
            self.set_route.set(route);
        }
    }

    /// 浏览器后退/前进
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            router.enter(AppRoute::from_path(&current_path()), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 登录 / 登出后重新执行当前路由的守卫
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();

            if let Navigation::Redirect(redirect) = route.guard(is_auth) {
                log::debug!("[Router] auth changed, {} -> {}", route, redirect);
                replace_history_state(&redirect.to_path());
                router.set_route.set(redirect);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的页面。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || matcher(router.current_route().get())
}

/// 站内链接，拦截点击改走 History API
#[component]
pub fn Link(
    route: AppRoute,
    #[prop(into, optional)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = route.to_path();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(route.clone());
    };

    view! {
        <a href=href class=move || class.get() on:click=on_click>
            {children()}
        </a>
    }
}
