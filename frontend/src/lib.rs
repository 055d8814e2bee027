//! SIMS PPOB 前端应用
//!
//! 业务逻辑全部在 `ppob-shared` 中，这里只负责把它接到浏览器上：
//! - `web`: 浏览器 API 封装与路由服务
//! - `state`: 会话 / 用户仓库的信号与副作用执行
//! - `components`: 页面与 UI 组件

mod assets;
mod components {
    pub mod account;
    pub mod auth_layout;
    pub mod button;
    pub mod home;
    mod icons;
    pub mod login;
    pub mod modal;
    pub mod navbar;
    pub mod profile_banner;
    pub mod purchase;
    pub mod register;
    pub mod topup;
    pub mod transaction;
}
mod config;
mod state;

pub(crate) mod web;

use leptos::prelude::*;
use ppob_shared::route::AppRoute;

use crate::components::account::AccountPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::purchase::PurchasePage;
use crate::components::register::RegisterPage;
use crate::components::topup::TopupPage;
use crate::components::transaction::TransactionPage;
use crate::config::AppConfig;
use crate::state::provide_app;
use crate::web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Account => view! { <AccountPage /> }.into_any(),
        AppRoute::Transaction => view! { <TransactionPage /> }.into_any(),
        AppRoute::Topup => view! { <TopupPage /> }.into_any(),
        AppRoute::Purchase(code) => view! { <PurchasePage code=code /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Halaman tidak ditemukan"</p>
                    <Link route=AppRoute::Home class="btn btn-link text-error mt-4".to_string()>
                        "Kembali ke Beranda"
                    </Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 会话从 LocalStorage 同步恢复，首个守卫判断前就已就绪
    let ctx = provide_app(AppConfig::from_env());

    // 2. 认证状态注入路由服务
    let is_authenticated = ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
