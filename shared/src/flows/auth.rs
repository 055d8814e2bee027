//! 登录 / 注册提交
//!
//! 先做本地校验，失败时不发请求；请求失败时优先展示后端 message。

use serde::{Deserialize, Serialize};

use super::Effect;
use crate::client::PpobApi;
use crate::forms::{FieldErrors, LoginForm, RegisterForm};
use crate::request::HttpClient;
use crate::route::AppRoute;
use crate::store::{SessionStore, TokenStorage};

pub const LOGIN_ERROR_FALLBACK: &str = "Login gagal, silakan coba lagi";
pub const REGISTER_ERROR_FALLBACK: &str = "Registrasi gagal";
pub const REGISTER_REDIRECT_DELAY_MS: u32 = 1_500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormFailure {
    /// 字段错误，内联展示
    Invalid(FieldErrors),
    /// 可关闭的错误横幅
    Rejected(String),
}

/// 校验并登录，成功返回 token
pub async fn login<C: HttpClient>(
    api: &PpobApi<C>,
    form: &LoginForm,
) -> Result<String, FormFailure> {
    form.check().map_err(FormFailure::Invalid)?;

    match api.login(form.email.trim(), &form.password).await {
        Ok(token) => Ok(token.token),
        Err(e) => {
            log::error!("login failed: {}", e);
            Err(FormFailure::Rejected(e.user_message(LOGIN_ERROR_FALLBACK)))
        }
    }
}

/// 保存 token 并回首页
pub fn complete_login<S: TokenStorage>(
    session: &mut SessionStore<S>,
    token: String,
) -> Vec<Effect> {
    session.login(token);
    vec![Effect::Navigate(AppRoute::Home)]
}

/// 校验并注册，成功后延迟跳转到登录页
pub async fn register<C: HttpClient>(
    api: &PpobApi<C>,
    form: &RegisterForm,
) -> Result<Vec<Effect>, FormFailure> {
    form.check().map_err(FormFailure::Invalid)?;

    match api.register(&form.to_request()).await {
        Ok(()) => Ok(vec![Effect::NavigateAfter {
            route: AppRoute::Login,
            delay_ms: REGISTER_REDIRECT_DELAY_MS,
        }]),
        Err(e) => {
            log::error!("registration failed: {}", e);
            Err(FormFailure::Rejected(e.user_message(REGISTER_ERROR_FALLBACK)))
        }
    }
}
