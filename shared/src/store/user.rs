//! 用户资料 / 余额仓库
//!
//! 两个独立的异步请求（资料、余额），各自维护 `Idle -> Pending -> Fulfilled | Rejected`。
//! `loading()` 只要任一请求在途即为真，先完成的请求不会清掉另一个的加载状态。

use serde::{Deserialize, Serialize};

use crate::Profile;
use crate::client::PpobApi;
use crate::request::HttpClient;

const PROFILE_ERROR_FALLBACK: &str = "Failed to fetch profile";
const BALANCE_ERROR_FALLBACK: &str = "Failed to fetch balance";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected(String),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Rejected(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserAction {
    ProfilePending,
    ProfileFulfilled(Profile),
    ProfileRejected(String),
    BalancePending,
    BalanceFulfilled(u64),
    BalanceRejected(String),
    SetShowBalance(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    pub profile: Profile,
    pub balance: u64,
    /// 仅界面使用，不持久化
    pub show_balance: bool,
    pub profile_request: RequestState,
    pub balance_request: RequestState,
    /// 最近一次失败的请求信息
    last_error: Option<String>,
}

impl UserState {
    pub fn loading(&self) -> bool {
        self.profile_request.is_pending() || self.balance_request.is_pending()
    }

    pub fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn apply(&mut self, action: UserAction) {
        match action {
            UserAction::ProfilePending => {
                self.profile_request = RequestState::Pending;
                self.last_error = None;
            }
            UserAction::ProfileFulfilled(profile) => {
                self.profile_request = RequestState::Fulfilled;
                self.profile = profile;
            }
            UserAction::ProfileRejected(msg) => {
                // 保留旧的资料
                self.profile_request = RequestState::Rejected(msg.clone());
                self.last_error = Some(msg);
            }
            UserAction::BalancePending => {
                self.balance_request = RequestState::Pending;
                self.last_error = None;
            }
            UserAction::BalanceFulfilled(balance) => {
                self.balance_request = RequestState::Fulfilled;
                self.balance = balance;
            }
            UserAction::BalanceRejected(msg) => {
                self.balance_request = RequestState::Rejected(msg.clone());
                self.last_error = Some(msg);
            }
            UserAction::SetShowBalance(show) => self.show_balance = show,
        }
    }
}

// =========================================================
// 异步请求编排
// =========================================================

/// `GET /profile`，依次派发 Pending 与 Fulfilled/Rejected
pub async fn fetch_profile<C, D>(api: &PpobApi<C>, dispatch: D)
where
    C: HttpClient,
    D: Fn(UserAction),
{
    dispatch(UserAction::ProfilePending);
    match api.profile().await {
        Ok(profile) => dispatch(UserAction::ProfileFulfilled(profile)),
        Err(e) => {
            log::error!("fetch profile failed: {}", e);
            dispatch(UserAction::ProfileRejected(e.user_message(PROFILE_ERROR_FALLBACK)));
        }
    }
}

/// `GET /balance`
pub async fn fetch_balance<C, D>(api: &PpobApi<C>, dispatch: D)
where
    C: HttpClient,
    D: Fn(UserAction),
{
    dispatch(UserAction::BalancePending);
    match api.balance().await {
        Ok(balance) => dispatch(UserAction::BalanceFulfilled(balance.balance)),
        Err(e) => {
            log::error!("fetch balance failed: {}", e);
            dispatch(UserAction::BalanceRejected(e.user_message(BALANCE_ERROR_FALLBACK)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{HttpMethod, MockHttpClient};
    use serde_json::json;
    use std::cell::RefCell;

    fn profile(first: &str) -> Profile {
        Profile {
            email: "user@nutech.id".to_string(),
            first_name: first.to_string(),
            last_name: "Nutech".to_string(),
            profile_image: None,
        }
    }

    #[test]
    fn test_loading_is_tracked_per_request() {
        let mut state = UserState::default();
        state.apply(UserAction::ProfilePending);
        state.apply(UserAction::BalancePending);
        assert!(state.loading());

        // 余额先返回，资料仍在途
        state.apply(UserAction::BalanceFulfilled(10_000));
        assert!(state.loading());

        state.apply(UserAction::ProfileFulfilled(profile("User")));
        assert!(!state.loading());
        assert_eq!(state.balance, 10_000);
    }

    #[test]
    fn test_profile_rejection_keeps_previous_profile() {
        let mut state = UserState::default();
        state.apply(UserAction::ProfileFulfilled(profile("Old")));
        state.apply(UserAction::ProfilePending);
        state.apply(UserAction::ProfileRejected("boom".to_string()));

        assert_eq!(state.profile.first_name, "Old");
        assert_eq!(state.error(), Some("boom"));
        assert_eq!(state.profile_request.error(), Some("boom"));
        assert!(!state.loading());
    }

    #[test]
    fn test_pending_clears_error() {
        let mut state = UserState::default();
        state.apply(UserAction::BalanceRejected("x".to_string()));
        assert_eq!(state.error(), Some("x"));
        state.apply(UserAction::BalancePending);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_set_show_balance_has_no_other_effect() {
        let mut state = UserState::default();
        let before = state.clone();
        state.apply(UserAction::SetShowBalance(true));
        assert!(state.show_balance);
        state.apply(UserAction::SetShowBalance(false));
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn test_fetch_profile_and_balance_concurrently() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Get,
            "https://api.test/profile",
            200,
            json!({"status": 0, "message": "Sukses", "data": {
                "email": "user@nutech.id",
                "first_name": "User",
                "last_name": "Nutech",
                "profile_image": "https://cdn.test/null"
            }}),
        );
        client.mock_response(
            HttpMethod::Get,
            "https://api.test/balance",
            200,
            json!({"status": 0, "message": "Sukses", "data": {"balance": 75000}}),
        );
        let api = PpobApi::new("https://api.test", client).with_token(Some("t".to_string()));

        let state = RefCell::new(UserState::default());
        let log = RefCell::new(Vec::new());
        let dispatch = |action: UserAction| {
            log.borrow_mut().push(action.clone());
            state.borrow_mut().apply(action);
        };

        futures::join!(fetch_profile(&api, dispatch), fetch_balance(&api, dispatch));

        let state = state.into_inner();
        assert_eq!(state.profile.first_name, "User");
        assert_eq!(state.profile.avatar_url(), None);
        assert_eq!(state.balance, 75_000);
        assert!(!state.loading());
        assert_eq!(log.borrow().len(), 4);
    }

    #[tokio::test]
    async fn test_fetch_balance_failure_records_message() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Get,
            "https://api.test/balance",
            401,
            json!({"status": 108, "message": "Token tidak tidak valid atau kadaluwarsa", "data": null}),
        );
        let api = PpobApi::new("https://api.test", client);

        let state = RefCell::new(UserState {
            balance: 5_000,
            ..Default::default()
        });
        fetch_balance(&api, |a| state.borrow_mut().apply(a)).await;

        let state = state.into_inner();
        assert_eq!(state.balance, 5_000);
        assert_eq!(state.error(), Some("Token tidak tidak valid atau kadaluwarsa"));
    }

    #[tokio::test]
    async fn test_fetch_profile_failure_uses_fallback() {
        let api = PpobApi::new("https://api.test", MockHttpClient::new());
        let state = RefCell::new(UserState::default());
        fetch_profile(&api, |a| state.borrow_mut().apply(a)).await;
        assert_eq!(state.borrow().error(), Some("Failed to fetch profile"));
    }
}
