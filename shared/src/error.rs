use thiserror::Error;

/// 传输层错误（请求未能得到任何 HTTP 响应）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// 请求构建失败
    #[error("请求构建失败: {0}")]
    RequestBuildFailed(String),
    /// 网络请求失败
    #[error("网络错误: {0}")]
    NetworkError(String),
    /// 响应读取失败
    #[error("响应读取失败: {0}")]
    ResponseReadFailed(String),
}

/// API 调用错误
///
/// `Server` 保留后端返回的 `message`，界面优先展示它，
/// 没有时再使用各页面自己的兜底文案。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("server responded with {status}: {}", message.as_deref().unwrap_or("<no message>"))]
    Server { status: u16, message: Option<String> },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// 面向用户的错误文案
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = ApiError::Server {
            status: 401,
            message: Some("Username atau password salah".to_string()),
        };
        assert_eq!(err.user_message("fallback"), "Username atau password salah");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_user_message_falls_back() {
        let blank = ApiError::Server {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.user_message("Login gagal"), "Login gagal");

        let network = ApiError::from(HttpError::NetworkError("offline".to_string()));
        assert_eq!(network.user_message("Login gagal"), "Login gagal");
        assert_eq!(network.status(), None);
    }
}
