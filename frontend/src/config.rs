//! 运行时配置
//!
//! 默认值可以在构建时通过环境变量覆盖：
//! `PPOB_API_BASE_URL=https://... trunk build`

const DEFAULT_API_BASE_URL: &str = "https://take-home-test-api.nutech-integrasi.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: option_env!("PPOB_API_BASE_URL")
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        }
    }
}
