//! SIMS PPOB 领域层
//!
//! 与平台无关的纯逻辑：领域模型、接口协议、API 客户端、
//! 状态仓库（reducer + action）、路由守卫、表单校验与页面流程。
//! 浏览器绑定放在 `ppob-frontend` 中。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod client;
pub mod error;
pub mod flows;
pub mod format;
pub mod forms;
pub mod protocol;
pub mod request;
pub mod route;
pub mod store;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 持久化 token 使用的固定键名
pub const TOKEN_STORAGE_KEY: &str = "token";
pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// 交易历史每页条数
pub const HISTORY_PAGE_SIZE: u32 = 5;

pub const TOPUP_MIN_AMOUNT: u64 = 10_000;
pub const TOPUP_MAX_AMOUNT: u64 = 1_000_000;
pub const TOPUP_PRESET_AMOUNTS: [u64; 6] = [10_000, 20_000, 50_000, 100_000, 250_000, 500_000];

/// 头像上传大小上限 (100 KB)
pub const MAX_PROFILE_IMAGE_BYTES: u64 = 100 * 1024;
/// 文件选择器过滤条件
pub const ACCEPTED_IMAGE_TYPES: &str = ".png,.jpeg,.jpg";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 用户资料
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl Profile {
    /// 可展示的头像地址
    ///
    /// 后端对未上传头像的用户可能返回空串或以 `null` 结尾的地址，
    /// 这两种情况都返回 `None`，由界面回退到默认头像。
    pub fn avatar_url(&self) -> Option<&str> {
        match self.profile_image.as_deref() {
            Some(url) if !url.is_empty() && url != "null" && !url.ends_with("/null") => Some(url),
            _ => None,
        }
    }

    /// 欢迎语中显示的全名
    pub fn display_name(&self) -> String {
        if self.first_name.is_empty() || self.last_name.is_empty() {
            "Nama User".to_string()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub balance: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub service_code: String,
    pub service_name: String,
    pub service_icon: String,
    pub service_tariff: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub banner_name: String,
    pub banner_image: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Topup,
    Payment,
}

impl TransactionType {
    /// 金额前缀：充值为入账，支付为出账
    pub fn sign(&self) -> &'static str {
        match self {
            TransactionType::Topup => "+",
            TransactionType::Payment => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub invoice_number: String,
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub description: String,
    pub total_amount: u64,
    pub created_on: DateTime<Utc>,
}

/// `GET /transaction/history` 的分页结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPage {
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
    pub records: Vec<TransactionRecord>,
}

/// `POST /transaction` 的返回
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub invoice_number: String,
    pub service_code: String,
    pub service_name: String,
    pub transaction_type: TransactionType,
    pub total_amount: u64,
    pub created_on: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginToken {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_url_ignores_placeholder_values() {
        let mut profile = Profile::default();
        assert_eq!(profile.avatar_url(), None);

        profile.profile_image = Some(String::new());
        assert_eq!(profile.avatar_url(), None);

        profile.profile_image = Some("null".to_string());
        assert_eq!(profile.avatar_url(), None);

        profile.profile_image = Some("https://cdn.example.com/profile/null".to_string());
        assert_eq!(profile.avatar_url(), None);

        profile.profile_image = Some("https://cdn.example.com/a.png".to_string());
        assert_eq!(profile.avatar_url(), Some("https://cdn.example.com/a.png"));
    }

    #[test]
    fn test_display_name_requires_both_names() {
        let mut profile = Profile {
            first_name: "Budi".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.display_name(), "Nama User");

        profile.last_name = "Santoso".to_string();
        assert_eq!(profile.display_name(), "Budi Santoso");
    }

    #[test]
    fn test_transaction_record_deserializes_backend_shape() {
        let json = r#"{
            "invoice_number": "INV17082023-001",
            "transaction_type": "TOPUP",
            "description": "Top Up balance",
            "total_amount": 100000,
            "created_on": "2023-08-17T10:10:10.000Z"
        }"#;
        let record: TransactionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.transaction_type, TransactionType::Topup);
        assert_eq!(record.total_amount, 100_000);
        assert_eq!(record.transaction_type.sign(), "+");
    }
}
