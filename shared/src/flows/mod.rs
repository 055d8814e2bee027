//! 页面流程
//!
//! 每个页面的状态机都只修改自身状态，并返回 [`Effect`] 列表，
//! 由前端负责执行（派发请求、导航、弹窗）。这样流程可以在宿主机上直接测试。

use serde::{Deserialize, Serialize};

use crate::format::rupiah;
use crate::route::AppRoute;

pub mod account;
pub mod auth;
pub mod history;
pub mod home;
pub mod purchase;
pub mod topup;


/// 流程产生的副作用描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    FetchProfile,
    FetchBalance,
    Navigate(AppRoute),
    /// 延迟导航（注册成功后的停顿）
    NavigateAfter { route: AppRoute, delay_ms: u32 },
    Alert(String),
    /// 清除会话
    Logout,
}

// =========================================================
// 弹窗意图
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalKind {
    Confirm,
    Success,
    Failed,
}

/// 弹窗展示所需的全部数据，关闭后即丢弃
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalIntent {
    pub kind: ModalKind,
    pub amount: u64,
    /// 有服务名时为购买，否则为充值
    pub service_name: Option<String>,
    pub message: Option<String>,
}

impl ModalIntent {
    pub fn topup(kind: ModalKind, amount: u64) -> Self {
        Self {
            kind,
            amount,
            service_name: None,
            message: None,
        }
    }

    pub fn purchase(kind: ModalKind, amount: u64, service_name: &str) -> Self {
        Self {
            kind,
            amount,
            service_name: Some(service_name.to_string()),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn headline(&self) -> String {
        match (self.kind, &self.service_name) {
            (ModalKind::Confirm, Some(name)) => format!("Beli {} senilai", name),
            (ModalKind::Confirm, None) => "Anda yakin untuk Top Up sebesar".to_string(),
            (_, Some(name)) => format!("Pembayaran {} sebesar", name),
            (_, None) => "Top Up sebesar".to_string(),
        }
    }

    pub fn amount_label(&self) -> String {
        match self.kind {
            ModalKind::Confirm => format!("{} ?", rupiah(self.amount)),
            _ => rupiah(self.amount),
        }
    }

    pub fn status_text(&self) -> Option<String> {
        match self.kind {
            ModalKind::Confirm => None,
            ModalKind::Success => Some(self.message.clone().unwrap_or_else(|| "berhasil!".to_string())),
            ModalKind::Failed => Some(self.message.clone().unwrap_or_else(|| "gagal".to_string())),
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        if self.service_name.is_some() {
            "Ya, lanjutkan Bayar"
        } else {
            "Ya, lanjutkan Top Up"
        }
    }
}

#[cfg(test)]
mod modal_tests {
    use super::*;

    #[test]
    fn test_topup_modal_texts() {
        let confirm = ModalIntent::topup(ModalKind::Confirm, 50_000);
        assert_eq!(confirm.headline(), "Anda yakin untuk Top Up sebesar");
        assert_eq!(confirm.amount_label(), "Rp 50.000 ?");
        assert_eq!(confirm.confirm_label(), "Ya, lanjutkan Top Up");
        assert_eq!(confirm.status_text(), None);

        let success = ModalIntent::topup(ModalKind::Success, 50_000);
        assert_eq!(success.headline(), "Top Up sebesar");
        assert_eq!(success.amount_label(), "Rp 50.000");
        assert_eq!(success.status_text().as_deref(), Some("berhasil!"));
    }

    #[test]
    fn test_purchase_modal_texts() {
        let confirm = ModalIntent::purchase(ModalKind::Confirm, 10_000, "Pulsa");
        assert_eq!(confirm.headline(), "Beli Pulsa senilai");
        assert_eq!(confirm.confirm_label(), "Ya, lanjutkan Bayar");

        let failed = ModalIntent::purchase(ModalKind::Failed, 10_000, "Pulsa")
            .with_message("Saldo tidak mencukupi");
        assert_eq!(failed.headline(), "Pembayaran Pulsa sebesar");
        assert_eq!(failed.status_text().as_deref(), Some("Saldo tidak mencukupi"));
    }
}
