//! 购买页面流程
//!
//! `Loading -> Ready -> Confirming -> Submitting -> Succeeded | Failed`。
//! 目录中找不到服务编码时直接回首页；两种结果弹窗关闭后都回首页。

use serde::{Deserialize, Serialize};

use super::{Effect, ModalIntent, ModalKind};
use crate::error::ApiResult;
use crate::route::AppRoute;
use crate::{PurchaseReceipt, ServiceItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchasePhase {
    #[default]
    Loading,
    Ready,
    Confirming,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseFlow {
    service_code: String,
    service: Option<ServiceItem>,
    phase: PurchasePhase,
    modal: Option<ModalIntent>,
}

impl PurchaseFlow {
    pub fn new(service_code: impl Into<String>) -> Self {
        Self {
            service_code: service_code.into(),
            service: None,
            phase: PurchasePhase::Loading,
            modal: None,
        }
    }

    pub fn service_code(&self) -> &str {
        &self.service_code
    }

    pub fn service(&self) -> Option<&ServiceItem> {
        self.service.as_ref()
    }

    pub fn phase(&self) -> PurchasePhase {
        self.phase
    }

    pub fn modal(&self) -> Option<&ModalIntent> {
        self.modal.as_ref()
    }

    /// 按钮禁用并显示「Memproses...」
    pub fn is_loading(&self) -> bool {
        self.phase == PurchasePhase::Submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading() {
            "Memproses..."
        } else {
            "Bayar"
        }
    }

    /// 服务目录加载完成
    pub fn on_catalog(&mut self, result: ApiResult<Vec<ServiceItem>>) -> Vec<Effect> {
        match result {
            Ok(services) => {
                let found = services
                    .into_iter()
                    .find(|s| s.service_code == self.service_code);
                match found {
                    Some(service) => {
                        self.service = Some(service);
                        self.phase = PurchasePhase::Ready;
                        Vec::new()
                    }
                    None => {
                        log::warn!("service {} not found", self.service_code);
                        vec![Effect::Navigate(AppRoute::Home)]
                    }
                }
            }
            Err(e) => {
                // 页面保持加载状态
                log::error!("failed to load service catalog: {}", e);
                Vec::new()
            }
        }
    }

    pub fn open_confirm(&mut self) -> bool {
        let Some(service) = &self.service else {
            return false;
        };
        if self.phase != PurchasePhase::Ready {
            return false;
        }
        self.modal = Some(ModalIntent::purchase(
            ModalKind::Confirm,
            service.service_tariff,
            &service.service_name,
        ));
        self.phase = PurchasePhase::Confirming;
        true
    }

    /// 返回要提交的服务编码
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.phase != PurchasePhase::Confirming {
            return None;
        }
        self.phase = PurchasePhase::Submitting;
        Some(self.service_code.clone())
    }

    pub fn finish(&mut self, result: ApiResult<PurchaseReceipt>) -> Vec<Effect> {
        if self.phase != PurchasePhase::Submitting {
            return Vec::new();
        }
        let Some(service) = &self.service else {
            return Vec::new();
        };
        let (amount, name) = (service.service_tariff, service.service_name.clone());
        match result {
            Ok(receipt) => {
                log::debug!("purchase {} succeeded", receipt.invoice_number);
                self.phase = PurchasePhase::Succeeded;
                self.modal = Some(ModalIntent::purchase(
                    ModalKind::Success,
                    receipt.total_amount,
                    &name,
                ));
                vec![Effect::FetchBalance]
            }
            Err(e) => {
                log::error!("purchase {} failed: {}", self.service_code, e);
                self.phase = PurchasePhase::Failed;
                let mut modal = ModalIntent::purchase(ModalKind::Failed, amount, &name);
                if let Some(message) = e.server_message() {
                    modal = modal.with_message(message);
                }
                self.modal = Some(modal);
                Vec::new()
            }
        }
    }

    pub fn close_modal(&mut self) -> Vec<Effect> {
        match self.phase {
            PurchasePhase::Confirming => {
                self.phase = PurchasePhase::Ready;
                self.modal = None;
                Vec::new()
            }
            PurchasePhase::Succeeded | PurchasePhase::Failed => {
                self.modal = None;
                vec![Effect::Navigate(AppRoute::Home)]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn catalog() -> Vec<ServiceItem> {
        vec![
            ServiceItem {
                service_code: "PAJAK".to_string(),
                service_name: "Pajak PBB".to_string(),
                service_icon: "https://cdn.test/pbb.png".to_string(),
                service_tariff: 40_000,
            },
            ServiceItem {
                service_code: "PULSA".to_string(),
                service_name: "Pulsa".to_string(),
                service_icon: "https://cdn.test/pulsa.png".to_string(),
                service_tariff: 10_000,
            },
        ]
    }

    fn ready(code: &str) -> PurchaseFlow {
        let mut flow = PurchaseFlow::new(code);
        assert!(flow.on_catalog(Ok(catalog())).is_empty());
        flow
    }

    #[test]
    fn test_catalog_match_makes_page_ready() {
        let flow = ready("PULSA");
        assert_eq!(flow.phase(), PurchasePhase::Ready);
        assert_eq!(flow.service().unwrap().service_tariff, 10_000);
        assert_eq!(flow.button_label(), "Bayar");
    }

    #[test]
    fn test_catalog_error_stays_loading() {
        let mut flow = PurchaseFlow::new("PULSA");
        let effects = flow.on_catalog(Err(ApiError::Decode("bad".to_string())));
        assert!(effects.is_empty());
        assert_eq!(flow.phase(), PurchasePhase::Loading);
        assert!(!flow.open_confirm());
    }

    #[test]
    fn test_failure_modal_closes_to_home() {
        let mut flow = ready("PAJAK");
        assert!(flow.open_confirm());
        assert_eq!(flow.modal().unwrap().headline(), "Beli Pajak PBB senilai");
        assert_eq!(flow.begin_submit().as_deref(), Some("PAJAK"));
        assert!(flow.is_loading());
        assert_eq!(flow.button_label(), "Memproses...");

        let effects = flow.finish(Err(ApiError::Server {
            status: 400,
            message: Some("Saldo tidak mencukupi".to_string()),
        }));
        assert!(effects.is_empty());
        assert_eq!(flow.phase(), PurchasePhase::Failed);
        let modal = flow.modal().unwrap();
        assert_eq!(modal.headline(), "Pembayaran Pajak PBB sebesar");
        assert_eq!(modal.amount_label(), "Rp 40.000");
        assert_eq!(modal.status_text().as_deref(), Some("Saldo tidak mencukupi"));

        assert_eq!(flow.close_modal(), vec![Effect::Navigate(AppRoute::Home)]);
    }

    #[test]
    fn test_second_submit_is_rejected_while_loading() {
        let mut flow = ready("PULSA");
        flow.open_confirm();
        assert!(flow.begin_submit().is_some());
        assert!(flow.begin_submit().is_none());
        assert!(!flow.open_confirm());
    }

    #[test]
    fn test_cancel_confirm_returns_to_ready() {
        let mut flow = ready("PULSA");
        flow.open_confirm();
        assert!(flow.close_modal().is_empty());
        assert_eq!(flow.phase(), PurchasePhase::Ready);
        assert_eq!(flow.modal(), None);
    }
}
