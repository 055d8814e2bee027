//! 充值页面流程
//!
//! `Editing -> Confirming -> Submitting -> Succeeded | Failed`。
//! 成功弹窗关闭后清空输入并回到首页；失败弹窗关闭后保留输入，允许重试。

use serde::{Deserialize, Serialize};

use super::{Effect, ModalIntent, ModalKind};
use crate::error::ApiResult;
use crate::format::group_thousands;
use crate::route::AppRoute;
use crate::{Balance, TOPUP_MAX_AMOUNT, TOPUP_MIN_AMOUNT};

/// 金额是否在允许范围内（含边界）
pub fn is_valid_amount(amount: u64) -> bool {
    (TOPUP_MIN_AMOUNT..=TOPUP_MAX_AMOUNT).contains(&amount)
}

/// 只保留数字后解析，溢出时饱和到 `u64::MAX`
pub fn parse_amount(raw: &str) -> (String, u64) {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let amount = digits.chars().fold(0u64, |acc, c| {
        let digit = u64::from(c as u8 - b'0');
        acc.saturating_mul(10).saturating_add(digit)
    });
    (digits, amount)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopupPhase {
    #[default]
    Editing,
    Confirming,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopupFlow {
    input: String,
    amount: u64,
    valid: bool,
    phase: TopupPhase,
    modal: Option<ModalIntent>,
}

impl TopupFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// 输入框展示值，按千分位分组（`50.000`），空输入保持为空
    pub fn display_input(&self) -> String {
        if self.input.is_empty() {
            String::new()
        } else {
            group_thousands(self.amount)
        }
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn phase(&self) -> TopupPhase {
        self.phase
    }

    pub fn modal(&self) -> Option<&ModalIntent> {
        self.modal.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == TopupPhase::Submitting
    }

    /// 用户手动输入
    pub fn set_input(&mut self, raw: &str) {
        let (digits, amount) = parse_amount(raw);
        self.input = digits;
        self.amount = amount;
        self.valid = is_valid_amount(amount);
    }

    /// 快捷金额按钮
    pub fn select_preset(&mut self, amount: u64) {
        self.input = amount.to_string();
        self.amount = amount;
        self.valid = true;
    }

    /// 打开确认弹窗，金额无效或已有弹窗时忽略
    pub fn request_confirm(&mut self) -> bool {
        if !self.valid || self.phase != TopupPhase::Editing {
            return false;
        }
        self.phase = TopupPhase::Confirming;
        self.modal = Some(ModalIntent::topup(ModalKind::Confirm, self.amount));
        true
    }

    /// 确认弹窗中点击确认，返回要充值的金额
    pub fn begin_submit(&mut self) -> Option<u64> {
        if self.phase != TopupPhase::Confirming {
            return None;
        }
        self.phase = TopupPhase::Submitting;
        Some(self.amount)
    }

    pub fn finish(&mut self, result: ApiResult<Balance>) -> Vec<Effect> {
        if self.phase != TopupPhase::Submitting {
            log::warn!("ignoring top up result outside of submission");
            return Vec::new();
        }
        match result {
            Ok(balance) => {
                log::debug!("top up succeeded, new balance {}", balance.balance);
                self.phase = TopupPhase::Succeeded;
                self.modal = Some(ModalIntent::topup(ModalKind::Success, self.amount));
                vec![Effect::FetchBalance]
            }
            Err(e) => {
                log::error!("top up failed: {}", e);
                self.phase = TopupPhase::Failed;
                let mut modal = ModalIntent::topup(ModalKind::Failed, self.amount);
                if let Some(message) = e.server_message() {
                    modal = modal.with_message(message);
                }
                self.modal = Some(modal);
                Vec::new()
            }
        }
    }

    /// 关闭当前弹窗（取消确认 / 关闭结果）
    pub fn close_modal(&mut self) -> Vec<Effect> {
        match self.phase {
            TopupPhase::Confirming | TopupPhase::Failed => {
                self.phase = TopupPhase::Editing;
                self.modal = None;
                Vec::new()
            }
            TopupPhase::Succeeded => {
                *self = Self::default();
                vec![Effect::Navigate(AppRoute::Home)]
            }
            // 请求在途时不能关闭
            TopupPhase::Editing | TopupPhase::Submitting => Vec::new(),
        }
    }
}
