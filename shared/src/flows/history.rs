//! 交易记录分页
//!
//! 固定页大小的 offset 分页。第一次返回不足一页时 `has_more` 变为假；
//! offset 0 的结果替换列表，其余追加。同一时刻只允许一个请求在途。

use serde::{Deserialize, Serialize};

use crate::client::PpobApi;
use crate::error::ApiResult;
use crate::request::HttpClient;
use crate::{HISTORY_PAGE_SIZE, TransactionPage, TransactionRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryFlow {
    records: Vec<TransactionRecord>,
    page_size: u32,
    next_offset: u32,
    has_more: bool,
    /// 在途请求的 offset
    pending: Option<u32>,
}

impl Default for HistoryFlow {
    fn default() -> Self {
        Self::with_page_size(HISTORY_PAGE_SIZE)
    }
}

impl HistoryFlow {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            records: Vec::new(),
            page_size,
            next_offset: 0,
            has_more: true,
            pending: None,
        }
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// 重新加载第一页
    pub fn reload(&mut self) -> Option<u32> {
        if self.is_loading() {
            return None;
        }
        self.pending = Some(0);
        Some(0)
    }

    /// 「Show more」，返回要请求的 offset
    pub fn show_more(&mut self) -> Option<u32> {
        if self.is_loading() || !self.has_more {
            return None;
        }
        self.pending = Some(self.next_offset);
        Some(self.next_offset)
    }

    pub fn finish(&mut self, offset: u32, result: ApiResult<TransactionPage>) {
        if self.pending != Some(offset) {
            log::warn!("dropping stale history page at offset {}", offset);
            return;
        }
        self.pending = None;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                log::error!("failed to load transaction history: {}", e);
                return;
            }
        };

        let received = page.records.len() as u32;
        if offset == 0 {
            self.records = page.records;
        } else {
            self.records.extend(page.records);
        }
        self.next_offset = offset + received;
        self.has_more = received >= self.page_size;
    }
}

/// 请求指定 offset 的一页
pub async fn load_page<C: HttpClient>(
    api: &PpobApi<C>,
    page_size: u32,
    offset: u32,
) -> ApiResult<TransactionPage> {
    api.transaction_history(offset, page_size).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransactionType;
    use crate::error::{ApiError, HttpError};
    use crate::request::{HttpMethod, MockHttpClient};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn record(n: u32) -> TransactionRecord {
        TransactionRecord {
            invoice_number: format!("INV{:03}", n),
            transaction_type: if n % 2 == 0 {
                TransactionType::Topup
            } else {
                TransactionType::Payment
            },
            description: "Top Up balance".to_string(),
            total_amount: 10_000,
            created_on: Utc.with_ymd_and_hms(2023, 8, 17, 10, 10, 0).unwrap(),
        }
    }

    fn page(range: std::ops::Range<u32>) -> ApiResult<TransactionPage> {
        Ok(TransactionPage {
            offset: range.start,
            limit: 5,
            records: range.map(record).collect(),
        })
    }

    fn invoices(flow: &HistoryFlow) -> Vec<String> {
        flow.records()
            .iter()
            .map(|r| r.invoice_number.clone())
            .collect()
    }

    #[test]
    fn test_has_more_turns_false_on_first_short_page() {
        let mut flow = HistoryFlow::default();

        let offset = flow.reload().unwrap();
        flow.finish(offset, page(0..5));
        assert!(flow.has_more());

        let offset = flow.show_more().unwrap();
        assert_eq!(offset, 5);
        flow.finish(offset, page(5..10));
        assert!(flow.has_more());

        let offset = flow.show_more().unwrap();
        flow.finish(offset, page(10..12));
        assert!(!flow.has_more());
        assert_eq!(flow.show_more(), None);

        let expected: Vec<String> = (0..12).map(|n| format!("INV{:03}", n)).collect();
        assert_eq!(invoices(&flow), expected);
    }

    #[test]
    fn test_show_more_is_guarded_while_loading() {
        let mut flow = HistoryFlow::default();
        flow.reload();
        assert_eq!(flow.show_more(), None);
        assert_eq!(flow.reload(), None);
        assert!(flow.is_loading());
    }

    #[test]
    fn test_reload_replaces_list() {
        let mut flow = HistoryFlow::default();
        flow.reload();
        flow.finish(0, page(0..5));
        let offset = flow.show_more().unwrap();
        flow.finish(offset, page(5..10));
        assert_eq!(flow.records().len(), 10);

        flow.reload();
        flow.finish(0, page(0..5));
        assert_eq!(flow.records().len(), 5);
        assert_eq!(flow.show_more(), Some(5));
    }

    #[test]
    fn test_failed_page_keeps_offset_for_retry() {
        let mut flow = HistoryFlow::default();
        flow.reload();
        flow.finish(0, page(0..5));

        let offset = flow.show_more().unwrap();
        flow.finish(
            offset,
            Err(ApiError::Transport(HttpError::NetworkError("offline".to_string()))),
        );
        assert!(!flow.is_loading());
        assert_eq!(flow.records().len(), 5);
        assert_eq!(flow.show_more(), Some(5));
    }

    #[test]
    fn test_empty_history() {
        let mut flow = HistoryFlow::default();
        flow.reload();
        flow.finish(0, page(0..0));
        assert!(flow.records().is_empty());
        assert!(!flow.has_more());
    }

    #[tokio::test]
    async fn test_load_page_sends_offset_and_limit() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Get,
            "https://api.test/transaction/history?offset=5&limit=5",
            200,
            json!({"status": 0, "message": "Get History Berhasil", "data": {
                "offset": 5,
                "limit": 5,
                "records": [{
                    "invoice_number": "INV17082023-001",
                    "transaction_type": "PAYMENT",
                    "description": "PLN Prabayar",
                    "total_amount": 10000,
                    "created_on": "2023-08-17T10:10:10.000Z"
                }]
            }}),
        );
        let api = PpobApi::new("https://api.test", client).with_token(Some("t".to_string()));

        let mut flow = HistoryFlow::default();
        flow.reload();
        flow.finish(0, page(0..5));
        let offset = flow.show_more().unwrap();
        let result = load_page(&api, flow.page_size(), offset).await;
        flow.finish(offset, result);

        assert_eq!(flow.records().len(), 6);
        assert_eq!(flow.records()[5].transaction_type, TransactionType::Payment);
        assert!(!flow.has_more());
    }
}
