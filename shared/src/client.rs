//! API 客户端
//!
//! 对后端 REST 接口的类型化封装。具体的 HTTP 实现通过 [`HttpClient`] 注入，
//! 浏览器中使用 gloo-net，测试中使用 `MockHttpClient`。

use crate::error::{ApiError, ApiResult};
use crate::protocol::*;
use crate::request::{FilePart, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::{
    Balance, Banner, HEADER_AUTHORIZATION, LoginToken, Profile, PurchaseReceipt, ServiceItem,
    TransactionPage,
};

/// 待上传的头像文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// 根据扩展名推断 MIME 类型
    pub fn mime(&self) -> &'static str {
        let lower = self.file_name.to_ascii_lowercase();
        if lower.ends_with(".png") {
            "image/png"
        } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
            "image/jpeg"
        } else {
            "application/octet-stream"
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PpobApi<C> {
    base_url: String,
    token: Option<String>,
    client: C,
}

impl<C: HttpClient> PpobApi<C> {
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: None,
            client,
        }
    }

    /// 附带会话 token 的客户端
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn authorize(&self, req: HttpRequest) -> HttpRequest {
        match &self.token {
            Some(token) => req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token)),
            None => req,
        }
    }

    fn build<R: ApiRequest>(&self, request: &R) -> ApiResult<HttpRequest> {
        let mut url = self.url(R::PATH);
        let query = request.query();
        if !query.is_empty() {
            let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            url = format!("{}?{}", url, pairs.join("&"));
        }

        let mut req = HttpRequest::new(&url, R::METHOD).with_header("Accept", "application/json");
        if R::METHOD != HttpMethod::Get {
            let body =
                serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
            req = req.with_json(body);
        }
        if R::AUTHENTICATED {
            req = self.authorize(req);
        }
        Ok(req)
    }

    /// 发送请求并拆开响应信封
    pub async fn call<R: ApiRequest>(&self, request: &R) -> ApiResult<R::Response> {
        let req = self.build(request)?;
        log::debug!("{} {}", R::METHOD.as_str(), req.url);
        let resp = self.client.send(req).await?;
        Self::unwrap_envelope::<R::Response>(resp)
    }

    fn unwrap_envelope<T: serde::de::DeserializeOwned>(resp: HttpResponse) -> ApiResult<T> {
        if !resp.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&resp.body)
                .ok()
                .and_then(|e| e.message);
            return Err(ApiError::Server {
                status: resp.status,
                message,
            });
        }
        let envelope: ApiEnvelope<T> = resp.json()?;
        Ok(envelope.data)
    }

    // =========================================================
    // 接口方法
    // =========================================================

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginToken> {
        self.call(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
    }

    pub async fn register(&self, request: &RegistrationRequest) -> ApiResult<()> {
        self.call(request).await
    }

    pub async fn profile(&self) -> ApiResult<Profile> {
        self.call(&GetProfileRequest).await
    }

    pub async fn update_profile(&self, first_name: &str, last_name: &str) -> ApiResult<Profile> {
        self.call(&UpdateProfileRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
        .await
    }

    pub async fn update_profile_image(&self, upload: ImageUpload) -> ApiResult<Profile> {
        let mime = upload.mime().to_string();
        let req = HttpRequest::new(&self.url(PROFILE_IMAGE_PATH), HttpMethod::Put)
            .with_header("Accept", "application/json")
            .with_file(FilePart {
                field: PROFILE_IMAGE_FIELD.to_string(),
                file_name: upload.file_name,
                mime,
                bytes: upload.bytes,
            });
        let req = self.authorize(req);
        log::debug!("PUT {}", req.url);
        let resp = self.client.send(req).await?;
        Self::unwrap_envelope(resp)
    }

    pub async fn balance(&self) -> ApiResult<Balance> {
        self.call(&GetBalanceRequest).await
    }

    pub async fn top_up(&self, amount: u64) -> ApiResult<Balance> {
        self.call(&TopUpRequest {
            top_up_amount: amount,
        })
        .await
    }

    pub async fn purchase(&self, service_code: &str) -> ApiResult<PurchaseReceipt> {
        self.call(&PurchaseRequest {
            service_code: service_code.to_string(),
        })
        .await
    }

    pub async fn transaction_history(&self, offset: u32, limit: u32) -> ApiResult<TransactionPage> {
        self.call(&TransactionHistoryRequest { offset, limit }).await
    }

    pub async fn services(&self) -> ApiResult<Vec<ServiceItem>> {
        self.call(&ListServicesRequest).await
    }

    pub async fn banners(&self) -> ApiResult<Vec<Banner>> {
        self.call(&ListBannersRequest).await
    }
}
