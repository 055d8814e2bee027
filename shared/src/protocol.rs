use crate::request::HttpMethod;
use crate::{Balance, Banner, LoginToken, Profile, PurchaseReceipt, ServiceItem, TransactionPage};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// 后端统一的响应信封 `{ status, message, data }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

/// 错误响应只关心 `message`，`data` 通常为 null
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: Option<String>,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The `data` payload returned by this request.
    type Response: DeserializeOwned;
    /// The URL path.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the bearer token must be attached.
    const AUTHENTICATED: bool = true;

    /// Query string pairs (GET only).
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

// =========================================================
// Request Definitions
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = LoginToken;
    const PATH: &'static str = "/login";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl ApiRequest for RegistrationRequest {
    type Response = ();
    const PATH: &'static str = "/registration";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;
}

#[derive(Debug, Serialize)]
pub struct GetProfileRequest;

impl ApiRequest for GetProfileRequest {
    type Response = Profile;
    const PATH: &'static str = "/profile";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: String,
}

impl ApiRequest for UpdateProfileRequest {
    type Response = Profile;
    const PATH: &'static str = "/profile/update";
    const METHOD: HttpMethod = HttpMethod::Put;
}

/// 头像上传走 multipart，不经过 JSON 序列化，只借用路径元数据
pub const PROFILE_IMAGE_PATH: &str = "/profile/image";
pub const PROFILE_IMAGE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct GetBalanceRequest;

impl ApiRequest for GetBalanceRequest {
    type Response = Balance;
    const PATH: &'static str = "/balance";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopUpRequest {
    pub top_up_amount: u64,
}

impl ApiRequest for TopUpRequest {
    type Response = Balance;
    const PATH: &'static str = "/topup";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub service_code: String,
}

impl ApiRequest for PurchaseRequest {
    type Response = PurchaseReceipt;
    const PATH: &'static str = "/transaction";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransactionHistoryRequest {
    pub offset: u32,
    pub limit: u32,
}

impl ApiRequest for TransactionHistoryRequest {
    type Response = TransactionPage;
    const PATH: &'static str = "/transaction/history";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct ListServicesRequest;

impl ApiRequest for ListServicesRequest {
    type Response = Vec<ServiceItem>;
    const PATH: &'static str = "/services";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Serialize)]
pub struct ListBannersRequest;

impl ApiRequest for ListBannersRequest {
    type Response = Vec<Banner>;
    const PATH: &'static str = "/banner";
    const METHOD: HttpMethod = HttpMethod::Get;
}
