//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 实现共享层的 [`HttpClient`]，支持 JSON 与 multipart 两种请求体。

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use ppob_shared::error::HttpError;
use ppob_shared::request::{FilePart, HttpBody, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use web_sys::{Blob, BlobPropertyBag, FormData};

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlooHttpClient;

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
    }
}

/// 字节 -> Blob -> FormData
///
/// 不设置 Content-Type，由浏览器补上 boundary。
fn form_data(part: &FilePart) -> Result<FormData, HttpError> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(part.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(&part.mime);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| HttpError::RequestBuildFailed(format!("创建 Blob 失败: {:?}", e)))?;
    let form = FormData::new()
        .map_err(|e| HttpError::RequestBuildFailed(format!("创建 FormData 失败: {:?}", e)))?;
    form.append_with_blob_and_filename(&part.field, &blob, &part.file_name)
        .map_err(|e| HttpError::RequestBuildFailed(format!("写入文件失败: {:?}", e)))?;
    Ok(form)
}

#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut request = builder(req.method, &req.url);
        for (key, value) in &req.headers {
            request = request.header(key, value);
        }

        let request = match &req.body {
            None => request.build(),
            Some(HttpBody::Json(body)) => request.body(body.clone()),
            Some(HttpBody::Multipart(part)) => request.body(form_data(part)?),
        }
        .map_err(|e| HttpError::RequestBuildFailed(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::ResponseReadFailed(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
