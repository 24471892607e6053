// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    body::Bytes,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::Validate;

use crate::application::dto::contents_request::ContentsRequestDto;
use crate::presentation::errors::{ApiError, ProxyError};
use crate::presentation::handlers::json_passthrough;
use crate::upstream::traits::PassthroughApi;

/// urls 校验失败时的错误消息
pub const INVALID_URLS: &str = "Invalid or missing 'urls' array";

/// 内容获取代理
///
/// # 参数
///
/// * `api` - 透传网关
/// * `body` - 原始请求体，期望 `{"urls": [...]}`
///
/// # 返回值
///
/// * 200 - 上游 JSON 原样返回
/// * 400 - `urls` 缺失、类型错误或为空
/// * 上游状态码 - 上游返回非成功状态，消息为上游响应体文本
/// * 500 - 网络层失败或上游响应不是 JSON
pub async fn get_contents(
    Extension(api): Extension<Arc<dyn PassthroughApi>>,
    body: Bytes,
) -> Response {
    match proxy_get_contents(api.as_ref(), &body).await {
        Ok(json) => json_passthrough(StatusCode::OK, json),
        Err(e) => {
            match &e {
                ProxyError::Validation(_) => warn!("get_contents rejected: {}", e),
                _ => error!("get_contents proxy failed: {}", e),
            }
            ApiError::from(e).into_response()
        }
    }
}

async fn proxy_get_contents(api: &dyn PassthroughApi, body: &[u8]) -> Result<Bytes, ProxyError> {
    let invalid = || ProxyError::Validation(INVALID_URLS.to_string());

    let request: ContentsRequestDto = serde_json::from_slice(body).map_err(|_| invalid())?;
    request.validate().map_err(|_| invalid())?;
    let urls = request.urls.ok_or_else(invalid)?;

    info!(count = urls.len(), upstream = api.name(), "Fetching page contents");

    let response = api.get_contents(&urls).await?.error_for_status()?;
    Ok(response.into_json_body()?)
}
