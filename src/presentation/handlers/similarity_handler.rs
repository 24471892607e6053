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

use crate::application::dto::find_similar_request::FindSimilarRequestDto;
use crate::presentation::errors::{ApiError, ProxyError};
use crate::presentation::handlers::json_passthrough;
use crate::upstream::traits::PassthroughApi;

/// 缺少 url 时的错误消息
pub const URL_REQUIRED: &str = "URL is required";

/// 相似搜索代理
///
/// 校验请求体中的 `url`，调用上游 findSimilar 并原样返回其 JSON。
/// 任何失败都以 400 和 `{error}` 信封返回。
pub async fn find_similar(
    Extension(api): Extension<Arc<dyn PassthroughApi>>,
    body: Bytes,
) -> Response {
    match proxy_find_similar(api.as_ref(), &body).await {
        Ok(json) => json_passthrough(StatusCode::OK, json),
        Err(e) => {
            match &e {
                ProxyError::Validation(_) => warn!("find_similar rejected: {}", e),
                _ => error!("find_similar proxy failed: {}", e),
            }
            ApiError::new(StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

async fn proxy_find_similar(api: &dyn PassthroughApi, body: &[u8]) -> Result<Bytes, ProxyError> {
    let request: FindSimilarRequestDto =
        serde_json::from_slice(body).map_err(|e| ProxyError::Validation(e.to_string()))?;
    request
        .validate()
        .map_err(|_| ProxyError::Validation(URL_REQUIRED.to_string()))?;
    let url = request
        .url
        .ok_or_else(|| ProxyError::Validation(URL_REQUIRED.to_string()))?;

    info!(url = %url, upstream = api.name(), "Finding similar companies");

    // The upstream status is not inspected here; its JSON body is relayed as-is
    let response = api.find_similar(&url).await?;
    Ok(response.into_json_body()?)
}
