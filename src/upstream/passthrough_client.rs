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

use crate::config::settings::UpstreamSettings;
use crate::upstream::traits::{PassthroughApi, UpstreamError, UpstreamResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// 共享密钥请求头
pub const SECRET_HEADER: &str = "x-pica-secret";
/// 连接密钥请求头
pub const CONNECTION_KEY_HEADER: &str = "x-pica-connection-key";
/// 操作标识请求头
pub const ACTION_ID_HEADER: &str = "x-pica-action-id";

/// 透传网关客户端
///
/// 基于reqwest实现，每次调用只发起一次请求，不做重试
pub struct PassthroughClient {
    client: reqwest::Client,
    base_url: String,
    secret_key: String,
    connection_key: String,
    find_similar_action_id: String,
    contents_action_id: String,
}

#[derive(Serialize)]
struct FindSimilarBody<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct ContentsBody<'a> {
    urls: &'a [String],
}

impl PassthroughClient {
    /// 根据配置创建客户端
    ///
    /// # 参数
    ///
    /// * `settings` - 上游网关配置
    ///
    /// # 返回值
    ///
    /// * `Ok(PassthroughClient)` - 客户端实例
    /// * `Err(UpstreamError)` - 网关地址无效或HTTP客户端构建失败
    pub fn new(settings: &UpstreamSettings) -> Result<Self, UpstreamError> {
        Url::parse(&settings.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            secret_key: settings.secret_key.clone(),
            connection_key: settings.connection_key.clone(),
            find_similar_action_id: settings.find_similar_action_id.clone(),
            contents_action_id: settings.contents_action_id.clone(),
        })
    }

    fn headers(&self, action_id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        // Credentials that are not valid header values are sent as empty strings
        for (name, value) in [
            (SECRET_HEADER, self.secret_key.as_str()),
            (CONNECTION_KEY_HEADER, self.connection_key.as_str()),
            (ACTION_ID_HEADER, action_id),
        ] {
            let value = HeaderValue::from_str(value).unwrap_or(HeaderValue::from_static(""));
            headers.insert(name, value);
        }
        headers
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        operation: &str,
        action_id: &str,
        body: &B,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let endpoint = format!("{}/{}", self.base_url, operation);
        let start = Instant::now();

        let response = self
            .client
            .post(&endpoint)
            .headers(self.headers(action_id))
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!(
            operation,
            status,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Upstream call finished"
        );

        Ok(UpstreamResponse { status, body })
    }
}

#[async_trait]
impl PassthroughApi for PassthroughClient {
    async fn find_similar(&self, url: &str) -> Result<UpstreamResponse, UpstreamError> {
        self.post(
            "findSimilar",
            &self.find_similar_action_id,
            &FindSimilarBody { url },
        )
        .await
    }

    async fn get_contents(&self, urls: &[String]) -> Result<UpstreamResponse, UpstreamError> {
        self.post("contents", &self.contents_action_id, &ContentsBody { urls })
            .await
    }

    fn name(&self) -> &'static str {
        "passthrough"
    }
}

#[cfg(test)]
#[path = "passthrough_client_test.rs"]
mod tests;
