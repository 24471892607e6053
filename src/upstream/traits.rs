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

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// 上游调用错误类型
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// 网络层失败（连接、超时、读取响应体）
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// 上游返回非成功状态码
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
    /// 网关地址配置错误
    #[error("Invalid upstream base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    /// 上游响应体不是合法 JSON
    #[error("Invalid JSON from upstream: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// 上游原始响应
///
/// 保留状态码和原始字节，便于代理逐字节透传
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    /// HTTP状态码
    pub status: u16,
    /// 原始响应体
    pub body: Bytes,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 确认响应体为合法 JSON 并原样返回
    pub fn into_json_body(self) -> Result<Bytes, UpstreamError> {
        serde_json::from_slice::<serde::de::IgnoredAny>(&self.body)?;
        Ok(self.body)
    }

    /// 非成功状态码时转换为 `UpstreamError::Api`，消息为上游响应体文本
    pub fn error_for_status(self) -> Result<Self, UpstreamError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(UpstreamError::Api {
            status: self.status,
            message: self.text(),
        })
    }

    /// 以文本形式读取响应体
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// 透传网关特质
///
/// 代理处理器只依赖该特质，便于替换实现
#[async_trait]
pub trait PassthroughApi: Send + Sync {
    /// 调用 findSimilar 操作
    async fn find_similar(&self, url: &str) -> Result<UpstreamResponse, UpstreamError>;

    /// 调用 contents 操作
    async fn get_contents(&self, urls: &[String]) -> Result<UpstreamResponse, UpstreamError>;

    /// 实现名称
    fn name(&self) -> &'static str;
}
