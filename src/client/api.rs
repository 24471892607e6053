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
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::presentation::routes::{FIND_SIMILAR_PATH, GET_CONTENTS_PATH};

/// 客户端调用错误
#[derive(Error, Debug)]
pub enum ClientError {
    /// 代理返回非成功状态码，消息取自 `{error}` 信封
    #[error("{message}")]
    Function { status: u16, message: String },
    /// 网络层失败
    #[error("Network error: {0}")]
    Transport(String),
    /// 响应体不是合法 JSON
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

/// 代理接口特质
///
/// 控制器通过该特质调用两个代理端点，测试中可替换为桩实现
#[async_trait]
pub trait CompetitorApi: Send + Sync {
    /// 调用相似搜索代理
    async fn find_similar(&self, url: &str) -> Result<Value, ClientError>;

    /// 调用内容获取代理
    async fn get_contents(&self, urls: &[String]) -> Result<Value, ClientError>;
}

/// 基于reqwest的代理客户端
pub struct HttpProxyClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProxyClient {
    /// 创建客户端
    ///
    /// # 参数
    ///
    /// * `base_url` - 代理服务地址，例如 `http://localhost:3000`
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn invoke(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        let endpoint = format!("{}{}", self.base_url, path);
        let response = self.client.post(&endpoint).json(&body).send().await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(path, status = status.as_u16(), "Proxy responded");

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| String::from_utf8_lossy(&bytes).into_owned());
            return Err(ClientError::Function {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl CompetitorApi for HttpProxyClient {
    async fn find_similar(&self, url: &str) -> Result<Value, ClientError> {
        self.invoke(FIND_SIMILAR_PATH, json!({ "url": url })).await
    }

    async fn get_contents(&self, urls: &[String]) -> Result<Value, ClientError> {
        self.invoke(GET_CONTENTS_PATH, json!({ "urls": urls })).await
    }
}
