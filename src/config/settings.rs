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

use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;

/// 上游 findSimilar 操作的默认 action id
pub const DEFAULT_FIND_SIMILAR_ACTION_ID: &str = "conn_mod_def::GCMYlnYFSss::5aCHrI54Tk2x4WKKQKmysg";

/// 上游 contents 操作的默认 action id
pub const DEFAULT_CONTENTS_ACTION_ID: &str = "conn_mod_def::GCMYl3sMiIk::SC1A2LyQQIOebf7SfkwL8g";

/// 应用程序配置设置
///
/// 包含服务器监听地址以及上游透传网关的凭据配置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 上游透传网关配置
    pub upstream: UpstreamSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 上游透传网关配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    /// 网关基础URL（不含操作路径）
    pub base_url: String,
    /// 共享密钥，通过 `x-pica-secret` 头发送
    pub secret_key: String,
    /// 集成连接密钥，通过 `x-pica-connection-key` 头发送
    pub connection_key: String,
    /// findSimilar 操作的 action id
    pub find_similar_action_id: String,
    /// contents 操作的 action id
    pub contents_action_id: String,
    /// 请求超时时间（秒），未设置时使用传输层默认值
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、配置文件和环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("COMPETITOR_FINDER").separator("__"))
            // Legacy credential variable names
            .set_override_option("upstream.secret_key", std::env::var("PICA_SECRET_KEY").ok())?
            .set_override_option(
                "upstream.connection_key",
                std::env::var("PICA_EXA_CONNECTION_KEY").ok(),
            )?;

        builder.build()?.try_deserialize()
    }

    /// 仅使用内置默认值构建配置
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("upstream.base_url", "https://api.picaos.com/v1/passthrough")?
            .set_default("upstream.secret_key", "")?
            .set_default("upstream.connection_key", "")?
            .set_default("upstream.find_similar_action_id", DEFAULT_FIND_SIMILAR_ACTION_ID)?
            .set_default("upstream.contents_action_id", DEFAULT_CONTENTS_ACTION_ID)
    }
}
