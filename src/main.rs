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

use competitor_finder::config::settings::Settings;
use competitor_finder::presentation::routes;
use competitor_finder::upstream::passthrough_client::PassthroughClient;
use competitor_finder::upstream::traits::PassthroughApi;
use competitor_finder::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责加载配置并启动代理服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting competitor-finder...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    if settings.upstream.secret_key.is_empty() || settings.upstream.connection_key.is_empty() {
        warn!("Upstream credentials are not configured; proxied calls will likely be rejected");
    }

    // 3. Initialize upstream client
    let api: Arc<dyn PassthroughApi> = Arc::new(PassthroughClient::new(&settings.upstream)?);
    info!(base_url = %settings.upstream.base_url, "Upstream client initialized");

    // 4. Start HTTP server
    let app = routes::app(api);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
