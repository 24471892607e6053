// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use competitor_finder::config::settings::UpstreamSettings;
use competitor_finder::presentation::routes;
use competitor_finder::upstream::passthrough_client::PassthroughClient;
use competitor_finder::upstream::traits::PassthroughApi;
use std::sync::Arc;
use tokio::net::TcpListener;
use wiremock::MockServer;

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_CONNECTION_KEY: &str = "test-connection-key";
pub const FIND_SIMILAR_ACTION: &str = "test-find-similar-action";
pub const CONTENTS_ACTION: &str = "test-contents-action";

/// 指向 wiremock 上游的网关配置
pub fn upstream_settings(upstream: &MockServer) -> UpstreamSettings {
    UpstreamSettings {
        base_url: upstream.uri(),
        secret_key: TEST_SECRET.to_string(),
        connection_key: TEST_CONNECTION_KEY.to_string(),
        find_similar_action_id: FIND_SIMILAR_ACTION.to_string(),
        contents_action_id: CONTENTS_ACTION.to_string(),
        timeout_secs: Some(5),
    }
}

fn passthrough(settings: &UpstreamSettings) -> Arc<dyn PassthroughApi> {
    Arc::new(PassthroughClient::new(settings).unwrap())
}

/// 创建连接到 wiremock 上游的测试服务
pub fn create_test_server(upstream: &MockServer) -> TestServer {
    create_test_server_with(&upstream_settings(upstream))
}

pub fn create_test_server_with(settings: &UpstreamSettings) -> TestServer {
    TestServer::new(routes::app(passthrough(settings))).unwrap()
}

/// 在随机端口上启动真实代理服务，返回其地址
pub async fn spawn_proxy(upstream: &MockServer) -> String {
    let app = routes::app(passthrough(&upstream_settings(upstream)));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
