// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::{content_handler, similarity_handler};
use crate::presentation::middleware::cors::cors_layer;
use crate::upstream::traits::PassthroughApi;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 相似搜索代理路径
pub const FIND_SIMILAR_PATH: &str = "/v1/find_similar";
/// 内容获取代理路径
pub const GET_CONTENTS_PATH: &str = "/v1/get_contents";

/// 创建应用路由
///
/// # 返回值
///
/// 返回未注入依赖的路由，调用方需要提供 `Extension<Arc<dyn PassthroughApi>>`
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let proxy_routes = Router::new()
        .route(FIND_SIMILAR_PATH, post(similarity_handler::find_similar))
        .route(GET_CONTENTS_PATH, post(content_handler::get_contents))
        .layer(cors_layer());

    Router::new().merge(public_routes).merge(proxy_routes)
}

/// 创建完整应用
///
/// 注入上游网关并添加请求追踪
pub fn app(api: Arc<dyn PassthroughApi>) -> Router {
    routes()
        .layer(Extension(api))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
