// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::{Body, Bytes},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// HTTP请求处理器模块
///
/// 两个代理端点：相似搜索与内容获取
pub mod content_handler;
pub mod similarity_handler;

/// 以原始字节返回 JSON 响应体
pub(crate) fn json_passthrough(status: StatusCode, body: Bytes) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Body::from(body),
    )
        .into_response()
}
