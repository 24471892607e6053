// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::upstream::traits::UpstreamError;

/// 代理错误类型
///
/// 校验错误、上游错误和传输错误三类，均以 `{error}` 信封返回
#[derive(Error, Debug)]
pub enum ProxyError {
    /// 请求字段缺失或格式错误
    #[error("{0}")]
    Validation(String),
    /// 上游返回非成功状态或无法解析的响应
    #[error("{message}")]
    Upstream { status: u16, message: String },
    /// 网络层失败
    #[error("{0}")]
    Transport(String),
}

impl ProxyError {
    /// 错误对应的默认HTTP状态码
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Validation(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ProxyError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UpstreamError> for ProxyError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Network(e) => ProxyError::Transport(e.to_string()),
            UpstreamError::InvalidBaseUrl(e) => ProxyError::Transport(e.to_string()),
            UpstreamError::Api { status, message } => ProxyError::Upstream { status, message },
            UpstreamError::InvalidJson(e) => ProxyError::Upstream {
                status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                message: e.to_string(),
            },
        }
    }
}

/// 接口错误响应
///
/// 状态码与消息分离，便于不同端点按各自约定选择状态码
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<ProxyError> for ApiError {
    fn from(err: ProxyError) -> Self {
        Self::new(err.status(), err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}
