// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 相似搜索请求数据传输对象
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct FindSimilarRequestDto {
    /// 公司网站URL
    #[validate(required(message = "URL is required"), length(min = 1, message = "URL is required"))]
    pub url: Option<String>,
}
