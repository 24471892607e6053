// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 内容获取请求数据传输对象
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ContentsRequestDto {
    /// 需要获取内容的URL列表，至少一个
    #[validate(required, length(min = 1))]
    pub urls: Option<Vec<String>>,
}
