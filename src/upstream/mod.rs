// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 上游网关模块
///
/// 封装对第三方相似搜索/内容获取透传网关的调用
pub mod passthrough_client;
pub mod traits;
