// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义代理接口的请求体结构及其校验规则
pub mod contents_request;
pub mod find_similar_request;
