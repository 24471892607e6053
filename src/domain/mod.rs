// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：相似公司与页面内容实体
/// - 服务（services）：上游响应到领域模型的映射规则
///
/// 领域层不依赖于任何外部实现。
pub mod models;
pub mod services;
