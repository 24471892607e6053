// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 相似公司结果（competitor）：相似搜索映射后的卡片数据
/// - 页面内容（content）：按需获取的详细页面内容
///
/// 所有实体只存在于内存中，不做持久化。
pub mod competitor;
pub mod content;
