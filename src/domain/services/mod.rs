// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 纯函数形式的业务规则，不依赖网络或存储
pub mod result_mapper;
