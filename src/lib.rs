// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 代理接口的请求数据传输对象
pub mod application;

/// 客户端模块
///
/// 搜索表单、结果列表和结果卡片的状态机，以及代理客户端
pub mod client;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体和结果映射规则
pub mod domain;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和中间件
pub mod presentation;

/// 上游模块
///
/// 第三方相似搜索/内容获取网关的客户端
pub mod upstream;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
