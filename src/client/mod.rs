// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 客户端模块
///
/// 浏览器界面的请求编排逻辑，包括：
/// - 代理客户端（api）：调用两个代理端点
/// - 搜索表单（search_form）：输入、提交与结果状态
/// - 结果列表（result_list）：渲染规则与卡片维护
/// - 结果卡片（result_card）：展开、按需获取内容与模态框
///
/// 每个控制器独立持有自身状态，异步结果通过代次凭据判断是否过期。
pub mod api;
pub mod result_card;
pub mod result_list;
pub mod search_form;


/// 异步结果的应用情况
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// 结果已应用到控制器状态
    Applied,
    /// 凭据已过期，结果被丢弃
    Stale,
}
