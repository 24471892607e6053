// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::competitor::CompetitorResult;

/// 缺省公司名称
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// 结果映射错误
#[derive(Error, Debug)]
pub enum MapperError {
    /// 响应中没有 `results` 字段
    #[error("No results returned from the API")]
    MissingResults,
    /// `results` 存在但结构不符合预期
    #[error("Unexpected response from the API: {0}")]
    Decode(#[from] serde_json::Error),
}

/// 上游相似搜索的单条原始结果
#[derive(Debug, Deserialize)]
struct RawSimilarResult {
    id: Option<String>,
    title: Option<String>,
    url: String,
    summary: Option<String>,
    text: Option<String>,
    favicon: Option<String>,
}

/// 将相似搜索响应映射为卡片结果列表
///
/// # 参数
///
/// * `payload` - 相似搜索接口返回的完整 JSON
///
/// # 返回值
///
/// * `Ok(Vec<CompetitorResult>)` - 按上游顺序映射的结果，`results` 为空数组时返回空列表
/// * `Err(MapperError)` - 缺少 `results` 或结构无法解析
pub fn map_similarity_payload(payload: &Value) -> Result<Vec<CompetitorResult>, MapperError> {
    let results = match payload.get("results") {
        None | Some(Value::Null) => return Err(MapperError::MissingResults),
        Some(results) => results,
    };

    let raw: Vec<RawSimilarResult> = Vec::deserialize(results)?;
    let mut seen = HashSet::with_capacity(raw.len());

    Ok(raw
        .into_iter()
        .map(|item| {
            // Upstream ids are not trusted to be present or unique
            let id = match item.id.filter(|id| !id.is_empty()) {
                Some(id) if !seen.contains(&id) => id,
                _ => Uuid::new_v4().to_string(),
            };
            seen.insert(id.clone());

            CompetitorResult {
                id,
                title: item
                    .title
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
                url: item.url,
                summary: item.summary,
                text: item.text,
                favicon: item.favicon,
            }
        })
        .collect())
}
