// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 页面内容结果
///
/// contents 接口返回的单页详细内容，`subpages` 为同结构的递归子页面
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContentResult {
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subpages: Option<Vec<ContentResult>>,
}

/// 详情展示主体
#[derive(Debug, Clone, PartialEq)]
pub enum DetailBody<'a> {
    /// 正文段落
    Text(Vec<&'a str>),
    /// 仅有摘要
    Summary(&'a str),
    /// 无可展示内容
    Unavailable,
}

impl<'a> DetailBody<'a> {
    pub const UNAVAILABLE_MESSAGE: &'static str = "No detailed content available.";

    /// 详情区域逐行显示的文本
    pub fn lines(&self) -> Vec<&'a str> {
        match self {
            DetailBody::Text(paragraphs) => paragraphs.clone(),
            DetailBody::Summary(summary) => vec![*summary],
            DetailBody::Unavailable => vec![Self::UNAVAILABLE_MESSAGE],
        }
    }
}

impl ContentResult {
    /// 作者与发布日期行
    ///
    /// 仅当作者和发布日期都存在时返回
    pub fn byline(&self) -> Option<String> {
        match (self.author.as_deref(), self.published_date.as_deref()) {
            (Some(author), Some(date)) if !author.is_empty() && !date.is_empty() => {
                Some(format!("By {} • {}", author, date))
            }
            _ => None,
        }
    }

    /// 按换行拆分正文，跳过空行
    pub fn paragraphs(&self) -> Vec<&str> {
        self.text
            .as_deref()
            .map(|text| {
                text.split('\n')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 选择详情展示内容：正文优先，其次摘要
    pub fn detail_body(&self) -> DetailBody<'_> {
        if self.text.as_deref().is_some_and(|t| !t.is_empty()) {
            return DetailBody::Text(self.paragraphs());
        }
        match self.summary.as_deref() {
            Some(summary) if !summary.is_empty() => DetailBody::Summary(summary),
            _ => DetailBody::Unavailable,
        }
    }
}
