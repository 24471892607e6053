// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::api::{ClientError, CompetitorApi};
use crate::client::Completion;
use crate::domain::models::competitor::CompetitorResult;
use crate::domain::models::content::ContentResult;

/// 内容结果为空时的提示
pub const NO_CONTENT_MESSAGE: &str = "No content found for this URL";
/// 内容结构无法解析时的提示
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load detailed content";

/// 卡片状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    Collapsed,
    Expanding,
    ExpandedLoaded,
    ExpandedError,
}

/// 详情展示方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPresentation {
    /// 加载成功后打开模态框
    #[default]
    Modal,
    /// 在卡片内展开
    Inline,
}

/// 一次展开的凭据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandTicket {
    generation: u64,
    urls: Vec<String>,
}

impl ExpandTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }
}

/// 结果卡片控制器
///
/// 每张卡片独立持有展开、加载、错误和模态框状态。
/// 展开时按需获取页面内容，收起后再次展开会重新获取。
#[derive(Debug, Clone)]
pub struct ResultCardController {
    competitor: CompetitorResult,
    presentation: DetailPresentation,
    expanded: bool,
    loading: bool,
    error: Option<String>,
    detail: Option<ContentResult>,
    modal_open: bool,
    generation: u64,
}

impl ResultCardController {
    pub fn new(competitor: CompetitorResult) -> Self {
        Self::with_presentation(competitor, DetailPresentation::default())
    }

    pub fn with_presentation(competitor: CompetitorResult, presentation: DetailPresentation) -> Self {
        Self {
            competitor,
            presentation,
            expanded: false,
            loading: false,
            error: None,
            detail: None,
            modal_open: false,
            generation: 0,
        }
    }

    pub fn competitor(&self) -> &CompetitorResult {
        &self.competitor
    }

    pub fn key(&self) -> &str {
        &self.competitor.id
    }

    pub fn presentation(&self) -> DetailPresentation {
        self.presentation
    }

    pub fn phase(&self) -> CardPhase {
        if !self.expanded {
            CardPhase::Collapsed
        } else if self.loading {
            CardPhase::Expanding
        } else if self.error.is_some() {
            CardPhase::ExpandedError
        } else {
            CardPhase::ExpandedLoaded
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn detail(&self) -> Option<&ContentResult> {
        self.detail.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// 内联展示的详情，仅在 `Inline` 方式且加载成功时返回
    pub fn inline_detail(&self) -> Option<&ContentResult> {
        match (self.presentation, self.phase()) {
            (DetailPresentation::Inline, CardPhase::ExpandedLoaded) => self.detail.as_ref(),
            _ => None,
        }
    }

    /// 模态框中展示的详情
    pub fn modal_detail(&self) -> Option<&ContentResult> {
        self.detail.as_ref().filter(|_| self.modal_open)
    }

    /// 切换展开状态
    ///
    /// # 返回值
    ///
    /// * `Some(ExpandTicket)` - 卡片已展开，需要调用内容代理
    /// * `None` - 卡片已收起，不发起请求
    pub fn toggle(&mut self) -> Option<ExpandTicket> {
        // Every transition bumps the generation so late responses are ignored
        self.generation += 1;

        if self.expanded {
            self.expanded = false;
            self.loading = false;
            self.modal_open = false;
            return None;
        }

        self.expanded = true;
        self.loading = true;
        self.error = None;
        self.detail = None;

        Some(ExpandTicket {
            generation: self.generation,
            urls: vec![self.competitor.url.clone()],
        })
    }

    /// 应用内容代理的结果
    pub fn complete_expand(
        &mut self,
        ticket: ExpandTicket,
        outcome: Result<Value, ClientError>,
    ) -> Completion {
        if ticket.generation != self.generation {
            debug!(card = %self.competitor.id, "Discarding stale content response");
            return Completion::Stale;
        }

        self.loading = false;

        match outcome.map_err(|e| e.to_string()).and_then(first_content) {
            Ok(content) => {
                self.detail = Some(content);
                self.modal_open = self.presentation == DetailPresentation::Modal;
            }
            Err(message) => {
                warn!(card = %self.competitor.id, "Content fetch failed: {}", message);
                self.error = Some(message);
            }
        }

        Completion::Applied
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// 切换展开状态，需要时获取内容
    pub async fn toggle_and_fetch(&mut self, api: &dyn CompetitorApi) -> Option<Completion> {
        let ticket = self.toggle()?;
        let outcome = api.get_contents(ticket.urls()).await;
        Some(self.complete_expand(ticket, outcome))
    }
}

fn first_content(payload: Value) -> Result<ContentResult, String> {
    let first = payload
        .get("results")
        .and_then(Value::as_array)
        .and_then(|results| results.first())
        .ok_or_else(|| NO_CONTENT_MESSAGE.to_string())?;

    ContentResult::deserialize(first).map_err(|e| {
        debug!("Undecodable content result: {}", e);
        LOAD_FAILED_MESSAGE.to_string()
    })
}
