// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::client::api::{ClientError, CompetitorApi};
use crate::client::Completion;
use crate::domain::models::competitor::CompetitorResult;
use crate::domain::services::result_mapper::map_similarity_payload;

/// 输入为空时的提示
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a company URL";
/// 网络失败或响应无法解析时的提示
pub const FETCH_FAILED_MESSAGE: &str = "An error occurred while fetching data";

/// 搜索表单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

/// 提交前校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,
}

/// 一次提交的凭据
///
/// 携带提交时的代次，完成时代次不一致的结果被丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    url: String,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// 搜索表单控制器
///
/// 持有公司URL输入、加载状态、错误消息和最近一次成功的结果
#[derive(Debug, Default)]
pub struct SearchFormController {
    input: String,
    phase: SearchPhase,
    loading: bool,
    results: Vec<CompetitorResult>,
    error: Option<String>,
    generation: u64,
}

impl SearchFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// 编辑输入框
    ///
    /// 不会取消正在进行的提交；已结束的搜索回到 `Idle`
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        if matches!(self.phase, SearchPhase::Success | SearchPhase::Failed) {
            self.phase = SearchPhase::Idle;
        }
    }

    pub fn clear_input(&mut self) {
        self.set_input(String::new());
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// 提交按钮是否可用
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn results(&self) -> &[CompetitorResult] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// 开始一次提交
    ///
    /// # 返回值
    ///
    /// * `Ok(SearchTicket)` - 需要调用相似搜索代理，完成后交给 `complete_submit`
    /// * `Err(SearchError::EmptyInput)` - 输入为空，状态转为 `Failed`，不调用代理，
    ///   进行中的提交随之作废
    pub fn begin_submit(&mut self) -> Result<SearchTicket, SearchError> {
        self.phase = SearchPhase::Validating;
        self.error = None;

        if self.input.trim().is_empty() {
            // Supersede any in-flight submission and re-enable the control
            self.generation += 1;
            self.loading = false;
            self.phase = SearchPhase::Failed;
            self.error = Some(EMPTY_INPUT_MESSAGE.to_string());
            return Err(SearchError::EmptyInput);
        }

        self.generation += 1;
        self.loading = true;
        self.phase = SearchPhase::Submitting;

        Ok(SearchTicket {
            generation: self.generation,
            url: self.input.clone(),
        })
    }

    /// 应用代理调用结果
    ///
    /// 过期凭据（已有更新的提交）的结果被丢弃，状态不变。
    /// 代理错误信封显示其消息，网络失败显示通用提示。
    pub fn complete_submit(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Value, ClientError>,
    ) -> Completion {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale search response"
            );
            return Completion::Stale;
        }

        self.loading = false;

        let mapped = outcome
            .map_err(|e| {
                warn!("Similarity search failed: {}", e);
                match e {
                    ClientError::Function { message, .. } => message,
                    ClientError::Transport(_) | ClientError::Decode(_) => {
                        FETCH_FAILED_MESSAGE.to_string()
                    }
                }
            })
            .and_then(|payload| map_similarity_payload(&payload).map_err(|e| e.to_string()));

        match mapped {
            Ok(results) => {
                self.results = results;
                self.error = None;
                self.phase = SearchPhase::Success;
            }
            Err(message) => {
                // Previous results stay visible
                self.error = Some(message);
                self.phase = SearchPhase::Failed;
            }
        }

        Completion::Applied
    }

    /// 提交并等待相似搜索完成
    pub async fn submit(&mut self, api: &dyn CompetitorApi) -> Result<Completion, SearchError> {
        let ticket = self.begin_submit()?;
        let outcome = api.find_similar(ticket.url()).await;
        Ok(self.complete_submit(ticket, outcome))
    }
}
