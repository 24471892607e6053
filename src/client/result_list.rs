// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;

use crate::client::result_card::{DetailPresentation, ResultCardController};
use crate::domain::models::competitor::CompetitorResult;

/// 结果列表渲染结果
#[derive(Debug, PartialEq)]
pub enum ResultListView<'a> {
    /// 搜索进行中，只显示加载占位
    Loading,
    /// 无结果，不渲染任何内容
    Empty,
    /// 按映射顺序排列的卡片
    Cards(Vec<CardSlot<'a>>),
}

/// 单张卡片的渲染槽位
#[derive(Debug, PartialEq)]
pub struct CardSlot<'a> {
    pub key: &'a str,
    pub result: &'a CompetitorResult,
}

/// 结果列表
///
/// 按 id 维护每张卡片的控制器。新结果集中仍存在的 id 保留原卡片状态，
/// 消失的 id 对应的卡片及其已加载内容被丢弃。
#[derive(Debug, Default)]
pub struct ResultList {
    cards: Vec<ResultCardController>,
    presentation: DetailPresentation,
}

impl ResultList {
    pub fn new(presentation: DetailPresentation) -> Self {
        Self {
            cards: Vec::new(),
            presentation,
        }
    }

    /// 与最新结果集同步
    pub fn sync(&mut self, results: &[CompetitorResult]) {
        let mut existing: HashMap<String, ResultCardController> = self
            .cards
            .drain(..)
            .map(|card| (card.key().to_string(), card))
            .collect();
        let presentation = self.presentation;

        self.cards = results
            .iter()
            .map(|result| {
                existing.remove(&result.id).unwrap_or_else(|| {
                    ResultCardController::with_presentation(result.clone(), presentation)
                })
            })
            .collect();
    }

    pub fn cards(&self) -> &[ResultCardController] {
        &self.cards
    }

    pub fn card(&self, key: &str) -> Option<&ResultCardController> {
        self.cards.iter().find(|card| card.key() == key)
    }

    pub fn card_mut(&mut self, key: &str) -> Option<&mut ResultCardController> {
        self.cards.iter_mut().find(|card| card.key() == key)
    }

    /// 渲染规则：加载中只显示占位，无结果不渲染，否则按映射顺序输出卡片
    pub fn view(&self, is_loading: bool) -> ResultListView<'_> {
        if is_loading {
            return ResultListView::Loading;
        }
        if self.cards.is_empty() {
            return ResultListView::Empty;
        }
        ResultListView::Cards(
            self.cards
                .iter()
                .map(|card| CardSlot {
                    key: card.key(),
                    result: card.competitor(),
                })
                .collect(),
        )
    }
}
