// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::spawn_proxy;
use competitor_finder::client::api::{ClientError, CompetitorApi, HttpProxyClient};
use competitor_finder::client::result_card::CardPhase;
use competitor_finder::client::result_list::{ResultList, ResultListView};
use competitor_finder::client::search_form::{
    SearchFormController, SearchPhase, FETCH_FAILED_MESSAGE,
};
use competitor_finder::client::Completion;
use competitor_finder::domain::models::content::DetailBody;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_similar(upstream: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/findSimilar"))
        .and(body_json(json!({ "url": "https://example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "id": "https://acme.com", "title": "Acme", "url": "https://acme.com", "summary": "Anvils" },
                { "title": "", "url": "https://globex.com" }
            ]
        })))
        .mount(upstream)
        .await;
}

/// 搜索、渲染、展开、收起、再次展开的完整流程
#[tokio::test]
async fn test_search_then_expand_card_through_proxy() {
    let upstream = MockServer::start().await;
    mount_similar(&upstream).await;
    Mock::given(method("POST"))
        .and(path("/contents"))
        .and(body_json(json!({ "urls": ["https://acme.com"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "title": "Acme Corp",
                "url": "https://acme.com",
                "author": "Road Runner",
                "publishedDate": "2024-03-01",
                "text": "Anvils for everyone.\nRockets too."
            }]
        })))
        .expect(2)
        .mount(&upstream)
        .await;

    let proxy = spawn_proxy(&upstream).await;
    let api = HttpProxyClient::new(&proxy);

    let mut form = SearchFormController::new();
    form.set_input("https://example.com");
    let completion = form.submit(&api).await.unwrap();

    assert_eq!(completion, Completion::Applied);
    assert_eq!(form.phase(), SearchPhase::Success);
    assert_eq!(form.results().len(), 2);
    assert_eq!(form.results()[1].title, "Unknown Company");
    assert!(!form.results()[1].id.is_empty());

    let mut list = ResultList::default();
    list.sync(form.results());
    match list.view(form.is_loading()) {
        ResultListView::Cards(slots) => {
            assert_eq!(slots.len(), 2);
            assert_eq!(slots[0].key, "https://acme.com");
        }
        other => panic!("unexpected view: {:?}", other),
    }

    let card = list.card_mut("https://acme.com").unwrap();
    assert_eq!(card.toggle_and_fetch(&api).await, Some(Completion::Applied));
    assert_eq!(card.phase(), CardPhase::ExpandedLoaded);
    assert!(card.is_modal_open());

    let detail = card.modal_detail().unwrap();
    assert_eq!(detail.byline().as_deref(), Some("By Road Runner • 2024-03-01"));
    assert_eq!(
        detail.detail_body(),
        DetailBody::Text(vec!["Anvils for everyone.", "Rockets too."])
    );
    assert_eq!(
        detail.detail_body().lines(),
        vec!["Anvils for everyone.", "Rockets too."]
    );

    // Collapse, then expand again: a second upstream call is expected
    assert_eq!(card.toggle_and_fetch(&api).await, None);
    assert_eq!(card.toggle_and_fetch(&api).await, Some(Completion::Applied));
    assert_eq!(card.phase(), CardPhase::ExpandedLoaded);
}

/// 代理错误信封被客户端解析为函数错误
#[tokio::test]
async fn test_proxy_error_envelope_becomes_function_error() {
    let upstream = MockServer::start().await;
    let proxy = spawn_proxy(&upstream).await;
    let api = HttpProxyClient::new(&proxy);

    let err = api.get_contents(&[]).await.unwrap_err();

    match err {
        ClientError::Function { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid or missing 'urls' array");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// 上游内容接口失败时卡片进入错误状态
#[tokio::test]
async fn test_card_shows_upstream_failure() {
    let upstream = MockServer::start().await;
    mount_similar(&upstream).await;
    Mock::given(method("POST"))
        .and(path("/contents"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream maintenance"))
        .mount(&upstream)
        .await;

    let proxy = spawn_proxy(&upstream).await;
    let api = HttpProxyClient::new(&proxy);

    let mut form = SearchFormController::new();
    form.set_input("https://example.com");
    form.submit(&api).await.unwrap();

    let mut list = ResultList::default();
    list.sync(form.results());
    let card = list.card_mut("https://acme.com").unwrap();
    card.toggle_and_fetch(&api).await;

    assert_eq!(card.phase(), CardPhase::ExpandedError);
    assert_eq!(card.error(), Some("upstream maintenance"));
    assert!(!card.is_loading());
}

/// 代理不可达时搜索失败并恢复可提交状态
#[tokio::test]
async fn test_search_with_unreachable_proxy_fails() {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let api = HttpProxyClient::with_client(client, "http://127.0.0.1:9");

    let mut form = SearchFormController::new();
    form.set_input("https://example.com");
    form.submit(&api).await.unwrap();

    assert_eq!(form.phase(), SearchPhase::Failed);
    assert_eq!(form.error(), Some(FETCH_FAILED_MESSAGE));
    assert!(!form.is_loading());
    assert!(form.can_submit());
}
