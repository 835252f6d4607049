//! Integration tests for tgpost-delivery

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tgpost_common::test_utils::{chat_fixtures, init_test_logging};
use tgpost_common::{ChatId, PostError, Result, MAX_CAPTION_CHARS};
use tgpost_delivery::{
    ApiResponse, DeliveryEngine, DeliveryOutcome, MediaGroupTransport, RetryPolicy,
    SendMediaGroupRequest,
};

/// Transport answering each chat from a fixed script and recording requests.
#[derive(Default)]
struct ScriptedTransport {
    scripts: Mutex<HashMap<ChatId, Vec<Result<ApiResponse>>>>,
    sent: Mutex<Vec<SendMediaGroupRequest>>,
}

impl ScriptedTransport {
    fn script(self, chat_id: ChatId, responses: Vec<Result<ApiResponse>>) -> Self {
        self.scripts.lock().unwrap().insert(chat_id, responses);
        self
    }

    fn sent_to(&self, chat_id: &ChatId) -> usize {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|request| &request.chat_id == chat_id)
            .count()
    }
}

#[async_trait]
impl MediaGroupTransport for ScriptedTransport {
    async fn post_media_group(&self, request: &SendMediaGroupRequest) -> Result<ApiResponse> {
        self.sent.lock().unwrap().push(request.clone());
        let mut scripts = self.scripts.lock().unwrap();
        let script = scripts.entry(request.chat_id.clone()).or_default();
        if script.is_empty() {
            Ok(ApiResponse::ok())
        } else {
            script.remove(0)
        }
    }
}

fn photos() -> Vec<String> {
    (1..=3).map(|i| format!("https://img.example/{i}/l")).collect()
}

#[tokio::test(start_paused = true)]
async fn test_rejected_destination_does_not_affect_others() {
    init_test_logging();

    let group = chat_fixtures::test_group_id();
    let channel = chat_fixtures::test_channel();
    let transport = ScriptedTransport::default().script(
        group.clone(),
        vec![Ok(ApiResponse::new(
            400,
            r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
        ))],
    );
    let engine = DeliveryEngine::new(transport, RetryPolicy::default());

    let report = engine
        .deliver_all(&[group.clone(), channel.clone()], "caption", &photos())
        .await;

    assert_eq!(
        report.outcome_for(&group),
        Some(&DeliveryOutcome::Rejected {
            attempts: 1,
            status: Some(400),
            reason: "Bad Request: chat not found".to_string(),
        })
    );
    assert_eq!(
        report.outcome_for(&channel),
        Some(&DeliveryOutcome::Delivered { attempts: 1 })
    );
    assert_eq!(engine.transport().sent_to(&group), 1);
    assert_eq!(engine.transport().sent_to(&channel), 1);
}

#[tokio::test(start_paused = true)]
async fn test_exhausted_destination_does_not_affect_others() {
    let first = ChatId::Id(1);
    let second = ChatId::Id(2);
    let failures = (0..5)
        .map(|_| Err(PostError::network("Request timeout")))
        .collect();
    let transport = ScriptedTransport::default().script(first.clone(), failures);
    let engine = DeliveryEngine::new(transport, RetryPolicy::new(5, Duration::from_secs(5)));

    let report = engine
        .deliver_all(&[first.clone(), second.clone()], "caption", &photos())
        .await;

    assert!(matches!(
        report.outcome_for(&first),
        Some(DeliveryOutcome::Exhausted { attempts: 5, .. })
    ));
    assert!(report.outcome_for(&second).unwrap().is_success());
    assert_eq!(engine.transport().sent_to(&first), 5);
    assert_eq!(engine.transport().sent_to(&second), 1);
}

#[tokio::test(start_paused = true)]
async fn test_long_caption_truncated_in_payload() {
    let transport = ScriptedTransport::default();
    let engine = DeliveryEngine::new(transport, RetryPolicy::default());
    let caption = "x".repeat(1500);

    let outcome = engine.send(&ChatId::Id(7), &caption, &photos()).await;
    assert!(outcome.is_success());

    let sent = engine.transport().sent.lock().unwrap();
    let media: serde_json::Value = serde_json::from_str(&sent[0].media).unwrap();
    let items = media.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(
        items[0]["caption"].as_str().unwrap().chars().count(),
        MAX_CAPTION_CHARS
    );
    assert_eq!(items[0]["parse_mode"], "MarkdownV2");
    assert!(items[1].get("caption").is_none());
}

#[tokio::test(start_paused = true)]
async fn test_transient_then_success_counts_attempts() {
    let chat = ChatId::Id(3);
    let transport = ScriptedTransport::default().script(
        chat.clone(),
        vec![
            Err(PostError::network("Connection error")),
            Ok(ApiResponse::new(503, "Service Unavailable")),
        ],
    );
    let engine = DeliveryEngine::new(transport, RetryPolicy::default());

    let outcome = engine.send(&chat, "caption", &photos()).await;
    assert_eq!(outcome, DeliveryOutcome::Delivered { attempts: 3 });
}
