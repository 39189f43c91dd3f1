//! Integration tests for [`repost_bot::SubmissionHandler`].
//!
//! Covers the admin `/fill` flow, unauthorized attempts at both transitions, non-text posts and
//! store failures propagating out of the handler.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::{media_message, memory_store, message, MockBot, ADMIN_ID, USER_ID};
use repost_bot::{
    Handler, HandlerResponse, RepostError, SessionMap, SessionState, SubmissionHandler,
};
use storage::{PostRef, PostStore, StorageError};

const UNAUTHORIZED: &str = "You are not authorized to use this command.";

/// **Test: Admin submits a post.**
///
/// **Setup:** Empty store, idle sessions.
/// **Action:** Admin sends `/fill`, then a message with id 555.
/// **Expected:** Session goes AwaitingPost then Idle; store holds {555}; confirmation mentions 555.
#[tokio::test]
async fn test_admin_fill_then_post_is_stored() {
    let bot = Arc::new(MockBot::new());
    let store = memory_store().await;
    let sessions = SessionMap::new();
    let handler = SubmissionHandler::new(bot.clone(), store.clone(), sessions.clone(), ADMIN_ID);

    let response = handler.handle(&message(10, ADMIN_ID, "/fill")).await.unwrap();
    assert_eq!(
        response,
        HandlerResponse::Reply("Please send the post you want to add.".to_string())
    );
    assert_eq!(sessions.state(ADMIN_ID).await, SessionState::AwaitingPost);

    let response = handler
        .handle(&message(555, ADMIN_ID, "a post worth sharing"))
        .await
        .unwrap();
    assert_eq!(
        response,
        HandlerResponse::Reply("Post added with message ID: 555".to_string())
    );
    assert_eq!(sessions.state(ADMIN_ID).await, SessionState::Idle);

    assert_eq!(
        store.list_all().await.unwrap(),
        vec![PostRef {
            message_reference: 555,
            source_chat_id: ADMIN_ID,
        }]
    );
    assert_eq!(
        bot.texts_to(ADMIN_ID),
        vec![
            "Please send the post you want to add.".to_string(),
            "Post added with message ID: 555".to_string(),
        ]
    );
}

/// **Test: Non-admin `/fill` is refused.**
///
/// **Expected:** Unauthorized notice, store unchanged, session Idle immediately after.
#[tokio::test]
async fn test_non_admin_fill_is_refused() {
    let bot = Arc::new(MockBot::new());
    let store = memory_store().await;
    let sessions = SessionMap::new();
    let handler = SubmissionHandler::new(bot.clone(), store.clone(), sessions.clone(), ADMIN_ID);

    let response = handler.handle(&message(10, USER_ID, "/fill")).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply(UNAUTHORIZED.to_string()));
    assert_eq!(sessions.state(USER_ID).await, SessionState::Idle);
    assert_eq!(store.count().await.unwrap(), 0);
    assert_eq!(bot.texts_to(USER_ID), vec![UNAUTHORIZED.to_string()]);
}

/// **Test: The guard is re-checked when a session completes.**
///
/// **Setup:** A non-admin somehow has an AwaitingPost session.
/// **Action:** They send a message.
/// **Expected:** Unauthorized notice, nothing stored, session Idle.
#[tokio::test]
async fn test_non_admin_completion_is_refused() {
    let bot = Arc::new(MockBot::new());
    let store = memory_store().await;
    let sessions = SessionMap::new();
    sessions.begin_submission(USER_ID).await;
    let handler = SubmissionHandler::new(bot.clone(), store.clone(), sessions.clone(), ADMIN_ID);

    let response = handler.handle(&message(77, USER_ID, "sneaky")).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply(UNAUTHORIZED.to_string()));
    assert_eq!(sessions.state(USER_ID).await, SessionState::Idle);
    assert_eq!(store.count().await.unwrap(), 0);
}

/// **Test: Any content type completes a submission.**
#[tokio::test]
async fn test_photo_post_is_stored() {
    let bot = Arc::new(MockBot::new());
    let store = memory_store().await;
    let sessions = SessionMap::new();
    let handler = SubmissionHandler::new(bot.clone(), store.clone(), sessions.clone(), ADMIN_ID);

    handler.handle(&message(1, ADMIN_ID, "/fill@repost_bot")).await.unwrap();
    handler.handle(&media_message(321, ADMIN_ID, "photo")).await.unwrap();

    let posts = store.list_all().await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].message_reference, 321);
}

/// **Test: Messages unrelated to a submission pass through.**
#[tokio::test]
async fn test_idle_plain_text_continues() {
    let bot = Arc::new(MockBot::new());
    let store = memory_store().await;
    let handler = SubmissionHandler::new(bot.clone(), store.clone(), SessionMap::new(), ADMIN_ID);

    let response = handler.handle(&message(3, ADMIN_ID, "hello")).await.unwrap();

    assert_eq!(response, HandlerResponse::Continue);
    assert!(bot.calls().is_empty());
}

/// **Test: `/fill` addressed to another bot is left alone once the bot knows its username.**
///
/// **Action:** Admin sends `/fill@other_bot`, then `/fill@repost_bot`.
/// **Expected:** The first passes through untouched; the second arms the session.
#[tokio::test]
async fn test_fill_for_other_bot_is_not_claimed() {
    let bot = Arc::new(MockBot::new());
    let store = memory_store().await;
    let sessions = SessionMap::new();
    let handler = SubmissionHandler::new(bot.clone(), store.clone(), sessions.clone(), ADMIN_ID)
        .with_bot_username(Some("repost_bot".to_string()));

    let response = handler
        .handle(&message(10, ADMIN_ID, "/fill@other_bot"))
        .await
        .unwrap();
    assert_eq!(response, HandlerResponse::Continue);
    assert_eq!(sessions.state(ADMIN_ID).await, SessionState::Idle);
    assert!(bot.calls().is_empty());

    handler
        .handle(&message(11, ADMIN_ID, "/fill@repost_bot"))
        .await
        .unwrap();
    assert_eq!(sessions.state(ADMIN_ID).await, SessionState::AwaitingPost);
}

struct FailingStore;

#[async_trait]
impl PostStore for FailingStore {
    async fn append(
        &self,
        _message_reference: i64,
        _source_chat_id: i64,
    ) -> Result<i64, StorageError> {
        Err(StorageError::Database("disk I/O error".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<PostRef>, StorageError> {
        Err(StorageError::Database("disk I/O error".to_string()))
    }

    async fn count(&self) -> Result<i64, StorageError> {
        Err(StorageError::Database("disk I/O error".to_string()))
    }
}

/// **Test: A store failure propagates as a Database error; no confirmation is sent.**
#[tokio::test]
async fn test_store_failure_propagates() {
    let bot = Arc::new(MockBot::new());
    let sessions = SessionMap::new();
    let handler =
        SubmissionHandler::new(bot.clone(), Arc::new(FailingStore), sessions.clone(), ADMIN_ID);

    handler.handle(&message(1, ADMIN_ID, "/fill")).await.unwrap();
    let err = handler.handle(&message(2, ADMIN_ID, "post")).await.unwrap_err();

    assert!(matches!(err, RepostError::Database(ref s) if s.contains("disk I/O error")));
    assert_eq!(
        bot.texts_to(ADMIN_ID),
        vec!["Please send the post you want to add.".to_string()]
    );
    assert_eq!(sessions.state(ADMIN_ID).await, SessionState::Idle);
}
