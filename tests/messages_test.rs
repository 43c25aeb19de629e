use cipher_service::common::error::AppError;
use cipher_service::common::init;
use cipher_service::common::state::AppState;
use cipher_service::models::messages::{FetchHistoryArgs, SendMessageArgs};
use cipher_service::repositories::users;
use cipher_service::usecases::messages;
use sqlx::sqlite::SqlitePoolOptions;

/// A single-connection pool keeps every query on the same in-memory
/// database.
async fn test_state() -> AppState {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    init::initialize_schema(&db)
        .await
        .expect("Failed to create schema");
    AppState { db }
}

async fn seed_users(ctx: &AppState) {
    users::create(ctx, "mohammad", "Mohammad S. Khalaf")
        .await
        .unwrap();
    users::create(ctx, "khader", "Khader A. Murtaja")
        .await
        .unwrap();
}

fn send_args(content: &str, sender_id: &str, receiver_id: &str) -> SendMessageArgs {
    SendMessageArgs {
        content: Some(content.to_owned()),
        sender_id: Some(sender_id.to_owned()),
        receiver_id: Some(receiver_id.to_owned()),
    }
}

fn history_args(user_id: &str) -> FetchHistoryArgs {
    FetchHistoryArgs {
        user_id: Some(user_id.to_owned()),
    }
}

#[tokio::test]
async fn send_appears_in_sender_history_exactly_once() {
    let ctx = test_state().await;
    seed_users(&ctx).await;

    let message = messages::send(&ctx, send_args("Hello World", "mohammad", "khader"))
        .await
        .unwrap();
    assert_eq!(message.content, "Hello World");
    assert_eq!(message.sender.user_id, "mohammad");
    assert_eq!(message.sender.display_name, "Mohammad S. Khalaf");
    assert_eq!(message.receiver.user_id, "khader");

    let history = messages::fetch_history(&ctx, history_args("mohammad"))
        .await
        .unwrap();
    let matching: Vec<_> = history
        .iter()
        .filter(|entry| entry.3 == "Hello World")
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].1, "mohammad");
    assert_eq!(matching[0].2, "khader");
}

#[tokio::test]
async fn history_is_ordered_by_message_id() {
    let ctx = test_state().await;
    seed_users(&ctx).await;

    for content in ["first", "second", "third"] {
        messages::send(&ctx, send_args(content, "mohammad", "khader"))
            .await
            .unwrap();
    }
    messages::send(&ctx, send_args("reply", "khader", "mohammad"))
        .await
        .unwrap();

    let first = messages::fetch_history(&ctx, history_args("khader"))
        .await
        .unwrap();
    assert_eq!(first.len(), 4);
    assert!(first.windows(2).all(|pair| pair[0].0 < pair[1].0));

    // Reads are idempotent, repeated calls return the same order.
    let second = messages::fetch_history(&ctx, history_args("khader"))
        .await
        .unwrap();
    let first_ids: Vec<i64> = first.iter().map(|entry| entry.0).collect();
    let second_ids: Vec<i64> = second.iter().map(|entry| entry.0).collect();
    assert_eq!(first_ids, second_ids);
}

#[tokio::test]
async fn empty_content_is_rejected_without_inserting() {
    let ctx = test_state().await;
    seed_users(&ctx).await;

    let result = messages::send(&ctx, send_args("", "mohammad", "khader")).await;
    assert_eq!(result.unwrap_err(), AppError::MessagesMissingContent);

    for user_id in ["mohammad", "khader"] {
        let history = messages::fetch_history(&ctx, history_args(user_id))
            .await
            .unwrap();
        assert!(history.is_empty());
    }
}

#[tokio::test]
async fn missing_parameters_are_rejected() {
    let ctx = test_state().await;
    seed_users(&ctx).await;

    let missing_sender = SendMessageArgs {
        content: Some("hi".to_owned()),
        sender_id: None,
        receiver_id: Some("khader".to_owned()),
    };
    let result = messages::send(&ctx, missing_sender).await;
    assert_eq!(result.unwrap_err(), AppError::MessagesMissingSender);

    let missing_receiver = SendMessageArgs {
        content: Some("hi".to_owned()),
        sender_id: Some("mohammad".to_owned()),
        receiver_id: None,
    };
    let result = messages::send(&ctx, missing_receiver).await;
    assert_eq!(result.unwrap_err(), AppError::MessagesMissingReceiver);

    let result = messages::fetch_history(&ctx, FetchHistoryArgs { user_id: None }).await;
    assert_eq!(result.unwrap_err(), AppError::MessagesMissingUserId);
}

#[tokio::test]
async fn unknown_participants_are_rejected_without_inserting() {
    let ctx = test_state().await;
    seed_users(&ctx).await;

    let result = messages::send(&ctx, send_args("hi", "nobody", "khader")).await;
    assert_eq!(result.unwrap_err(), AppError::UsersNotFound);

    let result = messages::send(&ctx, send_args("hi", "mohammad", "nobody")).await;
    assert_eq!(result.unwrap_err(), AppError::UsersNotFound);

    let history = messages::fetch_history(&ctx, history_args("khader"))
        .await
        .unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn empty_history_is_not_an_error() {
    let ctx = test_state().await;
    seed_users(&ctx).await;

    let history = messages::fetch_history(&ctx, history_args("khader"))
        .await
        .unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn concurrent_sends_get_distinct_increasing_ids() {
    let ctx = test_state().await;
    seed_users(&ctx).await;

    let (first, second) = tokio::join!(
        messages::send(&ctx, send_args("one", "mohammad", "khader")),
        messages::send(&ctx, send_args("two", "khader", "mohammad")),
    );
    first.unwrap();
    second.unwrap();

    let history = messages::fetch_history(&ctx, history_args("mohammad"))
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
    assert!(history[0].0 < history[1].0);
}
