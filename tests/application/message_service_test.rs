use std::sync::Arc;

use semporna::application::services::{ConversationService, MessageService, ServiceError};
use semporna::domain::{DEFAULT_MODEL, DEFAULT_TITLE, MessageRole, UserId};
use semporna::infrastructure::persistence::{
    InMemoryConversationRepository, InMemoryMessageRepository,
};

fn services() -> (ConversationService, MessageService) {
    let conversations = Arc::new(InMemoryConversationRepository::new());
    let messages = Arc::new(InMemoryMessageRepository::new());
    (
        ConversationService::new(conversations.clone(), messages.clone()),
        MessageService::new(conversations, messages),
    )
}

#[tokio::test]
async fn given_own_conversation_when_appending_then_message_is_listed_chronologically() {
    let (conversations, messages) = services();
    let alice = UserId::new("alice");
    let conversation = conversations.create(alice.clone(), None).await.unwrap();

    messages
        .append(
            &alice,
            conversation.id,
            MessageRole::User,
            "first".to_string(),
            None,
        )
        .await
        .unwrap();
    messages
        .append(
            &alice,
            conversation.id,
            MessageRole::Assistant,
            "second".to_string(),
            None,
        )
        .await
        .unwrap();

    let listed = messages.list(&alice, conversation.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].content, "first");
    assert_eq!(listed[1].content, "second");
    assert_eq!(listed[0].model, DEFAULT_MODEL);
}

#[tokio::test]
async fn given_appended_message_when_listing_parent_then_updated_at_has_moved() {
    let (conversations, messages) = services();
    let alice = UserId::new("alice");
    let conversation = conversations.create(alice.clone(), None).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    messages
        .append(
            &alice,
            conversation.id,
            MessageRole::User,
            "hello".to_string(),
            None,
        )
        .await
        .unwrap();

    let listed = conversations.list(&alice).await.unwrap();
    assert!(listed[0].updated_at > conversation.updated_at);
}

#[tokio::test]
async fn given_first_user_message_when_short_then_title_is_content_verbatim() {
    let (conversations, messages) = services();
    let alice = UserId::new("alice");
    let conversation = conversations.create(alice.clone(), None).await.unwrap();

    messages
        .append(
            &alice,
            conversation.id,
            MessageRole::User,
            "Hello there, how is the weather?".to_string(),
            None,
        )
        .await
        .unwrap();

    let listed = conversations.list(&alice).await.unwrap();
    assert_eq!(listed[0].title, "Hello there, how is the weather?");
}

#[tokio::test]
async fn given_first_user_message_when_long_then_title_is_truncated() {
    let (conversations, messages) = services();
    let alice = UserId::new("alice");
    let conversation = conversations.create(alice.clone(), None).await.unwrap();
    let content = "y".repeat(60);

    messages
        .append(
            &alice,
            conversation.id,
            MessageRole::User,
            content,
            None,
        )
        .await
        .unwrap();

    let listed = conversations.list(&alice).await.unwrap();
    assert_eq!(listed[0].title, format!("{}...", "y".repeat(47)));
}

#[tokio::test]
async fn given_titled_conversation_when_second_user_message_then_title_unchanged() {
    let (conversations, messages) = services();
    let alice = UserId::new("alice");
    let conversation = conversations.create(alice.clone(), None).await.unwrap();

    messages
        .append(
            &alice,
            conversation.id,
            MessageRole::User,
            "First message".to_string(),
            None,
        )
        .await
        .unwrap();
    messages
        .append(
            &alice,
            conversation.id,
            MessageRole::User,
            "z".repeat(60),
            None,
        )
        .await
        .unwrap();

    let listed = conversations.list(&alice).await.unwrap();
    assert_eq!(listed[0].title, "First message");
}

#[tokio::test]
async fn given_assistant_message_when_appending_then_placeholder_title_stays() {
    let (conversations, messages) = services();
    let alice = UserId::new("alice");
    let conversation = conversations.create(alice.clone(), None).await.unwrap();

    messages
        .append(
            &alice,
            conversation.id,
            MessageRole::Assistant,
            "I am an assistant".to_string(),
            None,
        )
        .await
        .unwrap();

    let listed = conversations.list(&alice).await.unwrap();
    assert_eq!(listed[0].title, DEFAULT_TITLE);
}

#[tokio::test]
async fn given_explicitly_titled_conversation_when_user_message_then_title_not_overwritten() {
    let (conversations, messages) = services();
    let alice = UserId::new("alice");
    let conversation = conversations
        .create(alice.clone(), Some("My title".to_string()))
        .await
        .unwrap();

    messages
        .append(
            &alice,
            conversation.id,
            MessageRole::User,
            "Would make a nice title".to_string(),
            None,
        )
        .await
        .unwrap();

    let listed = conversations.list(&alice).await.unwrap();
    assert_eq!(listed[0].title, "My title");
}

#[tokio::test]
async fn given_custom_model_tag_when_appending_then_tag_is_kept() {
    let (conversations, messages) = services();
    let alice = UserId::new("alice");
    let conversation = conversations.create(alice.clone(), None).await.unwrap();

    messages
        .append(
            &alice,
            conversation.id,
            MessageRole::Assistant,
            "response".to_string(),
            Some("llama3-70b-8192".to_string()),
        )
        .await
        .unwrap();

    let listed = messages.list(&alice, conversation.id).await.unwrap();
    assert_eq!(listed[0].model, "llama3-70b-8192");
}

#[tokio::test]
async fn given_foreign_conversation_when_appending_then_not_found_and_nothing_stored() {
    let (conversations, messages) = services();
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");
    let conversation = conversations.create(bob.clone(), None).await.unwrap();

    let result = messages
        .append(
            &alice,
            conversation.id,
            MessageRole::User,
            "intruder".to_string(),
            None,
        )
        .await;
    assert!(matches!(result, Err(ServiceError::NotFound)));

    assert!(
        messages
            .list(&bob, conversation.id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn given_foreign_conversation_when_listing_then_not_found() {
    let (conversations, messages) = services();
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");
    let conversation = conversations.create(bob, None).await.unwrap();

    let result = messages.list(&alice, conversation.id).await;
    assert!(matches!(result, Err(ServiceError::NotFound)));
}

#[tokio::test]
async fn given_unknown_conversation_when_listing_then_not_found() {
    let (_, messages) = services();
    let alice = UserId::new("alice");

    let result = messages
        .list(&alice, semporna::domain::ConversationId::new())
        .await;
    assert!(matches!(result, Err(ServiceError::NotFound)));
}
