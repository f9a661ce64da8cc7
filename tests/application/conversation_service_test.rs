use std::sync::Arc;
use std::time::Duration;

use semporna::application::ports::MessageRepository;
use semporna::application::services::{ConversationService, ServiceError};
use semporna::domain::{DEFAULT_TITLE, Message, MessageRole, UserId};
use semporna::infrastructure::persistence::{
    InMemoryConversationRepository, InMemoryMessageRepository,
};

fn service() -> (
    ConversationService,
    Arc<InMemoryConversationRepository>,
    Arc<InMemoryMessageRepository>,
) {
    let conversations = Arc::new(InMemoryConversationRepository::new());
    let messages = Arc::new(InMemoryMessageRepository::new());
    let service = ConversationService::new(conversations.clone(), messages.clone());
    (service, conversations, messages)
}

#[tokio::test]
async fn given_no_title_when_creating_then_stores_placeholder_and_equal_timestamps() {
    let (service, _, _) = service();
    let alice = UserId::new("alice");

    let conversation = service.create(alice.clone(), None).await.unwrap();

    assert_eq!(conversation.title, DEFAULT_TITLE);
    assert_eq!(conversation.created_at, conversation.updated_at);

    let listed = service.list(&alice).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, conversation.id);
}

#[tokio::test]
async fn given_two_owners_when_listing_then_only_own_conversations_appear() {
    let (service, _, _) = service();
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");

    service.create(alice.clone(), None).await.unwrap();
    service
        .create(bob.clone(), Some("Bob's".to_string()))
        .await
        .unwrap();

    let alice_list = service.list(&alice).await.unwrap();
    assert_eq!(alice_list.len(), 1);
    assert_eq!(alice_list[0].user_id, alice);

    let bob_list = service.list(&bob).await.unwrap();
    assert_eq!(bob_list.len(), 1);
    assert_eq!(bob_list[0].title, "Bob's");
}

#[tokio::test]
async fn given_several_conversations_when_listing_then_most_recently_active_first() {
    let (service, _, _) = service();
    let alice = UserId::new("alice");

    let first = service.create(alice.clone(), None).await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second = service.create(alice.clone(), None).await.unwrap();

    let listed = service.list(&alice).await.unwrap();
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);

    // Renaming the older one bumps it back to the top.
    tokio::time::sleep(Duration::from_millis(5)).await;
    service
        .rename(&alice, first.id, "Bumped".to_string())
        .await
        .unwrap();

    let listed = service.list(&alice).await.unwrap();
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[0].title, "Bumped");
}

#[tokio::test]
async fn given_unknown_id_when_renaming_then_not_found() {
    let (service, _, _) = service();
    let alice = UserId::new("alice");

    let result = service
        .rename(
            &alice,
            semporna::domain::ConversationId::new(),
            "New".to_string(),
        )
        .await;

    assert!(matches!(result, Err(ServiceError::NotFound)));
}

#[tokio::test]
async fn given_foreign_conversation_when_renaming_then_not_found_and_untouched() {
    let (service, _, _) = service();
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");

    let conversation = service
        .create(bob.clone(), Some("Bob's".to_string()))
        .await
        .unwrap();

    let result = service
        .rename(&alice, conversation.id, "Stolen".to_string())
        .await;
    assert!(matches!(result, Err(ServiceError::NotFound)));

    let bob_list = service.list(&bob).await.unwrap();
    assert_eq!(bob_list[0].title, "Bob's");
}

#[tokio::test]
async fn given_conversation_with_messages_when_deleting_then_cascade_removes_messages() {
    let (service, _, messages) = service();
    let alice = UserId::new("alice");

    let conversation = service.create(alice.clone(), None).await.unwrap();
    messages
        .insert(&Message::new(
            conversation.id,
            MessageRole::User,
            "hello".to_string(),
            None,
        ))
        .await
        .unwrap();
    messages
        .insert(&Message::new(
            conversation.id,
            MessageRole::Assistant,
            "hi".to_string(),
            None,
        ))
        .await
        .unwrap();

    service.delete(&alice, conversation.id).await.unwrap();

    assert!(service.list(&alice).await.unwrap().is_empty());
    assert!(
        messages
            .list_for_conversation(conversation.id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn given_foreign_conversation_when_deleting_then_not_found_and_store_untouched() {
    let (service, _, messages) = service();
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");

    let conversation = service.create(bob.clone(), None).await.unwrap();
    messages
        .insert(&Message::new(
            conversation.id,
            MessageRole::User,
            "hello".to_string(),
            None,
        ))
        .await
        .unwrap();

    let result = service.delete(&alice, conversation.id).await;
    assert!(matches!(result, Err(ServiceError::NotFound)));

    assert_eq!(service.list(&bob).await.unwrap().len(), 1);
    assert_eq!(
        messages
            .list_for_conversation(conversation.id)
            .await
            .unwrap()
            .len(),
        1
    );
}
