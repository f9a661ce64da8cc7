mod memory_repository;
mod pg_conversation_repository;
mod pg_message_repository;
mod pg_pool;

pub use memory_repository::{InMemoryConversationRepository, InMemoryMessageRepository};
pub use pg_conversation_repository::PgConversationRepository;
pub use pg_message_repository::PgMessageRepository;
pub use pg_pool::create_pool;
