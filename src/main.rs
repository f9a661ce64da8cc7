use std::net::SocketAddr;
use std::sync::Arc;

use dotenv::dotenv;
use tokio::net::TcpListener;

use semporna::application::services::{CompletionService, ConversationService, MessageService};
use semporna::infrastructure::auth::JwtTokenVerifier;
use semporna::infrastructure::llm::GroqCompletionClient;
use semporna::infrastructure::observability::{TracingConfig, init_tracing};
use semporna::infrastructure::persistence::{
    PgConversationRepository, PgMessageRepository, create_pool,
};
use semporna::infrastructure::rate_limit::FixedWindowLimiter;
use semporna::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let settings = Settings::from_env()?;
    init_tracing(TracingConfig::default(), settings.server.port);

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    if settings.database.run_migrations {
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let conversations = Arc::new(PgConversationRepository::new(pool.clone()));
    let messages = Arc::new(PgMessageRepository::new(pool));

    let completion_client = Arc::new(GroqCompletionClient::new(
        settings.groq.api_key.clone(),
        settings.groq.model.clone(),
        settings.groq.base_url.clone(),
    ));

    let state = AppState {
        conversation_service: Arc::new(ConversationService::new(
            conversations.clone(),
            messages.clone(),
        )),
        message_service: Arc::new(MessageService::new(conversations, messages)),
        completion_service: Arc::new(CompletionService::new(
            completion_client,
            settings.groq.pretext.clone(),
        )),
        token_verifier: Arc::new(JwtTokenVerifier::new(&settings.auth.jwt_secret)),
        rate_limiter: Arc::new(FixedWindowLimiter::new(
            settings.rate_limit.max_requests,
            settings.rate_limit.window,
        )),
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
