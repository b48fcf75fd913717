use tracing::{info, Instrument};
use user_service::app_system::{setup_tracing, SystemConfig, SystemError, UserSystem};
use user_service::domain::UserEntity;
use user_service::service::UserService;

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = SystemConfig::from_env()?;
    info!("Starting application with user system");

    let system = UserSystem::new(config);

    let alice = UserEntity::new("user_1", "Alice", "alice@example.com");
    let bob = UserEntity::new("user_2", "Bob", "bob@example.com");

    let span = tracing::info_span!("user_mutations");
    async {
        system.user_service.add(&alice).await?;
        system.user_service.add(&bob).await?;
        system.user_service.update(&alice).await?;
        system.user_service.remove(&bob).await?;
        Ok::<_, SystemError>(())
    }
    .instrument(span)
    .await?;

    let pending = system.queue_client.len().await?;
    info!(pending, "Messages waiting in queue");

    let span = tracing::info_span!("user_query");
    let response = system
        .user_service
        .query_user_info_by_id(&alice.id)
        .instrument(span)
        .await?;
    info!(
        success = response.is_success(),
        has_data = response.data().is_some(),
        "Query finished"
    );

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
