/// Configure tracing once at application startup.
///
/// Verbosity comes from `RUST_LOG` (default `info`), e.g.
/// `RUST_LOG=user_service::message=debug` to see every enqueued message.
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
