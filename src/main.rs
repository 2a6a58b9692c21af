mod model;
mod server;

use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config,
    error::AppError,
    service::{discord::DiscordDirectory, notification::NotificationDispatcher},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let discord_http = startup::setup_discord_http(&config);
    let notifier = startup::setup_notifier(&config, discord_http.clone()).await?;
    let notifications = NotificationDispatcher::spawn(notifier);
    let directory = std::sync::Arc::new(DiscordDirectory::new(discord_http));

    let router = server::router::router()
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            directory,
            notifications,
            config.admin_ids.clone(),
        ))
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
