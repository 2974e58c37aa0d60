mod server;

use std::sync::Arc;

use serenity::http::Http;

use crate::server::{
    bot,
    config::Config,
    error::AppError,
    scheduler::maintenance::MaintenanceScheduler,
    service::notification::{DiscordNotifier, Notifier},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::setup_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let discord_http = Arc::new(Http::new(&config.discord_token));
    let notifier: Arc<dyn Notifier> = Arc::new(DiscordNotifier::new(discord_http));

    let maintenance =
        MaintenanceScheduler::new(db.clone(), notifier.clone(), config.maintenance.clone());
    maintenance.start(config.maintenance_channel_id).await?;

    let state = AppState::new(db, notifier, maintenance);

    tracing::info!("Starting ladderboard");

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await
}
