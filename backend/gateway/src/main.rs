mod twiml;
mod webhook;

use std::sync::Arc;

use anyhow::Result;
use reqwest::Client;
use tokio::net::TcpListener;
use tracing::info;

use linkdrop_config::Config;
use linkdrop_enrich::providers::OpenAiProvider;
use linkdrop_enrich::EnrichmentClient;
use linkdrop_media::{MediaService, ObjectStorageConfig, TransportCredentials};
use linkdrop_router::CommandRouter;
use linkdrop_store::HttpItemStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured logging before config so load-time warnings land.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = Config::from_env()?;
    let http = Client::new();

    let store = Arc::new(HttpItemStore::new(
        http.clone(),
        config.store_url.clone(),
        config.store_api_key.clone(),
    ));

    let enrichment = config.openai_api_key.as_ref().map(|api_key| {
        info!(model = %config.openai_model, "AI enrichment enabled");
        EnrichmentClient::new(Arc::new(OpenAiProvider::new(
            api_key.clone(),
            config.openai_model.clone(),
        )))
    });

    let transport = match (&config.twilio_account_sid, &config.twilio_auth_token) {
        (Some(account_sid), Some(auth_token)) => Some(TransportCredentials {
            account_sid: account_sid.clone(),
            auth_token: auth_token.clone(),
        }),
        _ => None,
    };
    let storage = match (
        &config.cloudinary_cloud_name,
        &config.cloudinary_api_key,
        &config.cloudinary_api_secret,
    ) {
        (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(ObjectStorageConfig {
            cloud_name: cloud_name.clone(),
            api_key: api_key.clone(),
            api_secret: api_secret.clone(),
            folder: config.media_folder.clone(),
        }),
        _ => None,
    };
    let media = Arc::new(MediaService::new(http.clone(), transport, storage));

    let command_router = Arc::new(CommandRouter::new(
        store,
        media,
        enrichment,
        http,
        config.sender_names.clone(),
    ));

    let app = webhook::build_router(command_router);
    let addr = format!("{}:{}", config.bind_address, config.port);
    info!(addr = %addr, "webhook gateway listening");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
