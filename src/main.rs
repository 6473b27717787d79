use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use legalyze::application::services::ProxyService;
use legalyze::infrastructure::llm::{GeminiClient, MockLlmClient};
use legalyze::infrastructure::observability::init_tracing;
use legalyze::presentation::{AppState, Environment, Settings, UpstreamProvider, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&settings.logging.tracing_config(environment));

    let retry_policy = settings.proxy.retry_policy();
    let max_body_bytes = settings.server.max_body_bytes;

    let router = match settings.upstream.provider {
        UpstreamProvider::Gemini => {
            let api_key = settings.upstream.api_key().with_context(|| {
                format!(
                    "Upstream API key not found in environment variable '{}'",
                    settings.upstream.api_key_env
                )
            })?;
            let llm_client = Arc::new(GeminiClient::new(
                &settings.upstream.base_url,
                &settings.upstream.model,
                api_key,
                settings.upstream.timeout(),
            )?);
            tracing::info!(model = %settings.upstream.model, "Using Gemini upstream");
            create_router(AppState::new(
                ProxyService::new(llm_client, retry_policy),
                max_body_bytes,
            ))
        }
        UpstreamProvider::Mock => {
            let llm_client = Arc::new(MockLlmClient::new(settings.upstream.mock_delay()));
            tracing::warn!("Using mock upstream; responses are canned");
            create_router(AppState::new(
                ProxyService::new(llm_client, retry_policy),
                max_body_bytes,
            ))
        }
    };

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = %environment, "Proxy listening");

    axum::serve(listener, router).await?;

    Ok(())
}
