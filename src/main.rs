use anyhow::Result;
use tracing::info;

use geowiki::api;
use geowiki::config::Config;
use geowiki::mediawiki::MediaWikiService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Loaded configuration");

    // One client for the lifetime of the process
    let mediawiki = MediaWikiService::new(&config.mediawiki)?;
    info!("Using MediaWiki endpoint: {}", config.mediawiki.url);

    let router = api::create_api_router(mediawiki, config.frontend.clone());

    if let Some(ref static_dir) = config.frontend.static_dir {
        info!("🎨 Serving frontend from directory: {}", static_dir);
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 API server listening on http://{}", addr);
    info!("   - API endpoints available at http://{}/api/...", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
