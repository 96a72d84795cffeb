use clap::Parser;
use plats::{
    api::{handlers::AppState, routes},
    catalog::Catalog,
    cli::{commands, Cli, Commands},
    config::Settings,
    search::SearchEngine,
    Error, Result,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,plats=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_env()?;
    settings.validate()?;

    // Handle commands
    match cli.command {
        Commands::Serve {
            port,
            host,
            catalog,
        } => {
            serve(settings, port, host, catalog).await?;
        }
        Commands::Search {
            query,
            tags,
            catalog,
            json,
        } => {
            let path = catalog_path(&settings, catalog);
            commands::search(&path, &query, tags.as_deref(), json)?;
        }
        Commands::Facets {
            query,
            tags,
            contains,
            catalog,
            json,
        } => {
            let path = catalog_path(&settings, catalog);
            commands::facets(&path, &query, tags.as_deref(), contains.as_deref(), json)?;
        }
        Commands::Validate { path } => {
            commands::validate(&path)?;
        }
    }

    Ok(())
}

fn catalog_path(settings: &Settings, override_path: Option<PathBuf>) -> PathBuf {
    override_path.unwrap_or_else(|| settings.catalog.path.clone())
}

async fn serve(
    mut settings: Settings,
    port: Option<u16>,
    host: Option<String>,
    catalog: Option<PathBuf>,
) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(catalog) = catalog {
        settings.catalog.path = catalog;
    }

    info!("Starting recipe search server");
    info!("Catalog: {}", settings.catalog.path.display());
    info!("Server: {}:{}", settings.server.host, settings.server.port);

    // Load the recipe catalog into memory
    let catalog = Catalog::from_file(&settings.catalog.path)?;
    let recipe_count = catalog.len();

    // Build the search engine
    let engine = Arc::new(SearchEngine::new(catalog, settings.search.cache_capacity));
    info!(
        "Search engine ready ({} recipes, cache capacity {})",
        recipe_count, settings.search.cache_capacity
    );

    // Create application state
    let state = AppState {
        engine,
        settings: settings.clone(),
    };

    // Create router
    let app = routes::create_router(state, &settings);

    // Start server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("\n========================================");
    println!("Recipe Search Server");
    println!("========================================");
    println!("Status: Running");
    println!("Address: http://{addr}");
    println!("Catalog: {recipe_count} recipes");
    println!("\nAPI Endpoints:");
    println!("  GET  /api/search");
    println!("  GET  /api/recipes/:id");
    println!("  GET  /api/facets");
    println!("  GET  /api/stats");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}
