use clap::Parser;
use meal_catalog::{
    api::{handlers::AppState, routes},
    cli::{commands, Cli, Commands},
    config::Settings,
    engine::DietFilter,
    Catalog, Error, Result,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,meal_catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let mut settings = Settings::from_env()?;
    if let Some(path) = cli.catalog {
        settings.catalog.data_path = path;
    }
    settings.validate()?;

    // The catalog is loaded once and never changes afterwards
    let catalog = Catalog::from_file(&settings.catalog.data_path)?;

    if cli.command.logs_audit_at_startup() {
        let warnings = catalog.log_audit();
        if warnings > 0 {
            warn!(
                "{} catalog warnings - affected meals price missing ingredients at zero",
                warnings
            );
        }
    }

    match cli.command {
        Commands::Serve { port, host } => {
            serve(settings, catalog, port, host).await?;
        }
        Commands::List { vegetarian, vegan } => {
            commands::list(&catalog, DietFilter { vegetarian, vegan })?;
        }
        Commands::Show { meal_id } => {
            commands::show(&catalog, meal_id)?;
        }
        Commands::Price { meal_id, qualities } => {
            commands::price(&catalog, meal_id, &qualities)?;
        }
        Commands::Quality { meal_id, qualities } => {
            commands::quality(&catalog, meal_id, &qualities)?;
        }
        Commands::Random { budget } => {
            commands::random(&catalog, &settings.pricing, budget.as_deref())?;
        }
        Commands::Search { query } => {
            commands::search(&catalog, &query)?;
        }
        Commands::Check => {
            commands::check(&catalog)?;
        }
    }

    Ok(())
}

async fn serve(
    mut settings: Settings,
    catalog: Catalog,
    port: Option<u16>,
    host: Option<String>,
) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }
    settings.validate()?;

    info!("Starting Meal Catalog server");
    info!(
        "Pricing: unit table {:?}, baseline tier {:?}",
        settings.pricing.unit_table, settings.pricing.baseline_tier
    );

    let state = AppState {
        catalog: Arc::new(catalog),
        settings: settings.clone(),
    };

    let app = routes::create_router(state, &settings)?;

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("\n========================================");
    println!("Meal Catalog Server");
    println!("========================================");
    println!("Address: http://{addr}");
    println!("Catalog: {}", settings.catalog.data_path.display());
    println!("\nEndpoints:");
    println!("  GET  /listMeals");
    println!("  GET  /getMeal");
    println!("  POST /quality");
    println!("  POST /price");
    println!("  POST /random");
    println!("  GET  /search");
    println!("  GET  /health");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}
