/// Storyboard Server - story-telling leaderboard for a chat workspace
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use storyboard_server::{config::ServerConfig, create_router, seed, state::AppState};
use storyboard_storage::UserStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "storyboard-server")]
#[command(about = "Storyboard leaderboard server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Insert the configured fixture users
    Seed,
    /// Print the leaderboard
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storyboard_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            serve(cli.config).await?;
        }
        Commands::Seed => {
            seed_fixtures(cli.config).await?;
        }
        Commands::ListUsers => {
            list_users(cli.config).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    tracing::info!("Starting Storyboard Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database (schema is created if absent)
    let store = UserStore::new(&config.storage.database_url).await?;
    let store = Arc::new(store);
    tracing::info!("Database connected");

    // Build application state
    let app_state = AppState::new(store, config.fixtures());

    // Build router
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn seed_fixtures(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    let store = UserStore::new(&config.storage.database_url).await?;

    let report = seed::seed_fixtures(&store, &config.fixtures()).await?;
    tracing::info!("Seeded fixtures: created={} skipped={}", report.created, report.skipped);

    Ok(())
}

async fn list_users(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    let store = UserStore::new(&config.storage.database_url).await?;
    let users = store.list_by_story_count().await?;

    println!("Leaderboard:");
    for user in users {
        println!("  {:>4}  {} ({})", user.story_count, user.name, user.id);
    }

    Ok(())
}
