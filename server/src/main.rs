mod database;
mod score_handler;
mod score_store;
mod server_config;
mod web_server;

use std::path::PathBuf;
use clap::Parser;
use common::{config::ConfigManager, log, logger};
use tokio::net::TcpListener;

use score_store::PgScoreStore;
use server_config::{DEFAULT_CONFIG_FILE_NAME, ServerConfig};

#[derive(Parser)]
#[command(name = "snake_score_server")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Overrides `listen_address` from the config file.
    #[arg(long)]
    listen: Option<String>,
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    log!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("ScoreServer".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<_, ServerConfig, _> =
        ConfigManager::from_yaml_file(&args.config);
    let config = config_manager.get_config()?;
    let listen_address = args.listen.unwrap_or(config.listen_address);

    let database_url = database::read_database_url()?;
    let pool = database::create_pool(&database_url, &config.database)?;

    if config.database.create_table_if_missing {
        database::create_table_if_missing(&pool).await?;
    }

    let listener = TcpListener::bind(&listen_address).await?;
    let result = web_server::run_web_server(
        listener,
        PgScoreStore::new(pool.clone()),
        shutdown_signal(),
    )
    .await;

    pool.close().await;
    log!("Server shut down gracefully");

    Ok(result?)
}
