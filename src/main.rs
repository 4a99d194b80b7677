use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use customers::{config, db, seed, server};

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "customers=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();

    // Initialize database
    let db = match db::init_db(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database {}: {}", config.database_url, e);
            return ExitCode::FAILURE;
        }
    };

    if config.seed {
        match seed::seed_if_empty(&db).await {
            Ok(0) => tracing::debug!("Seed skipped, customers already present"),
            Ok(n) => tracing::info!("Seeded {} customers", n),
            Err(e) => tracing::error!("Failed to seed data: {}", e),
        }
    }

    if let Err(e) = server::serve(db, &config).await {
        tracing::error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
