use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::{error, info};

/// `migrate [up|down|status|fresh]`, defaulting to `up`.
#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            common::utils::logging::init_logging_default();
            error!(service = "migrate", event = "config_invalid", error = %e, "cannot load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    common::utils::logging::init_logging(cfg.logging.json);

    let command = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());
    match run(&cfg, &command).await {
        Ok(()) => {
            info!(service = "migrate", event = "done", %command, "migration command finished");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "migrate", event = "failed", %command, error = %e, "migration command failed");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run(cfg: &configs::AppConfig, command: &str) -> anyhow::Result<()> {
    common::env::ensure_asset_dir(&cfg.assets.root_dir).await?;
    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
    info!(service = "migrate", event = "connected", %command, "database connected");
    match command {
        "up" => migration::Migrator::up(&db, None).await?,
        "down" => migration::Migrator::down(&db, Some(1)).await?,
        "status" => migration::Migrator::status(&db).await?,
        "fresh" => migration::Migrator::fresh(&db).await?,
        other => anyhow::bail!("unknown command {other:?}; expected up, down, status or fresh"),
    }
    Ok(())
}
