use env_logger::Env;
use log::{error, info};
use placement_pitcher::api::rest::run_server;
use placement_pitcher::config::Settings;
use std::process::exit;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config_path = std::env::var("PITCHER_CONFIG").ok();
    let settings = Settings::new(config_path.as_deref()).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {}", err);
        exit(1);
    });

    env_logger::Builder::from_env(Env::default().default_filter_or(settings.log.level.as_str())).init();

    info!("Starting placement-pitcher server v{}", env!("CARGO_PKG_VERSION"));
    match run_server(settings).await {
        Ok(()) => {
            info!("REST server finished.");
            Ok(())
        }
        Err(e) => {
            error!("REST server failed: {}", e);
            Err(e)
        }
    }
}
