use dotenvy::dotenv;
use storefront_service::{build_server, create_pool, run_migrations, AppConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let pool = create_pool(&config.database_url, &config.pool).map_err(std::io::Error::other)?;
    run_migrations(&pool).map_err(std::io::Error::other)?;

    if config.pricing.allow_negative_lines {
        log::warn!("Order lines may price below zero (PRICING_ALLOW_NEGATIVE_LINES=true)");
    }
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    build_server(pool, &config)?.await
}
