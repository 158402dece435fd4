//! Inventory manager HTTP server.
//!
//! Loads configuration, starts logging, opens the store and serves the
//! inventory routes until shutdown.

use actix_web::{middleware, web, App, HttpServer};
use inventory_core::db::open_db;
use inventory_core::init_logging;
use inventory_web::{configure, AppState, Config};
use log::{error, info};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    let config = Config::from_env().map_err(|err| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid configuration: {err}"),
        )
    })?;

    let log_dir = config.resolved_log_dir()?;
    let log_dir = log_dir.to_str().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "log directory must be UTF-8")
    })?;
    init_logging(config.log_level(), log_dir)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    let conn = open_db(&config.database_path).map_err(|err| {
        error!(
            "event=http_start module=web status=error error_code=db_open_failed error={}",
            err
        );
        io::Error::new(io::ErrorKind::Other, format!("failed to open database: {err}"))
    })?;
    let state = AppState::new(conn);

    let (host, port) = config.bind_address();
    info!(
        "event=http_start module=web status=ok host={} port={} database={}",
        host,
        port,
        config.database_path.display()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    info!("event=http_stop module=web status=ok");
    Ok(())
}
